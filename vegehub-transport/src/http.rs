//! HTTP transport

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use tracing::{debug, trace, warn};
use vegehub_core::Method;
use vegehub_core::constants::DEFAULT_TIMEOUT;

use crate::{Request, Response, Transport, error::*};

/// HTTP transport for VegeHub devices
///
/// Every request runs in its own connection scope: a client with pooling
/// disabled is built for the call and dropped when the call ends, so no
/// connection outlives the request that opened it.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    timeout: Duration,
    connect_timeout: Duration,
}

impl HttpTransport {
    /// Create new HTTP transport
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set total request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set connection timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn open_session(&self, url: &str) -> Result<Session> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .pool_max_idle_per_host(0)
            .build()?;

        trace!("Opened connection scope for {}", url);

        Ok(Session {
            client,
            url: url.to_owned(),
        })
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

/// Connection scope of a single request
struct Session {
    client: reqwest::Client,
    url: String,
}

impl Session {
    async fn send(&self, request: &Request) -> Result<Response> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };

        let mut builder = self.client.request(method, self.url.as_str());
        if let Some(body) = &request.body {
            trace!("Request body: {}", body);
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = body_or_empty(response.bytes().await.map_err(Error::from));

        debug!(
            "{} {} -> {} ({} bytes)",
            request.method,
            self.url,
            status,
            body.len()
        );

        Ok(Response { status, body })
    }
}

// The status decides the outcome; an unreadable body reads as empty
fn body_or_empty(read: Result<Bytes>) -> Bytes {
    read.unwrap_or_else(|e| {
        warn!("Discarding unreadable response body: {}", e);
        Bytes::new()
    })
}

impl Drop for Session {
    fn drop(&mut self) {
        trace!("Released connection scope for {}", self.url);
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: Request) -> Result<Response> {
        let session = self.open_session(&request.url)?;
        session.send(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    #[test]
    fn test_http_transport_create() {
        let transport = HttpTransport::new().with_timeout(Duration::from_secs(2));
        assert_eq!(transport.timeout(), Duration::from_secs(2));
    }

    #[test]
    fn test_unreadable_body_is_empty() {
        let body = body_or_empty(Err(Error::Body("connection reset".into())));
        assert!(body.is_empty());

        let body = body_or_empty(Ok(Bytes::from_static(b"{}")));
        assert_eq!(body, Bytes::from_static(b"{}"));
    }

    #[tokio::test]
    async fn test_post_json_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/config/set")
            .match_body(Matcher::Json(json!({"api_key": "k", "server_url": "http://s"})))
            .with_status(200)
            .create_async()
            .await;

        let request = Request::new(Method::Post, format!("{}/api/config/set", server.url()))
            .with_body(json!({"api_key": "k", "server_url": "http://s"}));
        let response = HttpTransport::new().execute(request).await.unwrap();

        assert_eq!(response.status, 200);
        assert!(response.body.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_returns_status_and_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/actuators/status")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"bad"}"#)
            .create_async()
            .await;

        let request = Request::new(Method::Get, format!("{}/api/actuators/status", server.url()));
        let response = HttpTransport::new().execute(request).await.unwrap();

        assert_eq!(response.status, 400);
        assert_eq!(response.json_object().unwrap()["error"], "bad");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_connection_refused() {
        // Nothing listens on port 1
        let request = Request::new(Method::Get, "http://127.0.0.1:1/api/update/send");
        let result = HttpTransport::new()
            .with_connect_timeout(Duration::from_millis(500))
            .execute(request)
            .await;

        assert!(matches!(result, Err(Error::Connect(_)) | Err(Error::Timeout)));
    }

    #[tokio::test]
    async fn test_invalid_url() {
        let request = Request::new(Method::Get, "http://invalid host/api/update/send");
        let result = HttpTransport::new().execute(request).await;

        assert!(result.is_err());
    }
}
