//! Transport layer for the VegeHub API
//!
//! A transport performs exactly one HTTP exchange per call. Retrying is the
//! caller's business.

pub mod error;
pub mod http;

pub use error::{Error, Result};
pub use http::HttpTransport;

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::{Map, Value};
use vegehub_core::Method;

/// One HTTP request to a hub
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    /// JSON body, sent with `Content-Type: application/json`
    pub body: Option<Value>,
}

impl Request {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Status and raw body of a hub response
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Response with a JSON body
    pub fn json(status: u16, body: &Value) -> Self {
        Self::new(status, body.to_string())
    }

    /// Body as a JSON object
    ///
    /// Returns `None` for an empty body, invalid JSON, or JSON that is not
    /// an object.
    pub fn json_object(&self) -> Option<Map<String, Value>> {
        match serde_json::from_slice::<Value>(&self.body) {
            Ok(Value::Object(map)) => Some(map),
            _ => None,
        }
    }
}

/// Transport trait for different ways of reaching a hub
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one request
    ///
    /// Implementations acquire whatever connection they need for this call
    /// and release it before returning, on success and on error.
    async fn execute(&self, request: Request) -> Result<Response>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_object_body() {
        let response = Response::json(200, &json!({"hub": {}}));
        let map = response.json_object().unwrap();
        assert!(map.contains_key("hub"));
    }

    #[test]
    fn test_json_object_rejects_other_bodies() {
        assert_eq!(Response::new(200, "").json_object(), None);
        assert_eq!(Response::new(200, "not json").json_object(), None);
        assert_eq!(Response::new(200, "[1, 2]").json_object(), None);
        assert_eq!(Response::new(200, "null").json_object(), None);
    }

    #[test]
    fn test_request_builder() {
        let request = Request::new(Method::Post, "http://hub/api/config/set")
            .with_body(json!({"api_key": "k"}));

        assert_eq!(request.method, Method::Post);
        assert_eq!(request.body, Some(json!({"api_key": "k"})));
    }
}
