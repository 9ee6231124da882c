//! Retrying request executor
//!
//! Every hub operation goes through [`RequestExecutor::request`], which tries
//! a request up to N times with a fixed pause between attempts and turns the
//! response into a JSON object.

use std::fmt;
use std::time::Duration;

use serde_json::Value;
use tokio::time::sleep;
use tracing::{debug, trace, warn};

use vegehub_core::constants::{DEFAULT_RETRY_DELAY, STATUS_OK};
use vegehub_core::{Endpoint, RetryPolicy};
use vegehub_transport::{Request, Transport};
use vegehub_types::JsonMap;

use crate::error::{AttemptError, Error, Result};

/// Sends requests to one hub, retrying transient failures
pub struct RequestExecutor {
    transport: Box<dyn Transport>,
    base_url: String,
    retry_delay: Duration,
}

impl RequestExecutor {
    pub fn new(base_url: impl Into<String>, transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }

    /// Set pause between attempts
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    pub fn set_transport(&mut self, transport: Box<dyn Transport>) {
        self.transport = transport;
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn retry_delay(&self) -> Duration {
        self.retry_delay
    }

    /// Perform `endpoint` with up to `retries` attempts
    ///
    /// A 200 response ends the loop: its body is returned when it is a JSON
    /// object, otherwise an empty map is returned. Any other status and any
    /// transport fault count as a failed attempt.
    ///
    /// # Errors
    ///
    /// - [`Error::Core`] if `retries` is zero (nothing is sent)
    /// - [`Error::Connection`] carrying the last failure once every attempt
    ///   has failed
    pub async fn request(
        &self,
        endpoint: Endpoint,
        body: Option<Value>,
        retries: u32,
    ) -> Result<JsonMap> {
        let policy = RetryPolicy::new(retries, self.retry_delay)?;
        let url = endpoint.url(&self.base_url);
        let mut attempt = 0;

        loop {
            attempt += 1;

            let mut request = Request::new(endpoint.method(), url.clone());
            if let Some(body) = &body {
                request = request.with_body(body.clone());
            }

            trace!("{} attempt {}/{}", endpoint, attempt, policy.attempts());

            let failure = match self.transport.execute(request).await {
                Ok(response) if response.status == STATUS_OK => {
                    debug!("{} succeeded on attempt {}", endpoint, attempt);

                    return Ok(response.json_object().unwrap_or_else(|| {
                        trace!("{} returned no JSON object", endpoint);
                        JsonMap::new()
                    }));
                }
                Ok(response) => AttemptError::Status(response.status),
                Err(e) => AttemptError::Transport(e),
            };

            warn!(
                "{} failed (attempt {}/{}): {}",
                endpoint,
                attempt,
                policy.attempts(),
                failure
            );

            match policy.delay_after(attempt) {
                Some(delay) => sleep(delay).await,
                None => {
                    return Err(Error::Connection {
                        endpoint,
                        attempts: attempt,
                        source: failure,
                    });
                }
            }
        }
    }
}

impl fmt::Debug for RequestExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestExecutor")
            .field("base_url", &self.base_url)
            .field("retry_delay", &self.retry_delay)
            .finish_non_exhaustive()
    }
}
