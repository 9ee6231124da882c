//! Scripted hub used by unit tests

use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;
use vegehub_transport::{Request, Response, Result, Transport};

mock! {
    pub Hub {}

    #[async_trait]
    impl Transport for Hub {
        async fn execute(&self, request: Request) -> Result<Response>;
    }
}

pub fn ok_json(body: Value) -> Result<Response> {
    Ok(Response::json(200, &body))
}

pub fn status(status: u16) -> Result<Response> {
    Ok(Response::new(status, ""))
}

/// Matcher for requests to a given path
pub fn to_path(path: &'static str) -> impl Fn(&Request) -> bool + Send + 'static {
    move |req| req.url.ends_with(path)
}
