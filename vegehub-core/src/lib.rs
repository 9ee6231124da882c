//! # vegehub-core
//!
//! Core protocol primitives for VegeHub devices.
//!
//! This crate provides the pieces of the device API that involve no I/O:
//! - Endpoint table (HTTP method and path per operation)
//! - Retry policy used by the request executor
//! - Sensor voltage transforms
//! - Protocol constants

pub mod constants;
pub mod endpoint;
pub mod error;
pub mod retry;
pub mod transform;

pub use endpoint::{Endpoint, Method};
pub use error::{Error, Result};
pub use retry::RetryPolicy;
pub use transform::{voltage_to_percent, voltage_to_temperature_f};

/// URL scheme used to reach a hub
pub const SCHEME: &str = "http";

/// Build the base URL of a hub from its address
///
/// ```
/// assert_eq!(vegehub_core::base_url("192.168.0.100"), "http://192.168.0.100");
/// ```
pub fn base_url(address: &str) -> String {
    format!("{}://{}", SCHEME, address)
}
