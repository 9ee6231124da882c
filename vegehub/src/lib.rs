//! # vegehub
//!
//! Async client for Vegetronix VegeHub devices.
//!
//! ## Features
//!
//! - Async/await API using Tokio
//! - Bounded retries with a fixed pause on every request
//! - Connection faults and malformed responses reported as distinct errors
//! - Typed views of hub, wifi and actuator data
//!
//! ## Quick Start
//!
//! ```no_run
//! use vegehub::VegeHub;
//!
//! #[tokio::main]
//! async fn main() -> vegehub::Result<()> {
//!     let mut hub = VegeHub::new("192.168.0.100");
//!
//!     // Learn the hub's identity
//!     hub.retrieve_mac_address().await?;
//!     println!("Hub {:?}", hub.unique_id());
//!
//!     // Point it at a server and load its details
//!     if hub.setup("1234567890ABCD", "http://example.com").await? {
//!         println!("{:?} sensors", hub.num_sensors());
//!     }
//!
//!     // Run actuator 0 for one minute
//!     hub.set_actuator(0, 1, 60).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod entities;
pub mod error;
pub mod hub;
pub mod request;
pub mod setup;

#[cfg(test)]
mod mock;

// Re-exports
pub use entities::Entities;
pub use error::{AttemptError, Error, Result};
pub use hub::VegeHub;
pub use request::RequestExecutor;
pub use setup::SetupStage;

// Re-export lower layers
pub use vegehub_core::{Endpoint, Method, RetryPolicy, constants, transform};
pub use vegehub_core::{voltage_to_percent, voltage_to_temperature_f};
pub use vegehub_transport::{HttpTransport, Request, Response, Transport};
pub use vegehub_types::{ActuatorStatus, HubDetails, HubInfo, JsonMap, WifiInfo};
