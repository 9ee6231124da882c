//! Type definitions for vegehub

pub mod actuator;
pub mod error;
pub mod hub_info;
pub mod mac;
pub mod request;

pub use actuator::ActuatorStatus;
pub use error::{Error, Result};
pub use hub_info::{HubDetails, HubInfo, WifiInfo};
pub use mac::simplify_mac;
pub use request::{ActuatorCommand, ConfigUpdate};

/// A JSON object as returned by the hub
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
