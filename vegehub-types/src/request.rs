//! Request bodies sent to the hub

use serde::Serialize;

/// Body of `api/config/set`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigUpdate {
    pub api_key: String,
    pub server_url: String,
}

/// Body of `api/actuators/set`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActuatorCommand {
    /// Slot index on the hub
    pub slot: u32,

    /// Requested output state (0 = off)
    pub state: i64,

    /// How long to hold the state, in seconds
    pub duration: u64,
}
