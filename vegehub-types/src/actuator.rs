//! Actuator status structures

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Typed view of one entry of the `actuators` list from `api/actuators/status`
///
/// Timestamps are Unix seconds. Firmware revisions differ in the types they
/// report, so decoding an entry may fail while the raw entry stays usable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActuatorStatus {
    /// Slot index on the hub
    #[serde(default)]
    pub slot: u32,

    /// Current output state (0 = off)
    #[serde(default)]
    pub state: i64,

    #[serde(default)]
    pub last_run: Option<i64>,

    #[serde(default)]
    pub next_window_start: Option<i64>,

    #[serde(default)]
    pub next_window_end: Option<i64>,

    /// Measured current draw (mA)
    #[serde(default)]
    pub cur_ma: Option<f64>,

    /// Typical current draw (mA)
    #[serde(default)]
    pub typ_ma: Option<f64>,

    /// Error code (0 = none)
    #[serde(default)]
    pub error: i64,
}

impl ActuatorStatus {
    pub fn from_value(entry: &Value) -> Result<Self> {
        Ok(Self::deserialize(entry)?)
    }

    pub fn is_on(&self) -> bool {
        self.state != 0
    }

    pub fn has_error(&self) -> bool {
        self.error != 0
    }
}
