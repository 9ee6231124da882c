//! Hub information structures

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use vegehub_core::constants::keys;

use crate::JsonMap;
use crate::error::Result;

/// Interpret a 0/1 flag (or a JSON boolean)
pub fn flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0),
        _ => None,
    }
}

fn de_flag<'de, D>(deserializer: D) -> std::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .and_then(flag))
}

// Firmware reports some wifi fields as strings and others as numbers
fn de_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Null) | None => None,
        Some(other) => Some(other.to_string()),
    })
}

/// The `hub` section of `api/info/get`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HubInfo {
    #[serde(default, deserialize_with = "de_flag")]
    pub first_boot: Option<bool>,

    #[serde(default, deserialize_with = "de_flag")]
    pub page_updated: Option<bool>,

    /// Last error reported by the hub (0 when none)
    #[serde(default)]
    pub error_message: Option<Value>,

    /// Number of sensor channels
    #[serde(default)]
    pub num_channels: Option<u32>,

    /// Number of actuator slots
    #[serde(default)]
    pub num_actuators: Option<u32>,

    /// Firmware version
    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub agenda: Option<i64>,

    /// Battery voltage
    #[serde(default)]
    pub batt_v: Option<f64>,

    #[serde(default)]
    pub num_vsens: Option<u32>,

    /// Running from mains power
    #[serde(default, deserialize_with = "de_flag")]
    pub is_ac: Option<bool>,

    #[serde(default, deserialize_with = "de_flag")]
    pub has_sd: Option<bool>,

    /// Hub is serving its own access point
    #[serde(default, deserialize_with = "de_flag")]
    pub on_ap: Option<bool>,
}

/// The `wifi` section of `api/info/get`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WifiInfo {
    #[serde(default, deserialize_with = "de_text")]
    pub ssid: Option<String>,

    /// Signal strength in dBm
    #[serde(default, deserialize_with = "de_text")]
    pub strength: Option<String>,

    #[serde(default, deserialize_with = "de_text")]
    pub chan: Option<String>,

    #[serde(default, deserialize_with = "de_text")]
    pub ip: Option<String>,

    #[serde(default, deserialize_with = "de_text")]
    pub status: Option<String>,

    /// Colon-delimited hardware address
    #[serde(default, deserialize_with = "de_text")]
    pub mac_addr: Option<String>,
}

impl HubInfo {
    pub fn from_map(map: &JsonMap) -> Result<Self> {
        Ok(serde_json::from_value(Value::Object(map.clone()))?)
    }
}

impl WifiInfo {
    pub fn from_map(map: &JsonMap) -> Result<Self> {
        Ok(serde_json::from_value(Value::Object(map.clone()))?)
    }
}

/// Hub details learned during setup
///
/// The raw `hub` mapping and the values derived from it always change
/// together, so they live in one struct.
#[derive(Debug, Clone, PartialEq)]
pub struct HubDetails {
    /// Raw `hub` mapping as returned by the device
    pub info: JsonMap,

    /// `hub.num_channels`, as reported
    pub num_sensors: Option<Number>,

    /// `hub.num_actuators`, as reported
    pub num_actuators: Option<Number>,

    /// `hub.is_ac` as a boolean
    pub is_ac: Option<bool>,

    /// `hub.version`
    pub sw_version: Option<String>,
}

impl HubDetails {
    pub fn from_hub(hub: JsonMap) -> Self {
        let number = |key: &str| match hub.get(key) {
            Some(Value::Number(n)) => Some(n.clone()),
            _ => None,
        };
        let num_sensors = number(keys::NUM_CHANNELS);
        let num_actuators = number(keys::NUM_ACTUATORS);
        let is_ac = hub.get(keys::IS_AC).and_then(flag);
        let sw_version = hub
            .get(keys::VERSION)
            .and_then(Value::as_str)
            .map(str::to_owned);

        Self {
            info: hub,
            num_sensors,
            num_actuators,
            is_ac,
            sw_version,
        }
    }

    /// Typed view over the raw mapping
    pub fn hub_info(&self) -> Result<HubInfo> {
        HubInfo::from_map(&self.info)
    }
}

impl fmt::Display for HubDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |v: &Option<Number>| v.as_ref().map_or_else(|| "?".to_string(), Number::to_string);

        write!(
            f,
            "Hub[FW: {}, sensors: {}, actuators: {}, power: {}]",
            self.sw_version.as_deref().unwrap_or("?"),
            show(&self.num_sensors),
            show(&self.num_actuators),
            match self.is_ac {
                Some(true) => "AC",
                Some(false) => "battery",
                None => "?",
            }
        )
    }
}
