//! VegeHub HTTP API endpoint definitions

use std::fmt;

/// HTTP methods used by the hub API
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// API endpoints exposed by a hub
///
/// Every endpoint has a fixed method and path relative to the hub's base URL.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Read the stored configuration (`hub` + `api_key`)
    ConfigGet,
    /// Write `api_key` and `server_url`
    ConfigSet,
    /// Read hub and wifi information
    InfoGet,
    /// Ask the hub to push its sensor readings now
    UpdateSend,
    /// Switch an actuator for a duration
    ActuatorsSet,
    /// Read the state of every actuator
    ActuatorsStatus,
}

impl Endpoint {
    /// All endpoints, in API order
    pub const ALL: [Endpoint; 6] = [
        Self::ConfigGet,
        Self::ConfigSet,
        Self::InfoGet,
        Self::UpdateSend,
        Self::ActuatorsSet,
        Self::ActuatorsStatus,
    ];

    /// HTTP method the hub expects
    pub fn method(self) -> Method {
        match self {
            Self::UpdateSend | Self::ActuatorsStatus => Method::Get,
            _ => Method::Post,
        }
    }

    /// Path relative to the base URL (no leading slash)
    pub fn path(self) -> &'static str {
        match self {
            Self::ConfigGet => "api/config/get",
            Self::ConfigSet => "api/config/set",
            Self::InfoGet => "api/info/get",
            Self::UpdateSend => "api/update/send",
            Self::ActuatorsSet => "api/actuators/set",
            Self::ActuatorsStatus => "api/actuators/status",
        }
    }

    /// Full URL of this endpoint on the hub at `base_url`
    pub fn url(self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.path())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} /{}", self.method(), self.path())
    }
}
