//! Protocol constants

use std::time::Duration;

/// Attempts per request when the caller does not choose a budget
pub const DEFAULT_RETRIES: u32 = 3;

/// Pause between two attempts of the same request
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Per-request timeout of the default HTTP transport
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The only status code the hub uses for success
pub const STATUS_OK: u16 = 200;

/// JSON keys read from device responses
pub mod keys {
    pub const HUB: &str = "hub";
    pub const API_KEY: &str = "api_key";
    pub const SERVER_URL: &str = "server_url";
    pub const WIFI: &str = "wifi";
    pub const MAC_ADDR: &str = "mac_addr";
    pub const ACTUATORS: &str = "actuators";
    pub const NUM_CHANNELS: &str = "num_channels";
    pub const NUM_ACTUATORS: &str = "num_actuators";
    pub const IS_AC: &str = "is_ac";
    pub const VERSION: &str = "version";
}
