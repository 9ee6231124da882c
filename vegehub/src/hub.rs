//! High-level hub interface

use std::time::Duration;

use serde_json::{Number, Value};
use tracing::{debug, info, warn};

use vegehub_core::constants::{DEFAULT_RETRIES, keys};
use vegehub_core::{Endpoint, base_url};
use vegehub_transport::{HttpTransport, Transport};
use vegehub_types::{
    ActuatorCommand, ConfigUpdate, HubDetails, HubInfo, JsonMap, WifiInfo, simplify_mac,
};

use crate::entities::Entities;
use crate::error::{Error, Result};
use crate::request::RequestExecutor;
use crate::setup::SetupStage;

/// VegeHub device
///
/// High-level interface for one hub. Every operation goes through a
/// retrying executor; operations without a `_with_retries` suffix use
/// [`DEFAULT_RETRIES`] attempts.
///
/// # Examples
///
/// ```no_run
/// use vegehub::VegeHub;
///
/// #[tokio::main]
/// async fn main() -> vegehub::Result<()> {
///     let mut hub = VegeHub::new("192.168.0.100");
///
///     if hub.setup("1234567890ABCD", "http://example.com").await? {
///         println!("Sensors: {:?}", hub.num_sensors());
///     }
///
///     hub.set_actuator(0, 1, 60).await?;
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct VegeHub {
    ip_address: String,
    unique_id: Option<String>,
    mac_address: String,
    details: Option<HubDetails>,
    setup_stage: SetupStage,
    entities: Entities,
    executor: RequestExecutor,
    custom_transport: bool,
}

impl VegeHub {
    /// Create a new hub instance (HTTP transport)
    pub fn new(ip_address: impl Into<String>) -> Self {
        let ip_address = ip_address.into();
        let executor = RequestExecutor::new(base_url(&ip_address), Box::new(HttpTransport::new()));

        Self {
            ip_address,
            unique_id: None,
            mac_address: String::new(),
            details: None,
            setup_stage: SetupStage::default(),
            entities: Entities::new(),
            executor,
            custom_transport: false,
        }
    }

    /// Use a known identity instead of deriving one from the MAC address
    pub fn with_unique_id(mut self, unique_id: impl Into<String>) -> Self {
        self.unique_id = Some(unique_id.into());
        self
    }

    /// Set pause between attempts (default: 1s)
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.executor = self.executor.with_retry_delay(delay);
        self
    }

    /// Set the HTTP request timeout (default: 10s)
    ///
    /// Has no effect once a transport was given to
    /// [`with_transport`](Self::with_transport), whichever is called first.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        if self.custom_transport {
            warn!("Custom transport in use, ignoring timeout {:?}", timeout);
        } else {
            self.executor
                .set_transport(Box::new(HttpTransport::new().with_timeout(timeout)));
        }
        self
    }

    /// Reach the hub through a custom transport
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.executor.set_transport(Box::new(transport));
        self.custom_transport = true;
        self
    }

    /// Pause between attempts
    pub fn retry_delay(&self) -> Duration {
        self.executor.retry_delay()
    }

    pub fn ip_address(&self) -> &str {
        &self.ip_address
    }

    /// Base URL, `http://<ip_address>`
    pub fn url(&self) -> &str {
        self.executor.base_url()
    }

    pub fn unique_id(&self) -> Option<&str> {
        self.unique_id.as_deref()
    }

    /// MAC address as reported by the hub, empty until retrieved
    pub fn mac_address(&self) -> &str {
        &self.mac_address
    }

    /// MAC address lowercased without separators
    pub fn simple_mac_address(&self) -> String {
        simplify_mac(&self.mac_address)
    }

    /// Details from the last successful setup
    pub fn details(&self) -> Option<&HubDetails> {
        self.details.as_ref()
    }

    /// Raw `hub` mapping from the last successful setup
    pub fn info(&self) -> Option<&JsonMap> {
        self.details.as_ref().map(|d| &d.info)
    }

    /// Typed view of [`info`](Self::info)
    pub fn hub_info(&self) -> Result<Option<HubInfo>> {
        self.details
            .as_ref()
            .map(|d| d.hub_info())
            .transpose()
            .map_err(Error::from)
    }

    /// `hub.num_channels` as the hub reported it
    pub fn num_sensors(&self) -> Option<&Number> {
        self.details.as_ref().and_then(|d| d.num_sensors.as_ref())
    }

    pub fn num_actuators(&self) -> Option<&Number> {
        self.details.as_ref().and_then(|d| d.num_actuators.as_ref())
    }

    pub fn is_ac(&self) -> Option<bool> {
        self.details.as_ref().and_then(|d| d.is_ac)
    }

    pub fn sw_version(&self) -> Option<&str> {
        self.details.as_ref().and_then(|d| d.sw_version.as_deref())
    }

    /// Stage reached by the last [`setup`](Self::setup) call
    pub fn setup_stage(&self) -> SetupStage {
        self.setup_stage
    }

    pub fn entities(&self) -> &Entities {
        &self.entities
    }

    pub fn entities_mut(&mut self) -> &mut Entities {
        &mut self.entities
    }

    /// Read the MAC address from the hub
    ///
    /// Returns `true` when a MAC address is known afterwards. The first
    /// address learned also becomes the unique ID if none was set.
    pub async fn retrieve_mac_address(&mut self) -> Result<bool> {
        self.retrieve_mac_address_with_retries(DEFAULT_RETRIES).await
    }

    pub async fn retrieve_mac_address_with_retries(&mut self, retries: u32) -> Result<bool> {
        let info = self.fetch_info(retries).await?;

        let mac = info
            .get(keys::WIFI)
            .and_then(Value::as_object)
            .and_then(|wifi| WifiInfo::from_map(wifi).ok())
            .and_then(|wifi| wifi.mac_addr);

        match mac {
            Some(mac) => {
                debug!("MAC address: {}", mac);
                self.mac_address = mac;
            }
            None => debug!("No MAC address in info response"),
        }

        if self.unique_id.is_none() {
            let simple = self.simple_mac_address();
            if !simple.is_empty() {
                info!("Unique ID derived from MAC address: {}", simple);
                self.unique_id = Some(simple);
            }
        }

        Ok(!self.mac_address.is_empty())
    }

    /// Point the hub at `server_url` with `api_key` and load its details
    ///
    /// Returns `false` when the hub answers without the expected data. If
    /// the info response lacks `hub`, previously loaded details are cleared.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Connection`] if any of the three requests exhausts
    /// its retries. Nothing is committed in that case.
    pub async fn setup(&mut self, api_key: &str, server_url: &str) -> Result<bool> {
        self.setup_with_retries(api_key, server_url, DEFAULT_RETRIES).await
    }

    pub async fn setup_with_retries(
        &mut self,
        api_key: &str,
        server_url: &str,
        retries: u32,
    ) -> Result<bool> {
        self.setup_stage = SetupStage::Start;

        let config = self.fetch_config(retries).await?;
        self.setup_stage.advance(SetupStage::ConfigFetched);

        if !config.contains_key(keys::HUB) || !config.contains_key(keys::API_KEY) {
            debug!("Config response lacks `hub` or `api_key`");
            self.setup_stage.advance(SetupStage::Failed);
            return Ok(false);
        }

        let current_key = config.get(keys::API_KEY).and_then(Value::as_str);
        if current_key == Some(api_key) {
            self.setup_stage.advance(SetupStage::ConfigUnchanged);
        } else {
            self.push_config(api_key, server_url, retries).await?;
            self.setup_stage.advance(SetupStage::ConfigPushed);
        }

        let mut info = self.fetch_info(retries).await?;
        self.setup_stage.advance(SetupStage::InfoFetched);

        match info.remove(keys::HUB) {
            Some(Value::Object(hub)) => {
                let details = HubDetails::from_hub(hub);
                info!("Hub {} set up: {}", self.ip_address, details);
                self.details = Some(details);
                self.setup_stage.advance(SetupStage::Done);
                Ok(true)
            }
            _ => {
                debug!("Info response lacks `hub`, clearing details");
                self.details = None;
                self.setup_stage.advance(SetupStage::Failed);
                Ok(false)
            }
        }
    }

    /// Ask the hub to send its readings to the server now
    pub async fn request_update(&self) -> Result<()> {
        self.request_update_with_retries(DEFAULT_RETRIES).await
    }

    pub async fn request_update_with_retries(&self, retries: u32) -> Result<()> {
        self.executor
            .request(Endpoint::UpdateSend, None, retries)
            .await?;
        Ok(())
    }

    /// Set actuator `slot` to `state` for `duration` seconds
    pub async fn set_actuator(&self, slot: u32, state: i64, duration: u64) -> Result<bool> {
        self.set_actuator_with_retries(slot, state, duration, DEFAULT_RETRIES)
            .await
    }

    pub async fn set_actuator_with_retries(
        &self,
        slot: u32,
        state: i64,
        duration: u64,
        retries: u32,
    ) -> Result<bool> {
        let command = ActuatorCommand { slot, state, duration };
        let body = serde_json::to_value(command).map_err(vegehub_types::Error::from)?;

        debug!("Setting actuator {} to {} for {}s", slot, state, duration);

        self.executor
            .request(Endpoint::ActuatorsSet, Some(body), retries)
            .await?;
        Ok(true)
    }

    /// Read the state of every actuator
    ///
    /// Entries are returned as the hub sent them; use
    /// [`ActuatorStatus::from_value`](vegehub_types::ActuatorStatus::from_value)
    /// for a typed view.
    ///
    /// # Errors
    ///
    /// Besides connection errors, returns [`Error::MissingField`] when the
    /// response has no `actuators` key and [`Error::InvalidResponse`] when
    /// it is not a list.
    pub async fn actuator_states(&self) -> Result<Vec<Value>> {
        self.actuator_states_with_retries(DEFAULT_RETRIES).await
    }

    pub async fn actuator_states_with_retries(&self, retries: u32) -> Result<Vec<Value>> {
        let mut body = self
            .executor
            .request(Endpoint::ActuatorsStatus, None, retries)
            .await?;

        match body.remove(keys::ACTUATORS) {
            Some(Value::Array(actuators)) => Ok(actuators),
            Some(other) => Err(Error::InvalidResponse(format!(
                "{} is not a list: {}",
                keys::ACTUATORS,
                other
            ))),
            None => Err(Error::MissingField {
                endpoint: Endpoint::ActuatorsStatus,
                field: keys::ACTUATORS,
            }),
        }
    }

    // Helper methods

    async fn fetch_config(&self, retries: u32) -> Result<JsonMap> {
        self.executor.request(Endpoint::ConfigGet, None, retries).await
    }

    async fn fetch_info(&self, retries: u32) -> Result<JsonMap> {
        self.executor.request(Endpoint::InfoGet, None, retries).await
    }

    async fn push_config(&self, api_key: &str, server_url: &str, retries: u32) -> Result<()> {
        let update = ConfigUpdate {
            api_key: api_key.to_owned(),
            server_url: server_url.to_owned(),
        };
        let body = serde_json::to_value(update).map_err(vegehub_types::Error::from)?;

        info!("Pushing new API key and server URL to {}", self.ip_address);

        self.executor
            .request(Endpoint::ConfigSet, Some(body), retries)
            .await?;
        Ok(())
    }
}
