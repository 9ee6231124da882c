//! Hub setup example

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use vegehub::VegeHub;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Change to your hub IP
    let ip = std::env::var("HUB_IP").unwrap_or_else(|_| "192.168.0.100".to_string());
    let api_key = std::env::var("HUB_API_KEY").context("HUB_API_KEY is not set")?;
    let server_url = std::env::var("HUB_SERVER_URL").context("HUB_SERVER_URL is not set")?;

    let mut hub = VegeHub::new(ip);

    if hub.retrieve_mac_address().await? {
        println!("✓ MAC address: {} (id {:?})", hub.mac_address(), hub.unique_id());
    }

    hub.setup(&api_key, &server_url).await?;
    if !hub.setup_stage().is_done() {
        anyhow::bail!("hub answered setup with unexpected data ({})", hub.setup_stage());
    }

    if let Some(details) = hub.details() {
        println!("✓ {}", details);
    }
    if let Some(info) = hub.hub_info()? {
        println!("✓ Battery: {:?} V", info.batt_v);
    }

    // Ask for a fresh reading
    hub.request_update().await?;
    println!("✓ Update requested");

    Ok(())
}
