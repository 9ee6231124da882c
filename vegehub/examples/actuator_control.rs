//! Actuator control example

use std::time::Duration;

use tokio::time::sleep;
use vegehub::{ActuatorStatus, VegeHub};

#[tokio::main]
async fn main() -> vegehub::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let ip = std::env::var("HUB_IP").unwrap_or_else(|_| "192.168.0.100".to_string());

    let hub = VegeHub::new(ip).with_timeout(Duration::from_secs(5));

    // Open slot 0 for 30 seconds
    println!("Switching actuator 0 on...");
    hub.set_actuator(0, 1, 30).await?;
    sleep(Duration::from_secs(3)).await;

    for entry in hub.actuator_states().await? {
        match ActuatorStatus::from_value(&entry) {
            Ok(status) => println!(
                "Slot {}: {} ({:?} mA){}",
                status.slot,
                if status.is_on() { "on" } else { "off" },
                status.cur_ma,
                if status.has_error() { " [error]" } else { "" }
            ),
            Err(_) => println!("Unrecognized entry: {}", entry),
        }
    }

    println!("Switching actuator 0 off...");
    hub.set_actuator(0, 0, 0).await?;

    println!("Done!");

    Ok(())
}
