//! Thermostat walkthrough

use smartdev::SmartDevice;

fn main() -> smartdev::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let name = std::env::var("DEVICE_NAME").unwrap_or_else(|_| "Thermostat".to_string());

    let mut device = SmartDevice::new(name, "T-100");
    println!("✓ Created: {}", device);

    device.update_status("temperature", 21.5);
    device.update_status("mode", "heat");
    let temperature = device.get_status_or_default("temperature");
    println!("✓ temperature = {}", temperature);
    println!("✓ humidity = {}", device.get_status_or_default("humidity"));

    device.toggle_online();
    println!("✓ {}", device.format_info());

    device.reset();
    println!("✓ Reset, {} attributes left", device.status_len());

    Ok(())
}
