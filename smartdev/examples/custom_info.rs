//! Custom info formatter and loosely-typed construction

use smartdev::{DeviceConfig, DeviceRegistry, StatusValue};

fn main() -> smartdev::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let registry = DeviceRegistry::new();

    let config = DeviceConfig::new("Porch Light", "PL-2").with_online(true);
    let mut lamp = registry.create_with(config);
    println!("Default: {}", lamp.format_info());

    lamp.set_info_formatter(|| "Porch light, motion activated".to_string());
    let provider = lamp.info_provider();
    println!("Custom: {}", provider.call());

    // Values as they might arrive from a config file
    match registry.create_from_values(
        &StatusValue::from("Door Lock"),
        &StatusValue::from("DL-9"),
        Some(&StatusValue::from("yes")),
    ) {
        Ok(device) => println!("Created {}", device),
        Err(e) => println!("Rejected: {}", e),
    }

    let lock = registry.create_from_values(
        &StatusValue::from("Door Lock"),
        &StatusValue::from("DL-9"),
        Some(&StatusValue::from(false)),
    )?;
    println!("Created {}", lock);

    println!("Devices created: {}", registry.device_count());

    Ok(())
}
