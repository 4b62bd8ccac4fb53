//! Read card UIDs from a PN532 on a Linux I2C bus.
//!
//! Usage:
//!   RUST_LOG=debug cargo run -p libpn532 --example read_uid --features i2c -- /dev/i2c-1

use std::thread;

use anyhow::Context;
use libpn532::prelude::*;
use libpn532::transport::i2c::LinuxI2cTransport;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let bus = std::env::args().nth(1).unwrap_or_else(|| "/dev/i2c-1".into());
    let transport =
        LinuxI2cTransport::open(&bus).with_context(|| format!("opening {}", bus))?;

    let mut device = DeviceBuilder::new()
        .with_transport(transport)
        .build_uninitialized()?;

    let version = device
        .get_firmware_version(ms(1000))
        .context("no PN532 answered on the bus")?;
    println!("Found {}", version);

    let mut device = device.initialize().context("SAM configuration failed")?;
    println!("Waiting for an ISO14443A card...");

    loop {
        device.start_passive_target_detection(BaudRate::Iso14443A)?;
        match device.read_detected_target(ms(1000)) {
            Ok(Some(uid)) => println!("UID ({} bytes): {}", uid.len(), uid),
            Ok(None) | Err(Error::Timeout(_)) => log::info!("looking for a card"),
            Err(e) => return Err(e.into()),
        }
        thread::sleep(ms(1000));
    }
}
