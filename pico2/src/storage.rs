//! Storage card presence probe.
//!
//! Pin mapping (SPI1):
//! - CLK: GPIO10
//! - MOSI: GPIO11
//! - MISO: GPIO12
//! - CS: GPIO13
//!
//! The node does not read the card yet. Boot only needs to know whether one
//! answers so the boot screen can report it.

use defmt::{Debug2Format, info, warn};
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI1;
use embassy_rp::spi::{Blocking, Config as SpiConfig, Spi};
use embedded_hal_bus::spi::ExclusiveDevice;
use embedded_sdmmc::SdCard;

/// SPI configuration for card initialization (cards start in 400kHz mode).
pub fn sd_spi_config() -> SpiConfig {
    let mut config = SpiConfig::default();
    config.frequency = 400_000;
    config
}

/// Initialize the card and report whether it is usable.
///
/// A missing or unresponsive card is logged and reported as `false`.
pub fn probe_sd_card(
    spi: Spi<'_, SPI1, Blocking>,
    cs: Output<'_>,
) -> bool {
    info!("[SD] Initializing...");

    let device = ExclusiveDevice::new_no_delay(spi, cs).unwrap();
    let card = SdCard::new(device, embassy_time::Delay);

    // Reading the size forces the card through its init sequence.
    match card.num_bytes() {
        Ok(bytes) => {
            info!("[SD] Initialization successful ({} MiB)", bytes / (1024 * 1024));
            true
        }
        Err(e) => {
            warn!("[SD] Initialization failed: {}", Debug2Format(&e));
            false
        }
    }
}
