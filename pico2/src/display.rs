//! Display driver for the 3.5" 480x320 ILI9486 SPI panel.
//!
//! Pin mapping:
//! - DC: GPIO16
//! - CS: GPIO17
//! - CLK: GPIO18 (SPI0 CLK)
//! - MOSI: GPIO19 (SPI0 TX)
//! - Backlight: GPIO20
//! - Reset: Tied to RUN pin (resets with Pico)

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Config as SpiConfig, Spi};
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use mipidsi::interface::SpiInterface;
use mipidsi::models::ILI9486Rgb565;
use mipidsi::options::{Orientation, Rotation};
use mipidsi::{Builder, NoResetPin};
use static_cell::StaticCell;

/// Bytes buffered by the SPI interface per bus write.
const INTERFACE_BUFFER_SIZE: usize = 512;

static INTERFACE_BUFFER: StaticCell<[u8; INTERFACE_BUFFER_SIZE]> = StaticCell::new();

/// Display type alias for the ILI9486 panel (no reset pin).
pub type NodeDisplay<'d> = mipidsi::Display<
    SpiInterface<'static, ExclusiveDevice<Spi<'d, SPI0, Blocking>, Output<'d>, NoDelay>, Output<'d>>,
    ILI9486Rgb565,
    NoResetPin,
>;

/// Initialize the panel in landscape orientation.
///
/// Must only be called once: the interface buffer is a static.
pub fn init_display<'d>(
    spi: Spi<'d, SPI0, Blocking>,
    cs: Output<'d>,
    dc: Output<'d>,
) -> NodeDisplay<'d> {
    // Create SPI device with chip select
    let spi_device = ExclusiveDevice::new_no_delay(spi, cs).unwrap();

    let buffer = INTERFACE_BUFFER.init([0; INTERFACE_BUFFER_SIZE]);
    let di = SpiInterface::new(spi_device, dc, buffer);

    // Native panel is 320x480 (portrait), rotate 90° for 480x320 (landscape)
    Builder::new(ILI9486Rgb565, di)
        .display_size(320, 480)
        .orientation(Orientation::new().rotate(Rotation::Deg90))
        .init(&mut embassy_time::Delay)
        .unwrap()
}

/// SPI configuration for the display.
///
/// The ILI9486 write cycle allows roughly 20MHz; 16MHz leaves margin for
/// jumper wiring.
pub fn display_spi_config() -> SpiConfig {
    let mut config = SpiConfig::default();
    config.frequency = 16_000_000;
    config
}
