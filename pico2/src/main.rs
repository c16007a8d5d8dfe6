//! MEC Display Node firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Shows the node's pages on a 480x320 SPI panel.
//!
//! # Startup
//!
//! 1. Backlight on
//! 2. Display init and clear
//! 3. Storage card probe (failure only changes the boot screen text)
//! 4. Boot screen, dwell, main page
//! 5. Idle loop ticking the node
//!
//! There is no input source yet, so the main page stays up after boot.

#![no_std]
#![no_main]

mod display;
mod storage;

use defmt::info;
use display_node_common::canvas::Canvas;
use display_node_common::colors::BACKGROUND;
use display_node_common::config::IDLE_TICK_MS;
use display_node_common::{DeviceStatus, DisplayNode};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::spi::Spi;
use embassy_time::{Delay, Timer};
use {defmt_rtt as _, panic_probe as _};

use crate::display::{display_spi_config, init_display};
use crate::storage::{probe_sd_card, sd_spi_config};

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"mec-display-node"),
    embassy_rp::binary_info::rp_program_description!(c"MEC Display Node: environment profile overview"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("[BOOT] Display node starting...");

    let p = embassy_rp::init(Default::default());

    let _backlight = Output::new(p.PIN_20, Level::High); // Turn on backlight

    // Display pins: CS=17, DC=16, CLK=18, MOSI=19
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);

    // TX-only, the panel is never read back
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, display_spi_config());

    let mut display = init_display(spi, cs, dc);
    display.fill_screen(BACKGROUND);
    info!("[LCD] Display initialized");

    // Storage card pins: CLK=10, MOSI=11, MISO=12, CS=13
    let sd_spi = Spi::new_blocking(p.SPI1, p.PIN_10, p.PIN_11, p.PIN_12, sd_spi_config());
    let storage_ready = probe_sd_card(sd_spi, Output::new(p.PIN_13, Level::High));

    // No touch controller on this board
    let status = DeviceStatus::new(storage_ready, false);

    let mut node = DisplayNode::new(status);
    node.boot(&mut display, &mut Delay);
    info!("Page system ready");

    loop {
        node.tick();
        Timer::after_millis(u64::from(IDLE_TICK_MS)).await;
    }
}
