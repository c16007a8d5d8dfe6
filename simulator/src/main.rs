//! MEC Display Node simulator for desktop.
//!
//! Runs the node on an 800x480 embedded-graphics-simulator window. A
//! `sdcard/` directory in the working directory stands in for the storage
//! card. See [`input`] for the keyboard controls.
//!
//! The boot dwell blocks the main thread, so the window does not process
//! events for those two seconds and some desktops may flag it as not
//! responding until the main page appears.

mod delay;
mod input;

use std::path::Path;
use std::thread;
use std::time::Duration;

use display_node_common::canvas::Canvas;
use display_node_common::colors::BACKGROUND;
use display_node_common::config::{IDLE_TICK_MS, SCREEN_HEIGHT, SCREEN_WIDTH};
use display_node_common::{DeviceStatus, DisplayNode};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use env_logger::Env;
use log::{info, warn};

use crate::delay::StdDelay;
use crate::input::{apply, command_for_key};

/// Directory standing in for the storage card.
const SD_CARD_DIR: &str = "sdcard";

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    info!("[BOOT] Display node starting...");

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(1).build();
    let mut window = Window::new("MEC Display Node", &output_settings);

    display.fill_screen(BACKGROUND);
    window.update(&display);

    info!("[SD] Initializing...");
    let storage_ready = Path::new(SD_CARD_DIR).is_dir();
    if storage_ready {
        info!("[SD] Initialization successful");
    } else {
        warn!("[SD] Initialization failed: no ./{SD_CARD_DIR} directory");
    }

    let mut node = DisplayNode::new(DeviceStatus::new(storage_ready, false));

    let boot = node.begin_boot(&mut display);
    window.update(&display);
    boot.finish(&mut display, &mut StdDelay);
    window.update(&display);

    loop {
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    if let Some(command) = command_for_key(keycode) {
                        apply(&mut node, &mut display, command);
                    }
                }
                _ => {}
            }
        }

        node.tick();
        window.update(&display);
        thread::sleep(Duration::from_millis(u64::from(IDLE_TICK_MS)));
    }
}
