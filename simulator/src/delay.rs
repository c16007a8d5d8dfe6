//! Blocking delay for the boot dwell on the desktop.

use std::thread;
use std::time::Duration;

use embedded_hal::delay::DelayNs;

/// [`DelayNs`] backed by `thread::sleep`.
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(
        &mut self,
        ns: u32,
    ) {
        thread::sleep(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_ms(
        &mut self,
        ms: u32,
    ) {
        thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}
