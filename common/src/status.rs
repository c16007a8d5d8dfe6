//! Peripheral readiness reported by the boot collaborators.

/// Readiness flags gathered during hardware bring-up.
///
/// Built once before the page system starts and never changed afterwards.
/// A missing peripheral is not fatal: it only changes what the boot screen
/// says.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceStatus {
    /// Storage card detected and initialized.
    pub storage_ready: bool,
    /// Touch controller available. Reserved: no page decision reads it yet.
    pub touch_ready: bool,
}

impl DeviceStatus {
    pub const fn new(
        storage_ready: bool,
        touch_ready: bool,
    ) -> Self {
        Self {
            storage_ready,
            touch_ready,
        }
    }

    /// One-line storage status for the boot screen.
    pub const fn storage_label(self) -> &'static str {
        if self.storage_ready {
            "SD card ready"
        } else {
            "SD card not detected"
        }
    }
}
