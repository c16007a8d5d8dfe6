//! Boot screen.
//!
//! Shown once at startup while the page system is not yet running:
//!
//! ```text
//!
//!           MEC Display Node          (banner, centred on the surface)
//!             SD card ready           (status, 24 px below)
//!
//! ```

use embedded_graphics::prelude::*;

use crate::canvas::Canvas;
use crate::colors::BACKGROUND;
use crate::config::{BOOT_STATUS_OFFSET_Y, BOOT_TITLE};
use crate::status::DeviceStatus;
use crate::styles::{Anchor, Ink, TextSize};

/// Clear the surface and draw the boot banner with the storage status line.
pub fn draw_boot_screen<C>(
    canvas: &mut C,
    status: DeviceStatus,
) where
    C: Canvas,
{
    canvas.fill_screen(BACKGROUND);

    let center = canvas.center();
    canvas.draw_string(BOOT_TITLE, center, Anchor::MiddleCenter, TextSize::Banner, Ink::NORMAL);
    canvas.draw_string(
        status.storage_label(),
        center + Point::new(0, BOOT_STATUS_OFFSET_Y),
        Anchor::MiddleCenter,
        TextSize::Small,
        Ink::NORMAL,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{DrawCommand, RecordingCanvas};

    #[test]
    fn test_boot_screen_layout() {
        let mut canvas = RecordingCanvas::new(800, 480);
        draw_boot_screen(&mut canvas, DeviceStatus::new(true, false));

        assert_eq!(canvas.commands()[0], DrawCommand::FillScreen(BACKGROUND));

        let title = canvas.text("MEC Display Node").unwrap();
        assert_eq!(title.position, Point::new(400, 240));
        assert_eq!(title.anchor, Anchor::MiddleCenter);
        assert_eq!(title.size, TextSize::Banner);

        let status = canvas.text("SD card ready").unwrap();
        assert_eq!(status.position, Point::new(400, 264));
        assert_eq!(status.size, TextSize::Small);
    }

    #[test]
    fn test_boot_screen_without_storage() {
        let mut canvas = RecordingCanvas::new(800, 480);
        draw_boot_screen(&mut canvas, DeviceStatus::default());
        assert!(canvas.has_text("SD card not detected"));
        assert!(!canvas.has_text("SD card ready"));
    }

    #[test]
    fn test_boot_screen_follows_surface_size() {
        let mut canvas = RecordingCanvas::new(480, 320);
        draw_boot_screen(&mut canvas, DeviceStatus::default());
        assert_eq!(canvas.text("MEC Display Node").unwrap().position, Point::new(240, 160));
    }
}
