//! Layout and timing constants.
//!
//! Everything the renderer needs besides the surface size is fixed at compile
//! time. Positions are in pixels from the top-left corner of the surface;
//! horizontal placement that depends on the surface width (centering,
//! right-aligned labels, pill widths) is derived from
//! [`Canvas::surface_size`](crate::canvas::Canvas::surface_size) at draw time.

// =============================================================================
// Reference Display
// =============================================================================

/// Width of the reference 800x480 RGB panel (used by the simulator window).
pub const SCREEN_WIDTH: u32 = 800;

/// Height of the reference panel.
pub const SCREEN_HEIGHT: u32 = 480;

// =============================================================================
// Boot Screen
// =============================================================================

/// How long the boot screen stays up before the first page is drawn.
pub const BOOT_DWELL_MS: u32 = 2000;

/// Boot banner title.
pub const BOOT_TITLE: &str = "MEC Display Node";

/// Vertical distance from the banner centre to the storage status line.
pub const BOOT_STATUS_OFFSET_Y: i32 = 24;

/// Period of the idle loop that drives [`DisplayNode::tick`](crate::node::DisplayNode::tick).
pub const IDLE_TICK_MS: u32 = 16;

// =============================================================================
// Main Page Header
// =============================================================================

/// Left margin of the header title and right margin of the profile label.
pub const HEADER_MARGIN_X: i32 = 16;

/// Top of the header title.
pub const HEADER_MARGIN_Y: i32 = 12;

/// Subtitle offset below the header title.
pub const HEADER_SUBTITLE_OFFSET_Y: i32 = 28;

/// Profile label offset below the header title top.
pub const HEADER_PROFILE_OFFSET_Y: i32 = 8;

/// Main page subtitle.
pub const MAIN_SUBTITLE: &str = "Environment Controller - Profile overview";

// =============================================================================
// Profile Pills
// =============================================================================

/// Top edge of the pill row.
pub const PILL_AREA_TOP: i32 = 56;

/// Pill height.
pub const PILL_HEIGHT: u32 = 40;

/// Left/right margin of the pill row.
pub const PILL_MARGIN_X: u32 = 16;

/// Horizontal gap between neighbouring pills.
pub const PILL_SPACING: u32 = 8;

/// Pill corner radius.
pub const PILL_RADIUS: u32 = 8;

// =============================================================================
// Placeholder Pages
// =============================================================================

/// Top of the placeholder page title.
pub const PLACEHOLDER_TITLE_Y: i32 = 16;

/// Top of the placeholder explanation line.
pub const PLACEHOLDER_BODY_Y: i32 = 48;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pills_start_below_header() {
        let subtitle_top = HEADER_MARGIN_Y + HEADER_SUBTITLE_OFFSET_Y;
        let large_height = crate::styles::TextSize::Large.font().character_size.height as i32;
        assert!(subtitle_top + large_height <= PILL_AREA_TOP);
    }

    #[test]
    fn test_placeholder_body_below_title() {
        let large_height = crate::styles::TextSize::Large.font().character_size.height as i32;
        assert!(PLACEHOLDER_TITLE_Y + large_height < PLACEHOLDER_BODY_Y);
    }

    #[test]
    fn test_pill_row_fits_reference_panel() {
        assert!(PILL_AREA_TOP as u32 + PILL_HEIGHT < SCREEN_HEIGHT);
        assert!(2 * PILL_MARGIN_X + 4 * PILL_SPACING < SCREEN_WIDTH);
    }
}
