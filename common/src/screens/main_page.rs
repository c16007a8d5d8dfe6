//! Main page: profile overview.
//!
//! # Layout
//!
//! ```text
//! Main                                          Profile P1
//! Environment Controller - Profile overview
//! ( P1 )  [ P2 ]  [ P3 ]  [ P4 ]  [ P5 ]      <- active pill filled
//! ```

use crate::canvas::Canvas;
use crate::profiles::ProfileCatalog;
use crate::widgets::{draw_main_header, draw_profile_pills};

/// Draw the header and the profile pill row. Does not clear.
pub fn draw_main_page<C>(
    canvas: &mut C,
    profiles: &ProfileCatalog,
) where
    C: Canvas,
{
    let active = profiles.current();
    draw_main_header(canvas, active);
    draw_profile_pills(canvas, active);
}
