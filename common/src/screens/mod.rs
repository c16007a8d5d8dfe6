//! Full-screen views.
//!
//! - `boot`: title banner plus storage status, shown once before the page system starts
//! - `main_page`: header and profile pills
//! - `placeholder`: Logs / Modules / Camera stand-ins
//!
//! Screens only read their inputs. Page selection and redraw decisions live in
//! [`DisplayNode`](crate::node::DisplayNode).

mod boot;
mod main_page;
mod placeholder;

pub use boot::draw_boot_screen;
pub use main_page::draw_main_page;
pub use placeholder::{draw_placeholder_page, placeholder_text};

use crate::canvas::Canvas;
use crate::colors::BACKGROUND;
use crate::pages::PageId;
use crate::profiles::ProfileCatalog;

/// Clear the surface and draw `page`.
pub fn draw_page<C>(
    canvas: &mut C,
    page: PageId,
    profiles: &ProfileCatalog,
) where
    C: Canvas,
{
    canvas.fill_screen(BACKGROUND);

    match page {
        PageId::Main => draw_main_page(canvas, profiles),
        PageId::Logs | PageId::Modules | PageId::Camera => draw_placeholder_page(canvas, page),
    }
}
