//! Page building blocks.
//!
//! All widgets draw through [`Canvas`](crate::canvas::Canvas) and never clear
//! the surface themselves.

mod header;
mod pills;

pub use header::{draw_main_header, profile_label};
pub use pills::{Pill, draw_profile_pills, pill_layout, pill_width};
