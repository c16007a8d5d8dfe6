//! Core of the MEC display node UI.
//!
//! Platform-agnostic code shared between the desktop simulator and the Pico 2
//! firmware:
//!
//! - [`profiles`]: environment profiles and the profile catalog
//! - [`pages`]: page identifiers and the redraw-suppression state machine
//! - [`status`]: peripheral readiness reported at boot
//! - [`node`]: [`DisplayNode`], the single owner of all UI state
//! - [`screens`]: boot, main and placeholder page renderers
//! - [`widgets`]: header and profile pill row
//! - [`canvas`]: the drawing surface the renderers target
//! - [`colors`], [`styles`], [`config`]: look and layout constants
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` outside of tests. Logging goes to `defmt` or `log`
//! depending on the enabled feature and is compiled out otherwise.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

#[macro_use]
mod fmt;

pub mod canvas;
pub mod colors;
pub mod config;
pub mod node;
pub mod pages;
pub mod profiles;
pub mod screens;
pub mod status;
pub mod styles;
pub mod widgets;

#[cfg(test)]
mod testing;

// Re-export commonly used items
pub use canvas::Canvas;
pub use node::{BootScreen, DisplayNode};
pub use pages::{PageId, PageState};
pub use profiles::{CatalogError, ProfileCatalog, ProfileId, ProfileSettings};
pub use status::DeviceStatus;
