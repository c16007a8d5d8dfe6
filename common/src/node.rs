//! Display node: page state, active profile and device status in one owner.
//!
//! # Boot Sequence
//!
//! ```text
//! begin_boot()  -> boot screen drawn, PageState untouched
//!   (dwell)     -> BootScreen holds &mut DisplayNode, no page can render
//! finish()      -> request_page(Main), first real page draw
//! ```
//!
//! After boot the owner calls [`DisplayNode::request_page`] whenever the user
//! (or a future input source) asks for a page, and [`DisplayNode::tick`] from
//! its idle loop.

use embedded_hal::delay::DelayNs;

use crate::canvas::Canvas;
use crate::config::BOOT_DWELL_MS;
use crate::pages::{PageId, PageState};
use crate::profiles::{ProfileCatalog, ProfileId, ProfileSettings};
use crate::screens::{draw_boot_screen, draw_page};
use crate::status::DeviceStatus;

/// All mutable UI state of the node.
#[derive(Clone, Debug)]
pub struct DisplayNode {
    pages: PageState,
    profiles: ProfileCatalog,
    status: DeviceStatus,
    boot_dwell_ms: u32,
    ticks: u32,
}

impl DisplayNode {
    /// Fresh node with the built-in profiles and nothing drawn yet.
    pub const fn new(status: DeviceStatus) -> Self {
        Self {
            pages: PageState::new(),
            profiles: ProfileCatalog::builtin(),
            status,
            boot_dwell_ms: BOOT_DWELL_MS,
            ticks: 0,
        }
    }

    /// Override how long the boot screen stays up.
    #[must_use]
    pub const fn with_boot_dwell_ms(
        mut self,
        ms: u32,
    ) -> Self {
        self.boot_dwell_ms = ms;
        self
    }

    // =========================================================================
    // Boot
    // =========================================================================

    /// Draw the boot screen.
    ///
    /// The returned guard must be [`finish`](BootScreen::finish)ed to reach
    /// the first page.
    pub fn begin_boot<C>(
        &mut self,
        canvas: &mut C,
    ) -> BootScreen<'_>
    where
        C: Canvas,
    {
        info!("Boot screen: {}", self.status.storage_label());
        draw_boot_screen(canvas, self.status);
        BootScreen { node: self }
    }

    /// Boot screen, dwell, then the main page.
    pub fn boot<C, D>(
        &mut self,
        canvas: &mut C,
        delay: &mut D,
    ) where
        C: Canvas,
        D: DelayNs,
    {
        self.begin_boot(canvas).finish(canvas, delay);
    }

    // =========================================================================
    // Pages
    // =========================================================================

    /// Show `page` unless it is already on screen.
    ///
    /// Returns `true` when the page was redrawn.
    pub fn request_page<C>(
        &mut self,
        canvas: &mut C,
        page: PageId,
    ) -> bool
    where
        C: Canvas,
    {
        let previous = self.pages.current();
        if !self.pages.request(page) {
            debug!("Page {:?} already shown, redraw suppressed", page);
            return false;
        }

        info!("Page: {:?} -> {:?}", previous, page);
        draw_page(canvas, page, &self.profiles);
        true
    }

    #[inline]
    pub const fn current_page(&self) -> PageId { self.pages.current() }

    #[inline]
    pub const fn pages(&self) -> &PageState { &self.pages }

    // =========================================================================
    // Profiles
    // =========================================================================

    #[inline]
    pub const fn current_profile(&self) -> ProfileId { self.profiles.current() }

    /// Select the active profile. The screen is not refreshed.
    pub fn set_current_profile(
        &mut self,
        id: ProfileId,
    ) {
        self.profiles.set_current(id);
    }

    #[inline]
    pub const fn settings_for(
        &self,
        id: ProfileId,
    ) -> ProfileSettings {
        self.profiles.settings_for(id)
    }

    #[inline]
    pub const fn profiles(&self) -> &ProfileCatalog { &self.profiles }

    // =========================================================================
    // Status / Idle
    // =========================================================================

    #[inline]
    pub const fn status(&self) -> DeviceStatus { self.status }

    #[inline]
    pub const fn boot_dwell_ms(&self) -> u32 { self.boot_dwell_ms }

    /// Idle hook, called from the owner's main loop.
    pub fn tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
        trace!("tick {}", self.ticks);
    }

    /// Number of [`tick`](Self::tick) calls since startup (wrapping).
    #[inline]
    pub const fn ticks(&self) -> u32 { self.ticks }
}

impl Default for DisplayNode {
    fn default() -> Self { Self::new(DeviceStatus::default()) }
}

/// Boot screen on display, waiting for its dwell to elapse.
#[must_use = "the main page is only drawn once the boot screen is finished"]
pub struct BootScreen<'a> {
    node: &'a mut DisplayNode,
}

impl BootScreen<'_> {
    /// Keep the boot screen up for the configured dwell, then show the main
    /// page.
    pub fn finish<C, D>(
        self,
        canvas: &mut C,
        delay: &mut D,
    ) where
        C: Canvas,
        D: DelayNs,
    {
        debug!("Boot dwell {} ms", self.node.boot_dwell_ms);
        delay.delay_ms(self.node.boot_dwell_ms);
        self.node.request_page(canvas, PageId::Main);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
