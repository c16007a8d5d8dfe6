//! Page identifiers and the redraw-suppression state machine.
//!
//! # Pages
//!
//! - [`PageId::Main`]: header with the active profile and the profile pill row
//! - [`PageId::Logs`]: placeholder
//! - [`PageId::Modules`]: placeholder
//! - [`PageId::Camera`]: placeholder
//!
//! # Redraw Rule
//!
//! A full-screen redraw is expensive on the panel, so re-requesting the page
//! that is already visible is a no-op. The very first request always draws,
//! whichever page it names.
//!
//! | `initialized` | requested == current | Result |
//! |---------------|----------------------|--------|
//! | false | any | draw, mark initialized |
//! | true | no | draw, switch page |
//! | true | yes | suppressed |

/// Full-screen views the node can show, in declaration order.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PageId {
    /// Profile overview. Entered after the boot screen.
    #[default]
    Main,
    /// Log viewer placeholder.
    Logs,
    /// Module overview placeholder.
    Modules,
    /// Camera view placeholder.
    Camera,
}

impl PageId {
    /// All pages in declaration order.
    pub const ALL: [Self; 4] = [Self::Main, Self::Logs, Self::Modules, Self::Camera];

    /// Short page name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Main => "Main",
            Self::Logs => "Logs",
            Self::Modules => "Modules",
            Self::Camera => "Camera",
        }
    }

    /// Title drawn at the top of the page.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Main => "Main",
            Self::Logs => "Logs Page",
            Self::Modules => "Modules Page",
            Self::Camera => "Camera Page",
        }
    }
}

/// Which page is on screen and whether anything has been drawn yet.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PageState {
    current: PageId,
    initialized: bool,
}

impl PageState {
    /// Fresh state: nothing drawn, [`PageId::Main`] nominally current.
    pub const fn new() -> Self {
        Self {
            current: PageId::Main,
            initialized: false,
        }
    }

    /// Page currently on screen (or the default before the first draw).
    #[inline]
    pub const fn current(&self) -> PageId { self.current }

    /// Whether a page has been drawn since startup.
    #[inline]
    pub const fn is_initialized(&self) -> bool { self.initialized }

    /// Apply a page request.
    ///
    /// Returns `true` when `page` must be drawn, in which case it is now the
    /// current page. Returns `false` when it is already on screen.
    pub fn request(
        &mut self,
        page: PageId,
    ) -> bool {
        if self.initialized && self.current == page {
            return false;
        }

        self.current = page;
        self.initialized = true;
        true
    }
}

impl Default for PageState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn page() -> impl Strategy<Value = PageId> { proptest::sample::select(PageId::ALL.to_vec()) }

    #[test]
    fn test_page_default() {
        assert_eq!(PageId::default(), PageId::Main);
    }

    #[test]
    fn test_titles() {
        assert_eq!(PageId::Logs.title(), "Logs Page");
        assert_eq!(PageId::Modules.title(), "Modules Page");
        assert_eq!(PageId::Camera.title(), "Camera Page");
    }

    #[test]
    fn test_new_state_uninitialized() {
        let state = PageState::new();
        assert!(!state.is_initialized());
        assert_eq!(state.current(), PageId::Main);
    }

    #[test]
    fn test_first_request_for_default_page_draws() {
        let mut state = PageState::new();
        assert!(state.request(PageId::Main));
        assert!(state.is_initialized());
    }

    #[test]
    fn test_repeat_request_suppressed() {
        let mut state = PageState::new();
        assert!(state.request(PageId::Logs));
        assert!(!state.request(PageId::Logs));
        assert!(!state.request(PageId::Logs));
        assert_eq!(state.current(), PageId::Logs);
    }

    #[test]
    fn test_bounce_redraws() {
        let mut state = PageState::new();
        assert!(state.request(PageId::Main));
        assert!(state.request(PageId::Camera));
        assert!(state.request(PageId::Main));
    }

    proptest! {
        #[test]
        fn prop_first_request_always_draws(p in page()) {
            let mut state = PageState::new();
            prop_assert!(state.request(p));
            prop_assert_eq!(state.current(), p);
        }

        #[test]
        fn prop_rerequest_is_idempotent(p in page()) {
            let mut state = PageState::new();
            state.request(p);
            prop_assert!(!state.request(p));
            prop_assert_eq!(state.current(), p);
        }

        #[test]
        fn prop_transition_draws(p1 in page(), p2 in page()) {
            prop_assume!(p1 != p2);
            let mut state = PageState::new();
            state.request(p1);
            prop_assert!(state.request(p2));
            prop_assert_eq!(state.current(), p2);
        }

        #[test]
        fn prop_initialized_sticks(requests in proptest::collection::vec(page(), 1..16)) {
            let mut state = PageState::new();
            for p in requests {
                state.request(p);
                prop_assert!(state.is_initialized());
            }
        }
    }
}
