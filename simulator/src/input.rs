//! Keyboard controls.
//!
//! | Key | Action |
//! |-----|--------|
//! | M | Main page |
//! | L | Logs page |
//! | O | Modules page |
//! | C | Camera page |
//! | 1-5 | Select profile P1-P5 (screen not refreshed) |
//! | R | Refresh the current page |

use display_node_common::canvas::Canvas;
use display_node_common::{DisplayNode, PageId, ProfileId};
use embedded_graphics_simulator::sdl2::Keycode;

/// What a key press asks the node to do.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    ShowPage(PageId),
    SelectProfile(ProfileId),
    Refresh,
}

/// Map a key to its command, if it has one.
pub fn command_for_key(keycode: Keycode) -> Option<Command> {
    let command = match keycode {
        Keycode::M => Command::ShowPage(PageId::Main),
        Keycode::L => Command::ShowPage(PageId::Logs),
        Keycode::O => Command::ShowPage(PageId::Modules),
        Keycode::C => Command::ShowPage(PageId::Camera),
        Keycode::NUM_1 => Command::SelectProfile(ProfileId::P1),
        Keycode::NUM_2 => Command::SelectProfile(ProfileId::P2),
        Keycode::NUM_3 => Command::SelectProfile(ProfileId::P3),
        Keycode::NUM_4 => Command::SelectProfile(ProfileId::P4),
        Keycode::NUM_5 => Command::SelectProfile(ProfileId::P5),
        Keycode::R => Command::Refresh,
        _ => return None,
    };
    Some(command)
}

/// Apply `command` to the node. Returns `true` if anything was redrawn.
pub fn apply<C>(
    node: &mut DisplayNode,
    canvas: &mut C,
    command: Command,
) -> bool
where
    C: Canvas,
{
    match command {
        Command::ShowPage(page) => node.request_page(canvas, page),
        Command::SelectProfile(profile) => {
            node.set_current_profile(profile);
            false
        }
        Command::Refresh => {
            // Re-requesting the visible page is suppressed, so go through another one.
            let page = node.current_page();
            let detour = if page == PageId::Logs { PageId::Main } else { PageId::Logs };
            node.request_page(canvas, detour);
            node.request_page(canvas, page)
        }
    }
}
