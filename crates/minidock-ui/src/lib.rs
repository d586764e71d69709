//! Panel behaviors for Minidock.
//!
//! Two cooperating behaviors implement a mini-player layout: a player panel
//! the user drags vertically between an expanded and a collapsed,
//! bottom-docked state, and a side panel that shadows the player panel's
//! published geometry. The layout host owns views, passes, and pointer
//! routing; the behaviors own the offset state machine and the geometry
//! derived from it.

mod behavior;
mod player_panel;
mod side_panel;

pub use behavior::*;
pub use player_panel::*;
pub use side_panel::*;
