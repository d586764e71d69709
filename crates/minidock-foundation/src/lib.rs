//! Pointer input and gesture foundations for Minidock.

mod constants;
mod pointer;
mod velocity_tracker;

pub use constants::*;
pub use pointer::*;
pub use velocity_tracker::*;
