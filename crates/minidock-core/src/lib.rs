//! Core runtime seams for Minidock.
//!
//! The embedding layout host owns the display refresh loop; this crate models
//! the seam through which recurring per-frame work borrows that loop one
//! callback at a time.

mod frame_clock;

pub use frame_clock::*;
