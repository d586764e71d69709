//! Deterministic host doubles for exercising panel behaviors.
//!
//! Everything is clock-free: frame times and pointer timestamps are injected
//! by the test, matching how the real layout host feeds them in.

pub mod events;
mod host;
mod scheduler;

pub use host::*;
pub use scheduler::*;
