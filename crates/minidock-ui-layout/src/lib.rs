//! Layout contracts & geometry for Minidock
//!
//! Everything the panel behaviors and their layout host exchange: geometric
//! primitives, measurement constraints, and the traits the host implements
//! to let behaviors measure, place, and hit-test the views they control.

mod constraints;
mod contract;
mod geometry;

pub use constraints::*;
pub use contract::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::constraints::Constraints;
    pub use crate::contract::{CoordinatorHost, LayoutInvalidator, PanelView};
    pub use crate::geometry::{PanelFrame, Point, Size};
}
