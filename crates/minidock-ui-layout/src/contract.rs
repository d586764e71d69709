//! Host-facing layout contracts.
//!
//! A behavior never owns the view it controls; it drives a [`PanelView`]
//! handle the host passes into each callback, and reaches container-level
//! services through [`CoordinatorHost`] and [`LayoutInvalidator`].

use crate::{Constraints, PanelFrame, Size};

/// Host-side handle to the view a behavior controls.
pub trait PanelView {
    /// Measures the view under `constraints` and returns the measured size.
    fn measure(&mut self, constraints: Constraints) -> Size;

    /// The size produced by the most recent `measure` call.
    fn measured_size(&self) -> Size;

    /// Applies `frame` to the view's actual bounds.
    fn place(&mut self, frame: PanelFrame);

    /// The bounds applied by the most recent `place` call.
    fn frame(&self) -> PanelFrame;
}

/// Services a behavior consumes from the container hosting it.
pub trait CoordinatorHost {
    /// Container dimensions at measurement time.
    fn size(&self) -> Size;

    /// Hit test in container coordinates.
    fn is_point_in_child_bounds(&self, child: &dyn PanelView, x: f32, y: f32) -> bool {
        child.frame().contains(x, y)
    }
}

/// Requests a fresh measure and layout pass.
///
/// The host must run the pass before the next frame is presented; behaviors
/// rely on this to turn an offset change into visible geometry.
pub trait LayoutInvalidator {
    fn request_layout(&self);
}
