//! Behavior contract resolved by the layout host.

use minidock_foundation::PointerEvent;
use minidock_ui_layout::{Constraints, CoordinatorHost, PanelView, Size};

use crate::PanelGeometryHandle;

/// A behavior attached to one of the host container's children.
///
/// The host resolves its dependency graph each pass by asking every behavior
/// [`layout_depends_on`](PanelBehavior::layout_depends_on) against every
/// other, then drives measurement, placement, and pointer routing through the
/// remaining callbacks. Everything except measurement and layout defaults to
/// doing nothing, so a behavior only implements the hooks it cares about.
pub trait PanelBehavior {
    fn on_measure(
        &mut self,
        parent: &dyn CoordinatorHost,
        child: &mut dyn PanelView,
        constraints: Constraints,
    ) -> Size;

    fn on_layout(&mut self, parent: &dyn CoordinatorHost, child: &mut dyn PanelView);

    /// First look at an event, before the child sees it.
    ///
    /// Returning true claims the gesture: the host must stop forwarding
    /// events to the child and route them to
    /// [`on_pointer_event`](PanelBehavior::on_pointer_event) instead.
    fn on_intercept_pointer_event(
        &mut self,
        parent: &dyn CoordinatorHost,
        child: &mut dyn PanelView,
        event: &PointerEvent,
    ) -> bool {
        let _ = (parent, child, event);
        false
    }

    /// Handles an event once the gesture is claimed. Returns whether the
    /// event belonged to an interaction this behavior is tracking.
    fn on_pointer_event(
        &mut self,
        parent: &dyn CoordinatorHost,
        child: &mut dyn PanelView,
        event: &PointerEvent,
    ) -> bool {
        let _ = (parent, child, event);
        false
    }

    /// Geometry this behavior publishes for dependents, if any.
    fn published_geometry(&self) -> Option<PanelGeometryHandle> {
        None
    }

    /// True when this behavior's layout must be recomputed whenever
    /// `dependency`'s layout changes.
    fn layout_depends_on(&self, dependency: &dyn PanelBehavior) -> bool {
        let _ = dependency;
        false
    }

    /// A dependency this behavior declared interest in was laid out again.
    fn on_dependency_changed(&mut self, dependency: &dyn PanelBehavior) {
        let _ = dependency;
    }

    /// The dependency left the host's view tree.
    fn on_dependency_removed(&mut self) {}

    /// This behavior's own host view is being detached.
    fn on_detached(&mut self) {}
}
