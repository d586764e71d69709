//! The side panel.
//!
//! Sized and positioned off the player panel's published geometry every
//! pass: flush against the player's right edge, matching its vertical
//! extent. No gestures, no state machine beyond the cached dependency.

use minidock_ui_layout::{
    Constraints, CoordinatorHost, LayoutInvalidator, PanelFrame, PanelView, Size,
};
use std::rc::Rc;

use crate::{PanelBehavior, PanelGeometryHandle};

/// Behavior that keeps its host view flush against the player panel.
pub struct SidePanelBehavior {
    dependency: Option<PanelGeometryHandle>,
    invalidator: Rc<dyn LayoutInvalidator>,
}

impl SidePanelBehavior {
    pub fn new(invalidator: Rc<dyn LayoutInvalidator>) -> Self {
        Self {
            dependency: None,
            invalidator,
        }
    }

    fn dependency_frame(&self) -> Option<PanelFrame> {
        self.dependency.as_ref().and_then(PanelGeometryHandle::frame)
    }
}

impl PanelBehavior for SidePanelBehavior {
    fn on_measure(
        &mut self,
        parent: &dyn CoordinatorHost,
        child: &mut dyn PanelView,
        constraints: Constraints,
    ) -> Size {
        assert!(
            constraints.is_valid(),
            "malformed measurement constraints from host: {constraints}"
        );
        match self.dependency_frame() {
            Some(frame) => {
                let width = parent.size().width - frame.right;
                let height = frame.bottom - frame.top;
                log::trace!("side measure against {frame:?}: {width}x{height}");
                child.measure(Constraints::tight(width, height))
            }
            None => child.measure(constraints),
        }
    }

    fn on_layout(&mut self, _parent: &dyn CoordinatorHost, child: &mut dyn PanelView) {
        let frame = self.dependency_frame();
        let left = frame.map_or(0.0, |f| f.right);
        let top = frame.map_or(0.0, |f| f.top);
        let bottom = frame.map_or(0.0, |f| f.bottom);
        let right = left + child.measured_size().width;
        child.place(PanelFrame::new(left, top, right, bottom));
        log::trace!("side layout: {left}, {top}, {right}, {bottom}");
    }

    fn layout_depends_on(&self, dependency: &dyn PanelBehavior) -> bool {
        dependency.published_geometry().is_some()
    }

    fn on_dependency_changed(&mut self, dependency: &dyn PanelBehavior) {
        self.dependency = dependency.published_geometry();
        self.invalidator.request_layout();
    }

    fn on_dependency_removed(&mut self) {
        self.dependency = None;
        self.invalidator.request_layout();
    }
}
