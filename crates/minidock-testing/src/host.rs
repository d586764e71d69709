use minidock_ui::PanelBehavior;
use minidock_ui_layout::{
    Constraints, CoordinatorHost, LayoutInvalidator, PanelFrame, PanelView, Size,
};
use std::cell::Cell;
use std::rc::Rc;

/// Container double with a fixed size and the default hit test.
pub struct TestHost {
    size: Size,
}

impl TestHost {
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

impl CoordinatorHost for TestHost {
    fn size(&self) -> Size {
        self.size
    }
}

/// Records relayout requests; shares its counter across clones.
#[derive(Clone, Default)]
pub struct TestInvalidator {
    requests: Rc<Cell<usize>>,
}

impl TestInvalidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_count(&self) -> usize {
        self.requests.get()
    }
}

impl LayoutInvalidator for TestInvalidator {
    fn request_layout(&self) {
        self.requests.set(self.requests.get() + 1);
    }
}

/// Child handle that wants a preferred size, yields to constraints, and
/// records what the behavior does to it.
pub struct TestPanelView {
    preferred: Size,
    measured: Size,
    placed: Option<PanelFrame>,
    frame: PanelFrame,
}

impl TestPanelView {
    pub fn new(preferred: Size) -> Self {
        Self {
            preferred,
            measured: Size::ZERO,
            placed: None,
            frame: PanelFrame::ZERO,
        }
    }

    /// The frame from the most recent layout pass, if one happened.
    pub fn placed_frame(&self) -> Option<PanelFrame> {
        self.placed
    }
}

impl PanelView for TestPanelView {
    fn measure(&mut self, constraints: Constraints) -> Size {
        self.measured = constraints.constrain(self.preferred);
        self.measured
    }

    fn measured_size(&self) -> Size {
        self.measured
    }

    fn place(&mut self, frame: PanelFrame) {
        self.placed = Some(frame);
        self.frame = frame;
    }

    fn frame(&self) -> PanelFrame {
        self.frame
    }
}

/// Runs one full measure + layout pass and returns the measured size.
pub fn layout_pass(
    behavior: &mut dyn PanelBehavior,
    host: &TestHost,
    view: &mut TestPanelView,
    constraints: Constraints,
) -> Size {
    let measured = behavior.on_measure(host, view, constraints);
    behavior.on_layout(host, view);
    measured
}
