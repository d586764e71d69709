//! The draggable player panel.
//!
//! Owns the vertical offset state machine: pointer capture and slop
//! detection, incremental dragging, velocity sampling, fling settling, and
//! the interpolating measurement that blends the panel between its expanded
//! and collapsed dimensions.

use minidock_animation::{FlingCalculator, FlingDriver, FlingSimulation};
use minidock_core::FrameClock;
use minidock_foundation::{
    PointerEvent, PointerEventKind, VelocityTracker, MIN_SETTLE_VELOCITY, TOUCH_SLOP,
    VELOCITY_UNITS_MS,
};
use minidock_ui_layout::{
    Constraints, CoordinatorHost, LayoutInvalidator, PanelFrame, PanelView, Size,
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::PanelBehavior;

/// Fraction of the travel over which the panel's width finishes collapsing,
/// decoupled from its height.
const WIDTH_COLLAPSE_FRACTION: f32 = 0.05;

/// Construction-time panel configuration.
#[derive(Clone, Copy, Debug)]
pub struct PanelConfig {
    /// Panel width in the fully collapsed state.
    pub collapsed_width: f32,
    /// Panel height in the fully collapsed state.
    pub collapsed_height: f32,
    /// Vertical displacement before a contact counts as a drag.
    pub touch_slop: f32,
    /// Released gestures slower than this settle at this speed instead.
    pub min_settle_velocity: f32,
    /// Window the tracked velocity is normalised to, in milliseconds.
    pub velocity_units_ms: i64,
    /// Friction for the settle decay.
    pub fling_friction: f32,
    /// Display density scale for the settle decay.
    pub density: f32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            collapsed_width: 100.0,
            collapsed_height: 50.0,
            touch_slop: TOUCH_SLOP,
            min_settle_velocity: MIN_SETTLE_VELOCITY,
            velocity_units_ms: VELOCITY_UNITS_MS,
            fling_friction: FlingCalculator::DEFAULT_FRICTION,
            density: 1.0,
        }
    }
}

/// Transient per-contact gesture flags.
///
/// `dragging` implies `captured`: only a captured contact can pass the slop
/// check.
#[derive(Default, Debug, Clone, Copy)]
struct GestureState {
    captured: bool,
    dragging: bool,
    last_motion_y: f32,
}

impl GestureState {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Offset state and published geometry.
///
/// Shared between the behavior, the settle loop, and read-only dependents;
/// the behavior is the only writer.
#[derive(Debug)]
struct PanelState {
    top: f32,
    min_top: f32,
    max_top: f32,
    frame: PanelFrame,
}

/// Read-only view of a player panel's published geometry.
///
/// Holds a weak back-reference: once the panel is gone the handle simply
/// stops producing frames.
#[derive(Clone)]
pub struct PanelGeometryHandle {
    state: Weak<RefCell<PanelState>>,
}

impl PanelGeometryHandle {
    /// The frame published by the most recent measurement pass, if the panel
    /// is still alive.
    pub fn frame(&self) -> Option<PanelFrame> {
        self.state.upgrade().map(|state| state.borrow().frame)
    }
}

/// Behavior for the draggable player panel.
pub struct PlayerPanelBehavior {
    config: PanelConfig,
    decay: FlingCalculator,
    gesture: GestureState,
    /// Created on capture, dropped on every up/cancel path.
    velocity_tracker: Option<VelocityTracker>,
    state: Rc<RefCell<PanelState>>,
    fling: FlingDriver,
    invalidator: Rc<dyn LayoutInvalidator>,
    on_fling_finished: Option<Rc<dyn Fn(f32)>>,
}

impl PlayerPanelBehavior {
    pub fn new(
        config: PanelConfig,
        frame_clock: FrameClock,
        invalidator: Rc<dyn LayoutInvalidator>,
    ) -> Self {
        Self {
            config,
            decay: FlingCalculator::new(config.fling_friction, config.density),
            gesture: GestureState::default(),
            velocity_tracker: None,
            state: Rc::new(RefCell::new(PanelState {
                top: 0.0,
                min_top: 0.0,
                max_top: 0.0,
                frame: PanelFrame::ZERO,
            })),
            fling: FlingDriver::new(frame_clock),
            invalidator,
            on_fling_finished: None,
        }
    }

    /// Hook invoked with the resting offset when a fling completes on its
    /// own. Interrupted flings do not fire it.
    pub fn set_on_fling_finished(&mut self, hook: impl Fn(f32) + 'static) {
        self.on_fling_finished = Some(Rc::new(hook));
    }

    /// Current vertical offset: `0` fully expanded, `max_top` fully
    /// collapsed.
    pub fn top(&self) -> f32 {
        self.state.borrow().top
    }

    /// Read-only handle to the published geometry, for dependents.
    pub fn geometry(&self) -> PanelGeometryHandle {
        PanelGeometryHandle {
            state: Rc::downgrade(&self.state),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.dragging
    }

    pub fn is_flinging(&self) -> bool {
        self.fling.is_running()
    }

    /// Clamps and commits a new offset, then asks the host for a pass.
    fn set_top(&self, top: f32) {
        {
            let mut state = self.state.borrow_mut();
            let clamped = top.clamp(state.min_top, state.max_top);
            state.top = clamped;
        }
        self.invalidator.request_layout();
    }

    fn capture_down(
        &mut self,
        parent: &dyn CoordinatorHost,
        child: &dyn PanelView,
        event: &PointerEvent,
    ) {
        let position = event.position;
        if parent.is_point_in_child_bounds(child, position.x, position.y) {
            self.fling.abort();
            self.gesture.captured = true;
            self.gesture.last_motion_y = position.y;
            self.ensure_velocity_tracker();
        }
    }

    fn passes_slop(&self, y: f32) -> bool {
        (y - self.gesture.last_motion_y).abs() > self.config.touch_slop
    }

    fn ensure_velocity_tracker(&mut self) {
        if self.velocity_tracker.is_none() {
            self.velocity_tracker = Some(VelocityTracker::new());
        }
    }

    fn track(&mut self, event: &PointerEvent) {
        if let Some(tracker) = &mut self.velocity_tracker {
            tracker.add_sample(event.time_ms, event.position.y);
        }
    }

    /// Starts a settle toward the endpoint the release velocity points at.
    ///
    /// Positive velocity settles collapsed, negative settles expanded, and
    /// slow releases are floored to the minimum settle speed. A zero or
    /// non-finite velocity leaves the panel where the drag released it.
    fn start_fling(&mut self, velocity: f32) {
        if !velocity.is_finite() || velocity == 0.0 {
            return;
        }
        let (top, min_top, max_top) = {
            let state = self.state.borrow();
            (state.top, state.min_top, state.max_top)
        };
        let floor = self.config.min_settle_velocity;
        let (target, effective_velocity) = if velocity > 0.0 {
            (max_top, velocity.max(floor))
        } else {
            (min_top, velocity.min(-floor))
        };
        let simulation = FlingSimulation::new(self.decay, top, target, effective_velocity);

        if simulation.is_finished(0) {
            if let Some(hook) = &self.on_fling_finished {
                hook(top);
            }
            return;
        }

        let state = Rc::clone(&self.state);
        let invalidator = Rc::clone(&self.invalidator);
        let apply = move |offset: f32| {
            {
                let mut state = state.borrow_mut();
                let clamped = offset.clamp(state.min_top, state.max_top);
                state.top = clamped;
            }
            invalidator.request_layout();
        };

        let finished_hook = self.on_fling_finished.clone();
        let on_end = move |offset: f32| {
            if let Some(hook) = finished_hook {
                hook(offset);
            }
        };

        self.fling.start(simulation, apply, on_end);
    }
}

impl PanelBehavior for PlayerPanelBehavior {
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
        let container = parent.size();

        let (top, min_top, max_top) = {
            let mut state = self.state.borrow_mut();
            state.min_top = 0.0;
            state.max_top = (container.height - self.config.collapsed_height).max(state.min_top);
            state.top = state.top.clamp(state.min_top, state.max_top);
            (state.top, state.min_top, state.max_top)
        };

        let natural = child.measure(constraints.loosen());

        let height_ratio = if max_top > min_top {
            1.0 - (top - min_top) / (max_top - min_top)
        } else {
            // Travel collapsed to a point; the offset sits at the expanded
            // endpoint of the ratio formula.
            1.0
        };
        let width_ratio = if height_ratio < WIDTH_COLLAPSE_FRACTION {
            height_ratio / WIDTH_COLLAPSE_FRACTION
        } else {
            height_ratio
        };

        let width = (self.config.collapsed_width
            + (natural.width - self.config.collapsed_width) * width_ratio)
            .trunc();
        let height = (self.config.collapsed_height
            + (natural.height - self.config.collapsed_height) * height_ratio)
            .trunc();
        let measured = child.measure(Constraints::tight(width, height));

        log::trace!(
            "player measure: top {top} in [{min_top}, {max_top}], ratios {height_ratio}/{width_ratio}, {constraints} -> {measured:?}"
        );

        let mut state = self.state.borrow_mut();
        state.frame = PanelFrame::new(0.0, top, measured.width, top + measured.height);
        measured
    }

    fn on_layout(&mut self, _parent: &dyn CoordinatorHost, child: &mut dyn PanelView) {
        let frame = self.state.borrow().frame;
        child.place(frame);
        log::trace!("player layout: {frame:?}");
    }

    fn on_intercept_pointer_event(
        &mut self,
        parent: &dyn CoordinatorHost,
        child: &mut dyn PanelView,
        event: &PointerEvent,
    ) -> bool {
        log::trace!("player intercept: {:?} at {:?}", event.kind, event.position);
        match event.kind {
            PointerEventKind::Down => self.capture_down(parent, &*child, event),
            PointerEventKind::Move => {
                if self.gesture.captured && self.passes_slop(event.position.y) {
                    self.gesture.last_motion_y = event.position.y;
                    self.gesture.dragging = true;
                    log::debug!("drag claimed at y {}", event.position.y);
                }
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                self.gesture.reset();
                self.velocity_tracker = None;
            }
        }
        self.track(event);
        self.gesture.dragging
    }

    fn on_pointer_event(
        &mut self,
        parent: &dyn CoordinatorHost,
        child: &mut dyn PanelView,
        event: &PointerEvent,
    ) -> bool {
        log::trace!("player touch: {:?} at {:?}", event.kind, event.position);
        let handled;
        match event.kind {
            PointerEventKind::Down => {
                self.capture_down(parent, &*child, event);
                handled = self.gesture.captured;
            }
            PointerEventKind::Move => {
                if !self.gesture.dragging {
                    if self.gesture.captured && self.passes_slop(event.position.y) {
                        self.gesture.last_motion_y = event.position.y;
                        self.gesture.dragging = true;
                    }
                } else {
                    let dy = event.position.y - self.gesture.last_motion_y;
                    let top = self.state.borrow().top;
                    self.set_top(top + dy);
                    self.gesture.last_motion_y = event.position.y;
                    event.consume();
                }
                handled = self.gesture.captured;
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                handled = self.gesture.captured;
                let velocity = self
                    .velocity_tracker
                    .as_ref()
                    .map(|tracker| tracker.velocity(self.config.velocity_units_ms));
                if let Some(velocity) = velocity {
                    self.start_fling(velocity);
                }
                self.gesture.reset();
                self.velocity_tracker = None;
            }
        }
        self.track(event);
        handled
    }

    fn published_geometry(&self) -> Option<PanelGeometryHandle> {
        Some(self.geometry())
    }

    fn on_detached(&mut self) {
        self.fling.abort();
        self.gesture.reset();
        self.velocity_tracker = None;
    }
}
