//! Frame-driven settle loop.

use crate::simulation::FlingSimulation;
use minidock_core::{FrameCallbackRegistration, FrameClock};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// State for a fling in flight.
struct ActiveFling {
    simulation: FlingSimulation,
    /// Frame time of the first step, fixed when the first callback fires.
    start_frame_ms: Cell<Option<u64>>,
    /// Pending frame callback, kept alive so it is cancelled with the fling.
    registration: Option<FrameCallbackRegistration>,
    running: Cell<bool>,
}

/// Drives a [`FlingSimulation`] one display frame at a time.
///
/// Each frame the driver samples the simulation at the elapsed play time,
/// hands the offset to `apply`, and reschedules itself until the simulation
/// reports completion, at which point `on_end` fires with the final offset.
/// Aborting drops the pending registration, so a stale frame callback can
/// never act after a new gesture or a host detach.
pub struct FlingDriver {
    state: Rc<RefCell<Option<ActiveFling>>>,
    frame_clock: FrameClock,
}

impl FlingDriver {
    pub fn new(frame_clock: FrameClock) -> Self {
        Self {
            state: Rc::new(RefCell::new(None)),
            frame_clock,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().is_some()
    }

    /// Starts `simulation`, replacing any fling already in flight.
    pub fn start(
        &self,
        simulation: FlingSimulation,
        apply: impl Fn(f32) + 'static,
        on_end: impl FnOnce(f32) + 'static,
    ) {
        self.abort();
        *self.state.borrow_mut() = Some(ActiveFling {
            simulation,
            start_frame_ms: Cell::new(None),
            registration: None,
            running: Cell::new(true),
        });
        log::debug!(
            "fling start: {} -> {} at {} px/s",
            simulation.offset_at(0),
            simulation.target_offset(),
            simulation.initial_velocity()
        );
        schedule_next_frame(
            Rc::clone(&self.state),
            self.frame_clock.clone(),
            apply,
            on_end,
        );
    }

    /// Cancels the fling in flight, if any, without firing its end hook.
    pub fn abort(&self) {
        if let Some(active) = self.state.borrow_mut().take() {
            active.running.set(false);
        }
    }
}

/// Schedules one step of the settle loop; called recursively each frame.
fn schedule_next_frame<F, G>(
    state: Rc<RefCell<Option<ActiveFling>>>,
    frame_clock: FrameClock,
    apply: F,
    on_end: G,
) where
    F: Fn(f32) + 'static,
    G: FnOnce(f32) + 'static,
{
    let state_for_frame = Rc::clone(&state);
    let clock_for_frame = frame_clock.clone();
    let on_end = RefCell::new(Some(on_end));

    let registration = frame_clock.with_frame_millis(move |frame_time_ms| {
        let step = {
            let guard = state_for_frame.borrow();
            let Some(active) = guard.as_ref() else {
                return;
            };
            if !active.running.get() {
                return;
            }

            let start = match active.start_frame_ms.get() {
                Some(value) => value,
                None => {
                    active.start_frame_ms.set(Some(frame_time_ms));
                    frame_time_ms
                }
            };
            let play_time_ms = frame_time_ms.saturating_sub(start) as i64;
            (
                active.simulation.offset_at(play_time_ms),
                active.simulation.is_finished(play_time_ms),
            )
        };

        let (offset, finished) = step;
        apply(offset);

        if finished {
            state_for_frame.borrow_mut().take();
            log::debug!("fling finished at {offset}");
            if let Some(end) = on_end.borrow_mut().take() {
                end(offset);
            }
        } else if let Some(end) = on_end.borrow_mut().take() {
            schedule_next_frame(
                Rc::clone(&state_for_frame),
                clock_for_frame.clone(),
                apply,
                end,
            );
        }
    });

    if let Some(active) = state.borrow_mut().as_mut() {
        active.registration = Some(registration);
    }
}
