use std::rc::Rc;

/// Identifies a pending frame callback so it can be cancelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameCallbackId(pub u64);

/// Host contract for once-per-display-refresh callbacks.
///
/// Callbacks are one-shot: the host invokes each registered callback exactly
/// once, on the next frame, with the frame time in nanoseconds. Cancelling an
/// id that has already fired (or was never issued) must be a no-op.
/// `register_frame_callback` may return `None` when the host cannot schedule
/// anymore, e.g. its render surface is gone; callers get an inactive
/// registration back.
pub trait FrameScheduler {
    fn register_frame_callback(&self, callback: Box<dyn FnOnce(u64)>) -> Option<FrameCallbackId>;

    fn cancel_frame_callback(&self, id: FrameCallbackId);
}

/// Clock handle cloned into anything that needs to run on the next frame.
#[derive(Clone)]
pub struct FrameClock {
    scheduler: Rc<dyn FrameScheduler>,
}

impl FrameClock {
    pub fn new(scheduler: Rc<dyn FrameScheduler>) -> Self {
        Self { scheduler }
    }

    /// Runs `callback` once on the next frame with the frame time in
    /// nanoseconds.
    pub fn with_frame_nanos(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        let scheduler = Rc::clone(&self.scheduler);
        match scheduler.register_frame_callback(Box::new(callback)) {
            Some(id) => FrameCallbackRegistration::new(scheduler, id),
            None => FrameCallbackRegistration::inactive(scheduler),
        }
    }

    /// Runs `callback` once on the next frame with the frame time in
    /// milliseconds.
    pub fn with_frame_millis(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        self.with_frame_nanos(move |nanos| callback(nanos / 1_000_000))
    }
}

/// Handle to a scheduled frame callback.
///
/// Dropping the registration cancels the callback if it has not fired yet.
pub struct FrameCallbackRegistration {
    scheduler: Rc<dyn FrameScheduler>,
    id: Option<FrameCallbackId>,
}

impl FrameCallbackRegistration {
    fn new(scheduler: Rc<dyn FrameScheduler>, id: FrameCallbackId) -> Self {
        Self {
            scheduler,
            id: Some(id),
        }
    }

    fn inactive(scheduler: Rc<dyn FrameScheduler>) -> Self {
        Self {
            scheduler,
            id: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.id.is_some()
    }

    pub fn cancel(mut self) {
        if let Some(id) = self.id.take() {
            self.scheduler.cancel_frame_callback(id);
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.scheduler.cancel_frame_callback(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingScheduler {
        next_id: std::cell::Cell<u64>,
        pending: RefCell<Vec<FrameCallbackId>>,
        cancelled: RefCell<Vec<FrameCallbackId>>,
    }

    impl FrameScheduler for RecordingScheduler {
        fn register_frame_callback(
            &self,
            _callback: Box<dyn FnOnce(u64)>,
        ) -> Option<FrameCallbackId> {
            let id = FrameCallbackId(self.next_id.get());
            self.next_id.set(id.0 + 1);
            self.pending.borrow_mut().push(id);
            Some(id)
        }

        fn cancel_frame_callback(&self, id: FrameCallbackId) {
            self.cancelled.borrow_mut().push(id);
        }
    }

    #[test]
    fn dropping_registration_cancels() {
        let scheduler = Rc::new(RecordingScheduler::default());
        let clock = FrameClock::new(scheduler.clone());

        let registration = clock.with_frame_nanos(|_| {});
        assert!(registration.is_active());
        drop(registration);

        assert_eq!(scheduler.cancelled.borrow().as_slice(), &[FrameCallbackId(0)]);
    }

    #[test]
    fn explicit_cancel_only_cancels_once() {
        let scheduler = Rc::new(RecordingScheduler::default());
        let clock = FrameClock::new(scheduler.clone());

        clock.with_frame_nanos(|_| {}).cancel();

        assert_eq!(scheduler.cancelled.borrow().len(), 1);
    }

    #[test]
    fn millis_callback_converts_frame_time() {
        struct ImmediateScheduler;

        impl FrameScheduler for ImmediateScheduler {
            fn register_frame_callback(
                &self,
                callback: Box<dyn FnOnce(u64)>,
            ) -> Option<FrameCallbackId> {
                callback(32_000_000);
                None
            }

            fn cancel_frame_callback(&self, _id: FrameCallbackId) {}
        }

        let clock = FrameClock::new(Rc::new(ImmediateScheduler));
        let seen = Rc::new(std::cell::Cell::new(0u64));
        let seen_in_callback = Rc::clone(&seen);
        let registration = clock.with_frame_millis(move |millis| seen_in_callback.set(millis));

        assert!(!registration.is_active());
        assert_eq!(seen.get(), 32);
    }
}
