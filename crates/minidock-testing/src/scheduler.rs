use minidock_core::{FrameCallbackId, FrameScheduler};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Manually pumped frame scheduler.
///
/// Callbacks queue until the test pumps a frame; cancellation removes them
/// from the queue. Cloning shares the queue.
#[derive(Clone, Default)]
pub struct TestFrameScheduler {
    inner: Rc<SchedulerInner>,
}

#[derive(Default)]
struct SchedulerInner {
    next_id: Cell<u64>,
    pending: RefCell<Vec<(FrameCallbackId, Box<dyn FnOnce(u64)>)>>,
}

impl TestFrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of callbacks waiting for the next frame.
    pub fn pending_callbacks(&self) -> usize {
        self.inner.pending.borrow().len()
    }

    /// Fires every callback queued before this call with the given frame
    /// time. Callbacks registered while pumping wait for the next pump.
    pub fn pump_frame_ms(&self, frame_time_ms: u64) {
        let due = std::mem::take(&mut *self.inner.pending.borrow_mut());
        for (_, callback) in due {
            callback(frame_time_ms * 1_000_000);
        }
    }
}

impl FrameScheduler for TestFrameScheduler {
    fn register_frame_callback(&self, callback: Box<dyn FnOnce(u64)>) -> Option<FrameCallbackId> {
        let id = FrameCallbackId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner.pending.borrow_mut().push((id, callback));
        Some(id)
    }

    fn cancel_frame_callback(&self, id: FrameCallbackId) {
        self.inner
            .pending
            .borrow_mut()
            .retain(|(pending_id, _)| *pending_id != id);
    }
}
