use minidock_ui_layout::Point;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Pointer event with consumption tracking for gesture disambiguation.
///
/// A handler that claims a gesture consumes the events it acts on so that
/// other handlers (a child tap target, say) do not also react to them. The
/// flag is shared across clones via `Rc<Cell<_>>`, so consumption observed
/// through any copy of the event is observed through all of them.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    /// Position in container coordinates.
    pub position: Point,
    /// Host-supplied event time in milliseconds.
    pub time_ms: i64,
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, time_ms: i64) -> Self {
        Self {
            kind,
            position,
            time_ms,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    /// Marks this event as consumed, keeping other handlers from acting on it.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumption_is_shared_across_clones() {
        let event = PointerEvent::new(PointerEventKind::Move, Point::new(10.0, 20.0), 5);
        let copy = event.clone();

        assert!(!copy.is_consumed());
        event.consume();
        assert!(copy.is_consumed());
    }
}
