//! Pointer event constructors for test scripts.

use minidock_foundation::{PointerEvent, PointerEventKind};
use minidock_ui_layout::Point;

pub fn down(x: f32, y: f32, time_ms: i64) -> PointerEvent {
    PointerEvent::new(PointerEventKind::Down, Point::new(x, y), time_ms)
}

pub fn move_to(x: f32, y: f32, time_ms: i64) -> PointerEvent {
    PointerEvent::new(PointerEventKind::Move, Point::new(x, y), time_ms)
}

pub fn up(x: f32, y: f32, time_ms: i64) -> PointerEvent {
    PointerEvent::new(PointerEventKind::Up, Point::new(x, y), time_ms)
}

pub fn cancel(x: f32, y: f32, time_ms: i64) -> PointerEvent {
    PointerEvent::new(PointerEventKind::Cancel, Point::new(x, y), time_ms)
}
