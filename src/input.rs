use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::platform::collections::HashSet;
use bevy::prelude::*;
use bevy::window::{CursorLeft, CursorMoved};

pub struct InputPlugin;
impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PointerEvent>()
            .add_systems(PreUpdate, collect_pointer_events);
    }
}

#[derive(Message, Debug, Clone, PartialEq)]
pub struct PointerEvent {
    /// Window (logical) coordinates: pixels from top-left, same space as UI layout
    pub position: Vec2,
    pub event_type: PointerEventType,
    /// 0 = mouse, >0 = touch id + 1. All touches drive the same pointer:
    /// a lifted finger only produces `Leave` once no other finger is down.
    pub id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventType {
    Move,
    Leave,
}

impl PointerEvent {
    pub fn moved(position: Vec2) -> Self {
        Self {
            position,
            event_type: PointerEventType::Move,
            id: 0,
        }
    }

    pub fn left(position: Vec2) -> Self {
        Self {
            position,
            event_type: PointerEventType::Leave,
            id: 0,
        }
    }
}

/// Normalize mouse and touch input into pointer messages.
/// Touch ids are offset by one so that 0 always means the mouse.
fn collect_pointer_events(
    mut cursor_moved: MessageReader<CursorMoved>,
    mut cursor_left: MessageReader<CursorLeft>,
    mut touch_events: MessageReader<TouchInput>,
    mut last_cursor: Local<Vec2>,
    mut active_touches: Local<HashSet<u64>>,
    mut out: MessageWriter<PointerEvent>,
) {
    for ev in touch_events.read() {
        let event_type = match ev.phase {
            TouchPhase::Started | TouchPhase::Moved => {
                active_touches.insert(ev.id);
                PointerEventType::Move
            }
            TouchPhase::Ended | TouchPhase::Canceled => {
                active_touches.remove(&ev.id);
                if !active_touches.is_empty() {
                    continue;
                }
                PointerEventType::Leave
            }
        };
        out.write(PointerEvent {
            position: ev.position,
            event_type,
            id: ev.id + 1,
        });
    }

    for ev in cursor_moved.read() {
        *last_cursor = ev.position;
        out.write(PointerEvent::moved(ev.position));
    }

    for _ in cursor_left.read() {
        out.write(PointerEvent::left(*last_cursor));
    }
}
