//! Host event adapter for the drag controller.
//!
//! Key bindings are plain data so hosts can remap them; the controller itself
//! only ever sees [`DragInput`] values.

use vitrine_core::events::event_types;
use vitrine_core::{Event, KeyCode};

use crate::drag::{DragInput, DragOutcome, DragReorderController, DragSource};

/// Keyboard bindings for list reordering
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragKeyBindings {
    /// Pick up the focused entry, or drop the carried one
    pub grab: Vec<KeyCode>,
    pub cancel: Vec<KeyCode>,
    pub move_up: Vec<KeyCode>,
    pub move_down: Vec<KeyCode>,
    pub move_first: Vec<KeyCode>,
    pub move_last: Vec<KeyCode>,
}

impl Default for DragKeyBindings {
    fn default() -> Self {
        Self {
            grab: vec![KeyCode::SPACE, KeyCode::ENTER],
            cancel: vec![KeyCode::ESCAPE],
            move_up: vec![KeyCode::UP, KeyCode::LEFT],
            move_down: vec![KeyCode::DOWN, KeyCode::RIGHT],
            move_first: vec![KeyCode::HOME],
            move_last: vec![KeyCode::END],
        }
    }
}

impl DragKeyBindings {
    /// Translate a host event, given whether a keyboard drag is in progress.
    ///
    /// Returns `None` for events that have nothing to do with reordering,
    /// including key presses that are part of a Ctrl/Alt/Meta chord.
    pub fn translate(&self, event: &Event, keyboard_drag: bool) -> Option<DragInput> {
        match event.event_type {
            event_types::POINTER_DOWN => Some(DragInput::PointerDown {
                index: event.target?,
                position: event.position()?,
            }),
            event_types::POINTER_MOVE => Some(DragInput::PointerMove {
                position: event.position()?,
            }),
            event_types::POINTER_UP => Some(DragInput::PointerUp {
                position: event.position()?,
            }),
            event_types::POINTER_CANCEL | event_types::BLUR => Some(DragInput::Cancel),
            event_types::KEY_DOWN => {
                let key = event.key()?;
                if event.modifiers().is_some_and(|m| m.is_chord()) {
                    return None;
                }
                if self.cancel.contains(&key) {
                    Some(DragInput::Cancel)
                } else if self.grab.contains(&key) {
                    if keyboard_drag {
                        Some(DragInput::KeyDrop)
                    } else {
                        Some(DragInput::KeyPickUp {
                            index: event.target?,
                        })
                    }
                } else if keyboard_drag && self.move_up.contains(&key) {
                    Some(DragInput::KeyMove(-1))
                } else if keyboard_drag && self.move_down.contains(&key) {
                    Some(DragInput::KeyMove(1))
                } else if keyboard_drag && self.move_first.contains(&key) {
                    Some(DragInput::KeyMove(isize::MIN))
                } else if keyboard_drag && self.move_last.contains(&key) {
                    Some(DragInput::KeyMove(isize::MAX))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

impl DragReorderController {
    /// Translate and feed a host event with the default key bindings
    pub fn handle_event(&mut self, event: &Event) -> DragOutcome {
        self.handle_event_with(&DragKeyBindings::default(), event)
    }

    pub fn handle_event_with(&mut self, bindings: &DragKeyBindings, event: &Event) -> DragOutcome {
        let keyboard_drag = self.source() == Some(DragSource::Keyboard);
        match bindings.translate(event, keyboard_drag) {
            Some(input) => self.handle(input),
            None => DragOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drag::{DragIntent, SlotLayout};
    use vitrine_core::{Modifiers, Point};

    #[test]
    fn grab_key_toggles_between_pick_up_and_drop() {
        let bindings = DragKeyBindings::default();
        let space = Event::key_down(Some(2), KeyCode::SPACE);
        assert_eq!(
            bindings.translate(&space, false),
            Some(DragInput::KeyPickUp { index: 2 })
        );
        assert_eq!(bindings.translate(&space, true), Some(DragInput::KeyDrop));
    }

    #[test]
    fn arrows_only_move_during_keyboard_drag() {
        let bindings = DragKeyBindings::default();
        let down = Event::key_down(Some(0), KeyCode::DOWN);
        assert_eq!(bindings.translate(&down, false), None);
        assert_eq!(bindings.translate(&down, true), Some(DragInput::KeyMove(1)));
    }

    #[test]
    fn shortcut_chords_pass_through() {
        let bindings = DragKeyBindings::default();
        let ctrl = Modifiers::from_bits(Modifiers::CTRL);
        let copy = Event::key_chord(Some(0), KeyCode::SPACE, ctrl);
        assert_eq!(bindings.translate(&copy, false), None);

        let shift = Modifiers::from_bits(Modifiers::SHIFT);
        let shifted = Event::key_chord(Some(0), KeyCode::SPACE, shift);
        assert_eq!(
            bindings.translate(&shifted, false),
            Some(DragInput::KeyPickUp { index: 0 })
        );
    }

    #[test]
    fn home_and_end_jump_to_list_edges() {
        let mut drag = DragReorderController::default()
            .with_layout(SlotLayout::vertical_list(5, 200.0, 40.0));
        drag.handle_event(&Event::key_down(Some(2), KeyCode::SPACE));

        drag.handle_event(&Event::key_down(Some(2), KeyCode::END));
        assert_eq!(drag.preview_index(), Some(4));
        drag.handle_event(&Event::key_down(Some(2), KeyCode::HOME));
        assert_eq!(drag.preview_index(), Some(0));
    }

    #[test]
    fn pointer_down_needs_a_target() {
        let bindings = DragKeyBindings::default();
        let untargeted = Event::pointer(event_types::POINTER_DOWN, None, Point::new(1.0, 1.0));
        assert_eq!(bindings.translate(&untargeted, false), None);
    }

    #[test]
    fn keyboard_session_through_events() {
        let mut drag = DragReorderController::default()
            .with_layout(SlotLayout::vertical_list(4, 200.0, 40.0));

        drag.handle_event(&Event::key_down(Some(0), KeyCode::ENTER));
        drag.handle_event(&Event::key_down(Some(0), KeyCode::DOWN));
        drag.handle_event(&Event::key_down(Some(0), KeyCode::DOWN));
        let outcome = drag.handle_event(&Event::key_down(Some(0), KeyCode::SPACE));

        assert_eq!(
            outcome,
            DragOutcome::Dropped(DragIntent {
                from_index: 0,
                to_index: 2,
            })
        );
    }

    #[test]
    fn escape_and_blur_cancel() {
        let mut drag = DragReorderController::default()
            .with_layout(SlotLayout::vertical_list(3, 200.0, 40.0));

        drag.handle_event(&Event::key_down(Some(1), KeyCode::SPACE));
        assert_eq!(
            drag.handle_event(&Event::key_down(Some(1), KeyCode::ESCAPE)),
            DragOutcome::Cancelled
        );

        drag.handle_event(&Event::key_down(Some(1), KeyCode::SPACE));
        assert_eq!(
            drag.handle_event(&Event::bare(event_types::BLUR)),
            DragOutcome::Cancelled
        );
    }
}
