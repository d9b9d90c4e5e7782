//! Drag-to-reorder controller
//!
//! Turns a stream of pointer or keyboard drag inputs into at most one
//! [`DragIntent`] per gesture. The controller never touches the composition
//! model itself; the caller applies the intent it gets back from a drop.
//!
//! ```text
//! Idle ──activate──▶ Dragging ──drop──▶ Dropped ──settle──▶ Idle
//!                        └─────cancel──▶ Cancelled ─settle──▶ Idle
//! ```
//!
//! A pointer press only becomes a drag after it has travelled
//! [`DragConfig::activation_distance`]; shorter presses are plain clicks.

use serde::{Deserialize, Serialize};
use vitrine_core::{Point, StateMachine};

use crate::model::CompositionModel;

/// Axis-aligned rectangle in host coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Inclusive on every edge
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Smallest rectangle covering both
    pub fn union(&self, other: &Rect) -> Rect {
        let min_x = self.x.min(other.x);
        let min_y = self.y.min(other.y);
        let max_x = (self.x + self.width).max(other.x + other.width);
        let max_y = (self.y + self.height).max(other.y + other.height);
        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}

/// On-screen rectangles of the list entries, one per section, in list order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SlotLayout {
    slots: Vec<Rect>,
}

impl SlotLayout {
    pub fn new(slots: Vec<Rect>) -> Self {
        Self { slots }
    }

    /// `count` equally sized rows stacked from the origin
    pub fn vertical_list(count: usize, width: f32, row_height: f32) -> Self {
        let slots = (0..count)
            .map(|i| Rect::new(0.0, i as f32 * row_height, width, row_height))
            .collect();
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot(&self, index: usize) -> Option<&Rect> {
        self.slots.get(index)
    }

    /// Index of the slot whose center is nearest `point`; ties go to the
    /// lower index
    pub fn closest_center(&self, point: Point) -> Option<usize> {
        self.slots
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, f32)>, (index, rect)| {
                let distance = rect.center().distance(point);
                match best {
                    Some((_, best_distance)) if best_distance <= distance => best,
                    _ => Some((index, distance)),
                }
            })
            .map(|(index, _)| index)
    }

    /// Union of every slot
    pub fn bounds(&self) -> Option<Rect> {
        let (first, rest) = self.slots.split_first()?;
        Some(rest.iter().fold(*first, |acc, rect| acc.union(rect)))
    }

    /// Whether `point` lies over the list at all
    pub fn contains(&self, point: Point) -> bool {
        self.bounds().is_some_and(|bounds| bounds.contains(point))
    }
}

/// Drag tuning
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Pointer travel, in host units, before a press turns into a drag
    pub activation_distance: f32,
}

impl DragConfig {
    pub const DEFAULT_ACTIVATION_DISTANCE: f32 = 5.0;
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            activation_distance: Self::DEFAULT_ACTIVATION_DISTANCE,
        }
    }
}

/// Controller phase
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragPhase {
    Idle,
    Dragging,
    Dropped,
    Cancelled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum DragEvent {
    Activate,
    Drop,
    Cancel,
    Settle,
}

/// Device driving the active drag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragSource {
    Pointer,
    Keyboard,
}

/// Device-independent drag input
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragInput {
    PointerDown { index: usize, position: Point },
    PointerMove { position: Point },
    PointerUp { position: Point },
    /// Explicit keyboard reorder command on an entry
    KeyPickUp { index: usize },
    /// Move the keyboard preview by a signed number of slots
    KeyMove(isize),
    KeyDrop,
    Cancel,
}

/// Request to move one entry, produced by a completed drag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragIntent {
    pub from_index: usize,
    pub to_index: usize,
}

impl DragIntent {
    /// Dropped back where it started
    pub fn is_noop(&self) -> bool {
        self.from_index == self.to_index
    }

    pub fn apply(&self, model: &CompositionModel) -> CompositionModel {
        model.reorder(self.from_index, self.to_index)
    }
}

/// What a single input did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    /// Input did not apply to the current phase
    Ignored,
    /// Pointer is pressed but has not travelled far enough yet
    Pending,
    Started { from_index: usize, to_index: usize },
    /// Live drop-slot preview; nothing has been mutated
    Preview { from_index: usize, to_index: usize },
    Dropped(DragIntent),
    Cancelled,
}

#[derive(Clone, Copy, Debug)]
struct PendingPress {
    index: usize,
    origin: Point,
}

#[derive(Clone, Copy, Debug)]
struct ActiveDrag {
    source: DragSource,
    from_index: usize,
    preview_index: usize,
}

/// Drag state machine for one reorderable list
#[derive(Debug)]
pub struct DragReorderController {
    config: DragConfig,
    layout: SlotLayout,
    machine: StateMachine<DragPhase, DragEvent>,
    pending: Option<PendingPress>,
    active: Option<ActiveDrag>,
}

impl Default for DragReorderController {
    fn default() -> Self {
        Self::new(DragConfig::default())
    }
}

impl DragReorderController {
    pub fn new(config: DragConfig) -> Self {
        let machine = StateMachine::builder(DragPhase::Idle)
            .on(DragPhase::Idle, DragEvent::Activate, DragPhase::Dragging)
            .on(DragPhase::Dragging, DragEvent::Drop, DragPhase::Dropped)
            .on(DragPhase::Dragging, DragEvent::Cancel, DragPhase::Cancelled)
            .on_any(
                &[DragPhase::Dropped, DragPhase::Cancelled],
                DragEvent::Settle,
                DragPhase::Idle,
            )
            .build();
        Self {
            config,
            layout: SlotLayout::default(),
            machine,
            pending: None,
            active: None,
        }
    }

    pub fn with_layout(mut self, layout: SlotLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn config(&self) -> DragConfig {
        self.config
    }

    pub fn layout(&self) -> &SlotLayout {
        &self.layout
    }

    /// Replace slot geometry (after a re-layout or a list change).
    ///
    /// A drag whose source entry no longer exists is cancelled.
    pub fn set_layout(&mut self, layout: SlotLayout) {
        self.layout = layout;
        if self.pending.is_some_and(|p| p.index >= self.layout.len()) {
            self.pending = None;
        }
        if let Some(mut active) = self.active {
            if active.from_index >= self.layout.len() {
                self.cancel();
            } else {
                active.preview_index = active.preview_index.min(self.layout.len() - 1);
                self.active = Some(active);
            }
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.machine.current_state()
    }

    pub fn is_dragging(&self) -> bool {
        self.machine.is_in(DragPhase::Dragging)
    }

    pub fn source(&self) -> Option<DragSource> {
        self.active.map(|a| a.source)
    }

    /// Index of the entry being dragged
    pub fn dragged_index(&self) -> Option<usize> {
        self.active.map(|a| a.from_index)
    }

    /// Current drop-slot preview
    pub fn preview_index(&self) -> Option<usize> {
        self.active.map(|a| a.preview_index)
    }

    /// Phases visited by the most recent gesture, in order
    pub fn phase_trail(&self) -> Vec<DragPhase> {
        self.machine.history().iter().map(|(_, _, to)| *to).collect()
    }

    /// Feed one input
    pub fn handle(&mut self, input: DragInput) -> DragOutcome {
        match input {
            DragInput::PointerDown { index, position } => self.pointer_down(index, position),
            DragInput::PointerMove { position } => self.pointer_move(position),
            DragInput::PointerUp { position } => self.pointer_up(position),
            DragInput::KeyPickUp { index } => self.key_pick_up(index),
            DragInput::KeyMove(step) => self.key_move(step),
            DragInput::KeyDrop => self.key_drop(),
            DragInput::Cancel => self.cancel(),
        }
    }

    fn pointer_down(&mut self, index: usize, position: Point) -> DragOutcome {
        if !self.machine.is_in(DragPhase::Idle) || index >= self.layout.len() {
            return DragOutcome::Ignored;
        }
        self.pending = Some(PendingPress {
            index,
            origin: position,
        });
        DragOutcome::Pending
    }

    fn pointer_move(&mut self, position: Point) -> DragOutcome {
        if let Some(press) = self.pending {
            if press.origin.distance(position) < self.config.activation_distance {
                return DragOutcome::Pending;
            }
            self.pending = None;
            let to_index = self.layout.closest_center(position).unwrap_or(press.index);
            return self.activate(DragSource::Pointer, press.index, to_index);
        }

        match self.active {
            Some(active) if active.source == DragSource::Pointer => {
                let to_index = self
                    .layout
                    .closest_center(position)
                    .unwrap_or(active.preview_index);
                self.preview(to_index)
            }
            _ => DragOutcome::Ignored,
        }
    }

    fn pointer_up(&mut self, position: Point) -> DragOutcome {
        if self.pending.take().is_some() {
            // Released before activation: a click, not a drag.
            return DragOutcome::Ignored;
        }
        match self.active {
            Some(active) if active.source == DragSource::Pointer => {
                match self.layout.closest_center(position) {
                    Some(to_index) if self.layout.contains(position) => self.drop_at(to_index),
                    _ => self.cancel(),
                }
            }
            _ => DragOutcome::Ignored,
        }
    }

    fn key_pick_up(&mut self, index: usize) -> DragOutcome {
        if !self.machine.is_in(DragPhase::Idle) || index >= self.layout.len() {
            return DragOutcome::Ignored;
        }
        self.pending = None;
        self.activate(DragSource::Keyboard, index, index)
    }

    fn key_move(&mut self, step: isize) -> DragOutcome {
        match self.active {
            Some(active) if active.source == DragSource::Keyboard => {
                let last = self.layout.len().saturating_sub(1);
                let to_index = active.preview_index.saturating_add_signed(step).min(last);
                self.preview(to_index)
            }
            _ => DragOutcome::Ignored,
        }
    }

    fn key_drop(&mut self) -> DragOutcome {
        match self.active {
            Some(active) if active.source == DragSource::Keyboard => {
                self.drop_at(active.preview_index)
            }
            _ => DragOutcome::Ignored,
        }
    }

    fn cancel(&mut self) -> DragOutcome {
        self.pending = None;
        if self.active.take().is_none() {
            return DragOutcome::Ignored;
        }
        self.machine.send(DragEvent::Cancel);
        self.machine.send(DragEvent::Settle);
        tracing::debug!("drag cancelled");
        DragOutcome::Cancelled
    }

    fn activate(&mut self, source: DragSource, from_index: usize, to_index: usize) -> DragOutcome {
        self.machine.clear_history();
        self.machine.send(DragEvent::Activate);
        self.active = Some(ActiveDrag {
            source,
            from_index,
            preview_index: to_index,
        });
        tracing::debug!(?source, from_index, "drag started");
        DragOutcome::Started {
            from_index,
            to_index,
        }
    }

    fn preview(&mut self, to_index: usize) -> DragOutcome {
        let Some(active) = self.active.as_mut() else {
            return DragOutcome::Ignored;
        };
        active.preview_index = to_index;
        DragOutcome::Preview {
            from_index: active.from_index,
            to_index,
        }
    }

    fn drop_at(&mut self, to_index: usize) -> DragOutcome {
        let Some(active) = self.active.take() else {
            return DragOutcome::Ignored;
        };
        self.machine.send(DragEvent::Drop);
        self.machine.send(DragEvent::Settle);
        let intent = DragIntent {
            from_index: active.from_index,
            to_index,
        };
        tracing::debug!(from = intent.from_index, to = intent.to_index, "drag dropped");
        DragOutcome::Dropped(intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(rows: usize) -> DragReorderController {
        DragReorderController::default().with_layout(SlotLayout::vertical_list(rows, 300.0, 100.0))
    }

    fn row_center(index: usize) -> Point {
        Point::new(150.0, index as f32 * 100.0 + 50.0)
    }

    #[test]
    fn closest_center_prefers_lower_index_on_tie() {
        let layout = SlotLayout::vertical_list(3, 300.0, 100.0);
        assert_eq!(layout.closest_center(Point::new(150.0, 100.0)), Some(0));
        assert_eq!(layout.closest_center(Point::new(150.0, 260.0)), Some(2));
        assert_eq!(SlotLayout::default().closest_center(Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn bounds_cover_all_slots() {
        let layout = SlotLayout::new(vec![
            Rect::new(10.0, 10.0, 50.0, 20.0),
            Rect::new(0.0, 40.0, 80.0, 20.0),
        ]);
        assert_eq!(layout.bounds(), Some(Rect::new(0.0, 10.0, 80.0, 50.0)));
        assert!(layout.contains(Point::new(70.0, 15.0)));
        assert!(!layout.contains(Point::new(90.0, 15.0)));
    }

    #[test]
    fn short_press_is_a_click() {
        let mut drag = controller(4);
        assert_eq!(
            drag.handle(DragInput::PointerDown {
                index: 1,
                position: row_center(1),
            }),
            DragOutcome::Pending
        );
        let nudged = Point::new(row_center(1).x + 3.0, row_center(1).y);
        assert_eq!(drag.handle(DragInput::PointerMove { position: nudged }), DragOutcome::Pending);
        assert_eq!(drag.handle(DragInput::PointerUp { position: nudged }), DragOutcome::Ignored);
        assert_eq!(drag.phase(), DragPhase::Idle);
        assert!(drag.phase_trail().is_empty());
    }

    #[test]
    fn pointer_drag_drops_once() {
        let mut drag = controller(5);
        drag.handle(DragInput::PointerDown {
            index: 0,
            position: row_center(0),
        });
        assert_eq!(
            drag.handle(DragInput::PointerMove {
                position: row_center(1),
            }),
            DragOutcome::Started {
                from_index: 0,
                to_index: 1,
            }
        );
        for row in [2, 3, 2, 3] {
            assert_eq!(
                drag.handle(DragInput::PointerMove {
                    position: row_center(row),
                }),
                DragOutcome::Preview {
                    from_index: 0,
                    to_index: row,
                }
            );
        }
        assert_eq!(
            drag.handle(DragInput::PointerUp {
                position: row_center(3),
            }),
            DragOutcome::Dropped(DragIntent {
                from_index: 0,
                to_index: 3,
            })
        );
        assert_eq!(drag.phase(), DragPhase::Idle);
        assert_eq!(
            drag.phase_trail(),
            [DragPhase::Dragging, DragPhase::Dropped, DragPhase::Idle]
        );
    }

    #[test]
    fn release_outside_list_cancels() {
        let mut drag = controller(3);
        drag.handle(DragInput::PointerDown {
            index: 2,
            position: row_center(2),
        });
        drag.handle(DragInput::PointerMove {
            position: row_center(0),
        });
        let outside = Point::new(500.0, 50.0);
        assert_eq!(drag.handle(DragInput::PointerUp { position: outside }), DragOutcome::Cancelled);
        assert_eq!(
            drag.phase_trail(),
            [DragPhase::Dragging, DragPhase::Cancelled, DragPhase::Idle]
        );
    }

    #[test]
    fn keyboard_drag_clamps_to_list() {
        let mut drag = controller(3);
        assert_eq!(
            drag.handle(DragInput::KeyPickUp { index: 1 }),
            DragOutcome::Started {
                from_index: 1,
                to_index: 1,
            }
        );
        assert_eq!(drag.source(), Some(DragSource::Keyboard));
        assert_eq!(
            drag.handle(DragInput::KeyMove(-5)),
            DragOutcome::Preview {
                from_index: 1,
                to_index: 0,
            }
        );
        assert_eq!(
            drag.handle(DragInput::KeyMove(9)),
            DragOutcome::Preview {
                from_index: 1,
                to_index: 2,
            }
        );
        assert_eq!(
            drag.handle(DragInput::KeyDrop),
            DragOutcome::Dropped(DragIntent {
                from_index: 1,
                to_index: 2,
            })
        );
    }

    #[test]
    fn inputs_from_other_device_are_ignored_mid_drag() {
        let mut drag = controller(3);
        drag.handle(DragInput::KeyPickUp { index: 0 });
        assert_eq!(
            drag.handle(DragInput::PointerDown {
                index: 2,
                position: row_center(2),
            }),
            DragOutcome::Ignored
        );
        assert_eq!(
            drag.handle(DragInput::PointerUp {
                position: row_center(2),
            }),
            DragOutcome::Ignored
        );
        assert_eq!(drag.handle(DragInput::Cancel), DragOutcome::Cancelled);
        assert_eq!(drag.handle(DragInput::Cancel), DragOutcome::Ignored);
    }

    #[test]
    fn shrinking_layout_cancels_orphaned_drag() {
        let mut drag = controller(4);
        drag.handle(DragInput::KeyPickUp { index: 3 });
        drag.set_layout(SlotLayout::vertical_list(2, 300.0, 100.0));
        assert_eq!(drag.phase(), DragPhase::Idle);
        assert_eq!(drag.dragged_index(), None);
    }

    #[test]
    fn out_of_range_pick_up_is_ignored() {
        let mut drag = controller(2);
        assert_eq!(drag.handle(DragInput::KeyPickUp { index: 2 }), DragOutcome::Ignored);
        assert_eq!(
            drag.handle(DragInput::PointerDown {
                index: 7,
                position: row_center(0),
            }),
            DragOutcome::Ignored
        );
    }
}
