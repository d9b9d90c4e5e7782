use pretty_assertions::assert_eq;
use proptest::prelude::*;
use vitrine_compose::{
    CompositionModel, DragInput, DragOutcome, DragPhase, DragReorderController, SectionId,
    SlotLayout,
};
use vitrine_core::events::event_types;
use vitrine_core::{Event, KeyCode, Point};

const ROW: f32 = 80.0;

fn controller_for(model: &CompositionModel) -> DragReorderController {
    DragReorderController::default()
        .with_layout(SlotLayout::vertical_list(model.len(), 400.0, ROW))
}

fn center(index: usize) -> Point {
    Point::new(200.0, index as f32 * ROW + ROW / 2.0)
}

fn order(model: &CompositionModel) -> Vec<&str> {
    model.ids().map(SectionId::as_str).collect()
}

#[test]
fn pointer_gesture_reorders_through_events() {
    let model = CompositionModel::new();
    let mut drag = controller_for(&model);

    let events = [
        Event::pointer(event_types::POINTER_DOWN, Some(0), center(0)),
        Event::pointer(event_types::POINTER_MOVE, None, Point::new(200.0, 60.0)),
        Event::pointer(event_types::POINTER_MOVE, None, center(2)),
        Event::pointer(event_types::POINTER_MOVE, None, center(3)),
    ];
    for event in &events {
        drag.handle_event(event);
    }
    let outcome = drag.handle_event(&Event::pointer(event_types::POINTER_UP, None, center(3)));

    let DragOutcome::Dropped(intent) = outcome else {
        panic!("expected a drop, got {outcome:?}");
    };
    let model = intent.apply(&model);
    assert_eq!(
        order(&model),
        ["featured-products", "collections", "about", "hero", "testimonials", "newsletter"]
    );
}

#[test]
fn dropping_on_origin_is_a_noop_intent() {
    let model = CompositionModel::new();
    let mut drag = controller_for(&model);

    drag.handle(DragInput::PointerDown {
        index: 2,
        position: center(2),
    });
    for slot in [4, 2] {
        drag.handle(DragInput::PointerMove {
            position: center(slot),
        });
    }
    let outcome = drag.handle(DragInput::PointerUp {
        position: center(2),
    });
    let DragOutcome::Dropped(intent) = outcome else {
        panic!("expected a drop");
    };

    assert!(intent.is_noop());
    assert_eq!(intent.apply(&model), model);
}

#[test]
fn escape_mid_drag_leaves_model_alone() {
    let model = CompositionModel::new();
    let mut drag = controller_for(&model);

    drag.handle_event(&Event::key_down(Some(1), KeyCode::SPACE));
    drag.handle_event(&Event::key_down(Some(1), KeyCode::DOWN));
    assert_eq!(drag.preview_index(), Some(2));

    assert_eq!(
        drag.handle_event(&Event::key_down(Some(1), KeyCode::ESCAPE)),
        DragOutcome::Cancelled
    );
    assert_eq!(drag.phase(), DragPhase::Idle);
    assert_eq!(drag.preview_index(), None);
}

proptest! {
    /// However many previews a gesture produces, it yields at most one intent.
    #[test]
    fn one_intent_per_gesture(
        from in 0usize..6,
        path in prop::collection::vec(0f32..480.0, 1..40),
        release_y in -100f32..600.0,
    ) {
        let model = CompositionModel::new();
        let mut drag = controller_for(&model);
        let mut outcomes = vec![drag.handle(DragInput::PointerDown {
            index: from,
            position: center(from),
        })];
        outcomes.extend(path.iter().map(|&y| {
            drag.handle(DragInput::PointerMove {
                position: Point::new(200.0, y),
            })
        }));
        outcomes.push(drag.handle(DragInput::PointerUp {
            position: Point::new(200.0, release_y),
        }));

        let drops = outcomes
            .iter()
            .filter(|o| matches!(o, DragOutcome::Dropped(_)))
            .count();
        let cancels = outcomes
            .iter()
            .filter(|o| matches!(o, DragOutcome::Cancelled))
            .count();
        prop_assert!(drops + cancels <= 1);
        prop_assert_eq!(drag.phase(), DragPhase::Idle);

        if let Some(DragOutcome::Dropped(intent)) = outcomes.last() {
            let moved = intent.apply(&model);
            prop_assert_eq!(moved.len(), model.len());
            prop_assert_eq!(&moved.sections()[intent.to_index].id, &model.sections()[from].id);
        }
    }
}
