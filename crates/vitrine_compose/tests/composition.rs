use pretty_assertions::assert_eq;
use proptest::prelude::*;
use vitrine_compose::{
    BlockKind, BuiltInSection, CompositionError, CompositionModel, SectionId,
    MARQUEE_MAX_INSTANCES,
};

#[derive(Clone, Debug)]
enum Edit {
    Add(BlockKind),
    Reorder(usize, usize),
    Hide(usize),
}

fn edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        prop::sample::select(BlockKind::ALL.to_vec()).prop_map(Edit::Add),
        (0usize..16, 0usize..16).prop_map(|(from, to)| Edit::Reorder(from, to)),
        (0usize..16).prop_map(Edit::Hide),
    ]
}

/// Models reachable from a fresh storefront through ordinary edits
fn model() -> impl Strategy<Value = CompositionModel> {
    prop::collection::vec(edit(), 0..12).prop_map(|edits| {
        edits
            .into_iter()
            .fold(CompositionModel::new(), |model, edit| match edit {
                Edit::Add(kind) => match model.add_block(kind, "") {
                    Ok((next, _)) => next,
                    Err(_) => model,
                },
                Edit::Reorder(from, to) => model.reorder(from, to),
                Edit::Hide(index) => {
                    let id = model.sections().get(index).map(|s| s.id.clone());
                    match id {
                        Some(id) => model.set_visible(&id, false),
                        None => model,
                    }
                }
            })
    })
}

fn ids(model: &CompositionModel) -> Vec<SectionId> {
    model.ids().cloned().collect()
}

fn sorted_ids(model: &CompositionModel) -> Vec<SectionId> {
    let mut ids = ids(model);
    ids.sort();
    ids
}

proptest! {
    #[test]
    fn reorder_preserves_membership(model in model(), from in 0usize..16, to in 0usize..16) {
        prop_assume!(from < model.len() && to < model.len());
        let moved_id = model.sections()[from].id.clone();
        let reordered = model.reorder(from, to);

        prop_assert_eq!(reordered.len(), model.len());
        prop_assert_eq!(sorted_ids(&reordered), sorted_ids(&model));
        prop_assert_eq!(&reordered.sections()[to].id, &moved_id);
    }

    #[test]
    fn visibility_changes_only_the_target(model in model(), index in 0usize..16, visible: bool) {
        prop_assume!(index < model.len());
        let id = model.sections()[index].id.clone();
        let toggled = model.set_visible(&id, visible);

        prop_assert_eq!(ids(&toggled), ids(&model));
        for (before, after) in model.sections().iter().zip(toggled.sections()) {
            if before.id == id {
                prop_assert_eq!(after.visible, visible);
            } else {
                prop_assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn built_ins_cannot_be_removed(model in model(), which in 0usize..6) {
        let id = BuiltInSection::ALL[which].slug();
        let before = serde_json::to_string(&model).unwrap();
        let is_protected = matches!(
            model.remove_block(id),
            Err(CompositionError::ProtectedSection { .. })
        );
        prop_assert!(is_protected);
        prop_assert_eq!(serde_json::to_string(&model).unwrap(), before);
    }

    #[test]
    fn remove_undoes_add(model in model(), kind in prop::sample::select(BlockKind::ALL.to_vec())) {
        prop_assume!(model.can_add(kind));
        let (grown, id) = model.add_block(kind, "Temporary").unwrap();
        prop_assert_eq!(grown.len(), model.len() + 1);
        prop_assert_eq!(grown.remove_block(&id).unwrap(), model);
    }

    #[test]
    fn ids_stay_unique(model in model()) {
        let mut unique = sorted_ids(&model);
        unique.dedup();
        prop_assert_eq!(unique.len(), model.len());
    }
}

#[test]
fn reorder_front_to_fourth_slot() {
    let model = CompositionModel::new();
    let moved = model.reorder(0, 3);
    let order: Vec<&str> = moved.ids().map(SectionId::as_str).collect();
    assert_eq!(
        order,
        ["featured-products", "collections", "about", "hero", "testimonials", "newsletter"]
    );
}

#[test]
fn reorder_within_a_run_of_blocks() {
    let mut model = CompositionModel::new();
    for title in ["A", "B", "C", "D", "E"] {
        model = model.add_block(BlockKind::RichText, title).unwrap().0;
    }
    let start = BuiltInSection::ALL.len();

    let moved = model.reorder(start, start + 3);
    let titles: Vec<&str> = moved.sections()[start..]
        .iter()
        .map(|section| section.config["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["B", "C", "D", "A", "E"]);
}

#[test]
fn marquee_cap_rejects_ninth_block() {
    let mut model = CompositionModel::new();
    for n in 0..MARQUEE_MAX_INSTANCES {
        let (next, _) = model
            .add_block(BlockKind::Marquee, &format!("Announcement {n}"))
            .unwrap();
        model = next;
    }

    let err = model.add_block(BlockKind::Marquee, "One too many").unwrap_err();
    assert_eq!(
        err,
        CompositionError::CapacityExceeded {
            kind: BlockKind::Marquee,
            max: MARQUEE_MAX_INSTANCES
        }
    );
    assert_eq!(model.count_of(BlockKind::Marquee), MARQUEE_MAX_INSTANCES);
    assert!(!model.can_add(BlockKind::Marquee));
    assert!(model.can_add(BlockKind::Faq));
}

#[test]
fn uncapped_kinds_keep_growing() {
    let model = (0..20).fold(CompositionModel::new(), |model, _| {
        model.add_block(BlockKind::RichText, "").unwrap().0
    });
    assert_eq!(model.count_of(BlockKind::RichText), 20);
}

#[test]
fn persisted_layout_survives_a_round_trip() {
    let (model, id) = CompositionModel::new()
        .add_block(BlockKind::Video, "Lookbook")
        .unwrap();
    let model = model.set_visible("hero", false).reorder(6, 1);

    let json = serde_json::to_string(&model).unwrap();
    let back: CompositionModel = serde_json::from_str(&json).unwrap();

    assert_eq!(back, model);
    assert_eq!(back.position(&id), Some(1));
}
