//! Storefront editing session
//!
//! The single writer for one storefront: it owns the composition model, the
//! style selection, the published theme and the drag controller. Every
//! accepted edit is saved through the injected [`SnapshotStore`]. Saving is
//! fire-and-forget; a failed save is logged and the in-memory state stays
//! authoritative.

use std::sync::Arc;

use vitrine_compose::{
    render_page, BlockKind, CompositionError, CompositionModel, ConfigMap, DragConfig,
    DragInput, DragOutcome, DragReorderController, SectionId, Skin, SlotLayout,
};
use vitrine_core::Event;
use vitrine_theme::{resolve, StyleConfig, StyleTokenSet, ThemeApplier};

use crate::persistence::{Snapshot, SnapshotStore};

pub struct EditorSession {
    model: CompositionModel,
    style: StyleConfig,
    applier: ThemeApplier,
    drag: DragReorderController,
    store: Box<dyn SnapshotStore>,
    /// The store holds data that failed to load and must not be overwritten
    unreadable: bool,
}

impl EditorSession {
    /// Restore the last saved snapshot, or start a fresh storefront with
    /// `default_style` when there is none.
    ///
    /// A snapshot that cannot be read also starts fresh. It is left in place
    /// and quarantined through the store before the first save replaces it.
    pub fn open(
        store: Box<dyn SnapshotStore>,
        default_style: StyleConfig,
        drag: DragConfig,
    ) -> Self {
        let (snapshot, unreadable) = match store.load() {
            Ok(Some(snapshot)) => (snapshot, false),
            Ok(None) => {
                tracing::debug!("no saved snapshot, starting fresh");
                (Snapshot::new(default_style, CompositionModel::new()), false)
            }
            Err(err) => {
                tracing::warn!(%err, "could not load snapshot, starting fresh");
                (Snapshot::new(default_style, CompositionModel::new()), true)
            }
        };
        let mut session = Self::from_snapshot(store, snapshot, drag);
        session.unreadable = unreadable;
        session
    }

    pub fn from_snapshot(
        store: Box<dyn SnapshotStore>,
        snapshot: Snapshot,
        drag: DragConfig,
    ) -> Self {
        let applier = ThemeApplier::new();
        applier.apply(resolve(&snapshot.style_config));
        Self {
            model: snapshot.sections,
            style: snapshot.style_config,
            applier,
            drag: DragReorderController::new(drag),
            store,
            unreadable: false,
        }
    }

    pub fn model(&self) -> &CompositionModel {
        &self.model
    }

    pub fn style_config(&self) -> &StyleConfig {
        &self.style
    }

    /// The applier renderers of this storefront read from
    pub fn applier(&self) -> &ThemeApplier {
        &self.applier
    }

    /// Currently published tokens
    pub fn tokens(&self) -> Arc<StyleTokenSet> {
        self.applier
            .current()
            .unwrap_or_else(|| Arc::new(resolve(&self.style)))
    }

    pub fn drag(&self) -> &DragReorderController {
        &self.drag
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.style.clone(), self.model.clone())
    }

    /// Replace the style selection and republish tokens.
    ///
    /// Returns whether the published tokens changed.
    pub fn set_style(&mut self, style: StyleConfig) -> bool {
        if style == self.style {
            return false;
        }
        if !style.is_fully_known() {
            tracing::warn!(?style, "style references unknown catalog ids, defaults will be used");
        }
        self.style = style;
        let changed = self.applier.apply(resolve(&self.style));
        self.persist();
        changed
    }

    pub fn set_palette(&mut self, palette_id: &str) -> bool {
        self.set_style(self.style.clone().with_palette(palette_id))
    }

    pub fn set_font(&mut self, font_id: &str) -> bool {
        self.set_style(self.style.clone().with_font(font_id))
    }

    pub fn set_button_shape(&mut self, button_shape_id: &str) -> bool {
        self.set_style(self.style.clone().with_button_shape(button_shape_id))
    }

    pub fn reorder(&mut self, from: usize, to: usize) {
        let next = self.model.reorder(from, to);
        self.commit(next, true);
    }

    pub fn set_visible(&mut self, id: &str, visible: bool) {
        let next = self.model.set_visible(id, visible);
        self.commit(next, false);
    }

    pub fn add_block(
        &mut self,
        kind: BlockKind,
        title: &str,
    ) -> Result<SectionId, CompositionError> {
        let (next, id) = self.model.add_block(kind, title)?;
        self.commit(next, true);
        Ok(id)
    }

    pub fn remove_block(&mut self, id: &str) -> Result<(), CompositionError> {
        let next = self.model.remove_block(id)?;
        self.commit(next, true);
        Ok(())
    }

    pub fn update_block_config(&mut self, id: &str, partial: &ConfigMap) {
        let next = self.model.update_block_config(id, partial);
        self.commit(next, false);
    }

    /// Geometry of the section list as currently laid out by the host
    pub fn set_slot_layout(&mut self, layout: SlotLayout) {
        self.drag.set_layout(layout);
    }

    /// Feed a drag input; a completed drop is applied to the model
    pub fn handle_drag(&mut self, input: DragInput) -> DragOutcome {
        let outcome = self.drag.handle(input);
        self.apply_drop(outcome);
        outcome
    }

    pub fn handle_event(&mut self, event: &Event) -> DragOutcome {
        let outcome = self.drag.handle_event(event);
        self.apply_drop(outcome);
        outcome
    }

    /// Render visible sections with the published tokens
    pub fn render<S: Skin>(&self, skin: &mut S) -> Vec<S::Output> {
        render_page(&self.model, &self.tokens(), skin)
    }

    fn apply_drop(&mut self, outcome: DragOutcome) {
        if let DragOutcome::Dropped(intent) = outcome {
            if !intent.is_noop() {
                let next = intent.apply(&self.model);
                self.commit(next, false);
            }
        }
    }

    /// Adopt `next` if it differs. Structural edits made while a drag is in
    /// flight invalidate the drag's indices, so the drag is cancelled.
    fn commit(&mut self, next: CompositionModel, structural: bool) {
        if next == self.model {
            return;
        }
        if structural && self.drag.is_dragging() {
            tracing::debug!("list changed under an active drag, cancelling it");
            self.drag.handle(DragInput::Cancel);
        }
        self.model = next;
        self.persist();
    }

    fn persist(&mut self) {
        if self.unreadable {
            match self.store.quarantine() {
                Ok(moved) => {
                    if let Some(path) = moved {
                        tracing::warn!(path = %path.display(), "moved unreadable snapshot aside");
                    }
                    self.unreadable = false;
                }
                Err(err) => {
                    tracing::warn!(%err, "could not move unreadable snapshot aside, not saving");
                    return;
                }
            }
        }
        if let Err(err) = self.store.save(&self.snapshot()) {
            tracing::warn!(%err, "failed to save storefront snapshot");
        }
    }
}

impl std::fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorSession")
            .field("model", &self.model)
            .field("style", &self.style)
            .field("drag", &self.drag)
            .field("unreadable", &self.unreadable)
            .finish_non_exhaustive()
    }
}
