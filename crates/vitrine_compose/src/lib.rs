//! Vitrine Compose
//!
//! The ordered section list behind a storefront page and the interactions
//! that edit it.
//!
//! - **Sections**: built-in page sections plus merchant-added custom blocks
//! - **Catalog**: [`SectionTypeRegistry`] describes every kind, its default
//!   config and its config shape
//! - **Model**: [`CompositionModel`], pure edits that return a new model
//! - **Drag**: [`DragReorderController`], gestures in, one [`DragIntent`] out
//! - **Rendering**: the [`Skin`] contract and [`render_page`]
//!
//! # Example
//!
//! ```rust
//! use vitrine_compose::{BlockKind, CompositionModel};
//!
//! let model = CompositionModel::new();
//! let (model, id) = model.add_block(BlockKind::Marquee, "Free shipping").unwrap();
//! let model = model.reorder(model.len() - 1, 0);
//!
//! assert_eq!(model.sections()[0].id, id);
//! ```

pub mod drag;
pub mod error;
pub mod input;
pub mod model;
pub mod registry;
pub mod render;
pub mod section;
pub mod shape;

pub use drag::{
    DragConfig, DragInput, DragIntent, DragOutcome, DragPhase, DragReorderController,
    DragSource, Rect, SlotLayout,
};
pub use error::CompositionError;
pub use input::DragKeyBindings;
pub use model::CompositionModel;
pub use registry::{SectionDescriptor, SectionTypeRegistry, MARQUEE_MAX_INSTANCES};
pub use render::{render_page, OutlineSkin, RenderKey, Skin};
pub use section::{BlockKind, BuiltInSection, ConfigMap, Section, SectionId, SectionKind};
pub use shape::{ConfigShape, FieldKind, FieldSpec};
