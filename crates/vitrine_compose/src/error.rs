use thiserror::Error;

use crate::section::{BlockKind, SectionId};

/// Explicit outcomes for edits the composition model refuses.
///
/// None of these leave the model modified; callers surface them as
/// non-blocking notices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompositionError {
    #[error("{kind} blocks are limited to {max} per storefront")]
    CapacityExceeded { kind: BlockKind, max: usize },

    #[error("section {id} is built in and cannot be removed")]
    ProtectedSection { id: SectionId },

    #[error("unknown section kind: {0}")]
    UnknownKind(String),

    #[error("custom section {id} has no block kind")]
    MissingBlockKind { id: String },
}
