//! Composition model
//!
//! The ordered section list of one storefront. Every edit is a pure
//! transformation: it takes `&self` and returns a new model, so a refused or
//! no-op edit trivially leaves the original untouched.
//!
//! Invariants held by every constructor and operation:
//! - ids are unique
//! - every built-in section is present exactly once
//! - reordering never changes membership, visibility changes never change order

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::CompositionError;
use crate::registry::SectionTypeRegistry;
use crate::section::{BlockKind, BuiltInSection, ConfigMap, Section, SectionId, SectionKind};

/// Prefix of generated custom-block ids
const BLOCK_ID_PREFIX: &str = "block-";

/// Ordered collection of storefront sections
#[derive(Clone, Debug, PartialEq)]
pub struct CompositionModel {
    sections: Vec<Section>,
}

impl Default for CompositionModel {
    fn default() -> Self {
        Self::new()
    }
}

impl CompositionModel {
    /// Fresh storefront: every built-in section, visible, with default config
    pub fn new() -> Self {
        let sections = BuiltInSection::ALL
            .into_iter()
            .map(|section| {
                Section::new(
                    SectionId::new(section.slug()),
                    SectionKind::BuiltIn(section),
                    SectionTypeRegistry::built_in(section).default_config.clone(),
                )
            })
            .collect();
        Self { sections }
    }

    /// Build a model from untrusted (persisted) sections.
    ///
    /// Duplicate ids and repeated built-in kinds keep their first occurrence;
    /// built-ins missing from the input are appended in catalog order.
    pub fn from_sections(sections: impl IntoIterator<Item = Section>) -> Self {
        let mut seen_ids = HashSet::new();
        let mut seen_built_ins = HashSet::new();
        let mut kept = Vec::new();

        for section in sections {
            if !seen_ids.insert(section.id.clone()) {
                tracing::warn!(id = %section.id, "dropping section with duplicate id");
                continue;
            }
            if let SectionKind::BuiltIn(built_in) = section.kind {
                if !seen_built_ins.insert(built_in) {
                    tracing::warn!(
                        id = %section.id,
                        kind = %built_in,
                        "dropping repeated built-in section"
                    );
                    continue;
                }
            }
            kept.push(section);
        }

        let mut model = Self { sections: kept };
        for built_in in BuiltInSection::ALL {
            if !seen_built_ins.contains(&built_in) {
                tracing::debug!(kind = %built_in, "restoring missing built-in section");
                let id = model.unique_id(built_in.slug());
                model.sections.push(Section::new(
                    id,
                    SectionKind::BuiltIn(built_in),
                    SectionTypeRegistry::built_in(built_in).default_config.clone(),
                ));
            }
        }
        model
    }

    /// Lenient variant of [`from_sections`](Self::from_sections) over raw JSON
    /// entries; entries that do not parse (unknown kinds, missing fields) are
    /// skipped.
    pub fn from_json_values(values: impl IntoIterator<Item = Value>) -> Self {
        let sections = values
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<Section>(value) {
                Ok(section) => Some(section),
                Err(err) => {
                    tracing::warn!(%err, "skipping unreadable section");
                    None
                }
            })
            .collect::<Vec<_>>();
        Self::from_sections(sections)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &SectionId> + '_ {
        self.sections.iter().map(|s| &s.id)
    }

    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id.as_str() == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id.as_str() == id)
    }

    /// Sections a renderer should paint, in order
    pub fn visible_sections(&self) -> impl Iterator<Item = &Section> + '_ {
        self.sections.iter().filter(|s| s.visible)
    }

    /// Number of custom blocks of a kind
    pub fn count_of(&self, kind: BlockKind) -> usize {
        self.sections
            .iter()
            .filter(|s| s.block_kind() == Some(kind))
            .count()
    }

    /// Whether another block of this kind fits under its declared cap
    pub fn can_add(&self, kind: BlockKind) -> bool {
        SectionTypeRegistry::max_instances(kind)
            .map_or(true, |max| self.count_of(kind) < max)
    }

    /// Move the entry at `from` so it ends up at index `to`.
    ///
    /// No-op when the indices are equal or either is out of bounds.
    pub fn reorder(&self, from: usize, to: usize) -> Self {
        let len = self.sections.len();
        if from == to || from >= len || to >= len {
            return self.clone();
        }
        let mut sections = self.sections.clone();
        let moved = sections.remove(from);
        sections.insert(to, moved);
        tracing::debug!(from, to, "CompositionModel::reorder");
        Self { sections }
    }

    /// Set the visibility flag of one section; no-op if the id is absent
    pub fn set_visible(&self, id: &str, visible: bool) -> Self {
        let mut next = self.clone();
        if let Some(section) = next.sections.iter_mut().find(|s| s.id.as_str() == id) {
            section.visible = visible;
        }
        next
    }

    /// Append a new custom block seeded with its kind's defaults.
    ///
    /// A non-blank `title` overrides the default `title` config field.
    /// Returns the new model and the generated id, or
    /// [`CompositionError::CapacityExceeded`] when the kind's cap is reached.
    pub fn add_block(
        &self,
        kind: BlockKind,
        title: &str,
    ) -> Result<(Self, SectionId), CompositionError> {
        let descriptor = SectionTypeRegistry::block(kind);
        if let Some(max) = descriptor.max_instances {
            if self.count_of(kind) >= max {
                tracing::debug!(%kind, max, "block cap reached");
                return Err(CompositionError::CapacityExceeded { kind, max });
            }
        }

        let mut config = descriptor.default_config.clone();
        let title = title.trim();
        if !title.is_empty() {
            config.insert("title".to_string(), Value::String(title.to_string()));
        }

        let id = self.next_block_id();
        let section = Section::new(id.clone(), SectionKind::Custom(kind), config);
        let mut next = self.clone();
        next.sections.push(section);
        tracing::debug!(%id, %kind, "CompositionModel::add_block");
        Ok((next, id))
    }

    /// Remove a custom block.
    ///
    /// Built-in sections are protected and yield
    /// [`CompositionError::ProtectedSection`]; an absent id is a no-op.
    pub fn remove_block(&self, id: &str) -> Result<Self, CompositionError> {
        let Some(index) = self.position(id) else {
            return Ok(self.clone());
        };
        let section = &self.sections[index];
        if !section.is_custom() {
            return Err(CompositionError::ProtectedSection {
                id: section.id.clone(),
            });
        }
        let mut next = self.clone();
        next.sections.remove(index);
        tracing::debug!(id, "CompositionModel::remove_block");
        Ok(next)
    }

    /// Shallow-merge `partial` into a custom block's config.
    ///
    /// No-op if the id is absent or names a built-in section.
    pub fn update_block_config(&self, id: &str, partial: &ConfigMap) -> Self {
        let mut next = self.clone();
        if let Some(section) = next
            .sections
            .iter_mut()
            .find(|s| s.id.as_str() == id && s.is_custom())
        {
            for (key, value) in partial {
                section.config.insert(key.clone(), value.clone());
            }
        }
        next
    }

    /// `block-<n>` where `n` is one past the highest existing block number.
    ///
    /// Once the numbering is exhausted the lowest free number is used.
    fn next_block_id(&self) -> SectionId {
        let highest = self
            .sections
            .iter()
            .filter_map(|s| s.id.strip_prefix(BLOCK_ID_PREFIX))
            .filter_map(|n| n.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        if let Some(next) = highest.checked_add(1) {
            return self.unique_id(&format!("{BLOCK_ID_PREFIX}{next}"));
        }
        (1..=self.sections.len() as u64 + 1)
            .map(|n| format!("{BLOCK_ID_PREFIX}{n}"))
            .find(|candidate| self.get(candidate).is_none())
            .map(SectionId::new)
            .unwrap_or_else(|| self.unique_id(BLOCK_ID_PREFIX.trim_end_matches('-')))
    }

    /// `base`, or `base-2`, `base-3`, ... if taken
    fn unique_id(&self, base: &str) -> SectionId {
        if self.get(base).is_none() {
            return SectionId::new(base);
        }
        (2u64..)
            .map(|n| format!("{base}-{n}"))
            .find(|candidate| self.get(candidate).is_none())
            .map(SectionId::new)
            .unwrap_or_else(|| SectionId::new(base))
    }
}

impl Serialize for CompositionModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.sections.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CompositionModel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<Value>::deserialize(deserializer)?;
        Ok(Self::from_json_values(values))
    }
}
