//! Merchant-edited style selection

use serde::{Deserialize, Serialize};

use crate::catalog::{ButtonShapeRegistry, FontRegistry, PaletteRegistry};

/// The merchant's style choices, referenced by catalog id.
///
/// Ids may be stale (removed from a catalog since they were saved); the
/// resolver substitutes catalog defaults instead of failing. Missing fields
/// in persisted data deserialize to the defaults.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleConfig {
    pub palette_id: String,
    pub font_id: String,
    pub button_shape_id: String,
}

impl StyleConfig {
    pub fn new(
        palette_id: impl Into<String>,
        font_id: impl Into<String>,
        button_shape_id: impl Into<String>,
    ) -> Self {
        Self {
            palette_id: palette_id.into(),
            font_id: font_id.into(),
            button_shape_id: button_shape_id.into(),
        }
    }

    pub fn with_palette(mut self, palette_id: impl Into<String>) -> Self {
        self.palette_id = palette_id.into();
        self
    }

    pub fn with_font(mut self, font_id: impl Into<String>) -> Self {
        self.font_id = font_id.into();
        self
    }

    pub fn with_button_shape(mut self, button_shape_id: impl Into<String>) -> Self {
        self.button_shape_id = button_shape_id.into();
        self
    }

    /// True when every id names an existing catalog entry
    pub fn is_fully_known(&self) -> bool {
        PaletteRegistry::get(&self.palette_id).is_some()
            && FontRegistry::get(&self.font_id).is_some()
            && ButtonShapeRegistry::get(&self.button_shape_id).is_some()
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::new(
            PaletteRegistry::DEFAULT_ID,
            FontRegistry::DEFAULT_ID,
            ButtonShapeRegistry::DEFAULT_ID,
        )
    }
}
