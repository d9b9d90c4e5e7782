//! Built-in font pairings

use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Broad classification used by the style picker
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontCategory {
    Sans,
    Serif,
    Display,
    Mono,
}

impl Display for FontCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Sans => "sans-serif",
            Self::Serif => "serif",
            Self::Display => "display",
            Self::Mono => "monospace",
        })
    }
}

/// A named font option mapped to a CSS font stack
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FontDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub category: FontCategory,
    pub stack: &'static str,
}

const FONTS: [FontDefinition; 6] = [
    FontDefinition {
        id: "inter",
        name: "Inter",
        category: FontCategory::Sans,
        stack: "'Inter', ui-sans-serif, system-ui, -apple-system, sans-serif",
    },
    FontDefinition {
        id: "playfair",
        name: "Playfair Display",
        category: FontCategory::Serif,
        stack: "'Playfair Display', Georgia, 'Times New Roman', serif",
    },
    FontDefinition {
        id: "space-grotesk",
        name: "Space Grotesk",
        category: FontCategory::Display,
        stack: "'Space Grotesk', ui-sans-serif, system-ui, sans-serif",
    },
    FontDefinition {
        id: "dm-serif",
        name: "DM Serif Display",
        category: FontCategory::Serif,
        stack: "'DM Serif Display', Georgia, serif",
    },
    FontDefinition {
        id: "jetbrains-mono",
        name: "JetBrains Mono",
        category: FontCategory::Mono,
        stack: "'JetBrains Mono', ui-monospace, SFMono-Regular, Menlo, monospace",
    },
    FontDefinition {
        id: "poppins",
        name: "Poppins",
        category: FontCategory::Sans,
        stack: "'Poppins', ui-sans-serif, system-ui, sans-serif",
    },
];

/// Static font catalog
#[derive(Clone, Copy, Debug, Default)]
pub struct FontRegistry;

impl FontRegistry {
    pub const DEFAULT_ID: &'static str = "inter";

    pub fn all() -> &'static [FontDefinition] {
        &FONTS
    }

    pub fn get(id: &str) -> Option<&'static FontDefinition> {
        FONTS.iter().find(|f| f.id == id)
    }

    pub fn default_font() -> &'static FontDefinition {
        &FONTS[0]
    }

    /// Look up a font, falling back to the default for unknown ids
    pub fn resolve(id: &str) -> &'static FontDefinition {
        Self::get(id).unwrap_or_else(|| {
            tracing::warn!(font_id = id, "unknown font, using default");
            Self::default_font()
        })
    }
}
