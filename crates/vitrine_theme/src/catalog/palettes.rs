//! Built-in color palettes

use serde::Serialize;

/// A named storefront palette. Colors are `#RRGGBB` strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PaletteDefinition {
    /// Stable id for config/serialization
    pub id: &'static str,
    /// User-facing display name
    pub name: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub foreground: &'static str,
}

impl PaletteDefinition {
    /// Palette colors in token order: primary, secondary, accent, background, foreground
    pub fn colors(&self) -> [&'static str; 5] {
        [
            self.primary,
            self.secondary,
            self.accent,
            self.background,
            self.foreground,
        ]
    }
}

const PALETTES: [PaletteDefinition; 8] = [
    PaletteDefinition {
        id: "minimal",
        name: "Minimal",
        primary: "#18181B",
        secondary: "#71717A",
        accent: "#2563EB",
        background: "#FFFFFF",
        foreground: "#09090B",
    },
    PaletteDefinition {
        id: "gradient",
        name: "Gradient",
        primary: "#7C3AED",
        secondary: "#DB2877",
        accent: "#F59E0B",
        background: "#FAF5FF",
        foreground: "#1E1B4B",
    },
    PaletteDefinition {
        id: "luxury",
        name: "Luxury",
        primary: "#1C1917",
        secondary: "#A8A29E",
        accent: "#C98A04",
        background: "#FAFAF9",
        foreground: "#0C0A09",
    },
    PaletteDefinition {
        id: "streetwear",
        name: "Streetwear",
        primary: "#DD2626",
        secondary: "#171717",
        accent: "#FACC15",
        background: "#F5F5F5",
        foreground: "#0A0A0A",
    },
    PaletteDefinition {
        id: "y2k",
        name: "Y2K",
        primary: "#FF6B9D",
        secondary: "#C084FC",
        accent: "#21D3EE",
        background: "#FDF4FF",
        foreground: "#3B0764",
    },
    PaletteDefinition {
        id: "ocean",
        name: "Ocean",
        primary: "#0369A1",
        secondary: "#0891B3",
        accent: "#14B8A6",
        background: "#F0F9FF",
        foreground: "#082F49",
    },
    PaletteDefinition {
        id: "forest",
        name: "Forest",
        primary: "#166534",
        secondary: "#65A30E",
        accent: "#C98A04",
        background: "#F7FEE7",
        foreground: "#052E16",
    },
    PaletteDefinition {
        id: "sunset",
        name: "Sunset",
        primary: "#EA580C",
        secondary: "#E11D48",
        accent: "#FBBE24",
        background: "#FEF7ED",
        foreground: "#421407",
    },
];

/// Static palette catalog
#[derive(Clone, Copy, Debug, Default)]
pub struct PaletteRegistry;

impl PaletteRegistry {
    /// Id substituted for unknown palette references
    pub const DEFAULT_ID: &'static str = "minimal";

    /// Full palette list, in display order
    pub fn all() -> &'static [PaletteDefinition] {
        &PALETTES
    }

    pub fn get(id: &str) -> Option<&'static PaletteDefinition> {
        PALETTES.iter().find(|p| p.id == id)
    }

    /// The designated fallback palette
    pub fn default_palette() -> &'static PaletteDefinition {
        &PALETTES[0]
    }

    /// Look up a palette, falling back to the default for unknown ids
    pub fn resolve(id: &str) -> &'static PaletteDefinition {
        Self::get(id).unwrap_or_else(|| {
            tracing::warn!(palette_id = id, "unknown palette, using default");
            Self::default_palette()
        })
    }
}
