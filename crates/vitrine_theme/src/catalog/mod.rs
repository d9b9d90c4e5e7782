//! Static design-option catalogs
//!
//! Palettes, fonts and button shapes are compiled in and immutable. Each
//! catalog has a designated default that stands in for stale or unknown ids.

mod buttons;
mod fonts;
mod palettes;

pub use buttons::{ButtonShapeDefinition, ButtonShapeRegistry};
pub use fonts::{FontCategory, FontDefinition, FontRegistry};
pub use palettes::{PaletteDefinition, PaletteRegistry};
