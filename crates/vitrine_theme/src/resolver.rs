//! Style configuration -> token resolution
//!
//! Resolution is a pure function of the [`StyleConfig`] and the compiled-in
//! catalogs. Unknown ids fall back to catalog defaults; nothing here fails.

use vitrine_core::{Color, Hsl};

use crate::catalog::{ButtonShapeRegistry, FontRegistry, PaletteDefinition, PaletteRegistry};
use crate::config::StyleConfig;
use crate::tokens::StyleTokenSet;

/// Angle shared by both generated gradients
pub const GRADIENT_ANGLE_DEG: u16 = 135;

/// Resolves merchant style choices into a [`StyleTokenSet`]
#[derive(Clone, Copy, Debug, Default)]
pub struct ThemeResolver;

impl ThemeResolver {
    pub fn resolve(config: &StyleConfig) -> StyleTokenSet {
        let palette = PaletteRegistry::resolve(&config.palette_id);
        let font = FontRegistry::resolve(&config.font_id);
        let shape = ButtonShapeRegistry::resolve(&config.button_shape_id);

        let fallback = PaletteRegistry::default_palette();
        let [primary, secondary, accent, background, foreground] =
            resolved_colors(palette, fallback);

        StyleTokenSet {
            gradient_primary_css: linear_gradient(&primary.0, &secondary.0),
            gradient_secondary_css: linear_gradient(&secondary.0, &accent.0),
            primary_color: primary.0,
            primary_color_hsl: primary.1,
            secondary_color: secondary.0,
            secondary_color_hsl: secondary.1,
            accent_color: accent.0,
            accent_color_hsl: accent.1,
            background_color: background.0,
            background_color_hsl: background.1,
            foreground_color: foreground.0,
            foreground_color_hsl: foreground.1,
            font_stack: font.stack.to_string(),
            button_corner_radius: shape.radius,
        }
    }
}

/// Convenience free function for ergonomic imports.
pub fn resolve(config: &StyleConfig) -> StyleTokenSet {
    ThemeResolver::resolve(config)
}

/// `linear-gradient(135deg, <from> 0%, <to> 100%)`
pub fn linear_gradient(from: &str, to: &str) -> String {
    format!("linear-gradient({GRADIENT_ANGLE_DEG}deg, {from} 0%, {to} 100%)")
}

/// Hex + HSL for each palette slot. A malformed hex in a palette slot is
/// replaced by the same slot of the fallback palette.
fn resolved_colors(
    palette: &PaletteDefinition,
    fallback: &PaletteDefinition,
) -> [(String, Hsl); 5] {
    let colors = palette.colors();
    let fallback_colors = fallback.colors();
    std::array::from_fn(|slot| {
        let hex = colors[slot];
        match Color::parse_hex(hex) {
            Ok(color) => (hex.to_string(), color.to_hsl()),
            Err(err) => {
                tracing::warn!(palette_id = palette.id, %err, "malformed palette color");
                let hex = fallback_colors[slot];
                let hsl = Color::parse_hex(hex)
                    .map(|c| c.to_hsl())
                    .unwrap_or_default();
                (hex.to_string(), hsl)
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_descriptor_format() {
        assert_eq!(
            linear_gradient("#000000", "#FFFFFF"),
            "linear-gradient(135deg, #000000 0%, #FFFFFF 100%)"
        );
    }

    #[test]
    fn minimal_palette_hsl_values() {
        let tokens = resolve(&StyleConfig::default());
        assert_eq!(tokens.primary_color, "#18181B");
        assert_eq!(tokens.primary_color_hsl, Hsl::new(240, 6, 10));
        assert_eq!(tokens.accent_color_hsl, Hsl::new(221, 83, 53));
        assert_eq!(tokens.background_color_hsl, Hsl::new(0, 0, 100));
    }

    #[test]
    fn gradients_chain_primary_secondary_accent() {
        let tokens = resolve(&StyleConfig::new("y2k", "inter", "pill"));
        assert_eq!(
            tokens.gradient_primary_css,
            "linear-gradient(135deg, #FF6B9D 0%, #C084FC 100%)"
        );
        assert_eq!(
            tokens.gradient_secondary_css,
            "linear-gradient(135deg, #C084FC 0%, #21D3EE 100%)"
        );
    }

    #[test]
    fn malformed_slot_uses_fallback_slot() {
        let broken = PaletteDefinition {
            id: "broken",
            name: "Broken",
            primary: "not-a-color",
            secondary: "#000000",
            accent: "#000000",
            background: "#000000",
            foreground: "#000000",
        };
        let [primary, secondary, ..] =
            resolved_colors(&broken, PaletteRegistry::default_palette());
        assert_eq!(primary.0, "#18181B");
        assert_eq!(secondary.0, "#000000");
    }
}
