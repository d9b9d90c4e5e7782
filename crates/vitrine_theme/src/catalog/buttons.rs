//! Button corner shapes

use serde::Serialize;

/// A named button shape and its corner radius in pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ButtonShapeDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub radius: f32,
}

const SHAPES: [ButtonShapeDefinition; 3] = [
    ButtonShapeDefinition {
        id: "sharp",
        name: "Sharp",
        radius: 0.0,
    },
    ButtonShapeDefinition {
        id: "rounded",
        name: "Rounded",
        radius: 8.0,
    },
    ButtonShapeDefinition {
        id: "pill",
        name: "Pill",
        radius: 9999.0,
    },
];

/// Static button-shape catalog
#[derive(Clone, Copy, Debug, Default)]
pub struct ButtonShapeRegistry;

impl ButtonShapeRegistry {
    pub const DEFAULT_ID: &'static str = "rounded";

    pub fn all() -> &'static [ButtonShapeDefinition] {
        &SHAPES
    }

    pub fn get(id: &str) -> Option<&'static ButtonShapeDefinition> {
        SHAPES.iter().find(|s| s.id == id)
    }

    pub fn default_shape() -> &'static ButtonShapeDefinition {
        &SHAPES[1]
    }

    pub fn resolve(id: &str) -> &'static ButtonShapeDefinition {
        Self::get(id).unwrap_or_else(|| {
            tracing::warn!(button_shape_id = id, "unknown button shape, using default");
            Self::default_shape()
        })
    }
}
