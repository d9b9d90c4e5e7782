//! Vitrine Theme System
//!
//! Turns a merchant's abstract style choices into concrete, consistently
//! named style tokens and publishes them to a storefront view.
//!
//! # Overview
//!
//! - **Catalogs**: palettes, fonts and button shapes, compiled in
//! - **Resolution**: [`StyleConfig`] -> [`StyleTokenSet`], pure and total
//! - **Publication**: [`ThemeApplier`] holds the tokens renderers read
//!
//! # Quick Start
//!
//! ```rust
//! use vitrine_theme::{resolve, StyleConfig, ThemeApplier};
//!
//! let applier = ThemeApplier::new();
//! let view = applier.mount();
//!
//! view.apply(resolve(&StyleConfig::new("y2k", "inter", "pill")));
//! assert_eq!(view.current().unwrap().button_corner_radius, 9999.0);
//!
//! drop(view);
//! assert!(applier.current().is_none());
//! ```
//!
//! # Binding tokens
//!
//! Tokens are plain data. Hosts bind them however suits the renderer, for
//! example as CSS custom properties via [`StyleTokenSet::to_css_rule`].

pub mod catalog;
pub mod config;
pub mod resolver;
pub mod state;
pub mod tokens;

pub use catalog::{
    ButtonShapeDefinition, ButtonShapeRegistry, FontCategory, FontDefinition, FontRegistry,
    PaletteDefinition, PaletteRegistry,
};
pub use config::StyleConfig;
pub use resolver::{linear_gradient, resolve, ThemeResolver};
pub use state::{ThemeApplier, ThemeScope};
pub use tokens::{StyleToken, StyleTokenSet};
