//! Resolved style tokens
//!
//! [`StyleTokenSet`] is the only theming data skins are allowed to read.
//! Field names are part of the skin contract and serialize in camelCase.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use vitrine_core::Hsl;

/// Token keys for dynamic access by skins and host bindings
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum StyleToken {
    PrimaryColor,
    PrimaryColorHsl,
    SecondaryColor,
    SecondaryColorHsl,
    AccentColor,
    AccentColorHsl,
    BackgroundColor,
    BackgroundColorHsl,
    ForegroundColor,
    ForegroundColorHsl,
    GradientPrimaryCss,
    GradientSecondaryCss,
    FontStack,
    ButtonCornerRadius,
}

impl StyleToken {
    /// Every token, in contract order
    pub const ALL: [StyleToken; 14] = [
        StyleToken::PrimaryColor,
        StyleToken::PrimaryColorHsl,
        StyleToken::SecondaryColor,
        StyleToken::SecondaryColorHsl,
        StyleToken::AccentColor,
        StyleToken::AccentColorHsl,
        StyleToken::BackgroundColor,
        StyleToken::BackgroundColorHsl,
        StyleToken::ForegroundColor,
        StyleToken::ForegroundColorHsl,
        StyleToken::GradientPrimaryCss,
        StyleToken::GradientSecondaryCss,
        StyleToken::FontStack,
        StyleToken::ButtonCornerRadius,
    ];

    /// Contract field name (matches the serialized key)
    pub fn field_name(self) -> &'static str {
        match self {
            Self::PrimaryColor => "primaryColor",
            Self::PrimaryColorHsl => "primaryColorHsl",
            Self::SecondaryColor => "secondaryColor",
            Self::SecondaryColorHsl => "secondaryColorHsl",
            Self::AccentColor => "accentColor",
            Self::AccentColorHsl => "accentColorHsl",
            Self::BackgroundColor => "backgroundColor",
            Self::BackgroundColorHsl => "backgroundColorHsl",
            Self::ForegroundColor => "foregroundColor",
            Self::ForegroundColorHsl => "foregroundColorHsl",
            Self::GradientPrimaryCss => "gradientPrimaryCss",
            Self::GradientSecondaryCss => "gradientSecondaryCss",
            Self::FontStack => "fontStack",
            Self::ButtonCornerRadius => "buttonCornerRadius",
        }
    }

    /// CSS custom property name, without the `--` prefix
    pub fn css_variable(self) -> &'static str {
        match self {
            Self::PrimaryColor => "primary",
            Self::PrimaryColorHsl => "primary-hsl",
            Self::SecondaryColor => "secondary",
            Self::SecondaryColorHsl => "secondary-hsl",
            Self::AccentColor => "accent",
            Self::AccentColorHsl => "accent-hsl",
            Self::BackgroundColor => "background",
            Self::BackgroundColorHsl => "background-hsl",
            Self::ForegroundColor => "foreground",
            Self::ForegroundColorHsl => "foreground-hsl",
            Self::GradientPrimaryCss => "gradient-primary",
            Self::GradientSecondaryCss => "gradient-secondary",
            Self::FontStack => "font-body",
            Self::ButtonCornerRadius => "radius-button",
        }
    }

    pub fn from_field_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.field_name() == name)
    }
}

/// Complete, renderer-facing result of theme resolution
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleTokenSet {
    pub primary_color: String,
    pub primary_color_hsl: Hsl,
    pub secondary_color: String,
    pub secondary_color_hsl: Hsl,
    pub accent_color: String,
    pub accent_color_hsl: Hsl,
    pub background_color: String,
    pub background_color_hsl: Hsl,
    pub foreground_color: String,
    pub foreground_color_hsl: Hsl,
    pub gradient_primary_css: String,
    pub gradient_secondary_css: String,
    pub font_stack: String,
    /// Button corner radius in pixels
    pub button_corner_radius: f32,
}

impl StyleTokenSet {
    /// Get a token's value in its string (CSS-ready) form
    pub fn value(&self, token: StyleToken) -> String {
        match token {
            StyleToken::PrimaryColor => self.primary_color.clone(),
            StyleToken::PrimaryColorHsl => self.primary_color_hsl.to_string(),
            StyleToken::SecondaryColor => self.secondary_color.clone(),
            StyleToken::SecondaryColorHsl => self.secondary_color_hsl.to_string(),
            StyleToken::AccentColor => self.accent_color.clone(),
            StyleToken::AccentColorHsl => self.accent_color_hsl.to_string(),
            StyleToken::BackgroundColor => self.background_color.clone(),
            StyleToken::BackgroundColorHsl => self.background_color_hsl.to_string(),
            StyleToken::ForegroundColor => self.foreground_color.clone(),
            StyleToken::ForegroundColorHsl => self.foreground_color_hsl.to_string(),
            StyleToken::GradientPrimaryCss => self.gradient_primary_css.clone(),
            StyleToken::GradientSecondaryCss => self.gradient_secondary_css.clone(),
            StyleToken::FontStack => self.font_stack.clone(),
            StyleToken::ButtonCornerRadius => format!("{}px", self.button_corner_radius),
        }
    }

    /// Generate a CSS variable map from all tokens.
    ///
    /// Keys are variable names without the `--` prefix. The map is ordered so
    /// that generated stylesheets are stable across runs.
    pub fn css_variables(&self) -> BTreeMap<&'static str, String> {
        StyleToken::ALL
            .into_iter()
            .map(|token| (token.css_variable(), self.value(token)))
            .collect()
    }

    /// Render a CSS rule declaring every token as a custom property
    ///
    /// ```ignore
    /// let css = tokens.to_css_rule(":root");
    /// // :root {
    /// //   --accent: #2563EB;
    /// //   ...
    /// // }
    /// ```
    pub fn to_css_rule(&self, selector: &str) -> String {
        let mut css = format!("{selector} {{\n");
        for (name, value) in self.css_variables() {
            css.push_str("  --");
            css.push_str(name);
            css.push_str(": ");
            css.push_str(&value);
            css.push_str(";\n");
        }
        css.push('}');
        css
    }
}
