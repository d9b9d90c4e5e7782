//! Section descriptors
//!
//! A [`Section`] is one orderable, visibility-toggleable unit of a storefront
//! page: either one of the fixed built-in kinds or a merchant-added custom
//! block. Persisted form:
//!
//! ```json
//! { "id": "block-3", "type": "custom", "blockKind": "marquee", "visible": true, "config": {} }
//! ```

use std::fmt::{self, Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CompositionError;

/// Per-section configuration payload
pub type ConfigMap = Map<String, Value>;

/// Stable section identifier, unique within a composition
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for SectionId {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl Display for SectionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Fixed storefront sections, created once and never removed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BuiltInSection {
    Hero,
    FeaturedProducts,
    Collections,
    About,
    Testimonials,
    Newsletter,
}

impl BuiltInSection {
    /// Initial page order
    pub const ALL: [BuiltInSection; 6] = [
        BuiltInSection::Hero,
        BuiltInSection::FeaturedProducts,
        BuiltInSection::Collections,
        BuiltInSection::About,
        BuiltInSection::Testimonials,
        BuiltInSection::Newsletter,
    ];

    /// Stable slug, also used as the section id
    pub fn slug(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::FeaturedProducts => "featured-products",
            Self::Collections => "collections",
            Self::About => "about",
            Self::Testimonials => "testimonials",
            Self::Newsletter => "newsletter",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.slug() == slug)
    }
}

impl Display for BuiltInSection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Closed catalog of merchant-addable block kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    RichText,
    ImageBanner,
    /// Ticking announcement text
    Marquee,
    Video,
    Faq,
    Countdown,
    ImageGallery,
}

impl BlockKind {
    pub const ALL: [BlockKind; 7] = [
        BlockKind::RichText,
        BlockKind::ImageBanner,
        BlockKind::Marquee,
        BlockKind::Video,
        BlockKind::Faq,
        BlockKind::Countdown,
        BlockKind::ImageGallery,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Self::RichText => "rich-text",
            Self::ImageBanner => "image-banner",
            Self::Marquee => "marquee",
            Self::Video => "video",
            Self::Faq => "faq",
            Self::Countdown => "countdown",
            Self::ImageGallery => "image-gallery",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.slug() == slug)
    }
}

impl Display for BlockKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// What a section is: a built-in kind or a custom block of some kind
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    BuiltIn(BuiltInSection),
    Custom(BlockKind),
}

impl SectionKind {
    pub fn is_custom(self) -> bool {
        matches!(self, Self::Custom(_))
    }

    pub fn block_kind(self) -> Option<BlockKind> {
        match self {
            Self::Custom(kind) => Some(kind),
            Self::BuiltIn(_) => None,
        }
    }

    /// Value of the persisted `type` field
    pub fn type_name(self) -> &'static str {
        match self {
            Self::BuiltIn(section) => section.slug(),
            Self::Custom(_) => CUSTOM_TYPE,
        }
    }
}

impl Display for SectionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::BuiltIn(section) => write!(f, "{section}"),
            Self::Custom(kind) => write!(f, "{CUSTOM_TYPE}/{kind}"),
        }
    }
}

const CUSTOM_TYPE: &str = "custom";

/// One entry of a storefront page
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "RawSection", try_from = "RawSection")]
pub struct Section {
    pub id: SectionId,
    pub kind: SectionKind,
    pub visible: bool,
    pub config: ConfigMap,
}

impl Section {
    pub fn new(id: SectionId, kind: SectionKind, config: ConfigMap) -> Self {
        Self {
            id,
            kind,
            visible: true,
            config,
        }
    }

    pub fn is_custom(&self) -> bool {
        self.kind.is_custom()
    }

    pub fn block_kind(&self) -> Option<BlockKind> {
        self.kind.block_kind()
    }

    /// Merchant-facing title, when the config carries one
    pub fn title(&self) -> Option<&str> {
        self.config.get("title").and_then(Value::as_str)
    }
}

/// Persisted layout of a [`Section`]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSection {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    block_kind: Option<String>,
    #[serde(default = "default_visible")]
    visible: bool,
    #[serde(default)]
    config: ConfigMap,
}

fn default_visible() -> bool {
    true
}

impl From<Section> for RawSection {
    fn from(section: Section) -> Self {
        Self {
            id: section.id.0,
            kind: section.kind.type_name().to_string(),
            block_kind: section.kind.block_kind().map(|k| k.slug().to_string()),
            visible: section.visible,
            config: section.config,
        }
    }
}

impl TryFrom<RawSection> for Section {
    type Error = CompositionError;

    fn try_from(raw: RawSection) -> Result<Self, Self::Error> {
        let kind = if raw.kind == CUSTOM_TYPE {
            let slug = raw
                .block_kind
                .ok_or_else(|| CompositionError::MissingBlockKind { id: raw.id.clone() })?;
            let block = BlockKind::from_slug(&slug).ok_or(CompositionError::UnknownKind(slug))?;
            SectionKind::Custom(block)
        } else {
            let section = BuiltInSection::from_slug(&raw.kind)
                .ok_or_else(|| CompositionError::UnknownKind(raw.kind.clone()))?;
            SectionKind::BuiltIn(section)
        };

        Ok(Self {
            id: SectionId(raw.id),
            kind,
            visible: raw.visible,
            config: raw.config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn custom_section_persisted_layout() {
        let mut config = ConfigMap::new();
        config.insert("title".into(), json!("Free shipping"));
        let section = Section::new(
            SectionId::new("block-1"),
            SectionKind::Custom(BlockKind::Marquee),
            config,
        );

        let value = serde_json::to_value(&section).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "block-1",
                "type": "custom",
                "blockKind": "marquee",
                "visible": true,
                "config": { "title": "Free shipping" }
            })
        );
        let back: Section = serde_json::from_value(value).unwrap();
        assert_eq!(back, section);
        assert_eq!(back.title(), Some("Free shipping"));
    }

    #[test]
    fn built_in_section_omits_block_kind() {
        let section = Section::new(
            SectionId::new("hero"),
            SectionKind::BuiltIn(BuiltInSection::Hero),
            ConfigMap::new(),
        );
        let value = serde_json::to_value(&section).unwrap();
        assert_eq!(value["type"], json!("hero"));
        assert!(value.get("blockKind").is_none());
    }

    #[test]
    fn unknown_kinds_are_rejected() {
        let err = serde_json::from_value::<Section>(json!({
            "id": "block-9", "type": "custom", "blockKind": "hologram"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("hologram"));

        let unknown_type = json!({ "id": "x", "type": "carousel" });
        assert!(serde_json::from_value::<Section>(unknown_type).is_err());
        let custom_without_kind = json!({ "id": "x", "type": "custom" });
        assert!(serde_json::from_value::<Section>(custom_without_kind).is_err());
    }

    #[test]
    fn missing_visibility_defaults_to_visible() {
        let section: Section =
            serde_json::from_value(json!({ "id": "about", "type": "about" })).unwrap();
        assert!(section.visible);
        assert!(section.config.is_empty());
    }

    #[test]
    fn slugs_round_trip() {
        for kind in BlockKind::ALL {
            assert_eq!(BlockKind::from_slug(kind.slug()), Some(kind));
            assert_eq!(
                serde_json::to_value(kind).unwrap(),
                serde_json::Value::String(kind.slug().to_string())
            );
        }
        for section in BuiltInSection::ALL {
            assert_eq!(BuiltInSection::from_slug(section.slug()), Some(section));
        }
    }
}
