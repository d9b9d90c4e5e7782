//! Section type catalog
//!
//! One descriptor per built-in section and per custom block kind. The
//! block-library UI lists [`SectionTypeRegistry::blocks`]; the composition
//! model seeds new blocks from [`SectionTypeRegistry::describe`].

use std::sync::OnceLock;

use serde::Serialize;
use serde_json::json;

use crate::section::{BlockKind, BuiltInSection, ConfigMap, SectionKind};
use crate::shape::{ConfigShape, FieldKind, FieldSpec};

/// Instance cap for the ticking-text block
pub const MARQUEE_MAX_INSTANCES: usize = 8;

/// Catalog entry for one section kind
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDescriptor {
    #[serde(skip)]
    pub kind: SectionKind,
    /// Slug of the built-in section or block kind
    #[serde(rename = "kind")]
    pub slug: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub default_config: ConfigMap,
    pub config_shape: ConfigShape,
    /// Maximum number of instances per storefront, if capped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_instances: Option<usize>,
}

impl SectionDescriptor {
    fn new(
        kind: SectionKind,
        slug: &'static str,
        display_name: &'static str,
        description: &'static str,
        fields: Vec<FieldSpec>,
    ) -> Self {
        let config_shape = ConfigShape::new(fields);
        Self {
            kind,
            slug,
            display_name,
            description,
            default_config: config_shape.defaults(),
            config_shape,
            max_instances: None,
        }
    }

    fn capped(mut self, max: usize) -> Self {
        self.max_instances = Some(max);
        self
    }
}

struct Catalog {
    built_ins: [SectionDescriptor; 6],
    blocks: [SectionDescriptor; 7],
}

static CATALOG: OnceLock<Catalog> = OnceLock::new();

fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(|| Catalog {
        built_ins: BuiltInSection::ALL.map(built_in_descriptor),
        blocks: BlockKind::ALL.map(block_descriptor),
    })
}

/// Static lookup of section and block descriptors
#[derive(Clone, Copy, Debug, Default)]
pub struct SectionTypeRegistry;

impl SectionTypeRegistry {
    /// Descriptor for any section kind
    pub fn describe(kind: SectionKind) -> &'static SectionDescriptor {
        match kind {
            SectionKind::BuiltIn(section) => Self::built_in(section),
            SectionKind::Custom(block) => Self::block(block),
        }
    }

    pub fn built_in(section: BuiltInSection) -> &'static SectionDescriptor {
        &catalog().built_ins[section as usize]
    }

    pub fn block(kind: BlockKind) -> &'static SectionDescriptor {
        &catalog().blocks[kind as usize]
    }

    /// Block library listing, in display order
    pub fn blocks() -> &'static [SectionDescriptor] {
        &catalog().blocks
    }

    pub fn built_ins() -> &'static [SectionDescriptor] {
        &catalog().built_ins
    }

    pub fn max_instances(kind: BlockKind) -> Option<usize> {
        Self::block(kind).max_instances
    }
}

fn text(key: &'static str, label: &'static str, default: &str) -> FieldSpec {
    FieldSpec::new(key, label, FieldKind::Text, json!(default))
}

fn built_in_descriptor(section: BuiltInSection) -> SectionDescriptor {
    let kind = SectionKind::BuiltIn(section);
    let slug = section.slug();
    match section {
        BuiltInSection::Hero => SectionDescriptor::new(
            kind,
            slug,
            "Hero",
            "Full-width headline with a call to action",
            vec![
                text("title", "Headline", "Welcome to our store"),
                text("subtitle", "Subheadline", "Discover our latest collection"),
                text("ctaLabel", "Button label", "Shop now"),
                FieldSpec::new("ctaUrl", "Button link", FieldKind::Url, json!("/products")),
                FieldSpec::new("imageUrl", "Background image", FieldKind::Url, json!("")),
            ],
        ),
        BuiltInSection::FeaturedProducts => SectionDescriptor::new(
            kind,
            slug,
            "Featured products",
            "Grid of highlighted products",
            vec![
                text("title", "Title", "Featured products"),
                FieldSpec::new("productCount", "Products shown", FieldKind::Number, json!(8)),
                FieldSpec::new("showPrices", "Show prices", FieldKind::Bool, json!(true)),
            ],
        ),
        BuiltInSection::Collections => SectionDescriptor::new(
            kind,
            slug,
            "Collections",
            "Links to product collections",
            vec![
                text("title", "Title", "Shop by collection"),
                FieldSpec::new("columns", "Columns", FieldKind::Number, json!(3)),
            ],
        ),
        BuiltInSection::About => SectionDescriptor::new(
            kind,
            slug,
            "About",
            "The story behind the brand",
            vec![
                text("title", "Title", "About us"),
                FieldSpec::new("body", "Text", FieldKind::LongText, json!("")),
                FieldSpec::new("imageUrl", "Image", FieldKind::Url, json!("")),
            ],
        ),
        BuiltInSection::Testimonials => SectionDescriptor::new(
            kind,
            slug,
            "Testimonials",
            "Customer quotes",
            vec![
                text("title", "Title", "What our customers say"),
                FieldSpec::new("items", "Quotes", FieldKind::List, json!([])),
            ],
        ),
        BuiltInSection::Newsletter => SectionDescriptor::new(
            kind,
            slug,
            "Newsletter",
            "Email sign-up form",
            vec![
                text("title", "Title", "Join our newsletter"),
                text("subtitle", "Subtitle", "Be the first to hear about new drops"),
                text("buttonLabel", "Button label", "Subscribe"),
            ],
        ),
    }
}

fn block_descriptor(block: BlockKind) -> SectionDescriptor {
    let kind = SectionKind::Custom(block);
    let slug = block.slug();
    match block {
        BlockKind::RichText => SectionDescriptor::new(
            kind,
            slug,
            "Rich text",
            "Heading and paragraph of free text",
            vec![
                text("title", "Heading", "Our story"),
                FieldSpec::new("body", "Text", FieldKind::LongText, json!("")),
                text("alignment", "Alignment", "left"),
            ],
        ),
        BlockKind::ImageBanner => SectionDescriptor::new(
            kind,
            slug,
            "Image banner",
            "Wide image with overlaid text and button",
            vec![
                text("title", "Title", "New arrivals"),
                text("subtitle", "Subtitle", ""),
                FieldSpec::new("imageUrl", "Image", FieldKind::Url, json!("")),
                text("ctaLabel", "Button label", "Shop now"),
                FieldSpec::new("ctaUrl", "Button link", FieldKind::Url, json!("/products")),
                FieldSpec::new("overlay", "Dark overlay", FieldKind::Bool, json!(true)),
            ],
        ),
        BlockKind::Marquee => SectionDescriptor::new(
            kind,
            slug,
            "Marquee",
            "Scrolling announcement text",
            vec![
                text("title", "Title", "Announcement"),
                text("text", "Text", "Free shipping on all orders"),
                FieldSpec::new("speed", "Speed", FieldKind::Number, json!(40)),
                FieldSpec::new("uppercase", "Uppercase", FieldKind::Bool, json!(true)),
            ],
        )
        .capped(MARQUEE_MAX_INSTANCES),
        BlockKind::Video => SectionDescriptor::new(
            kind,
            slug,
            "Video",
            "Embedded product or brand video",
            vec![
                text("title", "Title", "Watch"),
                FieldSpec::new("videoUrl", "Video link", FieldKind::Url, json!("")),
                FieldSpec::new("autoplay", "Autoplay", FieldKind::Bool, json!(false)),
                FieldSpec::new("muted", "Muted", FieldKind::Bool, json!(true)),
            ],
        ),
        BlockKind::Faq => SectionDescriptor::new(
            kind,
            slug,
            "FAQ",
            "Collapsible questions and answers",
            vec![
                text("title", "Title", "Frequently asked questions"),
                FieldSpec::new(
                    "items",
                    "Questions",
                    FieldKind::List,
                    json!([{
                        "question": "How long does shipping take?",
                        "answer": "3-5 business days."
                    }]),
                ),
            ],
        ),
        BlockKind::Countdown => SectionDescriptor::new(
            kind,
            slug,
            "Countdown",
            "Timer counting down to a sale or launch",
            vec![
                text("title", "Title", "Sale ends soon"),
                text("endsAt", "Ends at", ""),
                FieldSpec::new("highlight", "Highlight color", FieldKind::Color, json!("")),
            ],
        ),
        BlockKind::ImageGallery => SectionDescriptor::new(
            kind,
            slug,
            "Image gallery",
            "Grid of images",
            vec![
                text("title", "Title", "Gallery"),
                FieldSpec::new("images", "Images", FieldKind::List, json!([])),
                FieldSpec::new("columns", "Columns", FieldKind::Number, json!(3)),
            ],
        ),
    }
}
