//! Renderer contract
//!
//! Skins paint sections; this crate only decides which sections get painted,
//! in what order, and with what inputs.

use vitrine_theme::StyleTokenSet;

use crate::model::CompositionModel;
use crate::registry::{SectionDescriptor, SectionTypeRegistry};
use crate::section::{ConfigMap, SectionId, SectionKind};

/// Identifies the section being rendered
#[derive(Clone, Copy, Debug)]
pub struct RenderKey<'a> {
    pub id: &'a SectionId,
    pub kind: SectionKind,
    pub descriptor: &'static SectionDescriptor,
}

/// A visual skin that turns one section into some output
pub trait Skin {
    type Output;

    /// `config` already has defaults filled in for missing or mistyped fields
    fn render(
        &mut self,
        key: RenderKey<'_>,
        config: &ConfigMap,
        tokens: &StyleTokenSet,
    ) -> Self::Output;
}

/// Render every visible section in order, one skin call per section
pub fn render_page<S: Skin>(
    model: &CompositionModel,
    tokens: &StyleTokenSet,
    skin: &mut S,
) -> Vec<S::Output> {
    model
        .visible_sections()
        .map(|section| {
            let descriptor = SectionTypeRegistry::describe(section.kind);
            let config = descriptor.config_shape.fill_defaults(&section.config);
            let key = RenderKey {
                id: &section.id,
                kind: section.kind,
                descriptor,
            };
            skin.render(key, &config, tokens)
        })
        .collect()
}

/// Plain-text skin: one line per section
#[derive(Clone, Copy, Debug, Default)]
pub struct OutlineSkin;

impl Skin for OutlineSkin {
    type Output = String;

    fn render(
        &mut self,
        key: RenderKey<'_>,
        config: &ConfigMap,
        tokens: &StyleTokenSet,
    ) -> String {
        let title = config
            .get("title")
            .and_then(|v| v.as_str())
            .unwrap_or(key.descriptor.display_name);
        format!(
            "[{}] {} \"{}\" ({}, {})",
            key.id, key.kind, title, tokens.primary_color, tokens.font_stack
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::BlockKind;
    use vitrine_theme::{resolve, StyleConfig};

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(String, ConfigMap)>,
    }

    impl Skin for Recorder {
        type Output = ();

        fn render(&mut self, key: RenderKey<'_>, config: &ConfigMap, _: &StyleTokenSet) {
            self.calls.push((key.id.to_string(), config.clone()));
        }
    }

    #[test]
    fn hidden_sections_are_skipped() {
        let model = CompositionModel::new()
            .set_visible("about", false)
            .reorder(5, 0);
        let tokens = resolve(&StyleConfig::default());
        let mut skin = Recorder::default();
        render_page(&model, &tokens, &mut skin);

        let ids: Vec<_> = skin.calls.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(
            ids,
            ["newsletter", "hero", "featured-products", "collections", "testimonials"]
        );
    }

    #[test]
    fn blanked_config_is_filled_before_rendering() {
        let (model, id) = CompositionModel::new()
            .add_block(BlockKind::Countdown, "Flash sale")
            .unwrap();
        let mut broken = ConfigMap::new();
        broken.insert("endsAt".into(), serde_json::Value::Null);
        let model = model.update_block_config(&id, &broken);

        let tokens = resolve(&StyleConfig::default());
        let mut skin = Recorder::default();
        render_page(&model, &tokens, &mut skin);

        let (_, config) = skin.calls.last().unwrap();
        assert_eq!(config["title"], "Flash sale");
        assert_eq!(config["endsAt"], "");
    }

    #[test]
    fn outline_skin_names_title_and_tokens() {
        let (model, _) = CompositionModel::new()
            .add_block(BlockKind::Marquee, "Free shipping")
            .unwrap();
        let tokens = resolve(&StyleConfig::default().with_palette("streetwear"));
        let lines = render_page(&model, &tokens, &mut OutlineSkin);
        let last = lines.last().unwrap();
        assert!(last.starts_with("[block-1] custom/marquee \"Free shipping\""));
        assert!(last.contains("#DD2626"));
    }
}
