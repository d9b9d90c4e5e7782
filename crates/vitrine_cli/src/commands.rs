//! Subcommand implementations

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use vitrine_app::{
    EditorConfig, EditorSession, JsonFileStore, Snapshot, SnapshotStore, CONFIG_FILE_NAME,
};
use vitrine_compose::{BlockKind, CompositionModel, OutlineSkin, SectionTypeRegistry};
use vitrine_theme::{resolve, ButtonShapeRegistry, FontRegistry, PaletteRegistry, StyleConfig};

use crate::Command;

pub fn run(
    command: Command,
    config_path: &Path,
    config: &EditorConfig,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Command::Palettes { json } => list_palettes(json, out),
        Command::Fonts { json } => list_fonts(json, out),
        Command::Blocks { json } => list_blocks(json, out),
        Command::Resolve {
            palette,
            font,
            button_shape,
            css,
        } => {
            let tokens = resolve(&StyleConfig::new(palette, font, button_shape));
            if css {
                writeln!(out, "{}", tokens.to_css_rule(":root"))?;
            } else {
                writeln!(out, "{}", serde_json::to_string_pretty(&tokens)?)?;
            }
            Ok(())
        }
        Command::Init { force } => init(config_path, force, out),
        Command::Show { preview, json } => show(config, preview, json, out),
        Command::Reorder { from, to } => {
            let mut session = open_session(config)?;
            let len = session.model().len();
            if from >= len || to >= len {
                bail!("index out of range: the storefront has {len} sections");
            }
            session.reorder(from, to);
            writeln!(out, "moved {} to position {to}", session.model().sections()[to].id)?;
            Ok(())
        }
        Command::Toggle { id, visible } => {
            let mut session = open_session(config)?;
            let current = session
                .model()
                .get(&id)
                .map(|s| s.visible)
                .ok_or_else(|| anyhow!("no section with id '{id}'"))?;
            let visible = visible.unwrap_or(!current);
            session.set_visible(&id, visible);
            writeln!(out, "{id} is now {}", if visible { "visible" } else { "hidden" })?;
            Ok(())
        }
        Command::AddBlock { kind, title } => {
            let kind = parse_block_kind(&kind)?;
            let mut session = open_session(config)?;
            let id = session.add_block(kind, &title)?;
            writeln!(out, "added {kind} block {id}")?;
            Ok(())
        }
        Command::RemoveBlock { id } => {
            let mut session = open_session(config)?;
            if session.model().get(&id).is_none() {
                bail!("no section with id '{id}'");
            }
            session.remove_block(&id)?;
            writeln!(out, "removed {id}")?;
            Ok(())
        }
        Command::SetStyle {
            palette,
            font,
            button_shape,
        } => set_style(config, palette, font, button_shape, out),
        Command::Css { selector } => {
            let session = open_session(config)?;
            writeln!(out, "{}", session.tokens().to_css_rule(&selector))?;
            Ok(())
        }
    }
}

/// Open the configured snapshot. An unreadable snapshot is an error here
/// rather than a fresh start, so a CLI edit never overwrites it.
fn open_session(config: &EditorConfig) -> Result<EditorSession> {
    let store = JsonFileStore::new(&config.store.path);
    let snapshot = store
        .load()
        .with_context(|| format!("Failed to load {}", store.path().display()))?
        .unwrap_or_else(|| Snapshot::new(config.style.clone(), CompositionModel::new()));
    Ok(EditorSession::from_snapshot(
        Box::new(store),
        snapshot,
        config.drag,
    ))
}

fn parse_block_kind(slug: &str) -> Result<BlockKind> {
    BlockKind::from_slug(slug).ok_or_else(|| {
        let known: Vec<_> = BlockKind::ALL.iter().map(|k| k.slug()).collect();
        anyhow!("unknown block kind '{slug}' (expected one of: {})", known.join(", "))
    })
}

fn list_palettes(json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(PaletteRegistry::all())?)?;
        return Ok(());
    }
    for palette in PaletteRegistry::all() {
        let marker = if palette.id == PaletteRegistry::DEFAULT_ID { "*" } else { " " };
        writeln!(
            out,
            "{marker} {:<12} {:<14} {}",
            palette.id,
            palette.name,
            palette.colors().join(" ")
        )?;
    }
    Ok(())
}

fn list_fonts(json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(FontRegistry::all())?)?;
        return Ok(());
    }
    for font in FontRegistry::all() {
        let marker = if font.id == FontRegistry::DEFAULT_ID { "*" } else { " " };
        writeln!(
            out,
            "{marker} {:<16} {:<18} {:<11} {}",
            font.id,
            font.name,
            font.category.to_string(),
            font.stack
        )?;
    }
    Ok(())
}

fn list_blocks(json: bool, out: &mut impl Write) -> Result<()> {
    let blocks = SectionTypeRegistry::blocks();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(blocks)?)?;
        return Ok(());
    }
    for block in blocks {
        let cap = block
            .max_instances
            .map(|max| format!(" (max {max})"))
            .unwrap_or_default();
        writeln!(
            out,
            "{:<15} {}{cap}: {}",
            block.slug, block.display_name, block.description
        )?;
    }
    Ok(())
}

fn init(config_path: &Path, force: bool, out: &mut impl Write) -> Result<()> {
    let target = if config_path.is_dir() {
        config_path.join(CONFIG_FILE_NAME)
    } else {
        config_path.to_path_buf()
    };
    if target.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            target.display()
        );
    }

    let defaults = EditorConfig::default();
    if let Some(dir) = target.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    fs::write(&target, defaults.to_toml()?)
        .with_context(|| format!("Failed to write {}", target.display()))?;
    writeln!(out, "created {}", target.display())?;

    let config = EditorConfig::load(&target)?;
    let store = JsonFileStore::new(&config.store.path);
    if store.path().exists() && !force {
        writeln!(out, "kept existing {}", store.path().display())?;
        return Ok(());
    }
    store.save(&Snapshot::new(config.style, CompositionModel::new()))?;
    writeln!(out, "created {}", store.path().display())?;
    Ok(())
}

fn show(config: &EditorConfig, preview: bool, json: bool, out: &mut impl Write) -> Result<()> {
    let session = open_session(config)?;
    if json {
        writeln!(out, "{}", session.snapshot().to_json()?)?;
        return Ok(());
    }
    if preview {
        for line in session.render(&mut OutlineSkin) {
            writeln!(out, "{line}")?;
        }
        return Ok(());
    }

    let style = session.style_config();
    writeln!(
        out,
        "style: palette={} font={} buttons={}",
        style.palette_id, style.font_id, style.button_shape_id
    )?;
    for (index, section) in session.model().sections().iter().enumerate() {
        let state = if section.visible { "shown " } else { "hidden" };
        writeln!(
            out,
            "{index:>2} {state} {:<20} {:<22} {}",
            section.id.as_str(),
            section.kind.to_string(),
            section.title().unwrap_or("")
        )?;
    }
    Ok(())
}

fn set_style(
    config: &EditorConfig,
    palette: Option<String>,
    font: Option<String>,
    button_shape: Option<String>,
    out: &mut impl Write,
) -> Result<()> {
    if palette.is_none() && font.is_none() && button_shape.is_none() {
        bail!("nothing to change: pass --palette, --font or --button-shape");
    }
    check_known("palette", palette.as_deref(), |id| PaletteRegistry::get(id).is_some())?;
    check_known("font", font.as_deref(), |id| FontRegistry::get(id).is_some())?;
    check_known("button shape", button_shape.as_deref(), |id| {
        ButtonShapeRegistry::get(id).is_some()
    })?;

    let mut session = open_session(config)?;
    let mut style = session.style_config().clone();
    if let Some(palette) = palette {
        style = style.with_palette(palette);
    }
    if let Some(font) = font {
        style = style.with_font(font);
    }
    if let Some(shape) = button_shape {
        style = style.with_button_shape(shape);
    }

    if session.set_style(style) {
        writeln!(out, "style updated")?;
    } else {
        writeln!(out, "style unchanged")?;
    }
    Ok(())
}

fn check_known(what: &str, id: Option<&str>, known: impl Fn(&str) -> bool) -> Result<()> {
    match id {
        Some(id) if !known(id) => bail!("unknown {what} '{id}'"),
        _ => Ok(()),
    }
}
