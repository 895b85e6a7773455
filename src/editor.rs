//! Editor module.
//! Walks the operator through one template entry, then merges it into templates.json.
//! The store is only written after every field has been collected, so an aborted run
//! leaves the file untouched.

use anyhow::{Result, bail};
use std::path::Path;

use crate::prompt::{Prompter, ask_int, ask_required, ask_text};
use crate::store::TemplateStore;
use crate::template::{
    DEFAULT_BACKGROUND_IMAGE, DEFAULT_MAX_FONT, DEFAULT_NAME_FONT, DEFAULT_POSITION_FONT,
    DEFAULT_SECTION, DEFAULT_STRUCTURE, DEFAULT_TYPE, FontSizes, TemplateKind, TemplateRecord,
    parse_flag, parse_structure,
};

const FONT_GUIDANCE: &str =
    "For nameFont/positionFont: enter 0 if this template has no name/position fields.";

/// Asks for every field and assembles the record. Returns `(name, record)`.
pub fn collect_entry(prompter: &mut dyn Prompter) -> Result<(String, TemplateRecord)> {
    let Some(name) = ask_required(prompter, "Template name (exact display name)")? else {
        bail!("Name is required.");
    };

    let kind = TemplateKind::from_input(&ask_text(prompter, "Type", DEFAULT_TYPE)?);

    // Slides: section is fixed, structure is asked. Covers: the reverse.
    let layout = match kind {
        TemplateKind::Slide => {
            let answer = ask_text(
                prompter,
                "Structure (comma-separated layer names)",
                DEFAULT_STRUCTURE,
            )?;
            Layout::Slide(parse_structure(&answer))
        }
        TemplateKind::Cover => Layout::Cover(ask_text(
            prompter,
            "Section (all or opinion. Only relevant for covers)",
            DEFAULT_SECTION,
        )?),
    };

    let Some(max_font) = ask_int(prompter, "maxFont", Some(DEFAULT_MAX_FONT), false)? else {
        bail!("maxFont is required.");
    };

    prompter.say(FONT_GUIDANCE)?;
    let name_font = ask_int(prompter, "nameFont", Some(DEFAULT_NAME_FONT), true)?;
    let position_font = ask_int(prompter, "positionFont", Some(DEFAULT_POSITION_FONT), true)?;

    let background_image = parse_flag(&ask_text(
        prompter,
        "Background image? (y/n)",
        DEFAULT_BACKGROUND_IMAGE,
    )?);

    let fonts = FontSizes {
        max_font,
        name_font: name_font.unwrap_or(0),
        position_font: position_font.unwrap_or(0),
    };
    let record = match layout {
        Layout::Slide(structure) => TemplateRecord::slide(structure, fonts, background_image),
        Layout::Cover(section) => TemplateRecord::cover(section, fonts, background_image),
    };

    Ok((name, record))
}

enum Layout {
    Slide(Vec<String>),
    Cover(String),
}

/// Full run: collect, load the store, overwrite the entry, save, report.
pub fn run(prompter: &mut dyn Prompter, store_path: &Path) -> Result<()> {
    prompter.say("Add or update a template in templates.json\n")?;

    let (name, record) = collect_entry(prompter)?;

    let mut store = TemplateStore::load(store_path)?;
    store.upsert(&name, &record)?;
    store.save()?;
    log::debug!("Store now holds {} templates", store.len());

    let file_name = store
        .path()
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| store.path().display().to_string());
    prompter.say(&format!("\nUpdated {} with template \"{}\".", file_name, name))?;
    Ok(())
}
