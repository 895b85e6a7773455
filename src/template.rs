//! Template module.
//! One entry of templates.json: a named layout with font sizes and,
//! for slides, its layer structure.
//! Also holds the rules that turn raw operator answers into record fields
//! (type fallback, structure splitting, yes/no flags).

use serde::Serialize;

pub const DEFAULT_TYPE: &str = "slide";
pub const DEFAULT_STRUCTURE: &str = "Quote 1";
pub const DEFAULT_SECTION: &str = "opinion";
pub const SLIDE_SECTION: &str = "all";
pub const DEFAULT_MAX_FONT: i64 = 80;
pub const DEFAULT_NAME_FONT: i64 = 60;
pub const DEFAULT_POSITION_FONT: i64 = 50;
pub const DEFAULT_BACKGROUND_IMAGE: &str = "n";

/// Template layout kind
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    /// Quote slide built from one or more layers
    Slide,
    /// Section cover
    Cover,
}

impl TemplateKind {
    /// Case-insensitive parse. Anything unrecognised falls back to `Slide`.
    pub fn from_input(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "cover" => TemplateKind::Cover,
            "slide" => TemplateKind::Slide,
            other => {
                log::info!("Unrecognised template type '{}', using slide", other);
                TemplateKind::Slide
            }
        }
    }
}

/// A single templates.json entry. Keyed by display name in the store, so the name is not a field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRecord {
    #[serde(rename = "type")]
    pub kind: TemplateKind,
    pub section: String,
    /// Layer names, slides only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structure: Option<Vec<String>>,
    pub max_font: i64,
    /// 0 means the template has no name field
    pub name_font: i64,
    /// 0 means the template has no position field
    pub position_font: i64,
    pub background_image: bool,
}

/// Font sizes shared by both template kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontSizes {
    pub max_font: i64,
    pub name_font: i64,
    pub position_font: i64,
}

impl TemplateRecord {
    /// Slide record. Section is always "all"; an empty structure becomes `["Quote 1"]`.
    pub fn slide(structure: Vec<String>, fonts: FontSizes, background_image: bool) -> Self {
        let structure = if structure.is_empty() {
            vec![DEFAULT_STRUCTURE.to_string()]
        } else {
            structure
        };

        Self {
            kind: TemplateKind::Slide,
            section: SLIDE_SECTION.to_string(),
            structure: Some(structure),
            max_font: fonts.max_font,
            name_font: fonts.name_font,
            position_font: fonts.position_font,
            background_image,
        }
    }

    /// Cover record. Covers never carry a structure.
    pub fn cover(section: String, fonts: FontSizes, background_image: bool) -> Self {
        Self {
            kind: TemplateKind::Cover,
            section,
            structure: None,
            max_font: fonts.max_font,
            name_font: fonts.name_font,
            position_font: fonts.position_font,
            background_image,
        }
    }
}

/// Splits "Quote 1, Quote 2" into layer names, dropping blank segments.
pub fn parse_structure(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// y / yes / true / 1 (any case) are true, everything else false.
pub fn parse_flag(input: &str) -> bool {
    matches!(
        input.trim().to_lowercase().as_str(),
        "y" | "yes" | "true" | "1"
    )
}
