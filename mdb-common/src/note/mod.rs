//! Conversion of a [`MediaTypeModel`] into markdown note content
//!
//! # Note layout
//! A note is a YAML front matter block holding the model's metadata, followed by an optional
//! body rendered from a per media type [template](template).
//!
//! ```text
//! ---
//! type: movie
//! title: Inception
//! year: 2010
//! ...
//! ---
//! <rendered body template>
//! ```
use chrono::NaiveDate;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use std::fmt::Write;

use crate::model::MediaTypeModel;

pub use self::error::NoteError;
pub use self::mapping::{apply_mappings, PropertyMapping, PropertyMappingOption};
pub use self::settings::NoteSettings;
pub use self::template::render_template;

pub mod error;
pub mod mapping;
pub mod settings;
pub mod template;

/// Metadata keys holding ISO dates that get reformatted with the user's date format.
const DATE_FIELDS: [&str; 4] = ["premiere", "airedFrom", "airedTo", "releaseDate"];

static ILLEGAL_FILE_NAME_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\\,#%&{}/*<>$'":@\x{2023}|?]"#).unwrap());

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static TRAILING_EMPTY_GROUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\(\s*\)\s*$").unwrap());

/// The rendered output, ready to be written to disk by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// File name including the `.md` extension.
    pub file_name: String,
    pub content: String,
}

#[derive(Debug, Clone, Default)]
pub struct NoteRenderer {
    settings: NoteSettings,
}

impl NoteRenderer {
    #[must_use]
    pub const fn new(settings: NoteSettings) -> Self {
        Self { settings }
    }

    pub const fn settings(&self) -> &NoteSettings {
        &self.settings
    }

    pub fn render(&self, model: &MediaTypeModel) -> Result<Note, NoteError> {
        let media_type = model.media_type();

        let mut metadata = model.metadata();
        self.format_dates(&mut metadata);

        let front_matter = apply_mappings(metadata.clone(), self.settings.mappings(media_type));
        let yaml = serde_yaml::to_string(&Value::Object(front_matter))?;

        let body = render_template(self.settings.template(media_type), &metadata);

        let mut content = String::with_capacity(yaml.len() + body.len() + 8);
        content.push_str("---\n");
        content.push_str(&yaml);
        if !yaml.ends_with('\n') {
            content.push('\n');
        }
        content.push_str("---\n");
        content.push_str(&body);

        let file_name = self.file_name(model, &metadata);
        debug!("Rendered note {file_name} ({} bytes)", content.len());

        Ok(Note { file_name, content })
    }

    /// Renders the file name template of the model's media type and strips characters
    /// that are not allowed in file names.
    pub fn file_name(&self, model: &MediaTypeModel, metadata: &Map<String, Value>) -> String {
        let template = self.settings.file_name_template(model.media_type());
        let rendered = render_template(template, metadata);

        let cleaned = ILLEGAL_FILE_NAME_CHARS.replace_all(&rendered, "");
        // An unset year leaves "Title ()" behind
        let cleaned = TRAILING_EMPTY_GROUP.replace(&cleaned, "");
        let mut name = WHITESPACE.replace_all(cleaned.trim(), " ").into_owned();

        if name.is_empty() {
            name = ILLEGAL_FILE_NAME_CHARS
                .replace_all(model.id(), "_")
                .into_owned();
        }

        format!("{name}.md")
    }

    fn format_dates(&self, metadata: &mut Map<String, Value>) {
        for field in DATE_FIELDS {
            let Some(Value::String(raw)) = metadata.get(field) else {
                continue;
            };

            let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") else {
                continue;
            };

            let mut formatted = String::new();
            if write!(formatted, "{}", date.format(&self.settings.date_format)).is_ok() {
                metadata.insert(field.to_string(), Value::String(formatted));
            }
        }
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use chrono::NaiveDate;

    use super::*;
    use crate::model::{BookModel, MovieModel};
    use crate::MediaType;

    fn inception() -> MediaTypeModel {
        MovieModel {
            sub_type: "movie".to_string(),
            title: "Inception".to_string(),
            year: Some(2010),
            data_source: "OMDbAPI".to_string(),
            id: "tt1375666".to_string(),
            plot: "A thief who steals corporate secrets.".to_string(),
            genres: vec!["Action".to_string(), "Sci-Fi".to_string()],
            premiere: NaiveDate::from_ymd_opt(2010, 7, 16),
            ..Default::default()
        }
        .into()
    }

    #[test]
    fn default_note_is_front_matter_only() {
        let note = NoteRenderer::default().render(&inception()).unwrap();

        assert_eq!(note.file_name, "Inception (2010).md");
        assert!(note.content.starts_with("---\ntype: movie\nsubType: movie\ntitle: Inception\n"));
        assert!(note.content.contains("premiere: 2010-07-16\n"));
        assert!(note.content.contains("genres:\n- Action\n- Sci-Fi\n"));
        assert!(note.content.ends_with("---\n"));
    }

    #[test]
    fn settings_drive_dates_mappings_and_body() {
        let mut settings = NoteSettings {
            date_format: "%d/%m/%Y".to_string(),
            ..Default::default()
        };
        settings.templates.insert(
            MediaType::Movie,
            "# {{ title }}\n\n{{ plot }}\n\n{{ LIST:genres }}\n".to_string(),
        );
        settings.property_mappings.insert(
            MediaType::Movie,
            vec![PropertyMapping {
                property: "plot".to_string(),
                mapping: PropertyMappingOption::Remove,
                new_name: None,
            }],
        );

        let note = NoteRenderer::new(settings).render(&inception()).unwrap();
        let (front, body) = note.content.split_once("---\n#").unwrap();

        assert!(front.contains("premiere: 16/07/2010"));
        assert!(!front.contains("plot:"));
        assert_eq!(
            body,
            " Inception\n\nA thief who steals corporate secrets.\n\n- Action\n- Sci-Fi\n"
        );
    }

    #[test]
    fn file_names_are_sanitized() {
        let model: MediaTypeModel = BookModel {
            title: "What If?: Serious Scientific Answers / Absurd Questions".to_string(),
            id: "/works/OL17075811W".to_string(),
            ..Default::default()
        }
        .into();

        let renderer = NoteRenderer::new(NoteSettings {
            file_name_templates: HashMap::from([(MediaType::Book, "{{ title }} ({{ year }})".to_string())]),
            ..Default::default()
        });
        let note = renderer.render(&model).unwrap();

        assert_eq!(
            note.file_name,
            "What If Serious Scientific Answers Absurd Questions.md"
        );
    }

    #[test]
    fn only_a_trailing_empty_year_is_dropped() {
        let renderer = NoteRenderer::new(NoteSettings {
            file_name_templates: HashMap::from([(MediaType::Book, "{{ title }} ({{ year }})".to_string())]),
            ..Default::default()
        });

        let dated: MediaTypeModel = BookModel {
            title: "Who () Me".to_string(),
            id: "/works/OL2W".to_string(),
            year: Some(2000),
            ..Default::default()
        }
        .into();
        assert_eq!(renderer.render(&dated).unwrap().file_name, "Who () Me (2000).md");

        let undated: MediaTypeModel = BookModel {
            title: "Who () Me".to_string(),
            id: "/works/OL2W".to_string(),
            ..Default::default()
        }
        .into();
        assert_eq!(renderer.render(&undated).unwrap().file_name, "Who () Me.md");
    }

    #[test]
    fn empty_title_falls_back_to_id() {
        let model: MediaTypeModel = BookModel {
            id: "/works/OL1W".to_string(),
            ..Default::default()
        }
        .into();

        let note = NoteRenderer::default().render(&model).unwrap();
        assert_eq!(note.file_name, "_works_OL1W.md");
    }
}
