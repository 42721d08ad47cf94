use chrono::format::{Item, StrftimeItems};
use log::debug;
use serde::Deserialize;
use std::{collections::HashMap, str::FromStr};

use super::{error::NoteError, mapping::PropertyMapping};
use crate::MediaType;

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
pub const DEFAULT_FILE_NAME_TEMPLATE: &str = "{{ title }} ({{ year }})";

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    note: NoteSection,
    #[serde(default)]
    property_mappings: HashMap<String, Vec<PropertyMapping>>,
}

#[derive(Debug, Default, Deserialize)]
struct NoteSection {
    date_format: Option<String>,
    #[serde(default)]
    file_name_templates: HashMap<String, String>,
    #[serde(default)]
    templates: HashMap<String, String>,
}

/// Everything the [renderer](super::NoteRenderer) needs to know about the user's preferences.
#[derive(Debug, Clone)]
pub struct NoteSettings {
    /// chrono `strftime` format used for every date field.
    pub date_format: String,
    pub file_name_templates: HashMap<MediaType, String>,
    pub templates: HashMap<MediaType, String>,
    pub property_mappings: HashMap<MediaType, Vec<PropertyMapping>>,
}

impl Default for NoteSettings {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            file_name_templates: HashMap::new(),
            templates: HashMap::new(),
            property_mappings: HashMap::new(),
        }
    }
}

impl NoteSettings {
    /// Reads the `[note]` and `[property_mappings]` tables of a config file.
    ///
    /// Other tables are ignored, so the same file can also configure the providers.
    pub fn from_config(config: &str) -> Result<Self, NoteError> {
        let file: ConfigFile = toml::from_str(config)?;

        let date_format = file
            .note
            .date_format
            .unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string());

        if StrftimeItems::new(&date_format).any(|item| matches!(item, Item::Error)) {
            return Err(NoteError::InvalidDateFormat {
                format: date_format,
            });
        }

        let mut property_mappings = HashMap::with_capacity(file.property_mappings.len());
        for (key, mappings) in file.property_mappings {
            let media_type = parse_key(&key)?;
            for mapping in &mappings {
                mapping.validate()?;
            }
            property_mappings.insert(media_type, mappings);
        }

        let settings = Self {
            date_format,
            file_name_templates: keyed_by_media_type(file.note.file_name_templates)?,
            templates: keyed_by_media_type(file.note.templates)?,
            property_mappings,
        };

        debug!("Note settings decoded: {:?}", settings);
        Ok(settings)
    }

    #[inline]
    pub fn file_name_template(&self, media_type: MediaType) -> &str {
        self.file_name_templates
            .get(&media_type)
            .map_or(DEFAULT_FILE_NAME_TEMPLATE, String::as_str)
    }

    #[inline]
    pub fn template(&self, media_type: MediaType) -> &str {
        self.templates.get(&media_type).map_or("", String::as_str)
    }

    #[inline]
    pub fn mappings(&self, media_type: MediaType) -> &[PropertyMapping] {
        self.property_mappings
            .get(&media_type)
            .map_or(&[][..], Vec::as_slice)
    }
}

fn parse_key(key: &str) -> Result<MediaType, NoteError> {
    MediaType::from_str(key).map_err(|_| NoteError::UnknownMediaType {
        key: key.to_string(),
    })
}

fn keyed_by_media_type(
    map: HashMap<String, String>,
) -> Result<HashMap<MediaType, String>, NoteError> {
    map.into_iter()
        .map(|(key, value)| Ok((parse_key(&key)?, value)))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::note::mapping::PropertyMappingOption;

    const SAMPLE: &str = r##"
[apis.omdb]
api_key = "ignored here"

[note]
date_format = "%d/%m/%Y"

[note.file_name_templates]
book = "{{ title }} - {{ ENUM:author }}"

[note.templates]
movie = "# {{ title }}"

[[property_mappings.movie]]
property = "plot"
mapping = "remap"
new_name = "summary"

[[property_mappings.boardgame]]
property = "image"
mapping = "remove"
"##;

    #[test]
    fn decode_sample_config() {
        let settings = NoteSettings::from_config(SAMPLE).unwrap();

        assert_eq!(settings.date_format, "%d/%m/%Y");
        assert_eq!(
            settings.file_name_template(MediaType::Book),
            "{{ title }} - {{ ENUM:author }}"
        );
        assert_eq!(
            settings.file_name_template(MediaType::Movie),
            DEFAULT_FILE_NAME_TEMPLATE
        );
        assert_eq!(settings.template(MediaType::Movie), "# {{ title }}");
        assert_eq!(settings.template(MediaType::Game), "");
        assert_eq!(
            settings.mappings(MediaType::BoardGame)[0].mapping,
            PropertyMappingOption::Remove
        );
        assert!(settings.mappings(MediaType::Series).is_empty());
    }

    #[test]
    fn empty_config_uses_defaults() {
        let settings = NoteSettings::from_config("").unwrap();
        assert_eq!(settings.date_format, DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            NoteSettings::from_config("[note]\ndate_format = \"%Q\""),
            Err(NoteError::InvalidDateFormat { .. })
        ));
        assert!(matches!(
            NoteSettings::from_config("[note.templates]\ncomic = \"x\""),
            Err(NoteError::UnknownMediaType { .. })
        ));
        assert!(matches!(
            NoteSettings::from_config(
                "[[property_mappings.movie]]\nproperty = \"plot\"\nmapping = \"remap\""
            ),
            Err(NoteError::InvalidMapping { .. })
        ));
    }
}
