//! Per media type renaming and removal of front matter properties.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::NoteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyMappingOption {
    /// Keep the property under its own name.
    #[default]
    Default,
    /// Write the property under `new_name`.
    Remap,
    /// Leave the property out of the front matter.
    Remove,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyMapping {
    pub property: String,
    #[serde(default)]
    pub mapping: PropertyMappingOption,
    #[serde(default)]
    pub new_name: Option<String>,
}

impl PropertyMapping {
    pub fn validate(&self) -> Result<(), NoteError> {
        let has_name = self
            .new_name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty());

        if self.mapping == PropertyMappingOption::Remap && !has_name {
            return Err(NoteError::InvalidMapping {
                property: self.property.clone(),
            });
        }
        Ok(())
    }
}

/// Applies `mappings` to `metadata` keeping the original key order.
///
/// A remapped key that collides with an existing one overwrites that entry in place.
pub fn apply_mappings(metadata: Map<String, Value>, mappings: &[PropertyMapping]) -> Map<String, Value> {
    if mappings.is_empty() {
        return metadata;
    }

    let mut mapped = Map::with_capacity(metadata.len());

    for (key, value) in metadata {
        match mappings.iter().find(|m| m.property == key) {
            Some(m) if m.mapping == PropertyMappingOption::Remove => {}
            Some(PropertyMapping {
                mapping: PropertyMappingOption::Remap,
                new_name: Some(new_name),
                ..
            }) => {
                mapped.insert(new_name.trim().to_string(), value);
            }
            _ => {
                mapped.insert(key, value);
            }
        }
    }

    mapped
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    fn sample() -> Map<String, Value> {
        let Value::Object(map) = json!({
            "type": "movie",
            "title": "Inception",
            "plot": "A thief...",
            "year": 2010
        }) else {
            unreachable!()
        };
        map
    }

    #[test]
    fn remove_and_remap_keep_order() {
        let mappings = [
            PropertyMapping {
                property: "plot".to_string(),
                mapping: PropertyMappingOption::Remap,
                new_name: Some("summary".to_string()),
            },
            PropertyMapping {
                property: "type".to_string(),
                mapping: PropertyMappingOption::Remove,
                new_name: None,
            },
        ];

        let mapped = apply_mappings(sample(), &mappings);
        let keys: Vec<&str> = mapped.keys().map(String::as_str).collect();

        assert_eq!(keys, ["title", "summary", "year"]);
        assert_eq!(mapped["summary"], json!("A thief..."));
    }

    #[test]
    fn remap_without_name_is_rejected() {
        let mapping = PropertyMapping {
            property: "plot".to_string(),
            mapping: PropertyMappingOption::Remap,
            new_name: Some("  ".to_string()),
        };

        assert!(matches!(
            mapping.validate(),
            Err(NoteError::InvalidMapping { property }) if property == "plot"
        ));
    }
}
