use log::{debug, warn};
use mdb_common::serde::{self, Deserialize};
use std::{
    collections::HashMap,
    fs::{read_to_string, File},
    io::Write,
    path::Path,
};

use super::ApiConfig;
use crate::error::ProviderError;

pub const SAMPLE_CONFIG_TOML: &str = include_str!("sample.toml");

#[derive(Debug, Default, Deserialize)]
#[serde(crate = "self::serde")]
struct Config {
    #[serde(default)]
    apis: HashMap<String, ApiOverride>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(crate = "self::serde")]
struct ApiOverride {
    api_key: Option<String>,
    base_url: Option<String>,
    search_url: Option<String>,
    enabled: Option<bool>,
}

/// Reads the config file at `path`, writing the sample config there first if it doesn't exist.
///
/// The `[apis]` table is applied onto `apis`. The raw contents are returned so the caller can
/// decode the other sections.
pub fn read_api_cfg_file(
    path: &Path,
    apis: &mut HashMap<String, ApiConfig>,
) -> Result<String, ProviderError> {
    if !path.exists() {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut sample_toml = File::create(path)?;
        sample_toml.write_all(SAMPLE_CONFIG_TOML.as_bytes())?;
        debug!("Wrote default config to {}", path.display());
    }

    let contents = read_to_string(path)?;
    apply_api_overrides(&contents, apis)?;

    Ok(contents)
}

/// Applies the `[apis.<name>]` tables of `contents` onto `apis`.
///
/// Tables naming an unknown provider are ignored with a warning.
pub fn apply_api_overrides(
    contents: &str,
    apis: &mut HashMap<String, ApiConfig>,
) -> Result<(), ProviderError> {
    let config: Config = toml::from_str(contents)?;

    for (name, data) in config.apis {
        let Some(api) = apis.get_mut(&name) else {
            warn!("Ignoring config for unknown provider {name}");
            continue;
        };

        if let Some(key) = data.api_key {
            api.api_key = Some(key);
        }
        if let Some(url) = data.base_url {
            api.base_url = url;
        }
        if let Some(url) = data.search_url {
            api.search_url = url;
        }
        if let Some(enabled) = data.enabled {
            api.enabled = enabled;
        }
    }

    debug!(
        "Configured providers: {:?}",
        apis.values()
            .filter(|api| api.enabled)
            .map(|api| api.name.as_str())
            .collect::<Vec<&str>>()
    );
    Ok(())
}

#[cfg(test)]
mod test {
    use mdb_common::Providers;

    use super::*;
    use crate::provider_config::DEFAULT_APIS;

    #[test]
    fn overrides_are_applied() {
        let mut apis = DEFAULT_APIS.clone();
        let contents = r#"
[apis.omdb]
api_key = "abc123"

[apis.steam]
enabled = false

[apis.jikan]
base_url = "http://localhost:8080/v4/anime"

[apis.imdb]
api_key = "nope"

[note]
date_format = "%d/%m/%Y"
"#;

        apply_api_overrides(contents, &mut apis).unwrap();

        assert_eq!(apis["omdb"].api_key(), Some("abc123"));
        assert!(!apis["steam"].enabled);
        assert_eq!(apis["jikan"].base_url, "http://localhost:8080/v4/anime");
        assert_eq!(apis["jikan"].search_url, DEFAULT_APIS["jikan"].search_url);
        assert_eq!(apis.len(), Providers::ALL.len());
    }

    #[test]
    fn sample_config_is_valid() {
        let mut apis = DEFAULT_APIS.clone();
        apply_api_overrides(SAMPLE_CONFIG_TOML, &mut apis).unwrap();
        assert_eq!(apis, *DEFAULT_APIS);
    }

    #[test]
    fn malformed_config_is_an_error() {
        let mut apis = DEFAULT_APIS.clone();
        assert!(matches!(
            apply_api_overrides("[apis.omdb\napi_key = 1", &mut apis),
            Err(ProviderError::ConfigDecodeFail { .. })
        ));
    }
}
