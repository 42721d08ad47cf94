use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use crate::{error::CliError, progress_bars::RequestSpinner};
use dialoguer::{theme::ColorfulTheme, Confirm};
use futures::future::join_all;
use log::{debug, warn};
use mdb_common::{
    model::MediaTypeModel,
    note::{Note, NoteSettings},
    MediaType, Providers,
};
use mdb_providers::{
    prelude::*,
    provider_config::serialize::{read_api_cfg_file, SAMPLE_CONFIG_TOML},
};
use owo_colors::OwoColorize;
use tokio::fs::{create_dir_all, write};

use super::AVAILABLE_APIS;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Builds a [`MediaClient`] for `$config` and evaluates `$body` with it.
///
/// Providers left out of the build end up as [`CliError::ProviderUnavailable`].
macro_rules! with_source {
    ($config:expr, $client:ident => $body:expr) => {
        match $config.provider {
            #[cfg(feature = "omdb")]
            Providers::Omdb => {
                let $client = MediaClient::new(OmdbApi::new(), $config.clone())?;
                $body
            }
            #[cfg(feature = "tmdb")]
            Providers::TmdbMovie => {
                let $client = MediaClient::new(TmdbMovieApi::new(), $config.clone())?;
                $body
            }
            #[cfg(feature = "tmdb")]
            Providers::TmdbSeries => {
                let $client = MediaClient::new(TmdbSeriesApi::new(), $config.clone())?;
                $body
            }
            #[cfg(feature = "jikan")]
            Providers::Jikan => {
                let $client = MediaClient::new(JikanApi::new(), $config.clone())?;
                $body
            }
            #[cfg(feature = "steam")]
            Providers::Steam => {
                let $client = MediaClient::new(SteamApi::new(), $config.clone())?;
                $body
            }
            #[cfg(feature = "openlibrary")]
            Providers::OpenLibrary => {
                let $client = MediaClient::new(OpenLibraryApi::new(), $config.clone())?;
                $body
            }
            #[cfg(feature = "boardgamegeek")]
            Providers::BoardGameGeek => {
                let $client = MediaClient::new(BoardGameGeekApi::new(), $config.clone())?;
                $body
            }
            #[allow(unreachable_patterns)]
            _ => Err(CliError::ProviderUnavailable {
                provider: $config.name.clone(),
            }),
        }
    };
}

/// Media types `provider` can return, or `None` if it wasn't compiled in.
pub fn media_types_of(provider: Providers) -> Option<MediaTypes> {
    match provider {
        #[cfg(feature = "omdb")]
        Providers::Omdb => Some(OmdbApi::media_types()),
        #[cfg(feature = "tmdb")]
        Providers::TmdbMovie => Some(TmdbMovieApi::media_types()),
        #[cfg(feature = "tmdb")]
        Providers::TmdbSeries => Some(TmdbSeriesApi::media_types()),
        #[cfg(feature = "jikan")]
        Providers::Jikan => Some(JikanApi::media_types()),
        #[cfg(feature = "steam")]
        Providers::Steam => Some(SteamApi::media_types()),
        #[cfg(feature = "openlibrary")]
        Providers::OpenLibrary => Some(OpenLibraryApi::media_types()),
        #[cfg(feature = "boardgamegeek")]
        Providers::BoardGameGeek => Some(BoardGameGeekApi::media_types()),
        #[allow(unreachable_patterns)]
        _ => None,
    }
}

/// Path of the config file: `path` if given, otherwise `config.toml` inside the config dir.
pub fn config_path(path: Option<&Path>) -> Result<PathBuf, CliError> {
    match path {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(Providers::config_dir()?.join(CONFIG_FILE_NAME)),
    }
}

/// Reads the config file, fills [`AVAILABLE_APIS`] and returns the note settings.
///
/// The file is created from the commented sample if it doesn't exist.
pub fn load_config(path: Option<&Path>) -> Result<NoteSettings, CliError> {
    let cfg_path = config_path(path)?;
    let mut apis = DEFAULT_APIS.clone();

    let contents = match read_api_cfg_file(&cfg_path, &mut apis) {
        Ok(contents) => contents,
        Err(ProviderError::ConfigReadFail { source }) => {
            warn!(
                "Failed to read config at {}: {}. Using defaults.",
                cfg_path.display(),
                source
            );
            SAMPLE_CONFIG_TOML.to_string()
        }
        Err(err) => return Err(err.into()),
    };

    debug!("Loaded config from {}", cfg_path.display());

    if AVAILABLE_APIS.set(apis).is_err() {
        debug!("Provider table already initialised");
    }

    Ok(NoteSettings::from_config(&contents)?)
}

pub fn get_apis<'a>() -> Result<&'a HashMap<String, ApiConfig>, CliError> {
    AVAILABLE_APIS
        .get()
        .ok_or(CliError::ImpossibleExecutionPath)
}

/// Config of a single provider the user explicitly asked for.
pub fn provider_config(provider: Providers) -> Result<&'static ApiConfig, CliError> {
    let api = AVAILABLE_APIS
        .get()
        .and_then(|apis| apis.get(provider.as_str()))
        .ok_or(CliError::ImpossibleExecutionPath)?;

    if !api.enabled {
        return Err(CliError::ProviderDisabled {
            provider: api.name.clone(),
        });
    }

    Ok(api)
}

/// Picks the providers a search should query, in provider order.
///
/// Providers needing an API key are skipped when none is set, unless named in `wanted`.
pub fn select_providers(
    apis: &HashMap<String, ApiConfig>,
    types: &[MediaType],
    wanted: &[Providers],
) -> Result<Vec<ApiConfig>, CliError> {
    let mut selected = Vec::with_capacity(Providers::ALL.len());

    for provider in Providers::ALL {
        let named = wanted.contains(&provider);
        if !wanted.is_empty() && !named {
            continue;
        }

        let Some(api) = apis.get(provider.as_str()) else {
            continue;
        };

        if !api.enabled {
            if named {
                warn!("Provider {} is disabled in the config file", api.name);
            }
            continue;
        }

        let Some(supported) = media_types_of(provider) else {
            debug!("Provider {} is not part of this build", api.name);
            continue;
        };

        if !supported.supports_any(types) {
            continue;
        }

        if api.requires_key && api.api_key().is_none() && !named {
            debug!("Skipping {api}: no API key set");
            continue;
        }

        selected.push(api.clone());
    }

    if selected.is_empty() {
        return Err(CliError::NoProviders);
    }

    Ok(selected)
}

pub async fn search_provider(
    api: &ApiConfig,
    title: &str,
) -> Result<Vec<MediaTypeModel>, CliError> {
    with_source!(api, source => Ok(source.search_by_title(title).await?))
}

pub async fn get_provider(api: &ApiConfig, id: &str) -> Result<MediaTypeModel, CliError> {
    with_source!(api, source => Ok(source.get_by_id(id).await?))
}

/// Searches every provider in `apis` at once.
///
/// Results keep the order of `apis`.
pub async fn search_all<'a>(
    apis: &'a [ApiConfig],
    title: &str,
    spinner: &RequestSpinner,
) -> Vec<(&'a ApiConfig, Result<Vec<MediaTypeModel>, CliError>)> {
    let searches = apis.iter().map(|api| async move {
        let result = search_provider(api, title).await;
        if let Ok(models) = &result {
            spinner.provider_done(api.provider, models.len());
        }
        (api, result)
    });

    join_all(searches).await
}

/// Keeps the successful searches.
///
/// A failure is returned if its provider was named in `wanted` or if no search succeeded.
/// Other failures are logged and left out.
pub fn settle_searches<'a>(
    results: Vec<(&'a ApiConfig, Result<Vec<MediaTypeModel>, CliError>)>,
    wanted: &[Providers],
) -> Result<Vec<(&'a ApiConfig, Vec<MediaTypeModel>)>, CliError> {
    let mut found = Vec::with_capacity(results.len());
    let mut last_error = None;

    for (api, result) in results {
        match result {
            Ok(models) => found.push((api, models)),
            Err(err) if wanted.contains(&api.provider) => return Err(err),
            Err(err) => {
                warn!("{} search failed: {}", api.pretty_name, err);
                last_error = Some(err);
            }
        }
    }

    match last_error {
        Some(err) if found.is_empty() => Err(err),
        _ => Ok(found),
    }
}

/// One line describing a search result.
pub fn describe(model: &MediaTypeModel) -> String {
    let year = model
        .year()
        .map_or_else(|| "????".to_string(), |y| y.to_string());

    format!(
        "{} ({}) [{}] {}",
        model.title(),
        year,
        model.media_type(),
        model.id()
    )
}

/// Writes `note` into `dir`, asking before replacing an existing file unless `overwrite` is set.
///
/// Returns `None` if the user declined.
pub async fn write_note(
    dir: &Path,
    note: &Note,
    overwrite: bool,
) -> Result<Option<PathBuf>, CliError> {
    if !dir.exists() {
        create_dir_all(dir).await?;
    }

    let path = dir.join(&note.file_name);

    if path.exists() && !overwrite {
        let confirm = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "The note {} already exists. Do you want to overwrite it?",
                path.display().bold().blue().italic()
            ))
            .default(false)
            .wait_for_newline(true)
            .interact()?;

        if !confirm {
            return Ok(None);
        }
    }

    write(&path, &note.content).await?;
    debug!("Wrote {}", path.display());

    Ok(Some(path))
}

#[cfg(test)]
mod test {
    use super::*;
    use mdb_common::model::GameModel;

    fn apis() -> HashMap<String, ApiConfig> {
        DEFAULT_APIS.clone()
    }

    fn names(selected: &[ApiConfig]) -> Vec<Providers> {
        selected.iter().map(|api| api.provider).collect()
    }

    #[test]
    fn keyless_providers_by_default() {
        let selected = select_providers(&apis(), &[], &[]).unwrap();

        assert_eq!(
            names(&selected),
            [
                Providers::Jikan,
                Providers::Steam,
                Providers::OpenLibrary,
                Providers::BoardGameGeek
            ]
        );
    }

    #[test]
    fn keys_and_types_filter_providers() {
        let mut apis = apis();
        if let Some(omdb) = apis.get_mut("omdb") {
            omdb.api_key = Some("secret".to_string());
        }

        let selected = select_providers(&apis, &[MediaType::Movie], &[]).unwrap();
        assert_eq!(names(&selected), [Providers::Omdb, Providers::Jikan]);

        let selected = select_providers(&apis, &[MediaType::Book], &[]).unwrap();
        assert_eq!(names(&selected), [Providers::OpenLibrary]);
    }

    #[test]
    fn named_providers_are_kept_without_key() {
        let selected =
            select_providers(&apis(), &[], &[Providers::TmdbSeries, Providers::Steam]).unwrap();

        assert_eq!(names(&selected), [Providers::TmdbSeries, Providers::Steam]);
    }

    #[test]
    fn disabled_or_unsupported_leaves_nothing() {
        let mut apis = apis();
        if let Some(bgg) = apis.get_mut("boardgamegeek") {
            bgg.enabled = false;
        }

        assert!(matches!(
            select_providers(&apis, &[MediaType::BoardGame], &[]),
            Err(CliError::NoProviders)
        ));
        assert!(matches!(
            select_providers(&apis, &[MediaType::Book], &[Providers::Steam]),
            Err(CliError::NoProviders)
        ));
    }

    fn missing_key(provider: Providers) -> Result<Vec<MediaTypeModel>, CliError> {
        Err(ProviderError::MissingApiKey { provider }.into())
    }

    #[test]
    fn named_provider_failures_are_returned() {
        let omdb = ApiConfig::for_provider(Providers::Omdb);
        let steam = ApiConfig::for_provider(Providers::Steam);

        let results = vec![(&omdb, missing_key(Providers::Omdb)), (&steam, Ok(Vec::new()))];

        assert!(matches!(
            settle_searches(results, &[Providers::Omdb, Providers::Steam]),
            Err(CliError::ProviderFail {
                source: ProviderError::MissingApiKey {
                    provider: Providers::Omdb
                }
            })
        ));
    }

    #[test]
    fn other_failures_are_skipped_unless_all_fail() {
        let omdb = ApiConfig::for_provider(Providers::Omdb);
        let steam = ApiConfig::for_provider(Providers::Steam);

        let results = vec![(&omdb, missing_key(Providers::Omdb)), (&steam, Ok(Vec::new()))];
        let found = settle_searches(results, &[]).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0.provider, Providers::Steam);

        let results = vec![
            (&omdb, missing_key(Providers::Omdb)),
            (&steam, missing_key(Providers::Steam)),
        ];
        assert!(matches!(
            settle_searches(results, &[]),
            Err(CliError::ProviderFail { .. })
        ));

        assert!(settle_searches(Vec::new(), &[]).unwrap().is_empty());
    }

    #[test]
    fn results_are_described() {
        let model: MediaTypeModel = GameModel {
            title: "Portal 2".to_string(),
            year: Some(2011),
            id: "620".to_string(),
            ..Default::default()
        }
        .into();

        assert_eq!(describe(&model), "Portal 2 (2011) [game] 620");
    }

    #[test]
    fn config_file_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let settings = load_config(Some(&path)).unwrap();

        assert!(path.exists());
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert!(get_apis().unwrap().contains_key("jikan"));
    }

    #[tokio::test]
    async fn notes_are_written() {
        let dir = tempfile::tempdir().unwrap();
        let note = Note {
            file_name: "Portal 2 (2011).md".to_string(),
            content: "---\ntitle: Portal 2\n---\n".to_string(),
        };

        let path = write_note(&dir.path().join("games"), &note, true)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), note.content);

        let replaced = Note {
            content: "---\ntitle: Portal 2\nyear: 2011\n---\n".to_string(),
            ..note
        };
        write_note(&dir.path().join("games"), &replaced, true)
            .await
            .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), replaced.content);
    }
}
