use mdb_common::serde::{self, Deserialize, Serialize};
use mdb_common::Providers;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fmt::Display;

use crate::api_config;

pub mod macros;
pub mod serialize;

static KEY_PARAM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([?&](?:apikey|api_key)=)[^&#]+").unwrap());

pub static DEFAULT_APIS: Lazy<HashMap<String, ApiConfig>> = Lazy::new(|| {
    let mut hmap = HashMap::with_capacity(Providers::ALL.len());
    hmap.insert(
        "omdb".to_string(),
        api_config!(
            Providers::Omdb,
            "https://www.omdbapi.com/",
            "https://www.omdbapi.com/",
            true
        ),
    );
    hmap.insert(
        "tmdb_movie".to_string(),
        api_config!(
            Providers::TmdbMovie,
            "https://api.themoviedb.org/3/search/movie",
            "https://api.themoviedb.org/3/movie",
            true
        ),
    );
    hmap.insert(
        "tmdb_series".to_string(),
        api_config!(
            Providers::TmdbSeries,
            "https://api.themoviedb.org/3/search/tv",
            "https://api.themoviedb.org/3/tv",
            true
        ),
    );
    hmap.insert(
        "jikan".to_string(),
        api_config!(
            Providers::Jikan,
            "https://api.jikan.moe/v4/anime",
            "https://api.jikan.moe/v4/anime",
            false
        ),
    );
    hmap.insert(
        "steam".to_string(),
        api_config!(
            Providers::Steam,
            "https://steamcommunity.com/actions/SearchApps",
            "https://store.steampowered.com/api/appdetails",
            false
        ),
    );
    hmap.insert(
        "openlibrary".to_string(),
        api_config!(
            Providers::OpenLibrary,
            "https://openlibrary.org/search.json",
            "https://openlibrary.org",
            false
        ),
    );
    hmap.insert(
        "boardgamegeek".to_string(),
        api_config!(
            Providers::BoardGameGeek,
            "https://boardgamegeek.com/xmlapi2/search",
            "https://boardgamegeek.com/xmlapi2/thing",
            false
        ),
    );
    hmap
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(crate = "self::serde")]
pub struct ApiConfig {
    pub name: String,
    pub pretty_name: String,
    pub provider: Providers,
    pub search_url: String,
    pub base_url: String,
    pub api_key: Option<String>,
    pub requires_key: bool,
    pub user_agent: String,
    pub enabled: bool,
}

impl ApiConfig {
    /// Default configuration of `provider`.
    pub fn for_provider(provider: Providers) -> Self {
        DEFAULT_APIS
            .get(provider.as_str())
            .cloned()
            .unwrap_or_else(|| api_config!(provider, "", "", false))
    }

    /// The configured key, unless blank.
    #[inline]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// The key as it goes into a query string. Empty when unset.
    #[inline]
    pub fn encoded_key(&self) -> String {
        self.api_key()
            .map(|key| urlencoding::encode(key).into_owned())
            .unwrap_or_default()
    }

    /// Hides the value of the `apikey`/`api_key` query parameter so `url` can be logged.
    pub fn redact(&self, url: &str) -> String {
        KEY_PARAM.replace_all(url, "${1}***").into_owned()
    }

    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Replaces the search and details endpoints.
    #[must_use]
    pub fn with_endpoints(mut self, search_url: impl Into<String>, base_url: impl Into<String>) -> Self {
        self.search_url = search_url.into();
        self.base_url = base_url.into();
        self
    }
}

impl Display for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn every_provider_has_defaults() {
        for provider in Providers::ALL {
            let config = ApiConfig::for_provider(provider);
            assert_eq!(config.provider, provider);
            assert_eq!(config.name, provider.as_str());
            assert!(config.search_url.starts_with("https://"));
            assert!(config.enabled);
        }

        assert!(ApiConfig::for_provider(Providers::Omdb).requires_key);
        assert!(!ApiConfig::for_provider(Providers::Steam).requires_key);
    }

    #[test]
    fn keys_are_redacted() {
        let config = ApiConfig::for_provider(Providers::Omdb).with_api_key("s3cr3t");
        assert_eq!(
            config.redact("https://www.omdbapi.com/?s=x&apikey=s3cr3t"),
            "https://www.omdbapi.com/?s=x&apikey=***"
        );

        let short = ApiConfig::for_provider(Providers::Omdb).with_api_key("1");
        assert_eq!(
            short.redact("https://www.omdbapi.com/?i=tt0133093&plot=full&apikey=1"),
            "https://www.omdbapi.com/?i=tt0133093&plot=full&apikey=***"
        );

        let tmdb = ApiConfig::for_provider(Providers::TmdbMovie).with_api_key("abc");
        assert_eq!(
            tmdb.redact("https://api.themoviedb.org/3/movie/603?api_key=abc&append_to_response=credits"),
            "https://api.themoviedb.org/3/movie/603?api_key=***&append_to_response=credits"
        );

        let blank = ApiConfig::for_provider(Providers::Omdb).with_api_key("  ");
        assert_eq!(blank.api_key(), None);
        assert_eq!(blank.encoded_key(), "");
    }
}
