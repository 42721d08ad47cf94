//! Shared building blocks of media-db: the media model every provider maps into,
//! the enums identifying providers and media types, and the note renderer.
use std::{
    env,
    fmt::Display,
    fs::create_dir_all,
    io,
    path::{Path, PathBuf},
    str::FromStr,
};

// Public Exports
pub use chrono;
pub use directories;
pub use log;
pub use reqwest;
pub use serde;
pub use serde_json;

use directories::ProjectDirs;
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod macros;
pub mod model;
pub mod note;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    #[error("Unknown media type: {0}")]
    UnknownMediaType(String),
}

/// The kinds of media a note can describe.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Series,
    Game,
    Book,
    BoardGame,
}

impl MediaType {
    pub const ALL: [Self; 5] = [
        Self::Movie,
        Self::Series,
        Self::Game,
        Self::Book,
        Self::BoardGame,
    ];

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Series => "series",
            Self::Game => "game",
            Self::Book => "book",
            Self::BoardGame => "boardgame",
        }
    }
}

impl Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "movie" => Ok(Self::Movie),
            "series" | "tv" => Ok(Self::Series),
            "game" => Ok(Self::Game),
            "book" => Ok(Self::Book),
            "boardgame" | "board_game" => Ok(Self::BoardGame),
            _ => Err(ParseError::UnknownMediaType(s.to_string())),
        }
    }
}

/// All currently supported metadata providers.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Providers {
    /// Represents ```https://www.omdbapi.com```. Needs an API key.
    Omdb,
    /// Movie endpoints of ```https://api.themoviedb.org```. Needs an API key.
    TmdbMovie,
    /// TV endpoints of ```https://api.themoviedb.org```. Needs an API key.
    TmdbSeries,
    /// MyAnimeList data served by ```https://api.jikan.moe```.
    Jikan,
    /// Represents the Steam store and community search.
    Steam,
    /// Represents ```https://openlibrary.org```.
    OpenLibrary,
    /// Represents the XML API 2 of ```https://boardgamegeek.com```.
    BoardGameGeek,
}

impl Providers {
    pub const ALL: [Self; 7] = [
        Self::Omdb,
        Self::TmdbMovie,
        Self::TmdbSeries,
        Self::Jikan,
        Self::Steam,
        Self::OpenLibrary,
        Self::BoardGameGeek,
    ];

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Omdb => "omdb",
            Self::TmdbMovie => "tmdb_movie",
            Self::TmdbSeries => "tmdb_series",
            Self::Jikan => "jikan",
            Self::Steam => "steam",
            Self::OpenLibrary => "openlibrary",
            Self::BoardGameGeek => "boardgamegeek",
        }
    }

    /// Name written as the `dataSource` of every model this provider produces.
    #[inline]
    pub const fn pretty_name(&self) -> &'static str {
        match self {
            Self::Omdb => "OMDbAPI",
            Self::TmdbMovie => "TMDBMovieAPI",
            Self::TmdbSeries => "TMDBSeriesAPI",
            Self::Jikan => "MALAPI",
            Self::Steam => "SteamAPI",
            Self::OpenLibrary => "OpenLibraryAPI",
            Self::BoardGameGeek => "BoardGameGeekAPI",
        }
    }

    /// Each variant can generate a specific user-agent to connect to the provider.
    ///
    /// It will always follow the version declared inside ```Cargo.toml```
    #[inline]
    pub fn user_agent(self) -> String {
        let ua = format!("media-db/{} ({})", env!("CARGO_PKG_VERSION"), self.as_str());
        debug!("Using user-agent: {}", ua);
        ua
    }

    /// Returns a `PathBuf` pointing to the configuration directory.
    ///
    /// This is XDG-compliant and resolves to `$XDG_CONFIG_HOME/media-db` on Linux or
    /// `%APPDATA%/media-db/media-db` on Windows
    ///
    /// Or you can set the env var `MDB_CONFIG_DIR` to point it to a custom location.
    pub fn config_dir() -> Result<PathBuf, io::Error> {
        let cfg_path = match env::var("MDB_CONFIG_DIR") {
            Ok(path) => PathBuf::from(path),
            Err(_) => ProjectDirs::from("com", "media-db", "media-db")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    io::Error::new(io::ErrorKind::NotFound, "No home directory available")
                })?,
        };

        let cfold = Path::new(&cfg_path);

        if !cfold.exists() {
            create_dir_all(cfold)?;
        }

        Ok(cfold.to_path_buf())
    }
}

impl Display for Providers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Providers {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == lower || p.pretty_name().eq_ignore_ascii_case(s))
            .ok_or(ParseError::UnknownProvider(s.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn provider_names_round_trip() {
        for provider in Providers::ALL {
            assert_eq!(Providers::from_str(provider.as_str()), Ok(provider));
        }
        assert_eq!(Providers::from_str("MALAPI"), Ok(Providers::Jikan));
        assert_eq!(
            Providers::from_str("imdb"),
            Err(ParseError::UnknownProvider("imdb".to_string()))
        );
    }

    #[test]
    fn media_type_aliases() {
        assert_eq!(MediaType::from_str("TV"), Ok(MediaType::Series));
        assert_eq!(MediaType::from_str("board_game"), Ok(MediaType::BoardGame));
        assert_eq!(MediaType::BoardGame.to_string(), "boardgame");
        assert!(MediaType::from_str("comic").is_err());
    }
}
