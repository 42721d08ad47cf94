#[cfg(feature = "boardgamegeek")]
pub use super::boardgamegeek::BoardGameGeekApi;

#[cfg(feature = "jikan")]
pub use super::jikan::JikanApi;

#[cfg(feature = "omdb")]
pub use super::omdb::OmdbApi;

#[cfg(feature = "openlibrary")]
pub use super::openlibrary::OpenLibraryApi;

#[cfg(feature = "steam")]
pub use super::steam::SteamApi;

#[cfg(feature = "tmdb")]
pub use super::tmdb::{TmdbMovieApi, TmdbSeriesApi};
