//! Adapters for every supported metadata provider.
//!
//! Each adapter implements [`MediaApi`](crate::provider::MediaApi) and is wrapped in a
//! [`MediaClient`](crate::provider::MediaClient) to do the actual requests.

#[cfg(feature = "boardgamegeek")]
pub mod boardgamegeek;

#[cfg(feature = "jikan")]
pub mod jikan;

#[cfg(feature = "omdb")]
pub mod omdb;

#[cfg(feature = "openlibrary")]
pub mod openlibrary;

pub mod prelude;

#[cfg(feature = "steam")]
pub mod steam;

#[cfg(feature = "tmdb")]
pub mod tmdb;
