//! Adapter for `https://www.omdbapi.com`
//!
//! OMDb answers every request with `200 OK`; failures are reported through the
//! `Response` and `Error` fields of the body.
use log::debug;
use mdb_common::{
    model::{GameModel, MediaTypeModel, MovieModel, SeriesModel},
    serde_json, Providers,
};

use self::models::{OmdbDetails, OmdbSearchItem, OmdbSearchTopLevel};
use crate::{
    error::ProviderError,
    provider::{
        caps::MediaTypes,
        common::{encode, extract_year, non_empty, parse_date, split_list},
        MediaApi,
    },
    provider_config::ApiConfig,
};

mod models;

const NOT_FOUND: [&str; 2] = ["Movie not found!", "Incorrect IMDb ID."];
const INVALID_KEY: &str = "Invalid API key!";

#[derive(Debug, Clone, Copy, Default)]
pub struct OmdbApi;

impl OmdbApi {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn imdb_url(id: &str) -> String {
        format!("https://www.imdb.com/title/{id}/")
    }

    /// Turns a `Response: "False"` body into an error. `None` means "nothing found".
    fn response_error(error: Option<String>) -> Option<ProviderError> {
        let message = error.unwrap_or_default();

        if NOT_FOUND.contains(&message.as_str()) {
            return None;
        }
        if message == INVALID_KEY {
            return Some(ProviderError::InvalidApiKey {
                provider: Providers::Omdb,
            });
        }
        Some(ProviderError::ApiError { message })
    }

    fn map_search_item(item: OmdbSearchItem) -> Option<MediaTypeModel> {
        let year = extract_year(&item.year);
        let image = non_empty(&item.poster);
        let url = Self::imdb_url(&item.imdb_id);
        let data_source = Providers::Omdb.pretty_name().to_string();

        match item.kind.as_str() {
            "movie" => Some(
                MovieModel {
                    sub_type: "movie".to_string(),
                    english_title: item.title.clone(),
                    title: item.title,
                    year,
                    data_source,
                    url,
                    id: item.imdb_id,
                    image,
                    released: year.is_some(),
                    ..Default::default()
                }
                .into(),
            ),
            "series" => Some(
                SeriesModel {
                    sub_type: "series".to_string(),
                    english_title: item.title.clone(),
                    title: item.title,
                    year,
                    data_source,
                    url,
                    id: item.imdb_id,
                    image,
                    released: year.is_some(),
                    ..Default::default()
                }
                .into(),
            ),
            "game" => Some(
                GameModel {
                    sub_type: "game".to_string(),
                    english_title: item.title.clone(),
                    title: item.title,
                    year,
                    data_source,
                    url,
                    id: item.imdb_id,
                    image,
                    released: year.is_some(),
                    ..Default::default()
                }
                .into(),
            ),
            other => {
                debug!("Skipping OMDb result {} of type {other}", item.imdb_id);
                None
            }
        }
    }
}

impl MediaApi for OmdbApi {
    type SearchResponse = OmdbSearchTopLevel;
    type DetailsResponse = OmdbDetails;

    fn provider(&self) -> Providers {
        Providers::Omdb
    }

    fn media_types() -> MediaTypes {
        MediaTypes::Movie | MediaTypes::Series | MediaTypes::Game
    }

    fn search_url(&self, config: &ApiConfig, title: &str) -> String {
        format!(
            "{}?s={}&apikey={}",
            config.search_url,
            encode(title),
            config.encoded_key()
        )
    }

    fn details_url(&self, config: &ApiConfig, id: &str) -> String {
        format!(
            "{}?i={}&plot=full&apikey={}",
            config.base_url,
            encode(id),
            config.encoded_key()
        )
    }

    fn deserialize_search(&self, data: &str) -> Result<Self::SearchResponse, ProviderError> {
        Ok(serde_json::from_str(data)?)
    }

    fn deserialize_details(&self, data: &str) -> Result<Self::DetailsResponse, ProviderError> {
        Ok(serde_json::from_str(data)?)
    }

    fn map_search_response(
        &self,
        response: Self::SearchResponse,
        _config: &ApiConfig,
    ) -> Result<Vec<MediaTypeModel>, ProviderError> {
        if response.response.eq_ignore_ascii_case("false") {
            return match Self::response_error(response.error) {
                Some(err) => Err(err),
                None => Ok(Vec::new()),
            };
        }

        Ok(response
            .search
            .into_iter()
            .filter_map(Self::map_search_item)
            .collect())
    }

    fn map_details_response(
        &self,
        response: Self::DetailsResponse,
        _config: &ApiConfig,
        id: &str,
    ) -> Result<MediaTypeModel, ProviderError> {
        if response.response.eq_ignore_ascii_case("false") {
            return Err(Self::response_error(response.error)
                .unwrap_or_else(|| ProviderError::NotFound { id: id.to_string() }));
        }

        let year = extract_year(&response.year);
        let release = parse_date(&response.released);
        let data_source = Providers::Omdb.pretty_name().to_string();
        let url = Self::imdb_url(&response.imdb_id);
        let image = non_empty(&response.poster);
        let online_rating = response.imdb_rating.parse::<f64>().ok();

        let model = match response.kind.as_str() {
            "movie" => MovieModel {
                sub_type: "movie".to_string(),
                english_title: response.title.clone(),
                title: response.title,
                year,
                data_source,
                url,
                id: response.imdb_id,
                plot: non_empty(&response.plot).unwrap_or_default(),
                genres: split_list(&response.genre),
                director: split_list(&response.director),
                writer: split_list(&response.writer),
                studio: split_list(&response.production),
                duration: non_empty(&response.runtime).unwrap_or_default(),
                online_rating,
                actors: split_list(&response.actors),
                image,
                released: release.is_some(),
                premiere: release,
                ..Default::default()
            }
            .into(),
            "series" => SeriesModel {
                sub_type: "series".to_string(),
                english_title: response.title.clone(),
                title: response.title,
                year,
                data_source,
                url,
                id: response.imdb_id,
                plot: non_empty(&response.plot).unwrap_or_default(),
                genres: split_list(&response.genre),
                writer: split_list(&response.writer),
                studio: split_list(&response.production),
                duration: non_empty(&response.runtime).unwrap_or_default(),
                online_rating,
                actors: split_list(&response.actors),
                image,
                released: release.is_some(),
                // "2011–" marks a series that is still running
                airing: response.year.trim_end().ends_with('\u{2013}'),
                aired_from: release,
                ..Default::default()
            }
            .into(),
            "game" => GameModel {
                sub_type: "game".to_string(),
                english_title: response.title.clone(),
                title: response.title,
                year,
                data_source,
                url,
                id: response.imdb_id,
                developers: split_list(&response.director),
                publishers: split_list(&response.production),
                genres: split_list(&response.genre),
                online_rating,
                image,
                released: release.is_some(),
                release_date: release,
                ..Default::default()
            }
            .into(),
            other => {
                return Err(ProviderError::UnsupportedMediaType {
                    kind: other.to_string(),
                })
            }
        };

        Ok(model)
    }
}
