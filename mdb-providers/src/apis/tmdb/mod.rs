//! Adapters for `https://api.themoviedb.org`
//!
//! Movies and TV series live behind separate endpoints, so each gets its own adapter.
//! Details are requested with `append_to_response=credits` to get cast and crew in one call.
use mdb_common::{
    model::{MediaTypeModel, MovieModel, SeriesModel},
    names, serde_json, Providers,
};

use self::models::{
    TmdbMovieDetails, TmdbMovieResult, TmdbSearchTopLevel, TmdbSeriesDetails, TmdbSeriesResult,
};
use crate::{
    error::ProviderError,
    provider::{
        caps::MediaTypes,
        common::{encode, extract_year, non_empty, parse_date},
        MediaApi,
    },
    provider_config::ApiConfig,
};

mod models;

const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w780";
const MAX_ACTORS: usize = 10;

fn image_url(poster_path: Option<String>) -> Option<String> {
    poster_path
        .as_deref()
        .and_then(non_empty)
        .map(|path| format!("{IMAGE_BASE_URL}{path}"))
}

/// TMDB reports unrated titles as `0.0`.
fn rating(vote_average: Option<f64>) -> Option<f64> {
    vote_average.filter(|v| *v > 0.0)
}

fn search_url(config: &ApiConfig, title: &str) -> String {
    format!(
        "{}?api_key={}&query={}",
        config.search_url,
        config.encoded_key(),
        encode(title)
    )
}

fn details_url(config: &ApiConfig, id: &str) -> String {
    format!(
        "{}/{}?api_key={}&append_to_response=credits",
        config.base_url,
        encode(id),
        config.encoded_key()
    )
}

/// API logic for TMDB movies.
#[derive(Debug, Clone, Copy, Default)]
pub struct TmdbMovieApi;

impl TmdbMovieApi {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl MediaApi for TmdbMovieApi {
    type SearchResponse = TmdbSearchTopLevel<TmdbMovieResult>;
    type DetailsResponse = TmdbMovieDetails;

    fn provider(&self) -> Providers {
        Providers::TmdbMovie
    }

    fn media_types() -> MediaTypes {
        MediaTypes::Movie
    }

    fn search_url(&self, config: &ApiConfig, title: &str) -> String {
        search_url(config, title)
    }

    fn details_url(&self, config: &ApiConfig, id: &str) -> String {
        details_url(config, id)
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
        let models = response
            .results
            .into_iter()
            .map(|item| {
                let release_date = item.release_date.as_deref().unwrap_or_default();
                let premiere = parse_date(release_date);
                MovieModel {
                    sub_type: "movie".to_string(),
                    english_title: item.title.clone(),
                    title: item.title,
                    year: extract_year(release_date),
                    data_source: Providers::TmdbMovie.pretty_name().to_string(),
                    url: format!("https://www.themoviedb.org/movie/{}", item.id),
                    id: item.id.to_string(),
                    plot: item.overview,
                    online_rating: rating(item.vote_average),
                    image: image_url(item.poster_path),
                    released: premiere.is_some(),
                    premiere,
                    ..Default::default()
                }
                .into()
            })
            .collect();

        Ok(models)
    }

    fn map_details_response(
        &self,
        response: Self::DetailsResponse,
        _config: &ApiConfig,
        _id: &str,
    ) -> Result<MediaTypeModel, ProviderError> {
        let release_date = response.release_date.as_deref().unwrap_or_default();
        let premiere = parse_date(release_date);

        Ok(MovieModel {
            sub_type: "movie".to_string(),
            english_title: response.title.clone(),
            title: response.title,
            year: extract_year(release_date),
            data_source: Providers::TmdbMovie.pretty_name().to_string(),
            url: format!("https://www.themoviedb.org/movie/{}", response.id),
            id: response.id.to_string(),
            plot: response.overview,
            genres: names!(response.genres),
            director: response.credits.crew_with_job(&["Director"]),
            writer: response.credits.crew_with_job(&["Writer", "Screenplay"]),
            studio: names!(response.production_companies),
            duration: response
                .runtime
                .filter(|r| *r > 0)
                .map(|r| format!("{r} min"))
                .unwrap_or_default(),
            online_rating: rating(response.vote_average),
            actors: names!(response.credits.cast)
                .into_iter()
                .take(MAX_ACTORS)
                .collect(),
            image: image_url(response.poster_path),
            released: response.status == "Released",
            premiere,
            ..Default::default()
        }
        .into())
    }
}

/// API logic for TMDB TV series.
#[derive(Debug, Clone, Copy, Default)]
pub struct TmdbSeriesApi;

impl TmdbSeriesApi {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl MediaApi for TmdbSeriesApi {
    type SearchResponse = TmdbSearchTopLevel<TmdbSeriesResult>;
    type DetailsResponse = TmdbSeriesDetails;

    fn provider(&self) -> Providers {
        Providers::TmdbSeries
    }

    fn media_types() -> MediaTypes {
        MediaTypes::Series
    }

    fn search_url(&self, config: &ApiConfig, title: &str) -> String {
        search_url(config, title)
    }

    fn details_url(&self, config: &ApiConfig, id: &str) -> String {
        details_url(config, id)
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
        let models = response
            .results
            .into_iter()
            .map(|item| {
                let first_air_date = item.first_air_date.as_deref().unwrap_or_default();
                let aired_from = parse_date(first_air_date);
                SeriesModel {
                    sub_type: "series".to_string(),
                    english_title: item.name.clone(),
                    title: item.name,
                    year: extract_year(first_air_date),
                    data_source: Providers::TmdbSeries.pretty_name().to_string(),
                    url: format!("https://www.themoviedb.org/tv/{}", item.id),
                    id: item.id.to_string(),
                    plot: item.overview,
                    online_rating: rating(item.vote_average),
                    image: image_url(item.poster_path),
                    released: aired_from.is_some(),
                    aired_from,
                    ..Default::default()
                }
                .into()
            })
            .collect();

        Ok(models)
    }

    fn map_details_response(
        &self,
        response: Self::DetailsResponse,
        _config: &ApiConfig,
        _id: &str,
    ) -> Result<MediaTypeModel, ProviderError> {
        let first_air_date = response.first_air_date.as_deref().unwrap_or_default();
        let aired_from = parse_date(first_air_date);
        let aired_to = if response.in_production {
            None
        } else {
            response.last_air_date.as_deref().and_then(parse_date)
        };

        // Networks before production companies
        let mut studio = names!(response.networks);
        for company in names!(response.production_companies) {
            if !studio.contains(&company) {
                studio.push(company);
            }
        }

        Ok(SeriesModel {
            sub_type: "series".to_string(),
            english_title: response.name.clone(),
            title: response.name,
            year: extract_year(first_air_date),
            data_source: Providers::TmdbSeries.pretty_name().to_string(),
            url: format!("https://www.themoviedb.org/tv/{}", response.id),
            id: response.id.to_string(),
            plot: response.overview,
            genres: names!(response.genres),
            writer: names!(response.created_by),
            studio,
            episodes: response.number_of_episodes,
            duration: response
                .episode_run_time
                .first()
                .map(|r| format!("{r} min"))
                .unwrap_or_default(),
            online_rating: rating(response.vote_average),
            actors: names!(response.credits.cast)
                .into_iter()
                .take(MAX_ACTORS)
                .collect(),
            image: image_url(response.poster_path),
            released: aired_from.is_some(),
            airing: response.in_production,
            aired_from,
            aired_to,
            ..Default::default()
        }
        .into())
    }
}
