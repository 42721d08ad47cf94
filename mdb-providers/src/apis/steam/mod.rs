//! Adapter for the Steam store
//!
//! Search goes through the community app search, details through the store `appdetails` endpoint.
use log::debug;
use mdb_common::{
    model::{GameModel, MediaTypeModel},
    serde_json, Providers,
};

use self::models::{SteamDetailsTopLevel, SteamSearchItem};
use crate::{
    error::ProviderError,
    provider::{
        caps::MediaTypes,
        common::{encode, extract_year, non_empty, parse_date, strip_html},
        MediaApi,
    },
    provider_config::ApiConfig,
};

mod models;

fn store_url(appid: &str) -> String {
    format!("https://store.steampowered.com/app/{appid}")
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SteamApi;

impl SteamApi {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl MediaApi for SteamApi {
    type SearchResponse = Vec<SteamSearchItem>;
    type DetailsResponse = SteamDetailsTopLevel;

    fn provider(&self) -> Providers {
        Providers::Steam
    }

    fn media_types() -> MediaTypes {
        MediaTypes::Game
    }

    fn search_url(&self, config: &ApiConfig, title: &str) -> String {
        format!("{}/{}", config.search_url, encode(title))
    }

    fn details_url(&self, config: &ApiConfig, id: &str) -> String {
        format!("{}?appids={}&l=en", config.base_url, encode(id))
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
            .into_iter()
            .filter(|item| !item.appid.is_empty())
            .map(|item| {
                GameModel {
                    sub_type: "game".to_string(),
                    english_title: item.name.clone(),
                    title: item.name,
                    data_source: Providers::Steam.pretty_name().to_string(),
                    url: store_url(&item.appid),
                    id: item.appid,
                    image: item.logo.as_deref().and_then(non_empty),
                    ..Default::default()
                }
                .into()
            })
            .collect();

        Ok(models)
    }

    fn map_details_response(
        &self,
        mut response: Self::DetailsResponse,
        _config: &ApiConfig,
        id: &str,
    ) -> Result<MediaTypeModel, ProviderError> {
        let not_found = || ProviderError::NotFound { id: id.to_string() };

        let envelope = response.remove(id).ok_or_else(not_found)?;
        if !envelope.success {
            debug!("Steam reported no app with id {id}");
            return Err(not_found());
        }
        let app = envelope.data.ok_or_else(|| ProviderError::MissingField {
            field: "data".to_string(),
        })?;

        let release_date = parse_date(&app.release_date.date);
        let appid = if app.steam_appid == 0 {
            id.to_string()
        } else {
            app.steam_appid.to_string()
        };

        Ok(GameModel {
            sub_type: if app.kind.is_empty() {
                "game".to_string()
            } else {
                app.kind
            },
            english_title: app.name.clone(),
            title: app.name,
            year: extract_year(&app.release_date.date),
            data_source: Providers::Steam.pretty_name().to_string(),
            url: store_url(&appid),
            id: appid,
            developers: app.developers,
            publishers: app.publishers,
            genres: app
                .genres
                .iter()
                .filter_map(|g| non_empty(&strip_html(&g.description)))
                .collect(),
            online_rating: app.metacritic.and_then(|m| m.score).map(f64::from),
            image: app.header_image.as_deref().and_then(non_empty),
            released: !app.release_date.coming_soon,
            release_date,
            ..Default::default()
        }
        .into())
    }
}
