//! Modules that work by querying a metadata provider and mapping its answer into a list of
//! [media models](mdb_common::model::MediaTypeModel).
//!
//! # Adapters
//!
//! Every provider is described by a type implementing [`MediaApi`]: it knows how to build the
//! request URLs, decode the response body and map it into the media model. It never touches the
//! network.
//!
//! [`MediaClient`] pairs an adapter with an [`ApiConfig`] and an HTTP client and does the actual
//! fetching, exposing the result through [`MetadataSource`].
//!
//! ```no_run
//! use mdb_providers::prelude::*;
//!
//! async fn search() -> Result<(), ProviderError> {
//!     let config = DEFAULT_APIS.get("jikan").unwrap().clone();
//!     let client = MediaClient::new(JikanApi::new(), config)?;
//!
//!     for model in client.search_by_title("Cowboy Bebop").await? {
//!         println!("{} ({:?})", model.title(), model.year());
//!     }
//!     Ok(())
//! }
//! ```
#![deny(clippy::nursery)]
use std::future::Future;

use log::debug;
use mdb_common::{
    client,
    model::MediaTypeModel,
    reqwest::{Client, StatusCode},
    Providers,
};

use crate::error::ProviderError;
use crate::provider::caps::MediaTypes;
use crate::provider_config::ApiConfig;

pub mod caps;
pub mod common;

/// API specific logic of one metadata provider.
pub trait MediaApi: Send + Sync {
    type SearchResponse;
    type DetailsResponse;

    /// The provider this adapter talks to.
    fn provider(&self) -> Providers;

    /// Expose some bitflags to indicate the media types this adapter can return.
    fn media_types() -> MediaTypes;

    fn search_url(&self, config: &ApiConfig, title: &str) -> String;

    fn details_url(&self, config: &ApiConfig, id: &str) -> String;

    fn deserialize_search(&self, data: &str) -> Result<Self::SearchResponse, ProviderError>;

    fn deserialize_details(&self, data: &str) -> Result<Self::DetailsResponse, ProviderError>;

    /// Maps a search response. Items of kinds the adapter doesn't handle are skipped.
    fn map_search_response(
        &self,
        response: Self::SearchResponse,
        config: &ApiConfig,
    ) -> Result<Vec<MediaTypeModel>, ProviderError>;

    /// Maps a details response for the item `id`.
    fn map_details_response(
        &self,
        response: Self::DetailsResponse,
        config: &ApiConfig,
        id: &str,
    ) -> Result<MediaTypeModel, ProviderError>;

    /// Only `200 OK` is accepted; `401` means the key was rejected.
    fn check_status(&self, status: StatusCode, url: &str) -> Result<(), ProviderError> {
        match status {
            StatusCode::OK => Ok(()),
            StatusCode::UNAUTHORIZED => Err(ProviderError::InvalidApiKey {
                provider: self.provider(),
            }),
            other => Err(ProviderError::UnexpectedStatus {
                status: other.as_u16(),
                url: url.to_string(),
            }),
        }
    }
}

/// The common public interface of every configured provider.
pub trait MetadataSource {
    fn provider(&self) -> Providers;

    fn media_types(&self) -> MediaTypes;

    /// Searches the provider for items matching `title`. The result may be empty.
    fn search_by_title(
        &self,
        title: &str,
    ) -> impl Future<Output = Result<Vec<MediaTypeModel>, ProviderError>> + Send;

    /// Fetches the full details of one item.
    fn get_by_id(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<MediaTypeModel, ProviderError>> + Send;
}

/// Generic HTTP front of an adapter.
#[derive(Debug, Clone)]
pub struct MediaClient<A: MediaApi> {
    client: Client,
    api: A,
    config: ApiConfig,
}

impl<A: MediaApi> MediaClient<A> {
    /// Sets up a client with the user agent of `config`.
    pub fn new(api: A, config: ApiConfig) -> Result<Self, ProviderError> {
        let client = client!(&config.user_agent)?;
        Self::with_client(api, config, client)
    }

    /// Same as [`new`](Self::new) but reuses an existing `reqwest::Client`.
    pub fn with_client(api: A, config: ApiConfig, client: Client) -> Result<Self, ProviderError> {
        if config.provider != api.provider() {
            return Err(ProviderError::InvalidProvider {
                provider: config.name,
            });
        }

        Ok(Self {
            client,
            api,
            config,
        })
    }

    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Maps a search response body obtained through other means.
    pub fn map_search(&self, raw: &str) -> Result<Vec<MediaTypeModel>, ProviderError> {
        let response = self.api.deserialize_search(raw)?;
        let models = self.api.map_search_response(response, &self.config)?;
        debug!("{} mapped {} search results", self.api.provider(), models.len());
        Ok(models)
    }

    /// Maps a details response body obtained through other means.
    pub fn map_details(&self, raw: &str, id: &str) -> Result<MediaTypeModel, ProviderError> {
        let response = self.api.deserialize_details(raw)?;
        self.api.map_details_response(response, &self.config, id)
    }

    fn ensure_key(&self) -> Result<(), ProviderError> {
        if self.config.requires_key && self.config.api_key().is_none() {
            return Err(ProviderError::MissingApiKey {
                provider: self.config.provider,
            });
        }
        Ok(())
    }

    async fn fetch(&self, url: &str) -> Result<String, ProviderError> {
        debug!("Requesting {}", self.config.redact(url));

        let response = self.client.get(url).send().await?;
        self.api.check_status(response.status(), &self.config.redact(url))?;

        Ok(response.text().await?)
    }
}

impl<A: MediaApi> MetadataSource for MediaClient<A> {
    fn provider(&self) -> Providers {
        self.api.provider()
    }

    fn media_types(&self) -> MediaTypes {
        A::media_types()
    }

    async fn search_by_title(&self, title: &str) -> Result<Vec<MediaTypeModel>, ProviderError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ProviderError::EmptyQuery);
        }
        self.ensure_key()?;

        let url = self.api.search_url(&self.config, title);
        let body = self.fetch(&url).await?;

        self.map_search(&body)
    }

    async fn get_by_id(&self, id: &str) -> Result<MediaTypeModel, ProviderError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ProviderError::EmptyQuery);
        }
        self.ensure_key()?;

        let url = self.api.details_url(&self.config, id);
        let body = self.fetch(&url).await?;

        self.map_details(&body, id)
    }
}
