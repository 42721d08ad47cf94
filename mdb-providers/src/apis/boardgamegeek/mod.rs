//! Adapter for the XML API 2 of `https://boardgamegeek.com`
//!
//! Both endpoints answer with an `<items>` document:
//!
//! ```xml
//! <items>
//!   <item type="boardgame" id="13">
//!     <name type="primary" value="CATAN"/>
//!     <yearpublished value="1995"/>
//!     <link type="boardgamecategory" id="1021" value="Economic"/>
//!     <statistics><ratings><average value="7.1"/><averageweight value="2.3"/></ratings></statistics>
//!   </item>
//! </items>
//! ```
use log::debug;
use mdb_common::{
    model::{BoardGameModel, MediaTypeModel},
    Providers,
};
use roxmltree::{Document, Node};
use std::str::FromStr;

use self::models::BggItem;
use crate::{
    error::ProviderError,
    provider::{
        caps::MediaTypes,
        common::{encode, non_empty, strip_html},
        MediaApi,
    },
    provider_config::ApiConfig,
};

mod models;

fn child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|c| c.has_tag_name(tag))
}

/// Parses the `value` attribute of the first `<tag>` child.
fn value_of<T: FromStr>(node: Node, tag: &str) -> Option<T> {
    child(node, tag)
        .and_then(|c| c.attribute("value"))
        .and_then(|v| v.trim().parse().ok())
}

fn links(node: Node, kind: &str) -> Vec<String> {
    node.children()
        .filter(|c| c.has_tag_name("link") && c.attribute("type") == Some(kind))
        .filter_map(|c| c.attribute("value"))
        .filter_map(non_empty)
        .collect()
}

fn primary_name(node: Node) -> Option<String> {
    let names = || node.children().filter(|c| c.has_tag_name("name"));

    names()
        .find(|c| c.attribute("type") == Some("primary"))
        .or_else(|| names().next())
        .and_then(|c| c.attribute("value"))
        .and_then(non_empty)
}

fn parse_item(node: Node) -> Option<BggItem> {
    let Some(id) = node.attribute("id").and_then(non_empty) else {
        debug!("Skipping BoardGameGeek item without id");
        return None;
    };

    let ratings = child(node, "statistics").and_then(|s| child(s, "ratings"));

    Some(BggItem {
        id,
        kind: node.attribute("type").unwrap_or_default().to_string(),
        name: primary_name(node).unwrap_or_default(),
        year: value_of::<u32>(node, "yearpublished").filter(|y| *y > 0),
        image: child(node, "image")
            .and_then(|c| c.text())
            .and_then(non_empty),
        description: child(node, "description")
            .and_then(|c| c.text())
            .map(strip_html)
            .unwrap_or_default(),
        min_players: value_of::<u32>(node, "minplayers").filter(|p| *p > 0),
        max_players: value_of::<u32>(node, "maxplayers").filter(|p| *p > 0),
        playtime: value_of::<u32>(node, "playingtime").filter(|p| *p > 0),
        categories: links(node, "boardgamecategory"),
        publishers: links(node, "boardgamepublisher"),
        average: ratings
            .and_then(|r| value_of::<f64>(r, "average"))
            .filter(|v| *v > 0.0),
        weight: ratings
            .and_then(|r| value_of::<f64>(r, "averageweight"))
            .filter(|v| *v > 0.0),
    })
}

/// Reads every `<item>` of an `<items>` document.
///
/// An `<error>` document becomes [`ProviderError::ApiError`].
pub fn parse_items(data: &str) -> Result<Vec<BggItem>, ProviderError> {
    let doc = Document::parse(data)?;
    let root = doc.root_element();

    if root.has_tag_name("error") || root.has_tag_name("errors") {
        let message = root
            .descendants()
            .find(|n| n.has_tag_name("message"))
            .and_then(|n| n.text())
            .unwrap_or("Unknown error")
            .trim()
            .to_string();
        return Err(ProviderError::ApiError { message });
    }

    Ok(root
        .children()
        .filter(|c| c.has_tag_name("item"))
        .filter_map(parse_item)
        .collect())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BoardGameGeekApi;

impl BoardGameGeekApi {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn map_item(item: BggItem) -> MediaTypeModel {
        BoardGameModel {
            english_title: item.name.clone(),
            title: item.name,
            year: item.year,
            data_source: Providers::BoardGameGeek.pretty_name().to_string(),
            url: format!("https://boardgamegeek.com/boardgame/{}", item.id),
            id: item.id,
            genres: item.categories,
            online_rating: item.average,
            complexity_rating: item.weight,
            min_players: item.min_players,
            max_players: item.max_players,
            playtime: item.playtime,
            publishers: item.publishers,
            plot: item.description,
            image: item.image,
            released: item.year.is_some(),
            ..Default::default()
        }
        .into()
    }
}

impl MediaApi for BoardGameGeekApi {
    type SearchResponse = Vec<BggItem>;
    type DetailsResponse = Vec<BggItem>;

    fn provider(&self) -> Providers {
        Providers::BoardGameGeek
    }

    fn media_types() -> MediaTypes {
        MediaTypes::BoardGame
    }

    fn search_url(&self, config: &ApiConfig, title: &str) -> String {
        format!(
            "{}?query={}&type=boardgame",
            config.search_url,
            encode(title)
        )
    }

    fn details_url(&self, config: &ApiConfig, id: &str) -> String {
        format!("{}?id={}&stats=1", config.base_url, encode(id))
    }

    fn deserialize_search(&self, data: &str) -> Result<Self::SearchResponse, ProviderError> {
        parse_items(data)
    }

    fn deserialize_details(&self, data: &str) -> Result<Self::DetailsResponse, ProviderError> {
        parse_items(data)
    }

    fn map_search_response(
        &self,
        response: Self::SearchResponse,
        _config: &ApiConfig,
    ) -> Result<Vec<MediaTypeModel>, ProviderError> {
        Ok(response
            .into_iter()
            .filter(|item| item.kind.is_empty() || item.kind.starts_with("boardgame"))
            .map(Self::map_item)
            .collect())
    }

    fn map_details_response(
        &self,
        response: Self::DetailsResponse,
        _config: &ApiConfig,
        id: &str,
    ) -> Result<MediaTypeModel, ProviderError> {
        response
            .into_iter()
            .find(|item| item.id == id)
            .map(Self::map_item)
            .ok_or_else(|| ProviderError::NotFound { id: id.to_string() })
    }
}
