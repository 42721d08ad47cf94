use serde::{Deserialize, Serialize};

use super::PlayData;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardGameModel {
    pub title: String,
    pub english_title: String,
    pub year: Option<u32>,
    pub data_source: String,
    pub url: String,
    pub id: String,

    pub genres: Vec<String>,
    pub online_rating: Option<f64>,
    /// Average "weight" as voted by the community, from 1 (light) to 5 (heavy).
    pub complexity_rating: Option<f64>,
    pub min_players: Option<u32>,
    pub max_players: Option<u32>,
    /// Playing time in minutes.
    pub playtime: Option<u32>,
    pub publishers: Vec<String>,
    pub plot: String,
    pub image: Option<String>,
    pub released: bool,

    #[serde(flatten)]
    pub user_data: PlayData,
}
