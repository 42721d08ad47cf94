use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::PlayData;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameModel {
    pub sub_type: String,
    pub title: String,
    pub english_title: String,
    pub year: Option<u32>,
    pub data_source: String,
    pub url: String,
    pub id: String,

    pub developers: Vec<String>,
    pub publishers: Vec<String>,
    pub genres: Vec<String>,
    pub online_rating: Option<f64>,
    pub image: Option<String>,
    pub released: bool,
    pub release_date: Option<NaiveDate>,

    #[serde(flatten)]
    pub user_data: PlayData,
}
