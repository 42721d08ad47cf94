use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::WatchData;

/// A TV series, anime series, OVA or any other episodic release.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesModel {
    pub sub_type: String,
    pub title: String,
    pub english_title: String,
    pub year: Option<u32>,
    pub data_source: String,
    pub url: String,
    pub id: String,

    pub plot: String,
    pub genres: Vec<String>,
    pub writer: Vec<String>,
    pub studio: Vec<String>,
    pub episodes: Option<u32>,
    pub duration: String,
    pub online_rating: Option<f64>,
    pub actors: Vec<String>,
    pub image: Option<String>,
    pub released: bool,
    pub streaming_services: Vec<String>,
    /// Still releasing new episodes.
    pub airing: bool,
    pub aired_from: Option<NaiveDate>,
    pub aired_to: Option<NaiveDate>,

    #[serde(flatten)]
    pub user_data: WatchData,
}
