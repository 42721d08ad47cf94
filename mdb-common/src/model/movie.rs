use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::WatchData;

/// A feature film, including animated movies from anime databases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieModel {
    /// Provider-specific kind, e.g. `movie` on OMDb or `Movie` on MyAnimeList.
    pub sub_type: String,
    pub title: String,
    pub english_title: String,
    pub year: Option<u32>,
    pub data_source: String,
    pub url: String,
    pub id: String,

    pub plot: String,
    pub genres: Vec<String>,
    pub director: Vec<String>,
    pub writer: Vec<String>,
    pub studio: Vec<String>,
    pub duration: String,
    pub online_rating: Option<f64>,
    pub actors: Vec<String>,
    pub image: Option<String>,
    pub released: bool,
    pub streaming_services: Vec<String>,
    pub premiere: Option<NaiveDate>,

    #[serde(flatten)]
    pub user_data: WatchData,
}
