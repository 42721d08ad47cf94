use serde::{Deserialize, Serialize};

use super::ReadData;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookModel {
    pub title: String,
    pub english_title: String,
    pub year: Option<u32>,
    pub data_source: String,
    pub url: String,
    pub id: String,

    pub author: Vec<String>,
    pub plot: String,
    pub pages: Option<u32>,
    pub image: Option<String>,
    pub online_rating: Option<f64>,
    /// ISBN-10, when the provider lists one.
    pub isbn: Option<String>,
    pub isbn13: Option<String>,
    pub publishers: Vec<String>,
    pub released: bool,

    #[serde(flatten)]
    pub user_data: ReadData,
}
