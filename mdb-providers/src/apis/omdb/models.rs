use mdb_common::serde::{self, Deserialize};

#[derive(Deserialize, Debug, Default)]
#[serde(crate = "self::serde", rename_all = "PascalCase", default)]
pub struct OmdbSearchTopLevel {
    pub search: Vec<OmdbSearchItem>,
    pub response: String,
    pub error: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(crate = "self::serde", rename_all = "PascalCase", default)]
pub struct OmdbSearchItem {
    pub title: String,
    pub year: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Type")]
    pub kind: String,
    pub poster: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(crate = "self::serde", rename_all = "PascalCase", default)]
pub struct OmdbDetails {
    pub title: String,
    pub year: String,
    pub released: String,
    pub runtime: String,
    pub genre: String,
    pub director: String,
    pub writer: String,
    pub actors: String,
    pub plot: String,
    pub poster: String,
    pub production: String,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Type")]
    pub kind: String,
    pub response: String,
    pub error: Option<String>,
}
