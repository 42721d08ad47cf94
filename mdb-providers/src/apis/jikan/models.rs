use mdb_common::serde::{self, Deserialize};

#[derive(Deserialize, Debug, Default)]
#[serde(crate = "self::serde", default)]
pub struct JikanSearchTopLevel {
    pub data: Vec<JikanAnime>,
}

#[derive(Deserialize, Debug)]
#[serde(crate = "self::serde")]
pub struct JikanDetailsTopLevel {
    pub data: JikanAnime,
}

#[derive(Deserialize, Debug, Default)]
#[serde(crate = "self::serde", default)]
pub struct JikanAnime {
    pub mal_id: u64,
    pub url: String,
    pub images: JikanImages,
    pub title: String,
    pub title_english: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub episodes: Option<u32>,
    pub status: String,
    pub airing: bool,
    pub aired: JikanAired,
    pub duration: String,
    pub score: Option<f64>,
    pub synopsis: Option<String>,
    pub year: Option<u32>,
    pub studios: Vec<JikanEntry>,
    pub genres: Vec<JikanEntry>,
    pub streaming: Vec<JikanEntry>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(crate = "self::serde", default)]
pub struct JikanImages {
    pub jpg: JikanImage,
}

#[derive(Deserialize, Debug, Default)]
#[serde(crate = "self::serde", default)]
pub struct JikanImage {
    pub image_url: Option<String>,
    pub large_image_url: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(crate = "self::serde", default)]
pub struct JikanAired {
    pub from: Option<String>,
    pub to: Option<String>,
    pub prop: JikanAiredProp,
}

#[derive(Deserialize, Debug, Default)]
#[serde(crate = "self::serde", default)]
pub struct JikanAiredProp {
    pub from: JikanDateParts,
}

#[derive(Deserialize, Debug, Default)]
#[serde(crate = "self::serde", default)]
pub struct JikanDateParts {
    pub year: Option<u32>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(crate = "self::serde", default)]
pub struct JikanEntry {
    pub name: String,
}
