use mdb_common::serde::{self, Deserialize};
use std::collections::HashMap;

/// Rows of the community app search. The app id comes as a string.
#[derive(Deserialize, Debug, Default)]
#[serde(crate = "self::serde", default)]
pub struct SteamSearchItem {
    pub appid: String,
    pub name: String,
    pub logo: Option<String>,
}

/// `appdetails` answers with an object keyed by the requested app id.
pub type SteamDetailsTopLevel = HashMap<String, SteamAppEnvelope>;

#[derive(Deserialize, Debug, Default)]
#[serde(crate = "self::serde", default)]
pub struct SteamAppEnvelope {
    pub success: bool,
    pub data: Option<SteamApp>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(crate = "self::serde", default)]
pub struct SteamApp {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub steam_appid: u64,
    pub header_image: Option<String>,
    pub developers: Vec<String>,
    pub publishers: Vec<String>,
    pub genres: Vec<SteamGenre>,
    pub release_date: SteamReleaseDate,
    pub metacritic: Option<SteamMetacritic>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(crate = "self::serde", default)]
pub struct SteamGenre {
    pub description: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(crate = "self::serde", default)]
pub struct SteamReleaseDate {
    pub coming_soon: bool,
    pub date: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(crate = "self::serde", default)]
pub struct SteamMetacritic {
    pub score: Option<u32>,
}
