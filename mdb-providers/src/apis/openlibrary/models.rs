use mdb_common::serde::{self, Deserialize};

#[derive(Deserialize, Debug, Default)]
#[serde(crate = "self::serde", default)]
pub struct OpenLibrarySearchTopLevel {
    #[serde(rename = "numFound")]
    pub num_found: u64,
    pub docs: Vec<OpenLibraryDoc>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(crate = "self::serde", default)]
pub struct OpenLibraryDoc {
    pub key: String,
    pub title: String,
    pub author_name: Vec<String>,
    pub first_publish_year: Option<u32>,
    pub cover_i: Option<i64>,
    pub isbn: Vec<String>,
    pub number_of_pages_median: Option<u32>,
    pub publisher: Vec<String>,
    pub ratings_average: Option<f64>,
    pub first_sentence: Vec<String>,
}
