/// One `<item>` of a BoardGameGeek XML API 2 answer.
///
/// Search answers only fill `id`, `kind`, `name` and `year`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BggItem {
    pub id: String,
    pub kind: String,
    pub name: String,
    pub year: Option<u32>,
    pub image: Option<String>,
    pub description: String,
    pub min_players: Option<u32>,
    pub max_players: Option<u32>,
    pub playtime: Option<u32>,
    pub categories: Vec<String>,
    pub publishers: Vec<String>,
    pub average: Option<f64>,
    pub weight: Option<f64>,
}
