use mdb_common::serde::{self, Deserialize};

#[derive(Deserialize, Debug)]
#[serde(crate = "self::serde")]
pub struct TmdbSearchTopLevel<T> {
    #[serde(default)]
    pub results: Vec<T>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(crate = "self::serde", default)]
pub struct TmdbMovieResult {
    pub id: u64,
    pub title: String,
    pub original_title: String,
    pub overview: String,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    pub vote_average: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(crate = "self::serde", default)]
pub struct TmdbSeriesResult {
    pub id: u64,
    pub name: String,
    pub original_name: String,
    pub overview: String,
    pub first_air_date: Option<String>,
    pub poster_path: Option<String>,
    pub vote_average: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(crate = "self::serde", default)]
pub struct TmdbMovieDetails {
    pub id: u64,
    pub title: String,
    pub original_title: String,
    pub overview: String,
    pub release_date: Option<String>,
    pub runtime: Option<u32>,
    pub status: String,
    pub genres: Vec<Named>,
    pub production_companies: Vec<Named>,
    pub poster_path: Option<String>,
    pub vote_average: Option<f64>,
    pub credits: Credits,
}

#[derive(Deserialize, Debug, Default)]
#[serde(crate = "self::serde", default)]
pub struct TmdbSeriesDetails {
    pub id: u64,
    pub name: String,
    pub original_name: String,
    pub overview: String,
    pub first_air_date: Option<String>,
    pub last_air_date: Option<String>,
    pub number_of_episodes: Option<u32>,
    pub episode_run_time: Vec<u32>,
    pub in_production: bool,
    pub genres: Vec<Named>,
    pub created_by: Vec<Named>,
    pub networks: Vec<Named>,
    pub production_companies: Vec<Named>,
    pub poster_path: Option<String>,
    pub vote_average: Option<f64>,
    pub credits: Credits,
}

/// Genres, companies, networks and creators all share this shape.
#[derive(Deserialize, Debug, Default)]
#[serde(crate = "self::serde", default)]
pub struct Named {
    pub name: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(crate = "self::serde", default)]
pub struct Credits {
    pub cast: Vec<Named>,
    pub crew: Vec<CrewMember>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(crate = "self::serde", default)]
pub struct CrewMember {
    pub name: String,
    pub job: String,
}

impl Credits {
    pub fn crew_with_job(&self, jobs: &[&str]) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for member in self.crew.iter().filter(|m| jobs.contains(&m.job.as_str())) {
            let name = member.name.trim();
            if !name.is_empty() && !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        names
    }
}
