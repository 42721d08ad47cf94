//! Adapter for MyAnimeList data served by `https://api.jikan.moe/v4`
//!
//! Anime entries of type `Movie` become movies, every other type (`TV`, `OVA`, `ONA`, ...)
//! becomes a series.
use mdb_common::{
    model::{MediaTypeModel, MovieModel, SeriesModel},
    names, serde_json, Providers,
};

use self::models::{JikanAnime, JikanDetailsTopLevel, JikanSearchTopLevel};
use crate::{
    error::ProviderError,
    provider::{
        caps::MediaTypes,
        common::{encode, non_empty, parse_date, strip_html},
        MediaApi,
    },
    provider_config::ApiConfig,
};

mod models;

const SEARCH_LIMIT: u8 = 20;
const NOT_YET_AIRED: &str = "Not yet aired";
const CURRENTLY_AIRING: &str = "Currently Airing";

#[derive(Debug, Clone, Copy, Default)]
pub struct JikanApi;

impl JikanApi {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn map_anime(item: JikanAnime) -> MediaTypeModel {
        let kind = item.kind.unwrap_or_default();
        let year = item.year.or(item.aired.prop.from.year);
        let aired_from = item.aired.from.as_deref().and_then(parse_date);
        let english_title = item
            .title_english
            .as_deref()
            .and_then(non_empty)
            .unwrap_or_else(|| item.title.clone());
        let image = item
            .images
            .jpg
            .large_image_url
            .or(item.images.jpg.image_url)
            .as_deref()
            .and_then(non_empty);
        let plot = item.synopsis.as_deref().map(strip_html).unwrap_or_default();
        let released = item.status != NOT_YET_AIRED;
        let data_source = Providers::Jikan.pretty_name().to_string();

        if kind == "Movie" {
            return MovieModel {
                sub_type: kind.to_lowercase(),
                title: item.title,
                english_title,
                year,
                data_source,
                url: item.url,
                id: item.mal_id.to_string(),
                plot,
                genres: names!(item.genres),
                studio: names!(item.studios),
                duration: item.duration,
                online_rating: item.score,
                image,
                released,
                streaming_services: names!(item.streaming),
                premiere: aired_from,
                ..Default::default()
            }
            .into();
        }

        SeriesModel {
            sub_type: kind.to_lowercase(),
            title: item.title,
            english_title,
            year,
            data_source,
            url: item.url,
            id: item.mal_id.to_string(),
            plot,
            genres: names!(item.genres),
            studio: names!(item.studios),
            episodes: item.episodes,
            duration: item.duration,
            online_rating: item.score,
            image,
            released,
            streaming_services: names!(item.streaming),
            airing: item.airing || item.status == CURRENTLY_AIRING,
            aired_from,
            aired_to: item.aired.to.as_deref().and_then(parse_date),
            ..Default::default()
        }
        .into()
    }
}

impl MediaApi for JikanApi {
    type SearchResponse = JikanSearchTopLevel;
    type DetailsResponse = JikanDetailsTopLevel;

    fn provider(&self) -> Providers {
        Providers::Jikan
    }

    fn media_types() -> MediaTypes {
        MediaTypes::Movie | MediaTypes::Series
    }

    fn search_url(&self, config: &ApiConfig, title: &str) -> String {
        format!(
            "{}?q={}&limit={SEARCH_LIMIT}",
            config.search_url,
            encode(title)
        )
    }

    fn details_url(&self, config: &ApiConfig, id: &str) -> String {
        format!("{}/{}/full", config.base_url, encode(id))
    }

    fn deserialize_search(&self, data: &str) -> Result<Self::SearchResponse, ProviderError> {
        Ok(serde_json::from_str(data)?)
    }

    fn deserialize_details(&self, data: &str) -> Result<Self::DetailsResponse, ProviderError> {
        Ok(serde_json::from_str(data)?)
    }

    fn map_search_response(
        &self,
        response: Self::SearchResponse,
        _config: &ApiConfig,
    ) -> Result<Vec<MediaTypeModel>, ProviderError> {
        Ok(response.data.into_iter().map(Self::map_anime).collect())
    }

    fn map_details_response(
        &self,
        response: Self::DetailsResponse,
        _config: &ApiConfig,
        _id: &str,
    ) -> Result<MediaTypeModel, ProviderError> {
        if response.data.mal_id == 0 {
            return Err(ProviderError::MissingField {
                field: "mal_id".to_string(),
            });
        }
        Ok(Self::map_anime(response.data))
    }
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;
    use mdb_common::MediaType;

    use super::*;

    const BEBOP: &str = r#"{"data": {
        "mal_id": 1, "url": "https://myanimelist.net/anime/1/Cowboy_Bebop",
        "images": {"jpg": {"image_url": "https://cdn.myanimelist.net/images/anime/4/19644.jpg",
                           "large_image_url": "https://cdn.myanimelist.net/images/anime/4/19644l.jpg"}},
        "title": "Cowboy Bebop", "title_english": "Cowboy Bebop", "type": "TV", "episodes": 26,
        "status": "Finished Airing", "airing": false,
        "aired": {"from": "1998-04-03T00:00:00+00:00", "to": "1999-04-24T00:00:00+00:00",
                  "prop": {"from": {"day": 3, "month": 4, "year": 1998}}},
        "duration": "24 min per ep", "score": 8.75,
        "synopsis": "Crime is timeless.&#10;&#10;[Written by MAL Rewrite]", "year": 1998,
        "studios": [{"mal_id": 14, "name": "Sunrise"}],
        "genres": [{"name": "Action"}, {"name": "Award Winning"}, {"name": "Sci-Fi"}],
        "streaming": [{"name": "Crunchyroll", "url": "http://www.crunchyroll.com/"}]
    }}"#;

    #[test]
    fn urls() {
        let api = JikanApi::new();
        let config = ApiConfig::for_provider(Providers::Jikan);

        assert_eq!(
            api.search_url(&config, "Cowboy Bebop"),
            "https://api.jikan.moe/v4/anime?q=Cowboy%20Bebop&limit=20"
        );
        assert_eq!(
            api.details_url(&config, "1"),
            "https://api.jikan.moe/v4/anime/1/full"
        );
    }

    #[test]
    fn map_series_details() {
        let api = JikanApi::new();
        let config = ApiConfig::for_provider(Providers::Jikan);
        let model = api
            .map_details_response(api.deserialize_details(BEBOP).unwrap(), &config, "1")
            .unwrap();

        let MediaTypeModel::Series(series) = model else {
            panic!("expected a series");
        };
        assert_eq!(series.sub_type, "tv");
        assert_eq!(series.year, Some(1998));
        assert_eq!(series.episodes, Some(26));
        assert_eq!(series.studio, ["Sunrise"]);
        assert_eq!(series.streaming_services, ["Crunchyroll"]);
        assert_eq!(series.aired_from, NaiveDate::from_ymd_opt(1998, 4, 3));
        assert_eq!(series.aired_to, NaiveDate::from_ymd_opt(1999, 4, 24));
        assert_eq!(series.plot, "Crime is timeless.\n\n[Written by MAL Rewrite]");
        assert_eq!(
            series.image.as_deref(),
            Some("https://cdn.myanimelist.net/images/anime/4/19644l.jpg")
        );
        assert_eq!(series.data_source, "MALAPI");
        assert!(series.released);
        assert!(!series.airing);
    }

    #[test]
    fn map_search_splits_movies_and_series() {
        let api = JikanApi::new();
        let config = ApiConfig::for_provider(Providers::Jikan);
        let raw = r#"{"data": [
            {"mal_id": 5, "url": "u", "title": "Cowboy Bebop: Tengoku no Tobira",
             "title_english": "Cowboy Bebop: The Movie", "type": "Movie", "status": "Finished Airing",
             "aired": {"from": "2001-09-01T00:00:00+00:00", "to": null, "prop": {"from": {"year": 2001}}},
             "year": null, "synopsis": null},
            {"mal_id": 99999, "url": "u", "title": "Upcoming", "title_english": null, "type": "TV",
             "status": "Not yet aired", "aired": {"from": null, "to": null, "prop": {"from": {"year": null}}}}
        ], "pagination": {"has_next_page": false}}"#;

        let models = api
            .map_search_response(api.deserialize_search(raw).unwrap(), &config)
            .unwrap();

        assert_eq!(models[0].media_type(), MediaType::Movie);
        assert_eq!(models[0].year(), Some(2001));

        let MediaTypeModel::Movie(movie) = &models[0] else {
            panic!("expected a movie");
        };
        assert_eq!(movie.english_title, "Cowboy Bebop: The Movie");
        assert_eq!(movie.premiere, NaiveDate::from_ymd_opt(2001, 9, 1));

        let MediaTypeModel::Series(upcoming) = &models[1] else {
            panic!("expected a series");
        };
        assert_eq!(upcoming.english_title, "Upcoming");
        assert_eq!(upcoming.year, None);
        assert!(!upcoming.released);
    }
}
