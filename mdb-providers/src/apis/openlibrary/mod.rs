//! Adapter for `https://openlibrary.org`
//!
//! Books are identified by their work key (`/works/OL27448W`). There is no details endpoint
//! returning everything a note needs, so details are a search for the key.
use log::debug;
use mdb_common::{
    model::{BookModel, MediaTypeModel},
    serde_json, Providers,
};

use self::models::{OpenLibraryDoc, OpenLibrarySearchTopLevel};
use crate::{
    error::ProviderError,
    provider::{
        caps::MediaTypes,
        common::{encode, non_empty, strip_html},
        MediaApi,
    },
    provider_config::ApiConfig,
};

mod models;

const COVER_URL: &str = "https://covers.openlibrary.org/b/id";
const MAX_PUBLISHERS: usize = 5;

/// `OL27448W` and `/works/OL27448W` name the same work.
fn work_id(id: &str) -> &str {
    id.trim().trim_start_matches("/works/")
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OpenLibraryApi;

impl OpenLibraryApi {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn map_doc(doc: OpenLibraryDoc, config: &ApiConfig) -> MediaTypeModel {
        let (isbn, isbn13) = pick_isbns(&doc.isbn);

        BookModel {
            english_title: doc.title.clone(),
            title: doc.title,
            year: doc.first_publish_year,
            data_source: Providers::OpenLibrary.pretty_name().to_string(),
            url: format!("{}{}", config.base_url.trim_end_matches('/'), doc.key),
            id: doc.key,
            author: doc.author_name,
            plot: doc
                .first_sentence
                .first()
                .map(|s| strip_html(s))
                .unwrap_or_default(),
            pages: doc.number_of_pages_median,
            image: doc
                .cover_i
                .filter(|cover| *cover > 0)
                .map(|cover| format!("{COVER_URL}/{cover}-L.jpg")),
            online_rating: doc.ratings_average,
            isbn,
            isbn13,
            publishers: doc
                .publisher
                .iter()
                .filter_map(|p| non_empty(p))
                .take(MAX_PUBLISHERS)
                .collect(),
            released: doc.first_publish_year.is_some(),
            ..Default::default()
        }
        .into()
    }
}

/// Picks the first ISBN-10 and the first ISBN-13 of the list.
fn pick_isbns(list: &[String]) -> (Option<String>, Option<String>) {
    let of_len = |len: usize| {
        list.iter()
            .map(|isbn| isbn.trim())
            .find(|isbn| isbn.len() == len)
            .map(ToString::to_string)
    };
    (of_len(10), of_len(13))
}

impl MediaApi for OpenLibraryApi {
    type SearchResponse = OpenLibrarySearchTopLevel;
    type DetailsResponse = OpenLibrarySearchTopLevel;

    fn provider(&self) -> Providers {
        Providers::OpenLibrary
    }

    fn media_types() -> MediaTypes {
        MediaTypes::Book
    }

    fn search_url(&self, config: &ApiConfig, title: &str) -> String {
        format!("{}?title={}", config.search_url, encode(title))
    }

    fn details_url(&self, config: &ApiConfig, id: &str) -> String {
        format!("{}?q={}", config.search_url, encode(work_id(id)))
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
        config: &ApiConfig,
    ) -> Result<Vec<MediaTypeModel>, ProviderError> {
        debug!("Open Library found {} works", response.num_found);

        Ok(response
            .docs
            .into_iter()
            .filter(|doc| !doc.key.is_empty())
            .map(|doc| Self::map_doc(doc, config))
            .collect())
    }

    fn map_details_response(
        &self,
        response: Self::DetailsResponse,
        config: &ApiConfig,
        id: &str,
    ) -> Result<MediaTypeModel, ProviderError> {
        let wanted = work_id(id);
        let mut docs = response.docs;

        let position = docs
            .iter()
            .position(|doc| work_id(&doc.key) == wanted)
            .unwrap_or(0);

        if position >= docs.len() {
            return Err(ProviderError::NotFound { id: id.to_string() });
        }

        Ok(Self::map_doc(docs.swap_remove(position), config))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const LOTR: &str = r#"{"numFound": 2, "start": 0, "docs": [
        {"key": "/works/OL27448W", "title": "The Lord of the Rings", "author_name": ["J.R.R. Tolkien"],
         "first_publish_year": 1954, "cover_i": 14625765,
         "isbn": ["9780618640157", "0618640150", "061826027X"], "number_of_pages_median": 1193,
         "publisher": ["Houghton Mifflin", "Allen & Unwin"], "ratings_average": 4.2,
         "first_sentence": ["Three Rings for the Elven-kings under the sky..."]},
        {"key": "/works/OL1W", "title": "Companion"}
    ]}"#;

    fn config() -> ApiConfig {
        ApiConfig::for_provider(Providers::OpenLibrary)
    }

    #[test]
    fn urls() {
        let api = OpenLibraryApi::new();
        assert_eq!(
            api.search_url(&config(), "The Hobbit"),
            "https://openlibrary.org/search.json?title=The%20Hobbit"
        );
        assert_eq!(
            api.details_url(&config(), "/works/OL27448W"),
            "https://openlibrary.org/search.json?q=OL27448W"
        );
        assert_eq!(
            api.details_url(&config(), "OL27448W"),
            "https://openlibrary.org/search.json?q=OL27448W"
        );
    }

    #[test]
    fn map_details() {
        let api = OpenLibraryApi::new();
        let model = api
            .map_details_response(api.deserialize_details(LOTR).unwrap(), &config(), "OL27448W")
            .unwrap();

        let MediaTypeModel::Book(book) = model else {
            panic!("expected a book");
        };
        assert_eq!(book.id, "/works/OL27448W");
        assert_eq!(book.url, "https://openlibrary.org/works/OL27448W");
        assert_eq!(book.author, ["J.R.R. Tolkien"]);
        assert_eq!(book.year, Some(1954));
        assert_eq!(book.pages, Some(1193));
        assert_eq!(book.isbn.as_deref(), Some("0618640150"));
        assert_eq!(book.isbn13.as_deref(), Some("9780618640157"));
        assert_eq!(
            book.image.as_deref(),
            Some("https://covers.openlibrary.org/b/id/14625765-L.jpg")
        );
        assert_eq!(book.publishers, ["Houghton Mifflin", "Allen & Unwin"]);
        assert_eq!(book.data_source, "OpenLibraryAPI");
    }

    #[test]
    fn map_search_keeps_sparse_docs() {
        let api = OpenLibraryApi::new();
        let models = api
            .map_search_response(api.deserialize_search(LOTR).unwrap(), &config())
            .unwrap();

        assert_eq!(models.len(), 2);

        let MediaTypeModel::Book(companion) = &models[1] else {
            panic!("expected a book");
        };
        assert_eq!(companion.year, None);
        assert_eq!(companion.image, None);
        assert_eq!(companion.isbn, None);
        assert!(!companion.released);
    }

    #[test]
    fn no_docs_is_not_found() {
        let api = OpenLibraryApi::new();
        let empty = api
            .deserialize_details(r#"{"numFound": 0, "docs": []}"#)
            .unwrap();

        assert!(matches!(
            api.map_details_response(empty, &config(), "/works/OL0W"),
            Err(ProviderError::NotFound { .. })
        ));
    }

    #[test]
    fn details_pick_the_matching_work() {
        let api = OpenLibraryApi::new();
        let raw = r#"{"numFound": 2, "docs": [
            {"key": "/works/OL1W", "title": "Companion", "cover_i": -1},
            {"key": "/works/OL27448W", "title": "The Lord of the Rings", "cover_i": 14625765}
        ]}"#;

        let response = api.deserialize_details(raw).unwrap();
        let model = api
            .map_details_response(response, &config(), "/works/OL27448W")
            .unwrap();
        assert_eq!(model.title(), "The Lord of the Rings");

        let response = api.deserialize_details(raw).unwrap();
        let MediaTypeModel::Book(companion) = api
            .map_details_response(response, &config(), "OL1W")
            .unwrap()
        else {
            panic!("expected a book");
        };
        assert_eq!(companion.title, "Companion");
        assert_eq!(companion.image, None);
    }
}
