//! Main representation of a media item
//!
//! # Media model
//! Every provider maps its own response schema into one of the structs in this module.
//! [`MediaTypeModel`] wraps them so callers can handle results from any provider uniformly.
//!
//! The model is plain data: it carries no client, no provider state and never fails to
//! produce its [metadata](MediaTypeModel::metadata).
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::MediaType;

pub mod board_game;
pub mod book;
pub mod game;
pub mod movie;
pub mod series;

pub use self::{
    board_game::BoardGameModel, book::BookModel, game::GameModel, movie::MovieModel,
    series::SeriesModel,
};

/// Personal tracking fields of movies and series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchData {
    pub watched: bool,
    pub last_watched: String,
    pub personal_rating: Option<f64>,
}

/// Personal tracking fields of video and board games.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayData {
    pub played: bool,
    pub personal_rating: Option<f64>,
}

/// Personal tracking fields of books.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadData {
    pub read: bool,
    pub last_read: String,
    pub personal_rating: Option<f64>,
}

/// Catchall model for any media item returned by a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MediaTypeModel {
    Movie(MovieModel),
    Series(SeriesModel),
    Game(GameModel),
    Book(BookModel),
    BoardGame(BoardGameModel),
}

macro_rules! each_model {
    ($self:expr, $m:ident => $body:expr) => {
        match $self {
            MediaTypeModel::Movie($m) => $body,
            MediaTypeModel::Series($m) => $body,
            MediaTypeModel::Game($m) => $body,
            MediaTypeModel::Book($m) => $body,
            MediaTypeModel::BoardGame($m) => $body,
        }
    };
}

impl MediaTypeModel {
    #[inline]
    pub const fn media_type(&self) -> MediaType {
        match self {
            Self::Movie(_) => MediaType::Movie,
            Self::Series(_) => MediaType::Series,
            Self::Game(_) => MediaType::Game,
            Self::Book(_) => MediaType::Book,
            Self::BoardGame(_) => MediaType::BoardGame,
        }
    }

    #[inline]
    pub fn title(&self) -> &str {
        each_model!(self, m => m.title.as_str())
    }

    #[inline]
    pub fn year(&self) -> Option<u32> {
        each_model!(self, m => m.year)
    }

    #[inline]
    pub fn id(&self) -> &str {
        each_model!(self, m => m.id.as_str())
    }

    #[inline]
    pub fn data_source(&self) -> &str {
        each_model!(self, m => m.data_source.as_str())
    }

    #[inline]
    pub fn url(&self) -> &str {
        each_model!(self, m => m.url.as_str())
    }

    /// Flattens the model into an insertion-ordered map of camelCase fields.
    ///
    /// The first key is always `type`, holding the [`MediaType`] as a string.
    pub fn metadata(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(
            "type".to_string(),
            Value::String(self.media_type().to_string()),
        );

        let fields = each_model!(self, m => serde_json::to_value(m));

        if let Ok(Value::Object(fields)) = fields {
            map.extend(fields);
        }

        map
    }
}

impl From<MovieModel> for MediaTypeModel {
    fn from(value: MovieModel) -> Self {
        Self::Movie(value)
    }
}

impl From<SeriesModel> for MediaTypeModel {
    fn from(value: SeriesModel) -> Self {
        Self::Series(value)
    }
}

impl From<GameModel> for MediaTypeModel {
    fn from(value: GameModel) -> Self {
        Self::Game(value)
    }
}

impl From<BookModel> for MediaTypeModel {
    fn from(value: BookModel) -> Self {
        Self::Book(value)
    }
}

impl From<BoardGameModel> for MediaTypeModel {
    fn from(value: BoardGameModel) -> Self {
        Self::BoardGame(value)
    }
}
