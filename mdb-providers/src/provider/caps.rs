use bitflags::bitflags;
use mdb_common::MediaType;

bitflags! {
    /// The media types an adapter is able to return.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MediaTypes: u8 {
        const Movie = 0b0000_0001;
        const Series = 0b0000_0010;
        const Game = 0b0000_0100;
        const Book = 0b0000_1000;
        const BoardGame = 0b0001_0000;
    }
}

impl MediaTypes {
    #[inline]
    pub const fn from_type(media_type: MediaType) -> Self {
        match media_type {
            MediaType::Movie => Self::Movie,
            MediaType::Series => Self::Series,
            MediaType::Game => Self::Game,
            MediaType::Book => Self::Book,
            MediaType::BoardGame => Self::BoardGame,
        }
    }

    #[inline]
    pub const fn contains_type(self, media_type: MediaType) -> bool {
        self.contains(Self::from_type(media_type))
    }

    /// True if at least one of `types` is supported. An empty slice matches everything.
    pub fn supports_any(self, types: &[MediaType]) -> bool {
        types.is_empty() || types.iter().any(|t| self.contains_type(*t))
    }

    pub fn types(self) -> Vec<MediaType> {
        MediaType::ALL
            .into_iter()
            .filter(|t| self.contains_type(*t))
            .collect()
    }
}
