use std::ops::Deref;

use clap::ValueEnum;
use mdb_common::{MediaType, Providers};

pub use clap;

pub mod cli;
pub mod error;
pub mod progress_bars;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct MediaTypeArg(pub MediaType);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct ProviderArg(pub Providers);

impl ValueEnum for MediaTypeArg {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self(MediaType::Movie),
            Self(MediaType::Series),
            Self(MediaType::Game),
            Self(MediaType::Book),
            Self(MediaType::BoardGame),
        ]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        let value = clap::builder::PossibleValue::new(self.0.as_str());
        Some(match self.0 {
            MediaType::Movie => value.help("Feature films"),
            MediaType::Series => value.alias("tv").help("TV shows and anime"),
            MediaType::Game => value.help("Video games"),
            MediaType::Book => value.help("Books"),
            MediaType::BoardGame => value.alias("board_game").help("Board games"),
        })
    }
}

impl ValueEnum for ProviderArg {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self(Providers::Omdb),
            Self(Providers::TmdbMovie),
            Self(Providers::TmdbSeries),
            Self(Providers::Jikan),
            Self(Providers::Steam),
            Self(Providers::OpenLibrary),
            Self(Providers::BoardGameGeek),
        ]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.0.as_str()).help(self.0.pretty_name()))
    }
}

impl Deref for MediaTypeArg {
    type Target = MediaType;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Deref for ProviderArg {
    type Target = Providers;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
