use std::io;

use mdb_common::note::NoteError;
use mdb_providers::error::ProviderError;
use thiserror::Error;

#[allow(clippy::enum_variant_names)]
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Provider request failed: {source}")]
    ProviderFail {
        #[from]
        source: ProviderError,
    },

    #[error("Failed to render note: {source}")]
    NoteRenderFail {
        #[from]
        source: NoteError,
    },

    #[error("Failed to write input to console: {source}")]
    DialoguerIOFail {
        #[from]
        source: dialoguer::Error,
    },

    #[error("Failed to access file: {source}")]
    IOError {
        #[from]
        source: io::Error,
    },

    #[error("Whatever you did, it definetly shouldn't happen...")]
    ImpossibleExecutionPath,

    #[error("Provider {provider} was not compiled into this build")]
    ProviderUnavailable { provider: String },

    #[error("Provider {provider} is disabled in the config file")]
    ProviderDisabled { provider: String },

    #[error("No enabled provider supports the requested media types")]
    NoProviders,

    #[error("No results found for {title}")]
    NoResults { title: String },
}
