use mdb_common::Providers;
use thiserror::Error;

/// Enumerates the possible errors that can arise while talking to a metadata provider.
///
/// Covers every step of an adapter call: building the client, the request itself,
/// the status check, decoding the body and mapping it into the media model.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// An error occurred during a network request (e.g., connection timeout, DNS resolution failure).
    /// Wraps an underlying `reqwest::Error`.
    #[error("Connection Error: {0}")]
    ConnectionError(#[from] reqwest::Error),

    /// An error occurred while deserializing a JSON response from the provider.
    #[error("Error while deserializing JSON: {0}")]
    JsonSerializeFail(#[from] serde_json::Error),

    /// The XML document returned by the provider is malformed.
    #[error("Error while parsing XML: {0}")]
    XmlParseFail(#[from] roxmltree::Error),

    /// The provider rejected the configured API key.
    #[error("Invalid API key for {provider}")]
    InvalidApiKey { provider: Providers },

    /// The provider needs an API key and none is configured. No request was made.
    #[error("{provider} needs an API key. Set `api_key` under [apis.{provider}] in the config file")]
    MissingApiKey { provider: Providers },

    /// The provider answered with a status code other than `200 OK`.
    #[error("Received unexpected status code {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The provider answered `200 OK` with an error message in the body.
    #[error("Provider returned an error: {message}")]
    ApiError { message: String },

    /// No item exists under the requested identifier.
    #[error("No item found with id {id}")]
    NotFound { id: String },

    /// The item exists but is of a kind this adapter cannot map.
    #[error("Unsupported media type: {kind}")]
    UnsupportedMediaType { kind: String },

    /// The response lacks a field without which no model can be built.
    #[error("Response is missing an essential field {field}")]
    MissingField { field: String },

    /// An attempt was made to use an adapter with the configuration of another provider.
    #[error("Invalid provider selected for this adapter: {provider}")]
    InvalidProvider { provider: String },

    /// The search title or identifier is blank.
    #[error("Query cannot be empty")]
    EmptyQuery,

    #[error("Failed to read config file: {source}")]
    ConfigReadFail {
        #[from]
        source: std::io::Error,
    },

    #[error("Failed to decode config file: {source}")]
    ConfigDecodeFail {
        #[from]
        source: toml::de::Error,
    },
}
