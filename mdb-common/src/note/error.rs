use thiserror::Error;

#[derive(Error, Debug)]
pub enum NoteError {
    #[error("Failed to serialize front matter: {source}")]
    FrontMatterSerializeFail {
        #[from]
        source: serde_yaml::Error,
    },

    #[error("Failed to decode note settings: {source}")]
    SettingsDecodeFail {
        #[from]
        source: toml::de::Error,
    },

    #[error("Invalid date format: {format}")]
    InvalidDateFormat { format: String },

    #[error("Unknown media type in note settings: {key}")]
    UnknownMediaType { key: String },

    #[error("Property mapping for {property} remaps it without a new name")]
    InvalidMapping { property: String },
}
