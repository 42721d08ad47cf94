pub use crate::apis::prelude::*;
pub use crate::error::ProviderError;
pub use crate::provider::caps::MediaTypes;
pub use crate::provider::{MediaApi, MediaClient, MetadataSource};
pub use crate::provider_config::{ApiConfig, DEFAULT_APIS};
