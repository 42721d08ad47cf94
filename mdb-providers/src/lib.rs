//! All internal logic for querying metadata providers and mapping their answers into
//! [media models](mdb_common::model).

extern crate mdb_common;

pub mod apis;
pub mod error;
pub mod prelude;
pub mod provider;
pub mod provider_config;

pub use crate::provider::caps::MediaTypes;
pub use crate::provider::{MediaApi, MediaClient, MetadataSource};
