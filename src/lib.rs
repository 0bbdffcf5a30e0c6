pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{CosObjectStore, InMemoryObjectStore};
pub use config::schema::{provider_schema, ProviderSchema};
pub use config::{ProviderConfig, RawConfig};
pub use crate::core::{init, CosProvider};
pub use domain::model::{FileDescriptor, ImageDimensions, ProviderMetadata, StorageKey, UploadResult};
pub use domain::ports::ObjectStore;
pub use domain::region::Region;
pub use utils::error::{CosError, Result};
