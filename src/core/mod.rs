pub mod provider;

pub use crate::domain::model::{FileDescriptor, ProviderMetadata, UploadResult};
pub use crate::domain::ports::ObjectStore;
pub use crate::utils::error::Result;
pub use provider::{init, CosProvider};
