use crate::domain::model::StorageKey;
use crate::domain::region::Region;
use crate::utils::error::Result;
use async_trait::async_trait;
use bytes::Bytes;

#[derive(Debug, Clone)]
pub struct PutObjectRequest<'a> {
    pub bucket: &'a str,
    pub region: Region,
    pub key: &'a StorageKey,
    pub body: Bytes,
    pub content_type: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutObjectOutput {
    /// Host and path of the stored object, without scheme
    pub location: String,
    pub etag: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DeleteObjectRequest<'a> {
    pub bucket: &'a str,
    pub region: Region,
    pub key: &'a StorageKey,
}

/// The external object store. Errors come back as `CosError::Store`
/// carrying the client's own error.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put_object(&self, request: PutObjectRequest<'_>) -> Result<PutObjectOutput>;
    async fn delete_object(&self, request: DeleteObjectRequest<'_>) -> Result<()>;
}

#[async_trait]
impl<T: ObjectStore + ?Sized> ObjectStore for std::sync::Arc<T> {
    async fn put_object(&self, request: PutObjectRequest<'_>) -> Result<PutObjectOutput> {
        (**self).put_object(request).await
    }

    async fn delete_object(&self, request: DeleteObjectRequest<'_>) -> Result<()> {
        (**self).delete_object(request).await
    }
}
