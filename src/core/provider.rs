use crate::adapters::CosObjectStore;
use crate::config::ProviderConfig;
use crate::domain::model::{FileDescriptor, UploadResult};
use crate::domain::ports::{DeleteObjectRequest, ObjectStore, PutObjectRequest};
use crate::utils::error::Result;
use crate::utils::image::probe_dimensions;

/// Upload provider bound to one bucket.
///
/// Holds only immutable settings and the store handle, so `upload` and
/// `delete` can run concurrently from many tasks.
#[derive(Debug)]
pub struct CosProvider<S: ObjectStore = CosObjectStore> {
    config: ProviderConfig,
    store: S,
}

/// Build a provider talking to COS. No request is sent here.
pub fn init(config: ProviderConfig) -> Result<CosProvider<CosObjectStore>> {
    let store = CosObjectStore::new(&config)?;
    tracing::info!(
        bucket = %config.bucket,
        region = %config.region,
        cdn = config.cdn.as_deref().unwrap_or("-"),
        "COS upload provider initialised"
    );
    Ok(CosProvider::with_store(config, store))
}

impl<S: ObjectStore> CosProvider<S> {
    pub fn with_store(config: ProviderConfig, store: S) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn upload(&self, file: &FileDescriptor) -> Result<UploadResult> {
        let key = file.storage_key();
        let dimensions = probe_dimensions(&file.buffer);

        tracing::debug!(
            key = %key,
            size = file.buffer.len(),
            image = dimensions.is_some(),
            "Uploading object"
        );

        let output = self
            .store
            .put_object(PutObjectRequest {
                bucket: &self.config.bucket,
                region: self.config.region,
                key: &key,
                body: file.buffer.clone(),
                content_type: file.mime.as_deref(),
            })
            .await
            .inspect_err(|e| tracing::warn!(key = %key, "Upload failed: {}", e))?;

        let result = UploadResult::new(
            dimensions,
            format!("https://{}", output.location),
            self.config.cdn_url(&key),
        );
        tracing::info!(key = %key, url = %result.url, "Uploaded object");
        Ok(result)
    }

    /// Upload and write the result back onto `file`; on error `file` is
    /// left as it was.
    pub async fn upload_in_place(&self, file: &mut FileDescriptor) -> Result<()> {
        let result = self.upload(file).await?;
        file.record_upload(result);
        Ok(())
    }

    pub async fn delete(&self, file: &FileDescriptor) -> Result<()> {
        let key = file.storage_key();
        tracing::debug!(key = %key, "Deleting object");

        self.store
            .delete_object(DeleteObjectRequest {
                bucket: &self.config.bucket,
                region: self.config.region,
                key: &key,
            })
            .await
            .inspect_err(|e| tracing::warn!(key = %key, "Delete failed: {}", e))?;

        tracing::info!(key = %key, "Deleted object");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryObjectStore;
    use crate::domain::region::Region;

    fn provider(cdn: Option<&str>) -> CosProvider<InMemoryObjectStore> {
        let mut config = ProviderConfig::new("id", "key", Region::ApBeijing, "docs-1250000000");
        if let Some(cdn) = cdn {
            config = config.with_cdn(cdn);
        }
        CosProvider::with_store(config, InMemoryObjectStore::new())
    }

    #[tokio::test]
    async fn test_upload_stores_raw_bytes() {
        let provider = provider(None);
        let file = FileDescriptor::new(b"plain text".to_vec(), "f00d", ".txt")
            .with_path("notes")
            .with_mime("text/plain");

        let result = provider.upload(&file).await.unwrap();

        let stored = provider.store().get("docs-1250000000", "notes/f00d.txt").unwrap();
        assert_eq!(&stored.body[..], b"plain text");
        assert_eq!(stored.content_type.as_deref(), Some("text/plain"));
        assert_eq!(
            result.url,
            "https://docs-1250000000.cos.ap-beijing.myqcloud.com/notes/f00d.txt"
        );
        assert_eq!(result.provider_metadata.width, None);
        assert_eq!(result.provider_metadata.url_cdn, None);
    }

    #[tokio::test]
    async fn test_upload_with_cdn() {
        let provider = provider(Some("static.example.com"));
        let file = FileDescriptor::new(b"x".to_vec(), "h", ".bin");

        let result = provider.upload(&file).await.unwrap();
        assert_eq!(result.url, "https://static.example.com/h.bin");
        assert_eq!(
            result.provider_metadata.url_origin,
            "https://docs-1250000000.cos.ap-beijing.myqcloud.com/h.bin"
        );
    }

    #[tokio::test]
    async fn test_delete_removes_object() {
        let provider = provider(None);
        let file = FileDescriptor::new(b"x".to_vec(), "h", ".bin").with_path("tmp");
        provider.upload(&file).await.unwrap();
        assert_eq!(provider.store().len(), 1);

        provider.delete(&file).await.unwrap();
        assert!(provider.store().is_empty());
    }
}
