use crate::domain::cos_domain;
use crate::domain::ports::{DeleteObjectRequest, ObjectStore, PutObjectOutput, PutObjectRequest};
use crate::utils::error::Result;
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub body: Bytes,
    pub content_type: Option<String>,
}

/// Object store kept in process memory, keyed by `bucket/key`.
#[derive(Debug, Default)]
pub struct InMemoryObjectStore {
    objects: Mutex<HashMap<String, StoredObject>>,
}

impl InMemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, bucket: &str, key: &str) -> Option<StoredObject> {
        self.lock().get(&entry_key(bucket, key)).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, StoredObject>> {
        // 其他執行緒 panic 不影響資料本身
        self.objects.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn entry_key(bucket: &str, key: &str) -> String {
    format!("{}/{}", bucket, key)
}

#[async_trait]
impl ObjectStore for InMemoryObjectStore {
    async fn put_object(&self, request: PutObjectRequest<'_>) -> Result<PutObjectOutput> {
        self.lock().insert(
            entry_key(request.bucket, request.key.as_str()),
            StoredObject {
                body: request.body,
                content_type: request.content_type.map(str::to_string),
            },
        );

        Ok(PutObjectOutput {
            location: format!(
                "{}/{}",
                cos_domain(request.bucket, request.region.as_str()),
                request.key
            ),
            etag: None,
        })
    }

    async fn delete_object(&self, request: DeleteObjectRequest<'_>) -> Result<()> {
        // S3 語意：刪除不存在的物件也算成功
        self.lock().remove(&entry_key(request.bucket, request.key.as_str()));
        Ok(())
    }
}
