use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A file handed over by the upload subsystem.
///
/// `buffer` is always raw binary content; it is sent to the store as-is.
#[derive(Clone, Default)]
pub struct FileDescriptor {
    pub buffer: Bytes,
    pub hash: String,
    /// Extension including the leading dot, e.g. `.png`
    pub ext: String,
    pub path: Option<String>,
    pub mime: Option<String>,
    pub provider_metadata: Option<ProviderMetadata>,
    pub url: Option<String>,
}

impl FileDescriptor {
    pub fn new(buffer: impl Into<Bytes>, hash: impl Into<String>, ext: impl Into<String>) -> Self {
        Self {
            buffer: buffer.into(),
            hash: hash.into(),
            ext: ext.into(),
            ..Default::default()
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    pub fn storage_key(&self) -> StorageKey {
        StorageKey::new(self.path.as_deref(), &self.hash, &self.ext)
    }

    /// 把上傳結果寫回 descriptor
    pub fn record_upload(&mut self, result: UploadResult) {
        self.url = Some(result.url);
        self.provider_metadata = Some(result.provider_metadata);
    }
}

impl fmt::Debug for FileDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileDescriptor")
            .field("buffer_len", &self.buffer.len())
            .field("hash", &self.hash)
            .field("ext", &self.ext)
            .field("path", &self.path)
            .field("mime", &self.mime)
            .field("provider_metadata", &self.provider_metadata)
            .field("url", &self.url)
            .finish()
    }
}

/// Object key inside a bucket: `{path/}{hash}{ext}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    pub fn new(path: Option<&str>, hash: &str, ext: &str) -> Self {
        match path.filter(|p| !p.is_empty()) {
            Some(path) => Self(format!("{}/{}{}", path, hash, ext)),
            None => Self(format!("{}{}", hash, ext)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StorageKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    pub url_origin: String,
    pub url_cdn: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    pub url: String,
    pub provider_metadata: ProviderMetadata,
}

impl UploadResult {
    pub fn new(dimensions: Option<ImageDimensions>, url_origin: String, url_cdn: Option<String>) -> Self {
        let url = url_cdn.clone().unwrap_or_else(|| url_origin.clone());
        Self {
            url,
            provider_metadata: ProviderMetadata {
                width: dimensions.map(|d| d.width),
                height: dimensions.map(|d| d.height),
                url_origin,
                url_cdn,
            },
        }
    }
}
