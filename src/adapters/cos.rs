use crate::config::ProviderConfig;
use crate::domain::model::StorageKey;
use crate::domain::ports::{DeleteObjectRequest, ObjectStore, PutObjectOutput, PutObjectRequest};
use crate::utils::error::{CosError, Result};
use async_trait::async_trait;
use aws_sdk_s3::config::retry::RetryConfig;
use aws_sdk_s3::config::{
    BehaviorVersion, Credentials, Region, RequestChecksumCalculation, ResponseChecksumValidation,
};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use url::Url;

/// COS client over its S3-compatible API.
///
/// Built without any network traffic; bad settings show up as errors from
/// the first request.
#[derive(Debug, Clone)]
pub struct CosObjectStore {
    client: Client,
    /// Object URLs are this plus the key
    base_url: Url,
}

impl CosObjectStore {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let service_url = config.service_url();
        let base_url = object_base_url(config, &service_url)?;

        let credentials = Credentials::new(
            config.secret_id.clone(),
            config.secret_key().to_string(),
            None,
            None,
            "CosStaticCredentials",
        );

        let s3_config = aws_sdk_s3::config::Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .credentials_provider(credentials)
            .region(Region::new(config.region.as_str()))
            .endpoint_url(service_url)
            .force_path_style(config.force_path_style)
            .retry_config(RetryConfig::disabled())
            .request_checksum_calculation(RequestChecksumCalculation::WhenRequired)
            .response_checksum_validation(ResponseChecksumValidation::WhenRequired)
            .build();

        tracing::debug!(base_url = %base_url, "COS client configured");

        Ok(Self {
            client: Client::from_conf(s3_config),
            base_url,
        })
    }

    /// `host/path` of an object, the form COS reports as `Location`.
    pub fn location(&self, key: &StorageKey) -> String {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(key.as_str().split('/'));
        }
        url[url::Position::BeforeHost..].to_string()
    }
}

fn object_base_url(config: &ProviderConfig, service_url: &str) -> Result<Url> {
    let invalid = |field: &str, value: &str, reason: String| CosError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason,
    };

    let raw = match &config.endpoint_override {
        None => format!("https://{}/", config.endpoint()),
        Some(_) => {
            let service = Url::parse(service_url)
                .map_err(|e| invalid("endpoint", service_url, e.to_string()))?;
            let host = service
                .host_str()
                .ok_or_else(|| invalid("endpoint", service_url, "Endpoint has no host".to_string()))?;
            let port = service.port().map(|p| format!(":{}", p)).unwrap_or_default();
            if config.force_path_style {
                format!("{}://{}{}/{}/", service.scheme(), host, port, config.bucket)
            } else {
                format!("{}://{}.{}{}/", service.scheme(), config.bucket, host, port)
            }
        }
    };

    Url::parse(&raw).map_err(|e| invalid("bucket", &config.bucket, format!("Cannot build object URL: {}", e)))
}

#[async_trait]
impl ObjectStore for CosObjectStore {
    async fn put_object(&self, request: PutObjectRequest<'_>) -> Result<PutObjectOutput> {
        let mut put = self
            .client
            .put_object()
            .bucket(request.bucket)
            .key(request.key.as_str())
            .body(ByteStream::from(request.body));
        if let Some(content_type) = request.content_type {
            put = put.content_type(content_type);
        }

        let output = put.send().await.map_err(CosError::store)?;

        Ok(PutObjectOutput {
            location: self.location(request.key),
            etag: output.e_tag().map(str::to_string),
        })
    }

    async fn delete_object(&self, request: DeleteObjectRequest<'_>) -> Result<()> {
        self.client
            .delete_object()
            .bucket(request.bucket)
            .key(request.key.as_str())
            .send()
            .await
            .map_err(CosError::store)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::region::Region as CosRegion;

    fn config() -> ProviderConfig {
        ProviderConfig::new("id", "key", CosRegion::ApChengdu, "media-1250000000")
    }

    #[test]
    fn test_default_location() {
        let store = CosObjectStore::new(&config()).unwrap();
        let key = StorageKey::new(Some("uploads"), "abc", ".png");
        assert_eq!(
            store.location(&key),
            "media-1250000000.cos.ap-chengdu.myqcloud.com/uploads/abc.png"
        );
    }

    #[test]
    fn test_location_encodes_segments() {
        let store = CosObjectStore::new(&config()).unwrap();
        let key = StorageKey::new(Some("my files"), "a b", ".png");
        assert_eq!(
            store.location(&key),
            "media-1250000000.cos.ap-chengdu.myqcloud.com/my%20files/a%20b.png"
        );
    }

    #[test]
    fn test_path_style_override_location() {
        let config = config().with_endpoint_override("http://127.0.0.1:9000", true);
        let store = CosObjectStore::new(&config).unwrap();
        let key = StorageKey::new(None, "abc", ".txt");
        assert_eq!(store.location(&key), "127.0.0.1:9000/media-1250000000/abc.txt");
    }

    #[test]
    fn test_virtual_host_override_location() {
        let config = config().with_endpoint_override("https://cos.accelerate.myqcloud.com", false);
        let store = CosObjectStore::new(&config).unwrap();
        let key = StorageKey::new(None, "abc", ".txt");
        assert_eq!(
            store.location(&key),
            "media-1250000000.cos.accelerate.myqcloud.com/abc.txt"
        );
    }

    #[test]
    fn test_bad_override_rejected() {
        let config = config().with_endpoint_override("not a url", true);
        assert!(matches!(
            CosObjectStore::new(&config),
            Err(CosError::InvalidConfigValueError { .. })
        ));
    }
}
