use crate::config::ProviderConfig;
use crate::utils::error::{CosError, Result};
use url::Url;

/// Stricter checks than building a config performs. Hosts opt in.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

impl Validate for ProviderConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("public", &self.secret_id)?;
        validate_non_empty_string("private", self.secret_key())?;
        validate_bucket_name("bucket", &self.bucket)?;

        if let Some(cdn) = &self.cdn {
            validate_cdn_domain("cdn", cdn)?;
        }
        if let Some(endpoint) = &self.endpoint_override {
            validate_url("endpoint", endpoint)?;
        }

        tracing::debug!("✅ COS configuration validation passed");
        Ok(())
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CosError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// COS bucket 名稱格式：`<name>-<appid>`
pub fn validate_bucket_name(field_name: &str, bucket: &str) -> Result<()> {
    let invalid = |reason: &str| CosError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: bucket.to_string(),
        reason: reason.to_string(),
    };

    if bucket.is_empty() {
        return Err(invalid("Bucket name cannot be empty"));
    }

    if !bucket
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(invalid(
            "Bucket name can only contain lowercase letters, numbers and hyphens",
        ));
    }

    let Some((name, app_id)) = bucket.rsplit_once('-') else {
        return Err(invalid("Bucket name must end with -<APPID>"));
    };

    if name.is_empty() || name.starts_with('-') || name.ends_with('-') {
        return Err(invalid("Bucket name must not start or end with a hyphen"));
    }

    if app_id.is_empty() || !app_id.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid("APPID suffix must be numeric"));
    }

    if bucket.len() > 60 {
        return Err(invalid("Bucket name including APPID must be at most 60 characters"));
    }

    Ok(())
}

/// CDN 只接受 host（可帶 port），不含 scheme 或路徑
pub fn validate_cdn_domain(field_name: &str, cdn: &str) -> Result<()> {
    let invalid = |reason: String| CosError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: cdn.to_string(),
        reason,
    };

    if cdn.contains("://") {
        return Err(invalid("CDN domain must not include a scheme".to_string()));
    }

    let url = Url::parse(&format!("https://{}", cdn)).map_err(|e| invalid(format!("Invalid CDN domain: {}", e)))?;
    if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("CDN domain must be a bare host".to_string()));
    }

    Ok(())
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CosError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(CosError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::region::Region;

    #[test]
    fn test_bucket_names() {
        assert!(validate_bucket_name("bucket", "examplebucket-1250000000").is_ok());
        assert!(validate_bucket_name("bucket", "my-assets-1250000000").is_ok());
        assert!(validate_bucket_name("bucket", "examplebucket").is_err());
        assert!(validate_bucket_name("bucket", "Example-1250000000").is_err());
        assert!(validate_bucket_name("bucket", "-x-1250000000").is_err());
        assert!(validate_bucket_name("bucket", "bucket-abc").is_err());
        assert!(validate_bucket_name("bucket", "a.b-1250000000").is_err());
    }

    #[test]
    fn test_cdn_domains() {
        assert!(validate_cdn_domain("cdn", "img.example.com").is_ok());
        assert!(validate_cdn_domain("cdn", "img.example.com:8443").is_ok());
        assert!(validate_cdn_domain("cdn", "https://img.example.com").is_err());
        assert!(validate_cdn_domain("cdn", "img.example.com/assets").is_err());
    }

    #[test]
    fn test_validate_config() {
        let config = ProviderConfig::new("id", "key", Region::EuFrankfurt, "assets-1250000000")
            .with_cdn("cdn.example.com");
        assert!(config.validate().is_ok());

        let config = ProviderConfig::new("id", "key", Region::EuFrankfurt, "assets")
            .with_endpoint_override("ftp://x", false);
        assert!(config.validate().is_err());
    }
}
