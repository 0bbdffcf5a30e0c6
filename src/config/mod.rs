#[cfg(feature = "cli")]
pub mod cli;
pub mod schema;
pub mod toml_config;

use crate::domain::cos_domain;
use crate::domain::model::StorageKey;
use crate::domain::region::Region;
use crate::utils::error::{CosError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub const ENV_SECRET_ID: &str = "COS_SECRET_ID";
pub const ENV_SECRET_KEY: &str = "COS_SECRET_KEY";
pub const ENV_REGION: &str = "COS_REGION";
pub const ENV_BUCKET: &str = "COS_BUCKET";
pub const ENV_CDN: &str = "COS_CDN";
pub const ENV_ENDPOINT: &str = "COS_ENDPOINT";
pub const ENV_FORCE_PATH_STYLE: &str = "COS_FORCE_PATH_STYLE";

/// Configuration as the host collected it.
///
/// Every field is optional and anything that is not a string (or a bool for
/// `force_path_style`) is read as absent instead of failing the parse.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawConfig {
    #[serde(default, deserialize_with = "lenient_string")]
    pub public: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub private: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub bucket: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub cdn: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub endpoint: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub force_path_style: Option<bool>,
}

impl RawConfig {
    /// 從 host 傳入的 JSON 物件建立
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            public: lookup(ENV_SECRET_ID),
            private: lookup(ENV_SECRET_KEY),
            region: lookup(ENV_REGION),
            bucket: lookup(ENV_BUCKET),
            cdn: lookup(ENV_CDN),
            endpoint: lookup(ENV_ENDPOINT),
            force_path_style: lookup(ENV_FORCE_PATH_STYLE).and_then(|v| parse_bool(&v)),
        }
    }

    /// Fill fields that are absent here from `other`.
    pub fn or(self, other: RawConfig) -> Self {
        Self {
            public: self.public.or(other.public),
            private: self.private.or(other.private),
            region: self.region.or(other.region),
            bucket: self.bucket.or(other.bucket),
            cdn: self.cdn.or(other.cdn),
            endpoint: self.endpoint.or(other.endpoint),
            force_path_style: self.force_path_style.or(other.force_path_style),
        }
    }
}

impl fmt::Debug for RawConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawConfig")
            .field("public", &self.public)
            .field("private", &self.private.as_ref().map(|_| "***"))
            .field("region", &self.region)
            .field("bucket", &self.bucket)
            .field("cdn", &self.cdn)
            .field("endpoint", &self.endpoint)
            .field("force_path_style", &self.force_path_style)
            .finish()
    }
}

/// Resolved provider settings. All string values are trimmed.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub secret_id: String,
    secret_key: String,
    pub region: Region,
    pub bucket: String,
    pub cdn: Option<String>,
    /// Send requests here instead of `https://cos.{region}.myqcloud.com`
    pub endpoint_override: Option<String>,
    pub force_path_style: bool,
}

impl ProviderConfig {
    pub fn new(
        secret_id: impl AsRef<str>,
        secret_key: impl AsRef<str>,
        region: Region,
        bucket: impl AsRef<str>,
    ) -> Self {
        Self {
            secret_id: secret_id.as_ref().trim().to_string(),
            secret_key: secret_key.as_ref().trim().to_string(),
            region,
            bucket: bucket.as_ref().trim().to_string(),
            cdn: None,
            endpoint_override: None,
            force_path_style: false,
        }
    }

    pub fn with_cdn(mut self, cdn: impl AsRef<str>) -> Self {
        self.cdn = trim_param(Some(cdn.as_ref().to_string()));
        self
    }

    pub fn with_endpoint_override(mut self, endpoint: impl Into<String>, force_path_style: bool) -> Self {
        self.endpoint_override = Some(endpoint.into());
        self.force_path_style = force_path_style;
        self
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// `{bucket}.cos.{region}.myqcloud.com`
    pub fn endpoint(&self) -> String {
        cos_domain(&self.bucket, self.region.as_str())
    }

    /// Regional service URL the client is pointed at; virtual-hosted
    /// addressing puts the bucket in front of it.
    pub fn service_url(&self) -> String {
        match &self.endpoint_override {
            Some(endpoint) => endpoint.clone(),
            None => format!("https://cos.{}.myqcloud.com", self.region),
        }
    }

    pub fn cdn_url(&self, key: &StorageKey) -> Option<String> {
        self.cdn
            .as_ref()
            .map(|cdn| format!("https://{}/{}", cdn, key))
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("secret_id", &self.secret_id)
            .field("secret_key", &"***")
            .field("region", &self.region)
            .field("bucket", &self.bucket)
            .field("cdn", &self.cdn)
            .field("endpoint_override", &self.endpoint_override)
            .field("force_path_style", &self.force_path_style)
            .finish()
    }
}

impl TryFrom<RawConfig> for ProviderConfig {
    type Error = CosError;

    fn try_from(raw: RawConfig) -> Result<Self> {
        let secret_id = required("public", raw.public)?;
        let secret_key = required("private", raw.private)?;
        let region: Region = required("region", raw.region)?.parse()?;
        let bucket = required("bucket", raw.bucket)?;

        Ok(Self {
            secret_id,
            secret_key,
            region,
            bucket,
            cdn: trim_param(raw.cdn),
            endpoint_override: trim_param(raw.endpoint),
            force_path_style: raw.force_path_style.unwrap_or(false),
        })
    }
}

fn trim_param(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(field: &str, value: Option<String>) -> Result<String> {
    trim_param(value).ok_or_else(|| CosError::MissingConfigError {
        field: field.to_string(),
    })
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_bool<'de, D>(deserializer: D) -> std::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Bool(b) => Some(b),
        serde_json::Value::String(s) => parse_bool(&s),
        _ => None,
    })
}
