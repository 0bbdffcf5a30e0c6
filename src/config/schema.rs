//! Declarative description of the settings the host has to collect.
//!
//! Declaring the schema checks nothing; values are only interpreted when a
//! [`ProviderConfig`](super::ProviderConfig) is built from them.

use crate::domain::region::Region;
use crate::utils::error::Result;
use serde::Serialize;

pub const PROVIDER_ID: &str = "tencent-cloud-cos";
pub const PROVIDER_NAME: &str = "Tencent Cloud Object Storage Service";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Enum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub label: &'static str,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<&'static [&'static str]>,
    pub required: bool,
}

impl FieldSpec {
    const fn text(label: &'static str, required: bool) -> Self {
        Self {
            label,
            kind: FieldKind::Text,
            values: None,
            required,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AuthSchema {
    pub public: FieldSpec,
    pub private: FieldSpec,
    pub region: FieldSpec,
    pub bucket: FieldSpec,
    pub cdn: FieldSpec,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProviderSchema {
    pub provider: &'static str,
    pub name: &'static str,
    pub auth: AuthSchema,
}

pub static SCHEMA: ProviderSchema = ProviderSchema {
    provider: PROVIDER_ID,
    name: PROVIDER_NAME,
    auth: AuthSchema {
        public: FieldSpec::text("SecretId", true),
        private: FieldSpec::text("SecretKey", true),
        region: FieldSpec {
            label: "Region",
            kind: FieldKind::Enum,
            values: Some(&Region::NAMES),
            required: true,
        },
        bucket: FieldSpec::text("Bucket", true),
        cdn: FieldSpec::text("CDN", false),
    },
};

impl ProviderSchema {
    /// Fields in declaration order, keyed by config name.
    pub fn fields(&self) -> [(&'static str, &FieldSpec); 5] {
        [
            ("public", &self.auth.public),
            ("private", &self.auth.private),
            ("region", &self.auth.region),
            ("bucket", &self.auth.bucket),
            ("cdn", &self.auth.cdn),
        ]
    }

    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

pub fn provider_schema() -> &'static ProviderSchema {
    &SCHEMA
}
