use crate::config::RawConfig;
use crate::utils::error::{CosError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// 設定檔格式
///
/// ```toml
/// [cos]
/// public = "${COS_SECRET_ID}"
/// private = "${COS_SECRET_KEY}"
/// region = "ap-guangzhou"
/// bucket = "media-1250000000"
/// cdn = "img.example.com"
///
/// [logging]
/// level = "debug"
/// json = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub cos: RawConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CosError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_toml_str_with(content, |name| std::env::var(name).ok())
    }

    pub fn from_toml_str_with<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let processed = substitute_env_vars(content, lookup);

        toml::from_str(&processed).map_err(|e| CosError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }
}

/// 替換 `${VAR}`；找不到的變數保留原樣
fn substitute_env_vars<F>(content: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    static VAR_RE: OnceLock<Regex> = OnceLock::new();
    let re = VAR_RE.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex"));

    re.replace_all(content, |caps: &regex::Captures| {
        let name = &caps[1];
        lookup(name).unwrap_or_else(|| format!("${{{}}}", name))
    })
    .into_owned()
}
