use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum CosError {
    /// 物件儲存服務回傳的錯誤，原封不動地往上拋
    #[error(transparent)]
    Store(BoxError),

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl CosError {
    pub fn store<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        CosError::Store(Box::new(err))
    }

    /// The error surfaced by the object store client, if this is one.
    pub fn store_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            CosError::Store(err) => Some(err.as_ref()),
            _ => None,
        }
    }

    pub fn into_store_error(self) -> Option<BoxError> {
        match self {
            CosError::Store(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_store_error(&self) -> bool {
        matches!(self, CosError::Store(_))
    }
}

pub type Result<T> = std::result::Result<T, CosError>;
