pub mod error;
pub mod image;
pub mod logger;
pub mod validation;
