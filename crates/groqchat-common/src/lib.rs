pub mod errors;

pub use errors::{ConfigError, GroqchatError};

pub type Result<T> = std::result::Result<T, GroqchatError>;
