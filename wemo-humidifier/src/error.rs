use thiserror::Error;

/// Result type for humidifier operations
pub type Result<T> = std::result::Result<T, HumidifierError>;

#[derive(Error, Debug)]
pub enum HumidifierError {
    #[error("API error: {0}")]
    Api(#[from] wemo_api::ApiError),

    #[error("Attribute list parse error: {0}")]
    Parse(#[from] wemo_parser::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),
}
