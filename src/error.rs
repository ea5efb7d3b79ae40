pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Remote service error: {0}")]
    Remote(#[from] reqwest::Error),

    #[error("No record selected for update")]
    NoSelection,
}
