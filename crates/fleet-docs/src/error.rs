use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocsError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("Invalid SwaggerHub url: {0}")]
    InvalidUrl(String),
}

pub type Result<T> = std::result::Result<T, DocsError>;
