use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("Server misconfigured: {0}")]
    Configuration(String),

    #[error("Error contacting the TMDB API: {0}")]
    ExternalApi(String),
}

impl Error {
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Validation(_) => 400,
            Error::NotFound(_) => 404,
            Error::ExternalApi(_) => 503,
            Error::Database(_) | Error::Configuration(_) => 500,
        }
    }
}
