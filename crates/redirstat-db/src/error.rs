use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database connection error: {0}")]
    Connection(sqlx::Error),

    #[error("Query error: {0}")]
    Query(sqlx::Error),

    #[error(transparent)]
    Record(#[from] redirstat_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
