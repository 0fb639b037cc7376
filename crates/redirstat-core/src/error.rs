use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid counter record [{record}]: {reason}")]
    InvalidRecord { record: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
