use thiserror::Error;

pub type RaceResult<T> = Result<T, RaceError>;

#[derive(Debug, Error)]
pub enum RaceError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("malformed dataset: {0}")]
    MalformedDataset(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
