use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapitaError {
    #[error("POI not found: {0}")]
    PoiNotFound(String),

    #[error("Duplicate POI id: {0}")]
    DuplicateId(String),

    #[error("Invalid POI data: {0}")]
    InvalidPoi(String),

    #[error("Service error: {0}")]
    Service(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, MapitaError>;
