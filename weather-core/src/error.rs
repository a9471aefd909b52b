use reqwest::StatusCode;

/// Failure of a lookup as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Please enter a city name")]
    EmptyInput,
    #[error("City not found. Please enter a valid city name.")]
    CityNotFound,
}

/// Detailed backend failure. The pipeline folds every variant into
/// [`LookupError::CityNotFound`].
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Failed to send request to weather backend: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Weather backend request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("Failed to parse weather backend JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failure to write the persisted history.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to write persisted storage: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to encode recent searches: {0}")]
    Encode(#[from] serde_json::Error),
}
