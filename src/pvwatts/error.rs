use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Panel capacity must be a positive number of watts, got {0}")]
    InvalidCapacity(f64),

    #[error("Failed to build request URL from '{0}'")]
    InvalidUrl(String, #[source] url::ParseError),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse JSON response")]
    JsonParse(#[from] serde_json::Error),

    #[error("PVWatts rejected the request: {}", .0.join("; "))]
    ApiErrors(Vec<String>),

    #[error("Response has no 'outputs' object")]
    MissingOutputs,

    #[error("Response outputs lack the '{0}' array")]
    MissingArray(&'static str),

    #[error("Response array '{name}' is not a list of numbers")]
    InvalidArray {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Response array '{name}' has {found} values but the date table has {expected}")]
    LengthMismatch {
        name: &'static str,
        expected: usize,
        found: usize,
    },
}
