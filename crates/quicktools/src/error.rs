#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Unknown tool: {0}. Run `quicktools favorites tools` to list them")]
    UnknownTool(String),
}

impl From<quicktools_core::favorites::StoreError> for Error {
    fn from(error: quicktools_core::favorites::StoreError) -> Self {
        Error::Store(error.to_string())
    }
}
