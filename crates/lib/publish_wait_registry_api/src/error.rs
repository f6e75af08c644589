use reqwest::StatusCode;
use url::Url;

pub(crate) type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid registry API url")]
    InvalidApiUrl,
    #[error("unexpected response for crate `{name}` from {registry}: {status}\n{body}")]
    UnexpectedStatus {
        name: String,
        registry: Url,
        status: StatusCode,
        body: String,
    },
    #[error("couldn't parse registry response JSON: {0}")]
    ResponseFormat(#[from] serde_json::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// return the HTTP status code of any error inside, if there is any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Http(error) => error.status(),
            _ => None,
        }
    }
}
