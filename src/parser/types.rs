use thiserror::Error;

/// Failure to turn a fetched body into share-link text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("subscription returned an HTML page instead of share links")]
    HtmlPage,

    #[error("subscription is not valid base64: {0}")]
    InvalidEncoding(String),
}

/// Failure to parse a single share link. Never aborts a batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed URI: {0}")]
    InvalidUri(String),

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("invalid port: {0}")]
    InvalidPort(String),

    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}

impl From<url::ParseError> for ParseError {
    fn from(e: url::ParseError) -> Self {
        match e {
            url::ParseError::InvalidPort => ParseError::InvalidPort(e.to_string()),
            url::ParseError::EmptyHost => ParseError::MissingField("server"),
            _ => ParseError::InvalidUri(e.to_string()),
        }
    }
}
