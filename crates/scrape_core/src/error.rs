/// Why raw input was refused as a scrape target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("target is empty")]
    Empty,
    #[error("target is not a http, https or chrome URL")]
    MalformedUrl,
}

/// The service answered, but without the nested `data` object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("response has no result object")]
pub struct ResponseShapeError;

/// Failure recorded on the session. `Display` yields the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Please enter a valid URL.")]
    Validation(#[from] ValidationError),
    #[error("Invalid response format from the server.")]
    ResponseShape,
    #[error("Failed to scrape the page. Ensure the backend is running.")]
    Transport,
}

impl From<ResponseShapeError> for SessionError {
    fn from(_: ResponseShapeError) -> Self {
        SessionError::ResponseShape
    }
}
