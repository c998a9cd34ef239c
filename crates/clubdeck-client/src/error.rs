//! Error taxonomy for backend calls.

/// Why a backend call failed, in the categories the forms care about.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (DNS, connect, timeout, body read).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response whose body was not a structured reply.
    #[error("unexpected HTTP status {status}")]
    Http {
        /// The response status code.
        status: u16,
    },

    /// 2xx response whose body did not match the expected shape.
    #[error("malformed response body")]
    Malformed,

    /// Structured `{success: false}` reply; the message is shown verbatim.
    #[error("{message}")]
    Application {
        /// Server-supplied failure message.
        message: String,
    },
}

impl ApiError {
    /// Returns whether this failure should be rendered with the generic
    /// localized network-error message instead of server text.
    #[must_use]
    pub fn is_generic(&self) -> bool {
        !matches!(self, Self::Application { .. })
    }

    /// Returns the server-supplied message, when there is one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Application { message } => Some(message),
            _ => None,
        }
    }
}
