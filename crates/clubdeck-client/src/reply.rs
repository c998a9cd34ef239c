//! Wire models and pure response interpretation.
//!
//! Interpretation rules, independent of any HTTP machinery:
//! - a body that parses as `{success, message, ...}` wins regardless of
//!   status: `success: false` is an application error carrying the
//!   server's message;
//! - otherwise a non-2xx status is a transport-level failure;
//! - otherwise (2xx, unparseable body) the response is malformed;
//! - deletes succeed only as 2xx with an empty body; anything else is a
//!   failure.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::ApiError;

/// Standard JSON reply of the form endpoints.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ServerReply {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Human-readable message, already localized by the server.
    #[serde(default)]
    pub message: String,
    /// Navigation target after a successful login.
    #[serde(default)]
    pub redirect_url: Option<String>,
    /// Navigation target after a successful reset (older field name).
    #[serde(default)]
    pub redirect: Option<String>,
}

impl ServerReply {
    /// Returns whichever redirect field the server filled in.
    #[must_use]
    pub fn redirect_target(&self) -> Option<&str> {
        self.redirect_url.as_deref().or(self.redirect.as_deref())
    }
}

/// Reply of `GET /api/registration/:token`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RegistrationStatus {
    /// Whether the token is valid and registration may proceed.
    pub valid: bool,
    /// Club the token belongs to.
    #[serde(default)]
    pub club_name: Option<String>,
    /// Reason the token is not valid.
    #[serde(default)]
    pub error: Option<String>,
}

/// One success story from the static stories feed.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Story {
    /// Person quoted.
    pub author: String,
    /// Their role or club.
    #[serde(default)]
    pub title: String,
    /// The quote body.
    #[serde(default)]
    pub quote: String,
    /// Portrait image path.
    #[serde(default)]
    pub image: String,
    /// Headline metrics, label to value.
    #[serde(default)]
    pub metrics: BTreeMap<String, String>,
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Interprets a form-endpoint response.
pub fn interpret_reply(status: u16, body: &str) -> Result<ServerReply, ApiError> {
    if let Ok(reply) = serde_json::from_str::<ServerReply>(body) {
        if reply.success {
            return Ok(reply);
        }
        return Err(ApiError::Application {
            message: reply.message,
        });
    }
    if is_success(status) {
        Err(ApiError::Malformed)
    } else {
        Err(ApiError::Http { status })
    }
}

/// Interprets a plain JSON response (registration status, stories feed).
pub fn interpret_json<T: serde::de::DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<T, ApiError> {
    if !is_success(status) {
        return Err(ApiError::Http { status });
    }
    serde_json::from_str(body).map_err(|_| ApiError::Malformed)
}

/// Interprets a delete-user response: success is 2xx with an empty body.
pub fn interpret_delete_reply(status: u16, body: &str) -> Result<(), ApiError> {
    if !is_success(status) {
        return Err(ApiError::Http { status });
    }
    if body.trim().is_empty() {
        Ok(())
    } else {
        // The server renders an explanation fragment instead of deleting;
        // the client treats any payload as a failed delete.
        Err(ApiError::Malformed)
    }
}
