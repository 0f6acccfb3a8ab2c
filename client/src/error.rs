//! API error taxonomy shared by the HTTP client and resource hooks.
//!
//! ERROR HANDLING
//! ==============
//! Authorization failures are a global concern: the response interceptor
//! notifies, clears the session and redirects before the error reaches a
//! hook, so [`ApiError::user_message`] yields `None` for them. Everything
//! else is surfaced once by the originating hook.

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

/// Errors produced by API client operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered 401; the session has already been torn down.
    #[error("session expired or invalid")]
    Unauthorized,

    /// The server answered with a non-success status other than 401.
    #[error("request failed with status code {status}")]
    Status { status: u16, message: Option<String> },

    /// No response was received.
    #[error("{0}")]
    Transport(String),

    /// No response was received within the configured timeout.
    #[error("request timed out after {ms}ms")]
    Timeout { ms: u64 },

    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// A login/signup/invite response was not a well-formed session.
    #[error("malformed session payload: {0}")]
    InvalidSession(String),
}

impl ApiError {
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Message supplied by the server in the response body, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message: Some(message), .. } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }

    /// The error's own message for failures that carry one.
    #[must_use]
    pub fn own_message(&self) -> Option<String> {
        match self {
            Self::Transport(msg) if msg.trim().is_empty() => None,
            Self::Status { .. } | Self::Transport(_) | Self::Timeout { .. } => Some(self.to_string()),
            _ => None,
        }
    }

    /// Text for the user-facing error toast.
    ///
    /// Priority: server message, then the error's own message, then the
    /// operation-specific `fallback`. `None` for 401.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> Option<String> {
        if self.is_unauthorized() {
            return None;
        }
        let text = self
            .server_message()
            .map(str::to_owned)
            .or_else(|| self.own_message())
            .unwrap_or_else(|| fallback.to_owned());
        Some(text)
    }
}

/// Pull a human-readable `message` (or `error`) string out of a JSON body.
#[must_use]
pub fn extract_server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"].iter().find_map(|field| {
        value
            .get(field)
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
    })
}
