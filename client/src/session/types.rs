//! Session records and their boundary validation.
//!
//! DESIGN
//! ======
//! A `Session` always carries both a token and a user; the store holds
//! `Option<Session>`, so "token without user" cannot be represented.
//! Auth responses are parsed through [`Session::from_response`], which
//! rejects malformed payloads instead of storing partial state.

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ApiError;

/// Profile of the authenticated user.
///
/// Fields the client does not model are preserved in `extra` so the stored
/// profile round-trips exactly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Server-assigned id; numeric ids are normalized to strings.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, rename = "firstName", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, rename = "lastName", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserProfile {
    /// Profile with only an id.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: None,
            first_name: None,
            last_name: None,
            role: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Display name: full name when known, else email, else id.
    #[must_use]
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.clone(),
            _ => self.email.clone().unwrap_or_else(|| self.id.clone()),
        }
    }

    /// Subscription the user belongs to, when the server includes it.
    #[must_use]
    pub fn subscription_id(&self) -> Option<String> {
        match self.extra.get("subscriptionId")? {
            serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// An authenticated session: bearer token plus the user it belongs to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

impl Session {
    #[must_use]
    pub fn new(token: impl Into<String>, user: UserProfile) -> Self {
        Self { token: token.into(), user }
    }

    /// Validate a raw login/signup/invite response body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidSession`] if the body is not
    /// `{token, user}` with a non-empty token and user id.
    pub fn from_response(body: serde_json::Value) -> Result<Self, ApiError> {
        let session: Self = serde_json::from_value(body).map_err(|e| ApiError::InvalidSession(e.to_string()))?;
        if session.token.trim().is_empty() {
            return Err(ApiError::InvalidSession("token is empty".to_owned()));
        }
        if session.user.id.trim().is_empty() {
            return Err(ApiError::InvalidSession("user id is empty".to_owned()));
        }
        Ok(session)
    }
}

/// Persisted shape: `{"token": ..., "user": ...}` with nulls when logged out.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct StoredSession {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

impl StoredSession {
    pub(crate) fn from_session(session: Option<&Session>) -> Self {
        match session {
            Some(s) => Self { token: Some(s.token.clone()), user: Some(s.user.clone()) },
            None => Self::default(),
        }
    }

    /// Both halves or nothing.
    pub(crate) fn into_session(self) -> Option<Session> {
        match (self.token, self.user) {
            (Some(token), Some(user)) if !token.is_empty() => Some(Session { token, user }),
            _ => None,
        }
    }
}

pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        _ => Err(D::Error::custom("expected string or number id")),
    }
}
