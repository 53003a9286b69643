//! Credential resolution from request headers.
//!
//! A request authenticates either with an `Authorization: Bearer <token>`
//! header (API clients) or with a session cookie set by the browser. The
//! header wins when both are present.

use std::fmt;

use http::HeaderMap;
use http::header::{AUTHORIZATION, COOKIE};

const BEARER_SCHEME: &str = "Bearer";

/// The credential presented by a single request.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    Bearer(String),
    Cookie(String),
    None,
}

impl Credential {
    /// Resolve the credential carried by `headers`.
    ///
    /// The scheme is matched case-insensitively. A non-Bearer
    /// `Authorization` header is ignored and the session cookie is tried
    /// instead.
    pub fn from_headers(headers: &HeaderMap, session_cookie: &str) -> Self {
        if let Some(token) = bearer_token(headers) {
            return Self::Bearer(token.to_string());
        }

        match session_cookie_value(headers, session_cookie) {
            Some(value) => Self::Cookie(value.to_string()),
            None => Self::None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Bearer(token) | Self::Cookie(token) => Some(token),
            Self::None => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bearer(_) => "bearer",
            Self::Cookie(_) => "cookie",
            Self::None => "none",
        }
    }

    pub fn is_present(&self) -> bool {
        !matches!(self, Self::None)
    }
}

// Tokens never reach logs.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bearer(_) => write!(f, "Credential::Bearer(<redacted>)"),
            Self::Cookie(_) => write!(f, "Credential::Cookie(<redacted>)"),
            Self::None => write!(f, "Credential::None"),
        }
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim_start().split_once(' '))
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case(BEARER_SCHEME))
        .map(|(_, token)| token.trim())
        .filter(|token| !token.is_empty())
}

fn session_cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().trim_matches('"'))
        .filter(|value| !value.is_empty())
}
