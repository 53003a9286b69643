use fm_core::Role;

use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Unauthenticated: {reason} {location}")]
    Unauthenticated {
        reason: String,
        location: ErrorLocation,
    },

    #[error("Identity provider unavailable: {message} {location}")]
    ProviderUnavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("User is not a member of account {account_id} {location}")]
    NotAMember {
        account_id: Uuid,
        location: ErrorLocation,
    },

    #[error("Role '{required}' required on account {account_id}, have '{actual}' {location}")]
    RoleMismatch {
        account_id: Uuid,
        required: Role,
        actual: Role,
        location: ErrorLocation,
    },

    #[error("Membership lookup failed: {message} {location}")]
    MembershipLookup {
        message: String,
        location: ErrorLocation,
    },
}

/// Terminal outcome class of a rejected request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    /// No identity could be resolved (401)
    Unauthenticated,
    /// Identity resolved but lacks membership or role (403)
    Forbidden,
    /// The authorization check itself could not complete (500)
    Internal,
}

impl AuthError {
    pub fn status_class(&self) -> AuthFailure {
        match self {
            Self::InvalidToken { .. }
            | Self::TokenExpired { .. }
            | Self::JwtDecode { .. }
            | Self::InvalidClaim { .. }
            | Self::Unauthenticated { .. }
            | Self::ProviderUnavailable { .. } => AuthFailure::Unauthenticated,
            Self::NotAMember { .. } | Self::RoleMismatch { .. } => AuthFailure::Forbidden,
            Self::MembershipLookup { .. } => AuthFailure::Internal,
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
