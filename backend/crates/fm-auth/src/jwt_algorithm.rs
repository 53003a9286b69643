use std::fmt;

/// Verification key for identity provider tokens
#[derive(Clone)]
pub enum JwtAlgorithm {
    /// Shared secret, HMAC with SHA-256
    HS256 { secret: Vec<u8> },
    /// PEM-encoded RSA public key, RSA with SHA-256
    RS256 { public_key_pem: String },
}

impl JwtAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Self::HS256 { .. } => "HS256",
            Self::RS256 { .. } => "RS256",
        }
    }
}

// Key material never reaches logs.
impl fmt::Debug for JwtAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JwtAlgorithm::{}(<redacted>)", self.name())
    }
}
