use std::str::FromStr;

use serde::Deserialize;

/// Which identity provider resolves credentials into identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// Local verification of signed session tokens.
    #[default]
    Jwt,
    /// Hosted identity service queried per request.
    Remote,
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jwt => "jwt",
            Self::Remote => "remote",
        }
    }
}

impl FromStr for AuthProvider {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "jwt" => Ok(Self::Jwt),
            "remote" => Ok(Self::Remote),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
