pub mod claims;
pub mod credential;
pub mod error;
pub mod identity_provider;
pub mod jwt_algorithm;
pub mod jwt_identity_provider;
pub mod jwt_validator;
pub mod membership_store;
pub mod remote_identity_provider;
pub mod request_authorizer;

pub use claims::Claims;
pub use credential::Credential;
pub use error::{AuthError, AuthFailure, Result};
pub use identity_provider::IdentityProvider;
pub use jwt_algorithm::JwtAlgorithm;
pub use jwt_identity_provider::JwtIdentityProvider;
pub use jwt_validator::JwtValidator;
pub use membership_store::MembershipStore;
pub use remote_identity_provider::RemoteIdentityProvider;
pub use request_authorizer::RequestAuthorizer;

#[cfg(test)]
mod tests;
