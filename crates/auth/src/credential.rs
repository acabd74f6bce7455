//! Credential types and validation.

use core::fmt;

use thiserror::Error;

/// The configured shared secret.
///
/// Loaded once at process start and immutable afterwards. `Debug` is
/// redacted so the secret never lands in a log line by accident.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(..)")
    }
}

impl From<String> for ApiKey {
    fn from(secret: String) -> Self {
        Self(secret)
    }
}

/// Why a presented credential was rejected.
///
/// Both outcomes are terminal for the request; there is no retry path.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CredentialError {
    /// No credential was presented at all.
    #[error("API Key is missing")]
    Missing,

    /// A credential was presented but does not match the configured secret.
    #[error("API Key is invalid")]
    Invalid,
}

/// Credential checking boundary.
pub trait CredentialValidator: Send + Sync {
    /// Check a presented credential (`None` when the client sent nothing).
    fn validate(&self, presented: Option<&str>) -> Result<(), CredentialError>;
}

/// Validator backed by a single static secret.
///
/// Comparison is exact and case-sensitive.
pub struct StaticKeyValidator {
    secret: ApiKey,
}

impl StaticKeyValidator {
    pub fn new(secret: ApiKey) -> Self {
        Self { secret }
    }
}

impl CredentialValidator for StaticKeyValidator {
    fn validate(&self, presented: Option<&str>) -> Result<(), CredentialError> {
        let presented = presented.ok_or(CredentialError::Missing)?;
        if presented != self.secret.as_str() {
            return Err(CredentialError::Invalid);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> StaticKeyValidator {
        StaticKeyValidator::new(ApiKey::new("s3cret"))
    }

    #[test]
    fn missing_credential_is_distinguished_from_wrong_credential() {
        assert_eq!(validator().validate(None), Err(CredentialError::Missing));
        assert_eq!(
            validator().validate(Some("nope")),
            Err(CredentialError::Invalid)
        );
    }

    #[test]
    fn matching_credential_passes() {
        assert_eq!(validator().validate(Some("s3cret")), Ok(()));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        assert_eq!(
            validator().validate(Some("S3CRET")),
            Err(CredentialError::Invalid)
        );
    }

    #[test]
    fn empty_presented_credential_is_invalid_not_missing() {
        assert_eq!(validator().validate(Some("")), Err(CredentialError::Invalid));
    }

    #[test]
    fn debug_never_prints_the_secret() {
        let rendered = format!("{:?}", ApiKey::new("s3cret"));
        assert!(!rendered.contains("s3cret"));
    }
}
