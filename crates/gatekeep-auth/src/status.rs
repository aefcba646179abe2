//! Status tokens consumed by UI-level response logic, and the pure
//! mapping from provider error codes onto them. String identity is the
//! contract: downstream layers match on the token values, not on the
//! enum variants.

use serde::{Serialize, Serializer};

/// Outcome of a confirmation-code exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmStatus {
    Confirmed,
    InvalidCode,
}

impl ConfirmStatus {
    pub fn as_token(&self) -> &'static str {
        match self {
            Self::Confirmed => "user.confirmed",
            Self::InvalidCode => "confirm.invalid",
        }
    }
}

impl Serialize for ConfirmStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_token())
    }
}

/// Outcome of the forgot/reset-password flow.
///
/// The three failure branches of a reset are deliberately distinct:
/// unknown user, password-policy rejection, and bad/expired code each
/// get their own token because UI layers branch on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStatus {
    LinkSent,
    PasswordReset,
    InvalidUser,
    InvalidPassword,
    InvalidToken,
}

impl PasswordStatus {
    pub fn as_token(&self) -> &'static str {
        match self {
            Self::LinkSent => "passwords.sent",
            Self::PasswordReset => "passwords.reset",
            Self::InvalidUser => "passwords.user",
            Self::InvalidPassword => "passwords.password",
            Self::InvalidToken => "passwords.token",
        }
    }
}

impl Serialize for PasswordStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_token())
    }
}

/// Map a provider error code from a password-reset call to its token.
///
/// Anything that is not an unknown user or a policy rejection counts as
/// a bad token (code mismatch, expired code, throttling, transport).
pub fn reset_status(code: Option<&str>) -> PasswordStatus {
    match code {
        Some("UserNotFoundException") => PasswordStatus::InvalidUser,
        Some("InvalidPasswordException") => PasswordStatus::InvalidPassword,
        _ => PasswordStatus::InvalidToken,
    }
}
