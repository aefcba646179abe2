//! gatekeep-auth
//!
//! Credential adapter over the AWS Cognito Identity Provider API.
//! Delegates credential verification and user-lifecycle operations to a
//! Cognito user pool and maps every provider failure into a closed
//! vocabulary of error kinds and status tokens.
//!
//! Public API:
//! - [`CognitoGate`] — one method per pool operation
//! - [`CognitoConfig`] — environment-loaded pool configuration
//! - [`AuthAttempt`] / [`AuthError`] — tagged outcome of a credential check
//! - [`ConfirmStatus`] / [`PasswordStatus`] — status tokens for the
//!   confirmation and password-reset flows

pub mod attributes;
pub mod client;
pub mod config;
pub mod error;
pub mod gate;
pub mod secret;
pub mod status;

pub use crate::config::{CognitoConfig, CredentialSource};
pub use crate::error::AuthError;
pub use crate::gate::{AuthAttempt, AuthTokens, CognitoGate, PoolUser};
pub use crate::status::{ConfirmStatus, PasswordStatus};
