use gatekeep_auth::AuthError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GuardError {
    /// The account exists but has not confirmed its email. Kept apart
    /// from a plain denial so the UI can route to the confirmation
    /// flow.
    #[error("user is not confirmed")]
    UserNotConfirmed,

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("user store error: {0}")]
    Store(String),
}
