use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// The account exists but its email has not been confirmed yet.
    /// Callers route this to the confirmation flow instead of treating
    /// it as a plain rejection.
    #[error("user is not confirmed")]
    UserNotConfirmed,

    /// The pool rejected the credentials, or the call failed in a way
    /// the caller cannot distinguish from a rejection.
    #[error("credentials rejected")]
    CredentialsRejected,

    #[error("invalid user attribute: {0}")]
    Attribute(String),

    #[error("Cognito error: {0}")]
    Cognito(String),

    #[error("configuration error: {0}")]
    Config(String),
}
