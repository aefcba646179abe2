use gatekeep_auth::{AuthAttempt, AuthError, AuthTokens, CognitoGate};
use tracing::info;

use crate::error::GuardError;
use crate::session::Session;
use crate::store::{BoxFuture, UserStore};

/// Credential-check seam between the guard and the pool.
///
/// [`CognitoGate`] is the production implementation; tests substitute
/// their own.
pub trait Authenticator: Send + Sync {
    fn verify<'a>(
        &'a self,
        username: &'a str,
        password: &'a str,
    ) -> BoxFuture<'a, Result<AuthAttempt, AuthError>>;
}

impl Authenticator for CognitoGate {
    fn verify<'a>(
        &'a self,
        username: &'a str,
        password: &'a str,
    ) -> BoxFuture<'a, Result<AuthAttempt, AuthError>> {
        Box::pin(self.authenticate(username, password))
    }
}

/// Outcome of one login attempt.
#[derive(Debug)]
pub enum LoginOutcome<U> {
    /// Credentials rejected; no session exists.
    Denied,
    /// Credentials accepted and a session established.
    Authenticated {
        user: U,
        tokens: AuthTokens,
        session: Session,
    },
    /// Credentials accepted, but the pool demands a new password. The
    /// session is established and marked so the UI routes to the reset
    /// form; `challenge_session` is what answers the challenge.
    PasswordChangeRequired {
        session: Session,
        challenge_session: String,
    },
}

/// Session guard delegating credential checks to a user pool.
///
/// Dependencies are injected at construction; the guard holds no other
/// state.
pub struct SessionGuard<A, S> {
    authenticator: A,
    store: S,
}

impl<A: Authenticator, S: UserStore> SessionGuard<A, S> {
    pub fn new(authenticator: A, store: S) -> Self {
        Self {
            authenticator,
            store,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Attempt a session login.
    ///
    /// One transition, four outcomes: denied, forced password change,
    /// first login provisioning a local shadow user, or a normal login.
    /// An unconfirmed account surfaces as
    /// [`GuardError::UserNotConfirmed`] rather than a denial.
    pub async fn attempt_login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginOutcome<S::User>, GuardError> {
        let attempt = match self.authenticator.verify(username, password).await {
            Ok(attempt) => attempt,
            Err(AuthError::UserNotConfirmed) => return Err(GuardError::UserNotConfirmed),
            Err(AuthError::CredentialsRejected) => {
                info!(username = username, "login denied");
                return Ok(LoginOutcome::Denied);
            }
            Err(e) => return Err(GuardError::Auth(e)),
        };

        let tokens = match attempt {
            AuthAttempt::NewPasswordRequired { session } => {
                info!(username = username, "login accepted, new password required");
                return Ok(LoginOutcome::PasswordChangeRequired {
                    session: Session::with_forced_password_change(username),
                    challenge_session: session,
                });
            }
            AuthAttempt::Authenticated(tokens) => tokens,
        };

        let user = match self.store.find(username).await? {
            Some(user) => user,
            // First pool-side login on this installation: provision the
            // local shadow record before completing the session.
            None => self.store.provision(username).await?,
        };

        info!(username = username, "login complete");
        Ok(LoginOutcome::Authenticated {
            user,
            tokens,
            session: Session::new(username),
        })
    }
}
