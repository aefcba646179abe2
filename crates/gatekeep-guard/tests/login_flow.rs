use std::collections::HashMap;
use std::sync::Mutex;

use gatekeep_auth::{AuthAttempt, AuthError, AuthTokens};
use gatekeep_guard::{
    Authenticator, BoxFuture, GuardError, LoginOutcome, SessionGuard, UserStore,
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct LocalUser {
    username: String,
}

/// Pool stand-in that answers every credential check the same way.
#[derive(Clone)]
enum Script {
    Accept,
    Challenge(String),
    Reject,
    NotConfirmed,
}

struct ScriptedPool {
    script: Script,
}

impl Authenticator for ScriptedPool {
    fn verify<'a>(
        &'a self,
        _username: &'a str,
        _password: &'a str,
    ) -> BoxFuture<'a, Result<AuthAttempt, AuthError>> {
        let script = self.script.clone();
        Box::pin(async move {
            match script {
                Script::Accept => Ok(AuthAttempt::Authenticated(tokens())),
                Script::Challenge(session) => Ok(AuthAttempt::NewPasswordRequired { session }),
                Script::Reject => Err(AuthError::CredentialsRejected),
                Script::NotConfirmed => Err(AuthError::UserNotConfirmed),
            }
        })
    }
}

#[derive(Default)]
struct MemoryStore {
    users: Mutex<HashMap<String, LocalUser>>,
    provisioned: Mutex<Vec<String>>,
}

impl MemoryStore {
    fn seeded(username: &str) -> Self {
        let store = Self::default();
        store.users.lock().unwrap().insert(
            username.to_string(),
            LocalUser {
                username: username.to_string(),
            },
        );
        store
    }

    fn provisioned(&self) -> Vec<String> {
        self.provisioned.lock().unwrap().clone()
    }
}

impl UserStore for MemoryStore {
    type User = LocalUser;

    fn find<'a>(
        &'a self,
        username: &'a str,
    ) -> BoxFuture<'a, Result<Option<LocalUser>, GuardError>> {
        let found = self.users.lock().unwrap().get(username).cloned();
        Box::pin(async move { Ok(found) })
    }

    fn provision<'a>(&'a self, username: &'a str) -> BoxFuture<'a, Result<LocalUser, GuardError>> {
        let user = LocalUser {
            username: username.to_string(),
        };
        self.users
            .lock()
            .unwrap()
            .insert(username.to_string(), user.clone());
        self.provisioned.lock().unwrap().push(username.to_string());
        Box::pin(async move { Ok(user) })
    }
}

fn tokens() -> AuthTokens {
    AuthTokens {
        access_token: "access".to_string(),
        id_token: "id".to_string(),
        refresh_token: "refresh".to_string(),
        expires_in: 3600,
    }
}

#[tokio::test]
async fn rejected_credentials_deny_login_without_a_session() {
    let guard = SessionGuard::new(
        ScriptedPool {
            script: Script::Reject,
        },
        MemoryStore::seeded("jo@example.com"),
    );

    let outcome = guard.attempt_login("jo@example.com", "wrong").await.unwrap();
    assert!(matches!(outcome, LoginOutcome::Denied));
}

#[tokio::test]
async fn challenge_marks_session_and_reports_success() {
    let store = MemoryStore::default();
    let guard = SessionGuard::new(
        ScriptedPool {
            script: Script::Challenge("sess-1".to_string()),
        },
        store,
    );

    let outcome = guard
        .attempt_login("jo@example.com", "temporary")
        .await
        .unwrap();

    // A NEW_PASSWORD_REQUIRED challenge never completes a normal login.
    assert!(!matches!(outcome, LoginOutcome::Authenticated { .. }));

    match outcome {
        LoginOutcome::PasswordChangeRequired {
            session,
            challenge_session,
        } => {
            assert_eq!(session.username(), "jo@example.com");
            assert!(session.force_password_change());
            assert_eq!(challenge_session, "sess-1");
        }
        other => panic!("expected PasswordChangeRequired, got {other:?}"),
    }

    // The challenge short-circuits before the local-user lookup.
    assert!(guard.store().provisioned().is_empty());
}

#[tokio::test]
async fn first_login_provisions_missing_local_user() {
    let guard = SessionGuard::new(
        ScriptedPool {
            script: Script::Accept,
        },
        MemoryStore::default(),
    );

    let outcome = guard
        .attempt_login("new@example.com", "correct")
        .await
        .unwrap();

    match outcome {
        LoginOutcome::Authenticated { user, session, .. } => {
            assert_eq!(user.username, "new@example.com");
            assert!(!session.force_password_change());
        }
        other => panic!("expected Authenticated, got {other:?}"),
    }
    assert_eq!(guard.store().provisioned(), vec!["new@example.com"]);
}

#[tokio::test]
async fn existing_local_user_logs_in_normally() {
    let guard = SessionGuard::new(
        ScriptedPool {
            script: Script::Accept,
        },
        MemoryStore::seeded("jo@example.com"),
    );

    let outcome = guard
        .attempt_login("jo@example.com", "correct")
        .await
        .unwrap();

    match outcome {
        LoginOutcome::Authenticated {
            user,
            tokens,
            session,
        } => {
            assert_eq!(user.username, "jo@example.com");
            assert_eq!(tokens.access_token, "access");
            assert_eq!(session.username(), "jo@example.com");
            assert!(!session.force_password_change());
        }
        other => panic!("expected Authenticated, got {other:?}"),
    }
    assert!(guard.store().provisioned().is_empty());
}

#[tokio::test]
async fn unconfirmed_user_surfaces_distinctly() {
    let guard = SessionGuard::new(
        ScriptedPool {
            script: Script::NotConfirmed,
        },
        MemoryStore::seeded("jo@example.com"),
    );

    let err = guard
        .attempt_login("jo@example.com", "correct")
        .await
        .unwrap_err();
    assert!(matches!(err, GuardError::UserNotConfirmed));
}
