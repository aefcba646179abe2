use serde::Serialize;

/// Request-scoped login state handed to the integrating application
/// when an attempt succeeds. Nothing here is persisted by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    username: String,
    force_password_change: bool,
}

impl Session {
    pub(crate) fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            force_password_change: false,
        }
    }

    pub(crate) fn with_forced_password_change(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            force_password_change: true,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Whether the UI must route to the new-password form before
    /// treating this session as fully signed in.
    pub fn force_password_change(&self) -> bool {
        self.force_password_change
    }
}
