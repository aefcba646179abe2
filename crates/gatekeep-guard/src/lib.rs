//! gatekeep-guard
//!
//! Session-login state machine over the gatekeep credential adapter.
//! One transition, [`SessionGuard::attempt_login`], turns a credential
//! check into the control signals a UI layer consumes: denied, normal
//! login, or login with a forced password change.

pub mod error;
pub mod guard;
pub mod session;
pub mod store;

pub use crate::error::GuardError;
pub use crate::guard::{Authenticator, LoginOutcome, SessionGuard};
pub use crate::session::Session;
pub use crate::store::{BoxFuture, UserStore};
