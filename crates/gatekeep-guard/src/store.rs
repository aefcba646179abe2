use std::future::Future;
use std::pin::Pin;

use crate::error::GuardError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Local shadow-user records for pool accounts.
///
/// The pool is the source of truth for credentials; integrating
/// applications usually keep a local row per user for relations and
/// display. What a provisioned record contains is their policy, not
/// this crate's.
pub trait UserStore: Send + Sync {
    type User: Send;

    /// Look up the local record for a pool username.
    fn find<'a>(
        &'a self,
        username: &'a str,
    ) -> BoxFuture<'a, Result<Option<Self::User>, GuardError>>;

    /// Create the local record for a pool account that has none yet.
    fn provision<'a>(
        &'a self,
        username: &'a str,
    ) -> BoxFuture<'a, Result<Self::User, GuardError>>;
}
