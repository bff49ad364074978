//! Platform login port definition.

use crate::domain::{AppError, Credentials, Session};

/// Opens and closes sessions against the remote platform.
pub trait Authenticator {
    /// Log in with username and password.
    fn login(&self, credentials: &Credentials) -> Result<Session, AppError>;

    /// Invalidate a session previously returned by `login`.
    fn logout(&self, session: &Session) -> Result<(), AppError>;
}
