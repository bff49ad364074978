use crate::domain::AppError;

/// Interactive source of login credentials.
pub trait CredentialPrompt {
    fn username(&self) -> Result<String, AppError>;

    /// Read a password without echoing it.
    fn password(&self) -> Result<String, AppError>;
}
