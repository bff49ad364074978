//! Credential resolution for deploy.

use crate::domain::{AppError, Credentials};
use crate::ports::CredentialPrompt;

pub const USERNAME_ENV: &str = "SF_STRIKE_USERNAME";
pub const PASSWORD_ENV: &str = "SF_STRIKE_PASSWORD";

/// Resolve login credentials.
///
/// Username: explicit flag, `SF_STRIKE_USERNAME`, configured username, prompt.
/// Password: `SF_STRIKE_PASSWORD`, hidden prompt.
pub fn resolve_credentials<P, E>(
    flag_username: Option<&str>,
    config_username: Option<&str>,
    env: E,
    prompt: &P,
) -> Result<Credentials, AppError>
where
    P: CredentialPrompt + ?Sized,
    E: Fn(&str) -> Option<String>,
{
    let username = match flag_username
        .map(str::to_string)
        .and_then(non_empty)
        .or_else(|| env(USERNAME_ENV).and_then(non_empty))
        .or_else(|| config_username.map(str::to_string).and_then(non_empty))
    {
        Some(username) => username,
        None => non_empty(prompt.username()?)
            .ok_or_else(|| AppError::Prompt("username must not be empty".into()))?,
    };

    let password = match env(PASSWORD_ENV).and_then(non_empty) {
        Some(password) => password,
        None => prompt.password()?,
    };

    Ok(Credentials { username, password })
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() { None } else { Some(value) }
}
