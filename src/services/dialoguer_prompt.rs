//! Terminal credential prompt using dialoguer.

use dialoguer::{Input, Password};

use crate::domain::AppError;
use crate::ports::CredentialPrompt;

/// Prompts on the controlling terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompt;

impl CredentialPrompt for DialoguerPrompt {
    fn username(&self) -> Result<String, AppError> {
        Input::<String>::new()
            .with_prompt("Strike-CLI: Username")
            .interact_text()
            .map_err(|err| AppError::Prompt(format!("Failed to read username: {}", err)))
    }

    fn password(&self) -> Result<String, AppError> {
        Password::new()
            .with_prompt("Strike-CLI: Password")
            .interact()
            .map_err(|err| AppError::Prompt(format!("Failed to read password: {}", err)))
    }
}
