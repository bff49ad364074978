pub mod command;
pub mod credentials;
pub mod outcome;

pub use command::{DeployOptions, DeployServices, execute};
pub use credentials::{PASSWORD_ENV, USERNAME_ENV, resolve_credentials};
pub use outcome::{ActionKind, DeployAction, DeployOutcome};
