pub mod deploy;
pub mod deps;
pub mod download;
pub mod list;
pub mod tokens;
