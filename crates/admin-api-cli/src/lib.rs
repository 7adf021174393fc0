/*
[INPUT]:  Public API exports for admin-api-cli crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod commands;
pub mod config;

pub use commands::{Command, execute};
pub use config::ApiProfile;
