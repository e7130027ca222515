pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::{Command, Session, SessionSummary};
pub use config::{PolicyConfig, RegistryConfig};
pub use core::{Entry, PasswordStore, PolicyProvider, SortKey, SortOrder};
pub use utils::error::{RegistryError, Result};
