// Application layer: line-command sessions over a PasswordStore.

pub mod command;
pub mod session;

pub use command::Command;
pub use session::{Outcome, Session, SessionSummary};
