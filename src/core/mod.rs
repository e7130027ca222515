pub mod store;

pub use crate::domain::model::{Entry, SortKey, SortOrder};
pub use crate::domain::ports::PolicyProvider;
pub use crate::utils::error::Result;
pub use store::PasswordStore;
