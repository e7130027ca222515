use crate::utils::error::RegistryError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub service: String,
    pub password: String,
    /// When the service was first inserted; overwrites keep it.
    pub added_on: DateTime<Utc>,
}

impl Entry {
    pub fn new(service: String, password: String) -> Self {
        Self {
            service,
            password,
            added_on: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Lexicographic by service name.
    Service,
    /// Insertion order, oldest first.
    AddedOn,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Normal,
    Reverse,
}

impl FromStr for SortKey {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "service" => Ok(SortKey::Service),
            "added_on" => Ok(SortKey::AddedOn),
            other => Err(RegistryError::UnknownSortKey {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Service => write!(f, "service"),
            SortKey::AddedOn => write!(f, "added_on"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(SortOrder::Normal),
            "reverse" => Ok(SortOrder::Reverse),
            other => Err(RegistryError::UnknownSortOrder {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Normal => write!(f, "normal"),
            SortOrder::Reverse => write!(f, "reverse"),
        }
    }
}
