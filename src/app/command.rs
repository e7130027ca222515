use crate::domain::model::{SortKey, SortOrder};
use crate::utils::error::{RegistryError, Result};

/// One parsed line of a session script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { service: String, password: String },
    Update { service: String, password: String },
    Remove { service: String },
    Get { service: String },
    List,
    Sort { key: SortKey, order: SortOrder },
}

impl Command {
    /// Parses a line. Blank lines and `#` comments yield `Ok(None)`.
    pub fn parse_line(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let command = match parts.as_slice() {
            ["add", service, password] => Command::Add {
                service: service.to_string(),
                password: password.to_string(),
            },
            ["update", service, password] => Command::Update {
                service: service.to_string(),
                password: password.to_string(),
            },
            ["remove", service] => Command::Remove {
                service: service.to_string(),
            },
            ["get", service] => Command::Get {
                service: service.to_string(),
            },
            ["list"] => Command::List,
            ["sort", key] => Command::Sort {
                key: key.parse()?,
                order: SortOrder::default(),
            },
            ["sort", key, order] => Command::Sort {
                key: key.parse()?,
                order: order.parse()?,
            },
            [name, ..] => {
                let message = match *name {
                    "add" | "update" => format!("'{}' expects <service> <password>", name),
                    "remove" | "get" => format!("'{}' expects <service>", name),
                    "list" => "'list' takes no arguments".to_string(),
                    "sort" => "'sort' expects <service|added_on> [normal|reverse]".to_string(),
                    other => format!("unknown command '{}'", other),
                };
                return Err(RegistryError::InvalidCommand { message });
            }
            [] => return Ok(None),
        };

        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            Command::parse_line("add gmail 12ab5!678").unwrap(),
            Some(Command::Add {
                service: "gmail".to_string(),
                password: "12ab5!678".to_string()
            })
        );
        assert_eq!(Command::parse_line("  list ").unwrap(), Some(Command::List));
        assert_eq!(
            Command::parse_line("sort added_on reverse").unwrap(),
            Some(Command::Sort {
                key: SortKey::AddedOn,
                order: SortOrder::Reverse
            })
        );
        assert_eq!(
            Command::parse_line("sort service").unwrap(),
            Some(Command::Sort {
                key: SortKey::Service,
                order: SortOrder::Normal
            })
        );
    }

    #[test]
    fn test_comments_and_blank_lines() {
        assert_eq!(Command::parse_line("").unwrap(), None);
        assert_eq!(Command::parse_line("   # setup").unwrap(), None);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Command::parse_line("add gmail"),
            Err(RegistryError::InvalidCommand { .. })
        ));
        assert!(matches!(
            Command::parse_line("purge"),
            Err(RegistryError::InvalidCommand { .. })
        ));
        assert!(matches!(
            Command::parse_line("sort date"),
            Err(RegistryError::UnknownSortKey { .. })
        ));
        assert!(matches!(
            Command::parse_line("sort service up"),
            Err(RegistryError::UnknownSortOrder { .. })
        ));
    }
}
