use crate::domain::ports::PolicyProvider;
use crate::utils::error::{RegistryError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Runs the password rules in order: length, special character, uniqueness.
///
/// `existing` yields `(service, password)` pairs for everything currently
/// stored. The first failing rule is reported.
pub fn validate_password<'a, P, I>(policy: &P, password: &str, existing: I) -> Result<()>
where
    P: PolicyProvider + ?Sized,
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    check_length(policy.min_length(), password)?;
    check_special_chars(policy.special_chars(), password)?;
    check_unique(password, existing)
}

fn check_length(min_length: usize, password: &str) -> Result<()> {
    let actual = password.chars().count();
    if actual < min_length {
        return Err(RegistryError::TooShort { min_length, actual });
    }
    Ok(())
}

fn check_special_chars(allowed: &str, password: &str) -> Result<()> {
    if password.chars().any(|c| allowed.contains(c)) {
        Ok(())
    } else {
        Err(RegistryError::MissingSpecialChar {
            allowed: allowed.to_string(),
        })
    }
}

fn check_unique<'a, I>(password: &str, existing: I) -> Result<()>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    match existing.into_iter().find(|(_, stored)| *stored == password) {
        Some((service, _)) => Err(RegistryError::DuplicatePassword {
            existing_service: service.to_string(),
        }),
        None => Ok(()),
    }
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(RegistryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RegistryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PolicyConfig;

    fn none() -> Vec<(&'static str, &'static str)> {
        Vec::new()
    }

    #[test]
    fn test_length_boundary() {
        let policy = PolicyConfig::default();
        assert!(matches!(
            validate_password(&policy, "abc!123", none()),
            Err(RegistryError::TooShort { actual: 7, .. })
        ));
        assert!(validate_password(&policy, "abc!1234", none()).is_ok());
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let policy = PolicyConfig::default();
        // 7 chars, more than 8 bytes
        assert!(validate_password(&policy, "ééééé!é", none()).is_err());
    }

    #[test]
    fn test_each_special_char_is_accepted() {
        let policy = PolicyConfig::default();
        for c in ['!', '@', '$', '%', '&'] {
            let password = format!("abcdefg{}", c);
            assert!(validate_password(&policy, &password, none()).is_ok(), "{}", c);
        }
        assert!(matches!(
            validate_password(&policy, "abcdefg#", none()),
            Err(RegistryError::MissingSpecialChar { .. })
        ));
    }

    #[test]
    fn test_uniqueness_is_case_sensitive() {
        let policy = PolicyConfig::default();
        let existing = vec![("gmail", "abcdefg!")];
        assert!(matches!(
            validate_password(&policy, "abcdefg!", existing.clone()),
            Err(RegistryError::DuplicatePassword { ref existing_service })
                if existing_service == "gmail"
        ));
        assert!(validate_password(&policy, "ABCDEFG!", existing).is_ok());
    }

    #[test]
    fn test_rule_order_reports_length_first() {
        let policy = PolicyConfig::default();
        assert!(matches!(
            validate_password(&policy, "short", none()),
            Err(RegistryError::TooShort { .. })
        ));
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("policy.min_length", 8, 1).is_ok());
        assert!(validate_positive_number("policy.min_length", 0, 1).is_err());
    }
}
