use crate::config::PolicyConfig;
use crate::domain::model::{Entry, SortKey, SortOrder};
use crate::domain::ports::PolicyProvider;
use crate::utils::error::{RegistryError, Result};
use crate::utils::validation::validate_password;
use chrono::{DateTime, Utc};

/// Insertion-ordered registry of service passwords.
///
/// Every stored password satisfies the policy and is unique across the store.
/// `add` and `update` drop invalid passwords silently; `try_add` and
/// `try_update` report which rule rejected them.
#[derive(Debug, Clone)]
pub struct PasswordStore<P: PolicyProvider = PolicyConfig> {
    entries: Vec<Entry>,
    policy: P,
}

impl PasswordStore<PolicyConfig> {
    pub fn new() -> Self {
        Self::with_policy(PolicyConfig::default())
    }
}

impl Default for PasswordStore<PolicyConfig> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PolicyProvider> PasswordStore<P> {
    pub fn with_policy(policy: P) -> Self {
        Self {
            entries: Vec::new(),
            policy,
        }
    }

    /// Stores `password` for `service` if it is valid; otherwise does nothing.
    pub fn add(&mut self, service: &str, password: &str) {
        if let Err(e) = self.try_add(service, password) {
            tracing::debug!("Rejected password for '{}': {}", service, e);
        }
    }

    /// Same contract as [`add`](Self::add): creates the service if absent.
    pub fn update(&mut self, service: &str, password: &str) {
        self.add(service, password);
    }

    pub fn try_add(&mut self, service: &str, password: &str) -> Result<()> {
        self.check_password(password)?;

        match self.position(service) {
            Some(index) => {
                self.entries[index].password = password.to_string();
                tracing::debug!("Updated password for '{}'", service);
            }
            None => {
                self.entries
                    .push(Entry::new(service.to_string(), password.to_string()));
                tracing::debug!("Added service '{}'", service);
            }
        }
        Ok(())
    }

    pub fn try_update(&mut self, service: &str, password: &str) -> Result<()> {
        self.try_add(service, password)
    }

    /// Checks `password` against the policy and the passwords stored right now.
    pub fn check_password(&self, password: &str) -> Result<()> {
        validate_password(
            &self.policy,
            password,
            self.entries
                .iter()
                .map(|e| (e.service.as_str(), e.password.as_str())),
        )
    }

    pub fn remove(&mut self, service: &str) -> Result<()> {
        let index = self
            .position(service)
            .ok_or_else(|| RegistryError::ServiceNotFound {
                service: service.to_string(),
            })?;
        self.entries.remove(index);
        tracing::info!("Removed service '{}'", service);
        Ok(())
    }

    pub fn list_services(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.service.clone()).collect()
    }

    pub fn get_for_service(&self, service: &str) -> Option<&str> {
        self.entry(service).map(|e| e.password.as_str())
    }

    /// Base ordering for `key`, then reversed as a whole for `SortOrder::Reverse`.
    pub fn sort_services_by(&self, key: SortKey, order: SortOrder) -> Vec<String> {
        let mut services = self.list_services();
        if key == SortKey::Service {
            services.sort();
        }
        if order == SortOrder::Reverse {
            services.reverse();
        }
        services
    }

    pub fn added_on(&self, service: &str) -> Option<DateTime<Utc>> {
        self.entry(service).map(|e| e.added_on)
    }

    pub fn contains(&self, service: &str) -> bool {
        self.position(service).is_some()
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, service: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.service == service)
    }

    fn position(&self, service: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.service == service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PasswordStore {
        let mut store = PasswordStore::new();
        store.add("gmail", "12ab5!678");
        store.add("facebook", "$abc1234");
        store.add("youtube", "3@245256");
        store.add("twitter", "12345678");
        store
    }

    #[test]
    fn test_scenario_from_usage_notes() {
        let mut store = sample();
        assert_eq!(store.list_services(), vec!["gmail", "facebook", "youtube"]);
        assert_eq!(store.get_for_service("facebook"), Some("$abc1234"));

        store.remove("facebook").unwrap();
        assert_eq!(store.list_services(), vec!["gmail", "youtube"]);

        store.update("gmail", "12345678");
        assert_eq!(store.get_for_service("gmail"), Some("12ab5!678"));
        store.update("gmail", "%21321415");
        assert_eq!(store.get_for_service("gmail"), Some("%21321415"));

        assert_eq!(
            store.sort_services_by(SortKey::Service, SortOrder::Normal),
            vec!["gmail", "youtube"]
        );
        assert_eq!(
            store.sort_services_by(SortKey::AddedOn, SortOrder::Reverse),
            vec!["youtube", "gmail"]
        );
    }

    #[test]
    fn test_overwrite_keeps_position_and_added_on() {
        let mut store = sample();
        let first_seen = store.added_on("gmail").unwrap();
        store.update("gmail", "new&password");
        assert_eq!(store.list_services(), vec!["gmail", "facebook", "youtube"]);
        assert_eq!(store.added_on("gmail"), Some(first_seen));
    }

    #[test]
    fn test_resubmitting_current_password_is_rejected() {
        let mut store = sample();
        let err = store.try_update("gmail", "12ab5!678").unwrap_err();
        assert!(matches!(
            err,
            RegistryError::DuplicatePassword { ref existing_service } if existing_service == "gmail"
        ));
    }

    #[test]
    fn test_update_creates_missing_service() {
        let mut store = PasswordStore::new();
        store.update("github", "octo&cat1");
        assert!(store.contains("github"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_missing_service_fails() {
        let mut store = sample();
        let err = store.remove("myspace").unwrap_err();
        assert!(matches!(err, RegistryError::ServiceNotFound { .. }));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_custom_policy() {
        let policy = PolicyConfig {
            min_length: 4,
            special_chars: "#".to_string(),
        };
        let mut store = PasswordStore::with_policy(policy);
        store.add("a", "ab#d");
        store.add("b", "ab!d");
        assert_eq!(store.list_services(), vec!["a"]);
    }

    #[test]
    fn test_entries_iterate_in_insertion_order() {
        let store = sample();
        let services: Vec<&str> = store.entries().map(|e| e.service.as_str()).collect();
        assert_eq!(services, vec!["gmail", "facebook", "youtube"]);
        assert!(store.entries().all(|e| e.added_on <= Utc::now()));
    }

    #[test]
    fn test_empty_store() {
        let store = PasswordStore::default();
        assert!(store.is_empty());
        assert!(store.list_services().is_empty());
        assert!(store
            .sort_services_by(SortKey::Service, SortOrder::Reverse)
            .is_empty());
        assert_eq!(store.get_for_service("anything"), None);
    }
}
