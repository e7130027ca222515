use crate::app::command::Command;
use crate::core::{PasswordStore, PolicyProvider};
use crate::utils::error::{RegistryError, Result};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub executed: usize,
    pub failed: usize,
}

impl SessionSummary {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Result of a single command, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Silent,
    Services(Vec<String>),
    Password(Option<String>),
}

impl Outcome {
    pub fn render(&self, json: bool) -> Option<String> {
        match (self, json) {
            (Outcome::Silent, _) => None,
            (Outcome::Services(services), true) => {
                Some(serde_json::Value::from(services.clone()).to_string())
            }
            (Outcome::Services(services), false) => Some(services.join(" ")),
            (Outcome::Password(password), true) => Some(
                password
                    .as_deref()
                    .map(serde_json::Value::from)
                    .unwrap_or(serde_json::Value::Null)
                    .to_string(),
            ),
            (Outcome::Password(Some(password)), false) => Some(password.clone()),
            (Outcome::Password(None), false) => Some("(none)".to_string()),
        }
    }
}

/// Drives one store with commands for the lifetime of a process.
pub struct Session<P: PolicyProvider> {
    store: PasswordStore<P>,
    json: bool,
}

impl<P: PolicyProvider> Session<P> {
    pub fn new(store: PasswordStore<P>, json: bool) -> Self {
        Self { store, json }
    }

    pub fn store(&self) -> &PasswordStore<P> {
        &self.store
    }

    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        let outcome = match command {
            Command::Add { service, password } => {
                self.store.add(&service, &password);
                Outcome::Silent
            }
            Command::Update { service, password } => {
                self.store.update(&service, &password);
                Outcome::Silent
            }
            Command::Remove { service } => {
                self.store.remove(&service)?;
                Outcome::Silent
            }
            Command::Get { service } => {
                Outcome::Password(self.store.get_for_service(&service).map(str::to_string))
            }
            Command::List => Outcome::Services(self.store.list_services()),
            Command::Sort { key, order } => {
                Outcome::Services(self.store.sort_services_by(key, order))
            }
        };
        Ok(outcome)
    }

    /// Executes every line of `input`, printing results to `out` and
    /// per-line errors to `err`. A failed line does not stop the session.
    pub fn run<R, W, E>(
        &mut self,
        mut input: R,
        out: &mut W,
        err: &mut E,
    ) -> Result<SessionSummary>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut summary = SessionSummary::default();
        let mut buf = Vec::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            let result = std::str::from_utf8(&buf)
                .map_err(|_| RegistryError::InvalidCommand {
                    message: "line is not valid UTF-8".to_string(),
                })
                .and_then(Command::parse_line)
                .and_then(|parsed| match parsed {
                    Some(command) => self.execute(command).map(Some),
                    None => Ok(None),
                });

            match result {
                Ok(None) => {}
                Ok(Some(outcome)) => {
                    summary.executed += 1;
                    if let Some(text) = outcome.render(self.json) {
                        writeln!(out, "{}", text)?;
                    }
                }
                Err(e) => {
                    summary.failed += 1;
                    tracing::debug!("Line {} failed: {}", line_no, e);
                    self.report_error(err, line_no, &e)?;
                }
            }
        }

        tracing::info!(
            "Session finished: {} executed, {} failed",
            summary.executed,
            summary.failed
        );
        Ok(summary)
    }

    fn report_error<E: Write>(
        &self,
        err: &mut E,
        line_no: usize,
        e: &RegistryError,
    ) -> Result<()> {
        if self.json {
            let record = serde_json::json!({
                "line": line_no,
                "error": e.to_string(),
                "hint": e.recovery_suggestion(),
            });
            writeln!(err, "{}", record)?;
        } else {
            writeln!(err, "line {}: {}", line_no, e)?;
            writeln!(err, "  hint: {}", e.recovery_suggestion())?;
        }
        Ok(())
    }
}
