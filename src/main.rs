use anyhow::Context;
use clap::Parser;
use pw_registry::utils::logger;
use pw_registry::{CliConfig, PasswordStore, RegistryConfig, Session};
use std::fs::File;
use std::io::{self, BufReader};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let config = match &cli.config {
        Some(path) => match RegistryConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Failed to load config file '{}': {}", path.display(), e);
                eprintln!("Failed to load config file '{}': {}", path.display(), e);
                eprintln!("hint: {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => RegistryConfig::default(),
    };

    let mut session = Session::new(PasswordStore::with_policy(config.policy), cli.json);
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    let summary = match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script '{}'", path.display()))?;
            session.run(BufReader::new(file), &mut out, &mut err)?
        }
        None => session.run(io::stdin().lock(), &mut out, &mut err)?,
    };

    if !summary.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
