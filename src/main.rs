//! `spr-config`: resolve spr's configuration and print it.
//!
//! Running the binary performs a full resolution, so it also writes both
//! `.spr.yml` files and bumps the run count.

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use spr_config::{ConfigArgs, GitCli, Resolver, SprConfigError, ops};

/// Resolve and show spr configuration for the current repository.
#[derive(Parser, Debug)]
#[command(name = "spr-config", version)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
struct Cli {
    /// Hosting domain used to recognise the repository remote.
    #[arg(long, global = true, default_value = spr_config::remote::DEFAULT_HOST)]
    host: String,

    /// Fail on unknown keys in config files instead of warning.
    #[arg(long, global = true)]
    strict: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

fn run(cli: Cli) -> Result<(), SprConfigError> {
    let git = GitCli::new();
    let config = Resolver::new(&git)
        .remote_host(&cli.host)
        .strict(cli.strict)
        .resolve()?;
    debug!(run_count = config.user.run_count, "configuration resolved");

    let result = ops::handle(&config, &cli.config.into_action())?;
    println!("{result}");
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
