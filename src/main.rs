//! `state` — shorthand wrapper for salt-call and salt.

use clap::Parser;
use salt_state::cli::{self, Cli, Outcome};
use salt_state::core::config::Config;
use salt_state::core::error::StateError;
use salt_state::transport::LocalRunner;

fn run(cli: &Cli) -> Result<Outcome, StateError> {
    let config = Config::from_env();
    tracing::debug!(salt_call = %config.salt_call, salt = %config.salt, "config");
    let mut runner = LocalRunner::from_env();
    cli::dispatch(cli, &config, &mut runner)
}

fn main() {
    let cli = Cli::parse();
    salt_state::logging::init(cli.debug);

    match run(&cli) {
        Ok(Outcome::Completed) => {}
        Ok(Outcome::Usage) => {
            let _ = cli::print_usage(&mut std::io::stdout());
        }
        Err(e) if e.is_usage() => {
            let _ = cli::print_usage(&mut std::io::stderr());
            std::process::exit(e.exit_code());
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
