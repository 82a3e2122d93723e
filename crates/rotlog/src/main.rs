//! rotlog CLI - tee standard input into size and age limited, rotating log files

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use rotlog_core::error::{EXIT_STARTUP, EXIT_USAGE};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod output;

use cli::Cli;
use commands::*;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => EXIT_USAGE,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let log_level = cli.log_level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "rotlog={0},rotlog_core={0},rotlog_logs={0}",
                    log_level
                )
                .into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if info::execute(&cli) {
        return;
    }

    if let Err(e) = run::execute(cli) {
        let core_error = e.downcast_ref::<rotlog_core::Error>();
        output::print_error(&format!("{:#}", e));

        if core_error.map_or(false, |err| err.is_user_error()) {
            output::print_usage(&Cli::command().render_usage().to_string());
        }

        let code = core_error.map_or(EXIT_STARTUP, |err| err.exit_code());
        std::process::exit(code);
    }
}
