//! Run command implementation - tee stdin into rotating log files

use anyhow::Result;
use rotlog_core::{Error, RotationConfig};
use rotlog_logs::RotationEngine;
use std::io;
use tracing::debug;

use crate::cli::Cli;
use crate::output::print_banner;

/// Build the validated configuration from parsed arguments
pub fn build_config(cli: Cli) -> Result<RotationConfig, Error> {
    let (directory, prefix) = match (cli.directory, cli.prefix) {
        (Some(directory), Some(prefix)) => (directory, prefix),
        _ => return Err(Error::MissingArguments),
    };

    Ok(RotationConfig::new(directory, prefix)?
        .with_age_limit(cli.age)
        .with_size_limit(cli.size)
        .with_keep_count(cli.keep))
}

pub fn execute(cli: Cli) -> Result<()> {
    let config = build_config(cli)?;
    print_banner(&config);

    let engine = RotationEngine::start(&config)?;
    debug!("Writing to {}", engine.active_path().display());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = engine.run(stdin.lock(), stdout.lock())?;

    debug!(
        "Read {} bytes into {} files",
        summary.bytes_read, summary.files_created
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("rotlog").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_missing_arguments() {
        assert!(matches!(build_config(cli(&[])), Err(Error::MissingArguments)));
        assert!(matches!(
            build_config(cli(&["logs"])),
            Err(Error::MissingArguments)
        ));
    }

    #[test]
    fn test_config_is_clamped() {
        let config = build_config(cli(&["-a", "3", "-s", "5", "-k", "0", "logs", "app"])).unwrap();
        assert_eq!(config.age_limit_secs, 10);
        assert_eq!(config.size_limit_bytes, 20);
        assert_eq!(config.keep_count, 1);
    }

    #[test]
    fn test_bad_prefix() {
        let err = build_config(cli(&["logs", "a/b"])).unwrap_err();
        assert!(err.is_user_error());
    }
}
