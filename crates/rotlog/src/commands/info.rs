//! Informational flags: print and exit without starting the engine

use crate::cli::Cli;
use crate::output::{print_version, print_warranty};

/// Handle `--version` and `--warranty`. Returns true when one was printed.
pub fn execute(cli: &Cli) -> bool {
    if cli.version {
        print_version();
        true
    } else if cli.warranty {
        print_warranty();
        true
    } else {
        false
    }
}
