//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

const LONG_ABOUT: &str = "\
A simple rotating logger. Like tee, it copies standard input to standard output \
and also to a log file. Unlike tee, the size and age of each file are limited: \
when either exceeds its threshold a new file is started, and files beyond the \
keep count are deleted.";

const AFTER_LONG_HELP: &str = "\
Parameters:
  <DIRECTORY>  where the log files are created (relative or absolute). Missing
               directories are created, like: mkdir -p '<DIRECTORY>'
  <PREFIX>     file name prefix for the log files. Files are named:

               <DIRECTORY>/<PREFIX>_YYYY-MM-DD_HH-MM-SS.log";

#[derive(Parser, Debug)]
#[command(name = "rotlog")]
#[command(about = "Tee standard input into rotating, timestamped log files")]
#[command(long_about = LONG_ABOUT, after_long_help = AFTER_LONG_HELP)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Directory for the log files
    pub directory: Option<PathBuf>,

    /// File name prefix for the log files
    pub prefix: Option<String>,

    /// Age limit per file in seconds, or with m, h, d or w for minutes, hours,
    /// days or weeks (forced to >= 10s)
    #[arg(
        short,
        long,
        value_name = "N[m|h|d|w]",
        default_value = "1d",
        value_parser = parse_age_arg
    )]
    pub age: u64,

    /// Size limit per file in bytes, or with K, M or G for kilo, mega or giga
    /// bytes (forced to >= 20 bytes)
    #[arg(
        short,
        long,
        value_name = "N[K|M|G]",
        default_value = "50M",
        value_parser = parse_size_arg
    )]
    pub size: u64,

    /// Number of files to keep in addition to the current one (forced to >= 1)
    #[arg(
        short,
        long,
        value_name = "N",
        default_value = "40",
        allow_negative_numbers = true,
        value_parser = parse_keep_arg
    )]
    pub keep: i64,

    /// Diagnostics level written to standard error
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "warn",
        value_parser = ["error", "warn", "info", "debug", "trace"]
    )]
    pub log_level: String,

    /// Show program version and exit
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Show warranty information and exit
    #[arg(short = 'w', long)]
    pub warranty: bool,
}

fn parse_age_arg(s: &str) -> Result<u64, String> {
    rotlog_core::parse_age(s).map_err(|e| e.to_string())
}

fn parse_size_arg(s: &str) -> Result<u64, String> {
    rotlog_core::parse_size(s).map_err(|e| e.to_string())
}

fn parse_keep_arg(s: &str) -> Result<i64, String> {
    rotlog_core::parse_keep(s).map_err(|e| e.to_string())
}
