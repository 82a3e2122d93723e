//! Status output. Everything except informational text goes to standard
//! error, keeping standard output for the tee'd data.

use colored::Colorize;
use rotlog_core::{RotationConfig, VERSION};

const WARRANTY: &str = "\
rotlog is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. In no event shall the authors or copyright holders be
liable for any claim, damages or other liability arising from, out of or in
connection with the software or the use or other dealings in the software.
See the MIT license for details.";

pub fn print_version() {
    println!("rotlog version {}", VERSION);
}

pub fn print_warranty() {
    println!("rotlog {}\n\n{}", VERSION, WARRANTY);
}

/// Startup summary of the effective limits
pub fn print_banner(config: &RotationConfig) {
    eprintln!(
        "{} {}/{}",
        "Rotation Logger".bold(),
        config.directory().display(),
        config.prefix()
    );
    eprintln!("age limit:  {} secs", config.age_limit_secs);
    eprintln!("size limit: {} bytes", config.size_limit_bytes);
    eprintln!("keep:       {}", config.keep_count);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

pub fn print_usage(usage: &str) {
    eprintln!("{}", usage);
}
