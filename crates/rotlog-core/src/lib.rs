//! rotlog core - Shared configuration, unit parsing, and error handling

pub mod config;
pub mod constants;
pub mod error;
pub mod units;

pub use config::*;
pub use constants::*;
pub use error::{Error, Result};
pub use units::{parse_age, parse_keep, parse_size};
