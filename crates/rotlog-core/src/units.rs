//! Parsing of `--age`, `--size` and `--keep` values
//!
//! Each value is a plain integer optionally followed by one unit letter:
//! - age: `m`, `h`, `d`, `w`
//! - size: `K`, `M`, `G` (decimal, not binary, multipliers)
//!
//! Unit letters are case sensitive, so `m` (minutes) and `M` (mega) never mix.

use crate::error::{Error, Result};

/// Split `"10M"` into `(10, Some('M'))`. At most one trailing unit letter is allowed.
fn split_value(s: &str) -> Option<(u64, Option<char>)> {
    let s = s.trim();
    let digits_end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(s.len());

    if digits_end == 0 {
        return None;
    }

    let number: u64 = s[..digits_end].parse().ok()?;
    let mut rest = s[digits_end..].chars();
    let unit = rest.next();
    if rest.next().is_some() {
        return None;
    }

    Some((number, unit))
}

/// Parse an age limit like "90", "30m", "2h", "1d" or "1w" into seconds
pub fn parse_age(s: &str) -> Result<u64> {
    let (value, unit) = split_value(s).ok_or_else(|| Error::invalid_age(s))?;

    let multiplier: u64 = match unit {
        None => 1,
        Some('m') => 60,
        Some('h') => 3600,
        Some('d') => 86_400,
        Some('w') => 604_800,
        Some(c) => return Err(Error::invalid_age(format!("unknown age modifier '{}'", c))),
    };

    value
        .checked_mul(multiplier)
        .ok_or_else(|| Error::invalid_age(format!("{} is too large", s)))
}

/// Parse a size limit like "500", "64K", "10M" or "1G" into bytes
pub fn parse_size(s: &str) -> Result<u64> {
    let (value, unit) = split_value(s).ok_or_else(|| Error::invalid_size(s))?;

    let multiplier: u64 = match unit {
        None => 1,
        Some('K') => 1_000,
        Some('M') => 1_000_000,
        Some('G') => 1_000_000_000,
        Some(c) => return Err(Error::invalid_size(format!("unknown size modifier '{}'", c))),
    };

    value
        .checked_mul(multiplier)
        .ok_or_else(|| Error::invalid_size(format!("{} is too large", s)))
}

/// Parse a keep count. Zero and negative values are allowed here and clamped later.
pub fn parse_keep(s: &str) -> Result<i64> {
    s.trim().parse().map_err(|_| Error::invalid_keep(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_age_units() {
        assert_eq!(parse_age("45").unwrap(), 45);
        assert_eq!(parse_age("30m").unwrap(), 1800);
        assert_eq!(parse_age("2h").unwrap(), 7200);
        assert_eq!(parse_age("1d").unwrap(), 86_400);
        assert_eq!(parse_age("2w").unwrap(), 1_209_600);
    }

    #[test]
    fn test_parse_age_rejects_other_letters() {
        assert!(matches!(parse_age("5M"), Err(Error::InvalidAge(_))));
        assert!(matches!(parse_age("2H"), Err(Error::InvalidAge(_))));
        assert!(matches!(parse_age("1D"), Err(Error::InvalidAge(_))));
        assert!(matches!(parse_age("45s"), Err(Error::InvalidAge(_))));
    }

    #[test]
    fn test_parse_age_errors() {
        assert!(parse_age("").is_err());
        assert!(parse_age("h").is_err());
        assert!(parse_age("10x").is_err());
        assert!(parse_age("10hh").is_err());
        assert!(parse_age("-5").is_err());
        assert!(matches!(parse_age("1y"), Err(Error::InvalidAge(_))));
    }

    #[test]
    fn test_parse_age_overflow() {
        assert!(parse_age("18446744073709551615w").is_err());
    }

    #[test]
    fn test_parse_size_units() {
        assert_eq!(parse_size("20").unwrap(), 20);
        assert_eq!(parse_size("64K").unwrap(), 64_000);
        assert_eq!(parse_size("10M").unwrap(), 10_000_000);
        assert_eq!(parse_size("2G").unwrap(), 2_000_000_000);
        assert_eq!(parse_size(" 10M ").unwrap(), 10_000_000);
    }

    #[test]
    fn test_parse_size_rejects_other_letters() {
        assert!(matches!(parse_size("10m"), Err(Error::InvalidSize(_))));
        assert!(matches!(parse_size("10k"), Err(Error::InvalidSize(_))));
        assert!(matches!(parse_size("10g"), Err(Error::InvalidSize(_))));
        assert!(matches!(parse_size("10b"), Err(Error::InvalidSize(_))));
        assert!(matches!(parse_size("10B"), Err(Error::InvalidSize(_))));
    }

    #[test]
    fn test_parse_size_errors() {
        assert!(parse_size("").is_err());
        assert!(parse_size("M").is_err());
        assert!(parse_size("10T").is_err());
        assert!(parse_size("1.5M").is_err());
        assert!(matches!(parse_size("abc"), Err(Error::InvalidSize(_))));
    }

    #[test]
    fn test_parse_keep() {
        assert_eq!(parse_keep("5").unwrap(), 5);
        assert_eq!(parse_keep("0").unwrap(), 0);
        assert_eq!(parse_keep("-3").unwrap(), -3);
        assert!(matches!(parse_keep("many"), Err(Error::InvalidKeep(_))));
    }
}
