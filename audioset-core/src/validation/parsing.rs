//! Parsing of clip range strings
//!
//! Command-line tools select clips with `start:end` or `start-end`.

use crate::{AudioSetError, Result};
use core::ops::Range;

/// Parse a clip range in the format "start:end" or "start-end"
///
/// A single index "n" selects the one-clip range `n..n+1`.
pub fn parse_range(range_str: &str) -> Result<Range<usize>> {
    if range_str.is_empty() {
        return Err(AudioSetError::InvalidRange);
    }

    let separator = range_str.find(':').or_else(|| range_str.find('-'));

    let Some(pos) = separator else {
        let index = parse_usize(range_str)?;
        let end = index.checked_add(1).ok_or(AudioSetError::InvalidRange)?;
        return Ok(index..end);
    };

    let start = parse_usize(&range_str[..pos])?;
    let end = parse_usize(&range_str[pos + 1..])?;

    if start > end {
        return Err(AudioSetError::InvalidRange);
    }

    Ok(start..end)
}

/// Parse a usize from ASCII digits without std
fn parse_usize(s: &str) -> Result<usize> {
    if s.is_empty() {
        return Err(AudioSetError::InvalidRange);
    }

    let mut result: usize = 0;
    for byte in s.bytes() {
        if !byte.is_ascii_digit() {
            return Err(AudioSetError::InvalidRange);
        }
        result = result
            .checked_mul(10)
            .and_then(|r| r.checked_add((byte - b'0') as usize))
            .ok_or(AudioSetError::InvalidRange)?;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("0:10"), Ok(0..10));
        assert_eq!(parse_range("5-15"), Ok(5..15));
        assert_eq!(parse_range("7"), Ok(7..8));
        assert_eq!(parse_range("3:3"), Ok(3..3));

        assert_eq!(parse_range(""), Err(AudioSetError::InvalidRange));
        assert_eq!(parse_range("10:5"), Err(AudioSetError::InvalidRange));
        assert_eq!(parse_range("abc:def"), Err(AudioSetError::InvalidRange));
        assert_eq!(parse_range("10:"), Err(AudioSetError::InvalidRange));
        assert_eq!(parse_range(":10"), Err(AudioSetError::InvalidRange));
        assert_eq!(
            parse_range("99999999999999999999999"),
            Err(AudioSetError::InvalidRange)
        );
    }

    #[test]
    fn test_parse_usize() {
        assert_eq!(parse_usize("0"), Ok(0));
        assert_eq!(parse_usize("123"), Ok(123));
        assert_eq!(parse_usize("12a"), Err(AudioSetError::InvalidRange));
        assert_eq!(parse_usize("-1"), Err(AudioSetError::InvalidRange));
    }
}
