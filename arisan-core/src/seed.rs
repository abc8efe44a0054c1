use crate::{ArisanError, Result};

/// Parse a free-text seed field. Blank input means no seed.
pub fn parse_seed(input: &str) -> Result<Option<u64>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u64>()
        .map(Some)
        .map_err(|_| ArisanError::InvalidSeedInput(trimmed.to_string()))
}

/// Like [`parse_seed`], but invalid input falls back to no seed with a warning
pub fn parse_seed_lenient(input: &str) -> Option<u64> {
    match parse_seed(input) {
        Ok(seed) => seed,
        Err(e) => {
            tracing::warn!("{}; drawing without a seed", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed("42").unwrap(), Some(42));
        assert_eq!(parse_seed("  7 ").unwrap(), Some(7));
        assert_eq!(parse_seed("+9").unwrap(), Some(9));
        assert_eq!(parse_seed("").unwrap(), None);
        assert_eq!(parse_seed("   ").unwrap(), None);
        assert_eq!(
            parse_seed("18446744073709551615").unwrap(),
            Some(u64::MAX)
        );
    }

    #[test]
    fn test_invalid_seed() {
        for input in ["abc", "4.2", "-1", "12a", "18446744073709551616"] {
            assert!(matches!(
                parse_seed(input),
                Err(ArisanError::InvalidSeedInput(_))
            ));
            assert_eq!(parse_seed_lenient(input), None);
        }
    }
}
