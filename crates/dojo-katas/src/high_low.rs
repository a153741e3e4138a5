//! Highest and lowest: given a string of whitespace-separated integers
//! (possibly negative), return `"max min"`. Returns `None` when the
//! string is empty or any token fails to parse as an integer; the
//! archive's solutions silently produced NaN there, which this port
//! refuses to do.

/// Parse every token, track the running extremes.
pub fn high_and_low(numbers: &str) -> Option<String> {
    let mut max = i64::MIN;
    let mut min = i64::MAX;
    let mut seen = false;
    for token in numbers.split_whitespace() {
        let value: i64 = token.parse().ok()?;
        max = max.max(value);
        min = min.min(value);
        seen = true;
    }
    seen.then(|| format!("{max} {min}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_extremes() {
        assert_eq!(high_and_low("1 2 3 4 5"), Some("5 1".to_string()));
        assert_eq!(high_and_low("1 2 -3 4 5"), Some("5 -3".to_string()));
        assert_eq!(
            high_and_low("1 9 5 4 -8 8 -2 12 0"),
            Some("12 -8".to_string())
        );
    }

    #[test]
    fn single_token_is_both_max_and_min() {
        assert_eq!(high_and_low("8"), Some("8 8".to_string()));
        assert_eq!(high_and_low("42 42"), Some("42 42".to_string()));
    }

    #[test]
    fn rejects_empty_and_unparsable_input() {
        assert_eq!(high_and_low(""), None);
        assert_eq!(high_and_low("   "), None);
        assert_eq!(high_and_low("1 b 3"), None);
        assert_eq!(high_and_low("1.5 2"), None);
    }
}
