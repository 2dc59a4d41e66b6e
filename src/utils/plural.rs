//! Pluralized counts for log lines.

/// `plural_count(1, "page")` is `"1 page"`, anything else adds an `s`.
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "board"), "0 boards");
        assert_eq!(plural_count(1, "board"), "1 board");
        assert_eq!(plural_count(3, "page"), "3 pages");
    }
}
