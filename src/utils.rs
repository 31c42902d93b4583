//! Shared utility functions used across modules.

use crate::constants::SPINNER_CHARS;

/// Truncate a string to `max_len` characters, appending "..." if truncated.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    } else {
        s.chars().take(max_len).collect()
    }
}

/// Get the spinner character for the current tick.
pub fn spinner_char(tick: u64) -> &'static str {
    SPINNER_CHARS[(tick % SPINNER_CHARS.len() as u64) as usize]
}

/// Animated trailing dots for "loading..." labels.
pub fn loading_dots(tick: u64) -> &'static str {
    match (tick / 4) % 4 {
        0 => "",
        1 => ".",
        2 => "..",
        _ => "...",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── truncate_str ──────────────────────────────────────────────

    #[test]
    fn truncate_short_unchanged() {
        assert_eq!(truncate_str("hello", 10), "hello");
    }

    #[test]
    fn truncate_exact_fit() {
        assert_eq!(truncate_str("hello", 5), "hello");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate_str("hello world", 8), "hello...");
    }

    #[test]
    fn truncate_tiny_limit_has_no_ellipsis() {
        assert_eq!(truncate_str("abcdef", 2), "ab");
        assert_eq!(truncate_str("abcdef", 0), "");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        // Multi-byte characters must not be split.
        assert_eq!(truncate_str("ığüşöçığüşöç", 6), "ığü...");
    }

    // ── spinner / dots ────────────────────────────────────────────

    #[test]
    fn spinner_cycles() {
        assert_eq!(spinner_char(0), SPINNER_CHARS[0]);
        assert_eq!(spinner_char(1), SPINNER_CHARS[1]);
        assert_eq!(spinner_char(SPINNER_CHARS.len() as u64), SPINNER_CHARS[0]);
    }

    #[test]
    fn loading_dots_cycle() {
        assert_eq!(loading_dots(0), "");
        assert_eq!(loading_dots(4), ".");
        assert_eq!(loading_dots(8), "..");
        assert_eq!(loading_dots(12), "...");
        assert_eq!(loading_dots(16), "");
    }
}
