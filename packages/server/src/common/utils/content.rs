/// Pure utility functions for content manipulation
///
/// These functions contain NO side effects - they take inputs and return outputs
/// without touching databases or performing I/O.

/// Generate an excerpt from post content by truncation (fallback when the
/// author did not supply one)
///
/// If the content is longer than `max_chars` characters, it truncates to
/// (max_chars - 3) characters and appends "..." for a total of max_chars.
/// Operates on characters, never mid-codepoint.
///
/// If shorter than max_chars, returns the content unchanged.
pub fn excerpt(content: &str, max_chars: usize) -> String {
    let total = content.chars().count();
    if total > max_chars {
        let truncate_at = max_chars.saturating_sub(3);
        let truncated: String = content.chars().take(truncate_at).collect();
        format!("{}...", truncated)
    } else {
        content.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_short_content() {
        let short = "Short content";
        assert_eq!(excerpt(short, 250), "Short content");
    }

    #[test]
    fn test_excerpt_long_content() {
        let long = "a".repeat(300);
        let out = excerpt(&long, 250);
        assert_eq!(out.chars().count(), 250);
        assert!(out.ends_with("..."));
        assert_eq!(&out[..247], "a".repeat(247).as_str());
    }

    #[test]
    fn test_excerpt_exact_length() {
        let exact = "a".repeat(250);
        let out = excerpt(&exact, 250);
        assert_eq!(out.chars().count(), 250);
        assert!(!out.ends_with("...")); // Shouldn't truncate if exactly at limit
    }

    #[test]
    fn test_excerpt_one_over_length() {
        let one_over = "a".repeat(251);
        let out = excerpt(&one_over, 250);
        assert_eq!(out.chars().count(), 250);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_excerpt_multibyte_content_never_splits_codepoints() {
        let long = "héllo wörld ".repeat(30);
        let out = excerpt(&long, 100);
        assert_eq!(out.chars().count(), 100);
        assert!(out.ends_with("..."));
    }
}
