//! Text helpers shared by the detail overlays.

/// Char-safe excerpt: at most `max_chars` characters, with a trailing
/// ellipsis when the input was longer.
#[must_use]
pub fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_chars).collect();
    format!("{truncated}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_passes_through() {
        assert_eq!(excerpt("hola", 10), "hola");
    }

    #[test]
    fn long_text_is_cut_with_ellipsis() {
        assert_eq!(excerpt("abcdefgh", 5), "abcde...");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let text = "ñandú ñandú";
        let cut = excerpt(text, 7);
        assert!(cut.starts_with("ñandú ñ"));
        assert!(cut.ends_with("..."));
    }
}
