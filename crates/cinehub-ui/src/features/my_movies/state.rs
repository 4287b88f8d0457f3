//! Tab state and list-form validation for the My Movies page.

/// Poster thumbnails previewed per list card; the rest collapse into a
/// spillover badge.
pub const LIST_PREVIEW_LEN: usize = 4;

/// The two tabs on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LibraryTab {
    /// Watched movies grid.
    #[default]
    Watched,
    /// Custom lists.
    Lists,
}

/// Normalize the create-list form; `None` when the name is blank.
#[must_use]
pub fn normalized_list_input(name: &str, description: &str) -> Option<(String, String)> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), description.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_are_rejected() {
        assert!(normalized_list_input("   ", "whatever").is_none());
        assert!(normalized_list_input("", "").is_none());
    }

    #[test]
    fn inputs_are_trimmed() {
        let (name, description) =
            normalized_list_input("  Cine Negro ", " clásicos ").expect("valid");
        assert_eq!(name, "Cine Negro");
        assert_eq!(description, "clásicos");
    }
}
