//! Free-text hygiene for user-supplied fields before they reach storage.

const BLOCKED_TERMS: &[&str] = &["fuck", "shit", "bitch", "asshole", "cunt"];

pub fn contains_profanity(text: &str) -> bool {
    let lower = text.to_lowercase();
    BLOCKED_TERMS.iter().any(|term| lower.contains(term))
}

/// Escapes HTML-significant characters so stored text is inert when rendered.
pub fn sanitize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.trim().chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profanity_is_case_insensitive() {
        assert!(contains_profanity("what the FuCk"));
        assert!(!contains_profanity("a perfectly nice dinner request"));
    }

    #[test]
    fn script_tags_are_neutralized() {
        assert_eq!(
            sanitize_text("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#x27;x&#x27;)&lt;&#x2F;script&gt;"
        );
    }

    #[test]
    fn plain_text_passes_through_trimmed() {
        assert_eq!(sanitize_text("  12 Kloof Street, Cape Town  "), "12 Kloof Street, Cape Town");
    }
}
