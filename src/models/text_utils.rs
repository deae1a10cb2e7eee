//! Text helpers for backend-provided prose.

/// First non-blank paragraph of `text`, split on runs of newlines.
pub fn first_paragraph(text: &str) -> &str {
    text.split('\n')
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_paragraph_multiple() {
        assert_eq!(first_paragraph("One.\n\nTwo.\nThree."), "One.");
    }

    #[test]
    fn test_first_paragraph_leading_newlines() {
        assert_eq!(first_paragraph("\n\n  Start here.\n\nNext"), "Start here.");
    }

    #[test]
    fn test_first_paragraph_empty() {
        assert_eq!(first_paragraph(""), "");
        assert_eq!(first_paragraph("\n\n"), "");
    }
}
