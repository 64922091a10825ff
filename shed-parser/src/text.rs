//! Normalization of description text pulled out of source comments.

/// Returns the description text carried by a `#` comment line: everything
/// after the leading `#` markers, with surrounding whitespace trimmed.
pub(crate) fn comment_text(line: &str) -> String {
    line.trim_start()
        .trim_start_matches('#')
        .trim()
        .to_string()
}

/// Whether the line is a comment line once leading whitespace is ignored.
pub(crate) fn is_comment_line(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_marker_and_whitespace() {
        assert_eq!(comment_text("# a description"), "a description");
        assert_eq!(comment_text("   #   padded   "), "padded");
        assert_eq!(comment_text("## doubled marker"), "doubled marker");
        assert_eq!(comment_text("#"), "");
        assert_eq!(comment_text("#   "), "");
    }

    #[test]
    fn detects_comment_lines() {
        assert!(is_comment_line("# c"));
        assert!(is_comment_line("   # c"));
        assert!(!is_comment_line("f() {"));
        assert!(!is_comment_line(""));
        assert!(!is_comment_line("   "));
    }
}
