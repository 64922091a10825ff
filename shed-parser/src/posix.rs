//! Line-oriented scanner for POSIX-family (`sh`/`bash`/`zsh`) function files.
//!
//! Recognizes the two header forms `<name>()` and `function <name> [()]`,
//! each followed by an opening brace on the same or a following line. The
//! scanner identifies headers only; body extents are never tracked, so the
//! body content of a function is irrelevant to the output.

use crate::Function;
use crate::text;

/// Scans source text for function headers, in top-to-bottom order.
pub(crate) fn scan(content: &str) -> Vec<Function> {
    let lines: Vec<&str> = content.lines().collect();
    let mut functions = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        if text::is_comment_line(line) {
            continue;
        }

        let Some(name) = match_header(line, index, &lines) else {
            continue;
        };

        // Only a comment sitting directly on the line above the header
        // attaches as the description; a blank line breaks adjacency.
        let description = index
            .checked_sub(1)
            .map(|previous| lines[previous])
            .filter(|previous| text::is_comment_line(previous))
            .map(text::comment_text)
            .unwrap_or_default();

        functions.push(Function { name, description });
    }

    functions
}

/// Tries to match a function header starting on the given line, returning the
/// function's name. The opening brace may trail on a later line.
fn match_header(line: &str, index: usize, lines: &[&str]) -> Option<String> {
    let trimmed = line.trim_start();

    if let Some(rest) = trimmed.strip_prefix("function") {
        if rest.starts_with(char::is_whitespace) {
            if let Some(name) = match_keyword_form(rest, index, lines) {
                return Some(name);
            }
        }
    }

    match_paren_form(trimmed, index, lines)
}

/// Matches `function <name> [()] {`, with the keyword already consumed.
fn match_keyword_form(rest: &str, index: usize, lines: &[&str]) -> Option<String> {
    let rest = rest.trim_start();
    let name_end = rest
        .find(|c: char| c.is_whitespace() || c == '(' || c == '{')
        .unwrap_or(rest.len());

    let (name, rest) = rest.split_at(name_end);
    if name.is_empty() {
        return None;
    }

    let mut rest = rest.trim_start();
    if let Some(after_parens) = strip_parens(rest) {
        rest = after_parens;
    }

    brace_follows(rest, index, lines).then(|| name.to_string())
}

/// Matches `<name>() {`. The name is the maximal run of non-whitespace,
/// non-`(` characters immediately preceding the parentheses.
fn match_paren_form(trimmed: &str, index: usize, lines: &[&str]) -> Option<String> {
    let open = trimmed.find('(')?;
    let (before, parens) = trimmed.split_at(open);
    let rest = strip_parens(parens)?;
    let name = before.split_whitespace().next_back()?;

    brace_follows(rest, index, lines).then(|| name.to_string())
}

/// Strips a leading `()` pair, tolerating whitespace between the parentheses.
fn strip_parens(s: &str) -> Option<&str> {
    s.strip_prefix('(')?.trim_start().strip_prefix(')')
}

/// Reports whether an opening brace follows the header: either in the rest of
/// the header line itself, or as the first non-blank content on a later line.
fn brace_follows(rest: &str, index: usize, lines: &[&str]) -> bool {
    let rest = rest.trim_start();
    if !rest.is_empty() {
        return rest.starts_with('{');
    }

    lines
        .iter()
        .skip(index + 1)
        .map(|line| line.trim_start())
        .find(|line| !line.is_empty())
        .is_some_and(|line| line.starts_with('{'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn function(name: &str, description: &str) -> Function {
        Function {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn keyword_form_with_and_without_comment() {
        let functions = scan(
            "# This is a function to run
function f1 {
\techo e;
}

function function_test {
\techo e;
}
",
        );
        assert_eq!(
            functions,
            vec![
                function("f1", "This is a function to run"),
                function("function_test", ""),
            ]
        );
    }

    #[test]
    fn paren_form_without_comment() {
        let functions = scan("f1() {\n echo e;\n}");
        assert_eq!(functions, vec![function("f1", "")]);
    }

    #[test]
    fn paren_form_variants() {
        let functions = scan(
            "f1() {
    echo e;
}

f2() { echo e;}

# This is a description comment
f3() {
    echo e;
}

# This is a description comment
f4() { echo e;}
",
        );
        assert_eq!(
            functions,
            vec![
                function("f1", ""),
                function("f2", ""),
                function("f3", "This is a description comment"),
                function("f4", "This is a description comment"),
            ]
        );
    }

    #[test]
    fn keyword_form_without_space_before_brace() {
        let functions = scan("function f3{\n    echo e;\n}\n\nfunction f4{ echo e;}\n");
        assert_eq!(functions, vec![function("f3", ""), function("f4", "")]);
    }

    #[test]
    fn brace_on_following_line() {
        let functions = scan("# build the project\nbuild()\n{\n    make all\n}\n");
        assert_eq!(functions, vec![function("build", "build the project")]);
    }

    #[test]
    fn brace_separated_by_blank_lines() {
        let functions = scan("deploy()\n\n\n{\n    true\n}\n");
        assert_eq!(functions, vec![function("deploy", "")]);
    }

    #[test]
    fn whitespace_between_name_parens_and_brace() {
        let functions = scan("f1 ( ) {\n true\n}\nfunction f2 () {\n true\n}\n");
        assert_eq!(functions, vec![function("f1", ""), function("f2", "")]);
    }

    #[test]
    fn blank_line_breaks_comment_adjacency() {
        let functions = scan("# orphaned comment\n\nf1() {\n true\n}\n");
        assert_eq!(functions, vec![function("f1", "")]);
    }

    #[test]
    fn distant_comment_does_not_attach() {
        let functions = scan("# two lines above\n# directly above\nf1() {\n true\n}\n");
        assert_eq!(functions, vec![function("f1", "directly above")]);
    }

    #[test]
    fn statement_between_comment_and_header_breaks_adjacency() {
        let functions = scan("# comment\nVAR=1\nf1() {\n true\n}\n");
        assert_eq!(functions, vec![function("f1", "")]);
    }

    #[test]
    fn headerless_parens_are_not_emitted() {
        // No extractable name on the header line.
        let functions = scan("() {\n true\n}\n");
        assert_eq!(functions, vec![]);
    }

    #[test]
    fn parens_without_brace_are_not_a_header() {
        let functions = scan("if foo(); then\n  true\nfi\n");
        assert_eq!(functions, vec![]);
    }

    #[test]
    fn comment_lines_alone_emit_nothing() {
        let functions = scan("# just a comment\n# another one\n");
        assert_eq!(functions, vec![]);
    }

    #[test]
    fn indented_header_is_recognized() {
        let functions = scan("\tnested() {\n\t\ttrue\n\t}\n");
        assert_eq!(functions, vec![function("nested", "")]);
    }

    #[test]
    fn description_whitespace_is_trimmed() {
        let functions = scan("#   padded comment   \nf1() {\n true\n}\n");
        assert_eq!(functions, vec![function("f1", "padded comment")]);
    }
}
