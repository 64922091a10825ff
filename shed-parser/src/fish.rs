//! Scanner for `fish` function files.
//!
//! Recognizes `function <name> [flags...]` headers, in both the block form
//! terminated by its own `end` keyword and the single-line form where `;`
//! separates the header from the body. The optional `-d`/`--description`
//! flag's quoted argument supplies the description.

use crate::Function;

/// Scans source text for fish function headers, in top-to-bottom order.
pub(crate) fn scan(content: &str) -> Vec<Function> {
    let mut functions = Vec::new();

    for line in content.lines() {
        for statement in split_statements(line) {
            if let Some(function) = match_header(statement) {
                functions.push(function);
            }
        }
    }

    functions
}

/// Splits one source line into statements on unquoted `;` separators.
fn split_statements(line: &str) -> Vec<&str> {
    let mut statements = Vec::new();
    let mut start = 0;
    let mut quote: Option<char> = None;

    for (offset, c) in line.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            None if c == '"' || c == '\'' => quote = Some(c),
            None if c == ';' => {
                statements.push(line.get(start..offset).unwrap_or_default());
                start = offset + 1;
            }
            _ => {}
        }
    }

    statements.push(line.get(start..).unwrap_or_default());
    statements
}

/// Tries to match a `function` header statement, returning its record.
fn match_header(statement: &str) -> Option<Function> {
    let rest = statement.trim_start().strip_prefix("function")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let rest = rest.trim_start();
    let name: String = rest
        .chars()
        .take_while(|c| !c.is_whitespace())
        .collect();
    if name.is_empty() {
        return None;
    }

    let flags = rest.trim_start_matches(|c: char| !c.is_whitespace());
    Some(Function {
        name,
        description: parse_description_flag(flags),
    })
}

/// Walks the flags following the function name, looking for the
/// `-d`/`--description` flag; returns its argument, or an empty string when
/// the flag is absent. An unterminated quote truncates at end of statement
/// rather than failing.
fn parse_description_flag(flags: &str) -> String {
    let mut chars = flags.chars().peekable();

    loop {
        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }

        let token: String = {
            let mut token = String::new();
            while let Some(&c) = chars.peek() {
                if c.is_whitespace() {
                    break;
                }
                token.push(c);
                chars.next();
            }
            token
        };

        if token.is_empty() {
            return String::new();
        }

        if token == "-d" || token == "--description" {
            while chars.peek().is_some_and(|c| c.is_whitespace()) {
                chars.next();
            }
            return match chars.peek() {
                Some(&q @ ('"' | '\'')) => {
                    chars.next();
                    chars.by_ref().take_while(|&c| c != q).collect()
                }
                _ => chars.by_ref().take_while(|c| !c.is_whitespace()).collect(),
            };
        }
    }
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
    fn block_and_single_line_forms() {
        let functions = scan(
            r#"function f1 -d "f1 description comment"
	echo e
end

function f2
	echo e
end

function f3 --description "f3 description comment"
	echo e
end

function f4 --description "f4 description comment";echo e; end

function f5 -d "f5 description comment";echo e; end

function f6;echo e; end

function f7 -d "function to do something";echo e; end
"#,
        );
        assert_eq!(
            functions,
            vec![
                function("f1", "f1 description comment"),
                function("f2", ""),
                function("f3", "f3 description comment"),
                function("f4", "f4 description comment"),
                function("f5", "f5 description comment"),
                function("f6", ""),
                function("f7", "function to do something"),
            ]
        );
    }

    #[test]
    fn single_quoted_description() {
        let functions = scan("function f1 -d 'single quoted'\nend\n");
        assert_eq!(functions, vec![function("f1", "single quoted")]);
    }

    #[test]
    fn description_containing_semicolon() {
        let functions = scan("function f1 -d \"do a; then b\"; echo e; end\n");
        assert_eq!(functions, vec![function("f1", "do a; then b")]);
    }

    #[test]
    fn unterminated_quote_truncates_at_end_of_statement() {
        let functions = scan("function f1 -d \"never closed\n\techo e\nend\n");
        assert_eq!(functions, vec![function("f1", "never closed")]);
    }

    #[test]
    fn unquoted_description_takes_one_token() {
        let functions = scan("function f1 -d bare rest\nend\n");
        assert_eq!(functions, vec![function("f1", "bare")]);
    }

    #[test]
    fn other_flags_are_ignored() {
        let functions = scan(
            "function f1 --argument-names a b -d \"described\" --on-event fish_prompt\nend\n",
        );
        assert_eq!(functions, vec![function("f1", "described")]);
    }

    #[test]
    fn keyword_without_name_is_not_emitted() {
        assert_eq!(scan("function\nend\n"), vec![]);
        assert_eq!(scan("function;\n"), vec![]);
    }

    #[test]
    fn keyword_must_stand_alone() {
        // `functionx` is not the `function` keyword.
        assert_eq!(scan("functionx f1\nend\n"), vec![]);
    }

    #[test]
    fn body_and_end_lines_emit_nothing() {
        let functions = scan("function f1\n\techo function-like text\nend\n");
        assert_eq!(functions, vec![function("f1", "")]);
    }

    #[test]
    fn later_statement_on_line_is_recognized() {
        let functions = scan("echo setup; function f1 -d \"after another statement\"; end\n");
        assert_eq!(functions, vec![function("f1", "after another statement")]);
    }

    #[test]
    fn trailing_flag_without_argument_yields_empty_description() {
        let functions = scan("function f1 -d\nend\n");
        assert_eq!(functions, vec![function("f1", "")]);
    }
}
