//! Macro Lexer
//!
//! Finds `{verb|body}` statements in a macro string. No decoding of the
//! body happens here; see [`crate::parser::ast`].

use std::sync::LazyLock;

use regex::Regex;

static STATEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(.*?)\}").expect("statement pattern is valid"));

/// One bracketed statement, borrowed from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawStatement<'a> {
    /// Byte offset of the opening brace
    pub offset: usize,
    pub verb: &'a str,
    /// Everything after the first `|`, if there is one
    pub body: Option<&'a str>,
}

/// Scan `input` for statements using a non-greedy bracket match.
///
/// Text between statements is not part of the output.
pub fn scan_statements(input: &str) -> Vec<RawStatement<'_>> {
    STATEMENT
        .captures_iter(input)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let inner = caps.get(1)?.as_str();
            let (verb, body) = match inner.split_once('|') {
                Some((verb, body)) => (verb, Some(body)),
                None => (inner, None),
            };
            Some(RawStatement {
                offset: whole.start(),
                verb,
                body,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_single_statement() {
        let statements = scan_statements("{say|Hello Test}");

        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].offset, 0);
        assert_eq!(statements[0].verb, "say");
        assert_eq!(statements[0].body, Some("Hello Test"));
    }

    #[test]
    fn test_scan_multiple_statements_with_text_between() {
        let statements = scan_statements("{say|Hello} and {strong|World}");

        assert_eq!(statements.len(), 2);
        assert_eq!(statements[1].offset, 16);
        assert_eq!(statements[1].verb, "strong");
    }

    #[test]
    fn test_scan_without_body() {
        let statements = scan_statements("{hangup}");
        assert_eq!(statements[0].verb, "hangup");
        assert_eq!(statements[0].body, None);
    }

    #[test]
    fn test_body_splits_on_first_pipe_only() {
        let statements = scan_statements("{say|a|b}");
        assert_eq!(statements[0].body, Some("a|b"));
    }

    #[test]
    fn test_verb_key_is_not_trimmed() {
        let statements = scan_statements("{ say |hi}");
        assert_eq!(statements[0].verb, " say ");
    }

    #[test]
    fn test_scan_plain_text() {
        assert!(scan_statements("no statements here").is_empty());
        assert!(scan_statements("{ unterminated").is_empty());
    }
}
