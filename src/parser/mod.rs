//! Macro Parser
//!
//! A compact string language for writing call-control markup inline:
//!
//! ```text
//! {<verb>|<content>,<key>:<value>,...}
//! {<verb>|`<content, with commas>`,<key>:<value>,...}
//! ```
//!
//! Each recognized statement becomes one node. Input without any
//! statement is spoken as a single Say.

pub mod ast;
pub mod builder;
pub mod lexer;

use serde::Deserialize;

use crate::error::ParseError;
use crate::markup::{Markup, Say};

pub use ast::Statement;
pub use builder::MacroVerb;
pub use lexer::{scan_statements, RawStatement};

/// Fallback attribute values for the `say` macro
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MacroDefaults {
    pub voice: Option<String>,
    pub language: Option<String>,
}

/// A statement that was dropped from the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Byte offset of the statement in the input
    pub offset: usize,
    pub verb: String,
    pub message: String,
}

/// Nodes produced from a macro string, plus any dropped statements
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParseResult {
    pub nodes: Vec<Markup>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseResult {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Treat the first dropped statement as an error
    pub fn into_strict(self) -> Result<Vec<Markup>, ParseError> {
        match self.diagnostics.into_iter().next() {
            Some(diagnostic) => Err(ParseError::UnknownVerb {
                verb: diagnostic.verb,
                offset: diagnostic.offset,
            }),
            None => Ok(self.nodes),
        }
    }
}

/// Macro parser carrying the defaults applied to `say`
#[derive(Debug, Clone, Default)]
pub struct Parser {
    defaults: MacroDefaults,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(defaults: MacroDefaults) -> Self {
        Self { defaults }
    }

    pub fn parse(&self, input: &str) -> ParseResult {
        let raw_statements = scan_statements(input);

        if raw_statements.is_empty() {
            log::debug!("no macro statements found, speaking input as plain text");
            return ParseResult {
                nodes: vec![Say {
                    text: input.to_string(),
                    ..Default::default()
                }
                .into()],
                diagnostics: Vec::new(),
            };
        }

        let mut result = ParseResult::default();
        for raw in &raw_statements {
            let statement = Statement::from_raw(raw);
            match MacroVerb::lookup(&statement.verb) {
                Some(verb) => {
                    result
                        .nodes
                        .push(builder::build(verb, &statement, &self.defaults));
                }
                None => {
                    log::warn!(
                        "dropping unknown macro verb '{}' at offset {}",
                        statement.verb,
                        statement.offset
                    );
                    result.diagnostics.push(Diagnostic {
                        offset: statement.offset,
                        message: format!("Unknown macro verb '{}'", statement.verb),
                        verb: statement.verb,
                    });
                }
            }
        }
        result
    }
}

/// Parse with default settings, dropping unknown statements
pub fn parse(input: &str) -> ParseResult {
    Parser::new().parse(input)
}

/// Parse with default settings and return only the nodes
pub fn parse_str(input: &str) -> Vec<Markup> {
    parse(input).nodes
}
