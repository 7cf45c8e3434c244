//! Macro Statements
//!
//! A decoded statement: verb key, content and `key:value` attributes.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::parser::lexer::RawStatement;

static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`(.*?)`").expect("quoted content pattern is valid"));

/// A statement ready to be turned into markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub offset: usize,
    pub verb: String,
    pub content: String,
    pub attributes: BTreeMap<String, String>,
}

impl Statement {
    /// Decode the body of a raw statement.
    ///
    /// Backtick-quoted content is taken verbatim, commas included, and
    /// removed together with one trailing comma before the attribute list
    /// is split. Without quotes the first comma separated field is the
    /// content. Attribute fields without a `:` are ignored.
    pub fn from_raw(raw: &RawStatement<'_>) -> Self {
        let body = raw.body.unwrap_or("");

        let (content, rest) = match QUOTED.captures(body) {
            Some(caps) => {
                let (whole, quoted) = match (caps.get(0), caps.get(1)) {
                    (Some(whole), Some(quoted)) => (whole, quoted),
                    _ => return Self::unquoted(raw, body),
                };
                let after = &body[whole.end()..];
                let after = after.strip_prefix(',').unwrap_or(after);
                let rest = format!("{}{}", &body[..whole.start()], after);
                (quoted.as_str().to_string(), rest)
            }
            None => return Self::unquoted(raw, body),
        };

        Self {
            offset: raw.offset,
            verb: raw.verb.to_string(),
            content,
            attributes: decode_attributes(rest.split(',')),
        }
    }

    fn unquoted(raw: &RawStatement<'_>, body: &str) -> Self {
        let mut fields = body.split(',');
        let content = fields.next().unwrap_or("").to_string();
        Self {
            offset: raw.offset,
            verb: raw.verb.to_string(),
            content,
            attributes: decode_attributes(fields),
        }
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Attribute value, or `default` when absent or empty
    pub fn attribute_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.attribute(key)
            .filter(|value| !value.is_empty())
            .unwrap_or(default)
    }

    /// Attribute parsed as an integer, or `default` when absent or malformed
    pub fn int_attribute(&self, key: &str, default: u32) -> u32 {
        self.attribute(key)
            .and_then(|value| value.parse().ok())
            .unwrap_or(default)
    }
}

fn decode_attributes<'a>(fields: impl Iterator<Item = &'a str>) -> BTreeMap<String, String> {
    let mut attributes = BTreeMap::new();
    for field in fields {
        if field.trim().is_empty() {
            continue;
        }
        match field.split_once(':') {
            Some((key, value)) => {
                attributes.insert(key.trim().to_string(), value.trim().to_string());
            }
            None => log::debug!("ignoring macro attribute without ':': {field:?}"),
        }
    }
    attributes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::scan_statements;

    fn decode(input: &str) -> Statement {
        let raw = scan_statements(input);
        Statement::from_raw(&raw[0])
    }

    #[test]
    fn test_content_only() {
        let statement = decode("{say|Hello Test}");
        assert_eq!(statement.verb, "say");
        assert_eq!(statement.content, "Hello Test");
        assert!(statement.attributes.is_empty());
    }

    #[test]
    fn test_content_and_attributes() {
        let statement = decode("{say|Hello Test,voice:man, loop:2}");
        assert_eq!(statement.content, "Hello Test");
        assert_eq!(statement.attribute("voice"), Some("man"));
        assert_eq!(statement.int_attribute("loop", 0), 2);
    }

    #[test]
    fn test_quoted_content_keeps_commas() {
        let statement = decode("{say|`Quoted, String`,voice:female}");
        assert_eq!(statement.content, "Quoted, String");
        assert_eq!(statement.attribute("voice"), Some("female"));
        assert_eq!(statement.attributes.len(), 1);
    }

    #[test]
    fn test_value_splits_on_first_colon() {
        let statement = decode("{play|`https://example.com/a.mp3`,loop:3,callback:https://x.io}");
        assert_eq!(statement.content, "https://example.com/a.mp3");
        assert_eq!(statement.attribute("callback"), Some("https://x.io"));
    }

    #[test]
    fn test_malformed_fields_are_ignored() {
        let statement = decode("{say|Hello,oops,voice:alice}");
        assert_eq!(statement.attributes.len(), 1);
        assert_eq!(statement.attribute("voice"), Some("alice"));
    }

    #[test]
    fn test_missing_body() {
        let statement = decode("{hangup}");
        assert_eq!(statement.content, "");
        assert!(statement.attributes.is_empty());
    }

    #[test]
    fn test_defaults() {
        let statement = decode("{say|Hi,loop:many,voice:}");
        assert_eq!(statement.int_attribute("loop", 1), 1);
        assert_eq!(statement.attribute_or("voice", "alice"), "alice");
        assert_eq!(statement.attribute_or("language", "en"), "en");
    }
}
