//! Macro strings parsed into markup and rendered end to end
use twiml::parser::{scan_statements, MacroDefaults};
use twiml::{parse, parse_str, Markup, MarkupKind, ParseError, Parser, Response};

fn say_child_kind(node: &Markup) -> MarkupKind {
    match node {
        Markup::Say(say) => {
            assert_eq!(say.children.len(), 1, "macro Say wraps exactly one markup node");
            say.children[0].kind()
        }
        other => panic!("expected Say, got {}", other.type_name()),
    }
}

#[test]
fn test_every_known_verb_maps_to_a_node() {
    let nodes = parse_str(
        "{p|Welcome}{whisper|secret}{strong|now}{pause|1s}{telephone|4155550100}\
         {play|https://example.com/a.mp3}{dtmf|12w5}{say|Bye}{dial|+14155550100}{hangup}",
    );

    let kinds: Vec<_> = nodes.iter().map(Markup::kind).collect();
    assert_eq!(
        kinds,
        vec![
            MarkupKind::Say,
            MarkupKind::Say,
            MarkupKind::Say,
            MarkupKind::Say,
            MarkupKind::Say,
            MarkupKind::Play,
            MarkupKind::Play,
            MarkupKind::Say,
            MarkupKind::Dial,
            MarkupKind::Hangup,
        ]
    );
    assert_eq!(say_child_kind(&nodes[0]), MarkupKind::SsmlText);
    assert_eq!(say_child_kind(&nodes[1]), MarkupKind::SsmlEffect);
    assert_eq!(say_child_kind(&nodes[2]), MarkupKind::SsmlEmphasis);
    assert_eq!(say_child_kind(&nodes[3]), MarkupKind::SsmlBreak);
    assert_eq!(say_child_kind(&nodes[4]), MarkupKind::SsmlSayAs);
}

#[test]
fn test_statement_order_is_preserved() {
    let nodes = parse_str("{hangup}{say|one}{say|two}");

    let texts: Vec<_> = nodes
        .iter()
        .filter_map(|node| match node {
            Markup::Say(say) => Some(say.text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(nodes[0].kind(), MarkupKind::Hangup);
    assert_eq!(texts, vec!["one", "two"]);
}

#[test]
fn test_quoted_content_keeps_commas() {
    let nodes = parse_str("{say|`One, two, three`,voice:alice}");

    match &nodes[0] {
        Markup::Say(say) => {
            assert_eq!(say.text, "One, two, three");
            assert_eq!(say.voice, "alice");
        }
        other => panic!("expected Say, got {}", other.type_name()),
    }
}

#[test]
fn test_text_outside_statements_is_ignored() {
    let nodes = parse_str("ignored {say|kept} also ignored");
    assert_eq!(nodes.len(), 1);
}

#[test]
fn test_input_without_statements_becomes_say() {
    let response = Response::from_macro("Please hold").unwrap();
    let xml = response.encode().unwrap();
    assert!(xml.contains("<Say>Please hold</Say>"));
}

#[test]
fn test_unknown_verbs_never_fall_back_to_say() {
    let result = parse("{gather|1234}");

    assert!(result.nodes.is_empty());
    assert_eq!(result.diagnostics[0].verb, "gather");
    assert!(Response::from_macro("{gather|1234}")
        .unwrap()
        .encode()
        .is_err());
}

#[test]
fn test_strict_mode_reports_offset() {
    let err = parse("{say|Hi} {shout|Hi}").into_strict().unwrap_err();
    assert_eq!(
        err,
        ParseError::UnknownVerb {
            verb: "shout".to_string(),
            offset: 9,
        }
    );
}

#[test]
fn test_scanner_reports_offsets_and_bodies() {
    let statements = scan_statements("{hangup}{say|Hi}");

    assert_eq!(statements.len(), 2);
    assert_eq!(statements[0].verb, "hangup");
    assert_eq!(statements[0].body, None);
    assert_eq!(statements[1].offset, 8);
    assert_eq!(statements[1].body, Some("Hi"));
}

#[test]
fn test_macro_document_renders() {
    let parser = Parser::with_defaults(MacroDefaults {
        voice: Some("alice".to_string()),
        language: Some("en-GB".to_string()),
    });
    let nodes = parser.parse("{say|Connecting you now}{dial|+14155550100,record:1}").nodes;
    let xml = Response::from_nodes(nodes).unwrap().encode().unwrap();

    assert!(xml.contains("<Say voice=\"alice\" language=\"en-GB\">Connecting you now</Say>"));
    assert!(xml.contains("<Dial record=\"record-from-answer\">+14155550100</Dial>"));
}
