//! Nesting and attribute validation across the markup tree
use twiml::{
    Client, Conference, Dial, Gather, Hangup, Markup, MarkupKind, Node, Number, Parameter, Pause,
    Play, Queue, Response, Say, Sip, SsmlBreak, SsmlEmphasis, ValidationError,
};

fn client_by_identity(identity: &str) -> Client {
    Client {
        identity: identity.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_client_addressing_rules() {
    let by_name = Client {
        name: "jenny".to_string(),
        ..Default::default()
    };
    assert!(by_name.validate().is_ok());
    assert!(client_by_identity("alice").validate().is_ok());

    let neither = Client::default();
    assert!(!neither.addressing_is_valid());
    assert!(neither.validate().is_err());

    let both = Client {
        name: "jenny".to_string(),
        identity: "alice".to_string(),
        ..Default::default()
    };
    assert!(both.validate().is_err());
}

#[test]
fn test_client_parameters_need_identity() {
    let parameter = Parameter {
        name: "FirstName".to_string(),
        value: "Alice".to_string(),
    };

    let mut with_identity = client_by_identity("alice");
    with_identity.add(parameter.clone());
    assert!(with_identity.validate().is_ok());

    let mut with_name = Client {
        name: "jenny".to_string(),
        ..Default::default()
    };
    with_name.add(parameter);
    assert_eq!(
        with_name.validate(),
        Err(ValidationError::Attributes {
            kind: MarkupKind::Client,
            fields: vec!["identity"],
        })
    );
}

#[test]
fn test_dial_accepts_every_noun() {
    let mut dial = Dial::default();
    dial.add(Number {
        number: "+14155550100".to_string(),
        ..Default::default()
    })
    .add(client_by_identity("alice"))
    .add(Conference {
        name: "standup".to_string(),
        ..Default::default()
    })
    .add(Queue {
        name: "support".to_string(),
        ..Default::default()
    })
    .add(Sip {
        address: "sip:alice@example.com".to_string(),
        ..Default::default()
    });

    assert!(dial.validate().is_ok());
}

#[test]
fn test_dial_rejects_verbs() {
    let mut dial = Dial::default();
    dial.add(Say {
        text: "hello".to_string(),
        ..Default::default()
    });

    assert!(dial.validate().unwrap_err().rejects_child(MarkupKind::Say));
}

#[test]
fn test_gather_accepts_prompts_only() {
    let mut gather = Gather {
        num_digits: 4,
        ..Default::default()
    };
    gather
        .add(Say {
            text: "Enter your PIN".to_string(),
            ..Default::default()
        })
        .add(Pause { length: 1 })
        .add(Play {
            url: "https://example.com/beep.mp3".to_string(),
            ..Default::default()
        });
    assert!(gather.validate().is_ok());

    gather.add(Hangup);
    assert!(gather
        .validate()
        .unwrap_err()
        .rejects_child(MarkupKind::Hangup));
}

#[test]
fn test_say_accepts_ssml_only() {
    let mut say = Say::with_markup(SsmlBreak {
        time: "500ms".to_string(),
        ..Default::default()
    });
    say.add(SsmlEmphasis {
        level: "strong".to_string(),
        text: "now".to_string(),
    });
    assert!(say.validate().is_ok());

    say.add(Pause::default());
    assert!(say.validate().unwrap_err().rejects_child(MarkupKind::Pause));
}

#[test]
fn test_nested_attribute_errors_surface() {
    let mut dial = Dial::default();
    dial.add(Conference {
        name: "standup".to_string(),
        max_participants: 500,
        ..Default::default()
    });

    let err = dial.validate().unwrap_err();
    assert_eq!(
        err.leaves(),
        vec![&ValidationError::Attributes {
            kind: MarkupKind::Conference,
            fields: vec!["maxParticipants"],
        }]
    );
}

#[test]
fn test_range_checks_ignore_unset_values() {
    assert!(Dial::default().validate().is_ok());
    assert!(Dial {
        timeout: 4,
        ..Default::default()
    }
    .validate()
    .is_err());
    assert!(Dial {
        timeout: 30,
        time_limit: 14400,
        ..Default::default()
    }
    .validate()
    .is_ok());
}

#[test]
fn test_empty_response_is_an_error() {
    assert_eq!(
        Response::new().validate(),
        Err(ValidationError::EmptyDocument)
    );
}

#[test]
fn test_response_rejects_nouns_at_top_level() {
    let mut response = Response::new();
    let result = response.add(Markup::from(Parameter {
        name: "a".to_string(),
        value: "b".to_string(),
    }));

    assert!(result.is_err());
    assert!(response.is_empty());
}
