//! Macro Verb Table
//!
//! Maps macro verb keys to markup constructions with their default
//! attribute values.

use crate::markup::{
    Dial, Hangup, Markup, Play, Say, SsmlBreak, SsmlEffect, SsmlEmphasis, SsmlSayAs, SsmlText,
};
use crate::parser::ast::Statement;
use crate::parser::MacroDefaults;
use crate::vocabulary::{DialRecord, EmphasisLevel, InterpretAs, SpeechEffect, Vocabulary};

/// The closed set of macro verb keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacroVerb {
    /// `p`
    Paragraph,
    Whisper,
    Strong,
    Pause,
    /// Any `say-as` interpretation keyword, e.g. `telephone`
    SayAs(InterpretAs),
    Hangup,
    Dtmf,
    Play,
    Say,
    Dial,
}

impl MacroVerb {
    pub fn lookup(key: &str) -> Option<Self> {
        let verb = match key {
            "p" => Self::Paragraph,
            "whisper" => Self::Whisper,
            "strong" => Self::Strong,
            "pause" => Self::Pause,
            "hangup" => Self::Hangup,
            "dtmf" => Self::Dtmf,
            "play" => Self::Play,
            "say" => Self::Say,
            "dial" => Self::Dial,
            other => Self::SayAs(InterpretAs::parse(other)?),
        };
        Some(verb)
    }
}

/// Build the node for a statement whose verb key is known
pub fn build(verb: MacroVerb, statement: &Statement, defaults: &MacroDefaults) -> Markup {
    let content = statement.content.clone();

    match verb {
        MacroVerb::Paragraph => Say::with_markup(SsmlText { text: content }).into(),
        MacroVerb::Whisper => Say::with_markup(SsmlEffect {
            name: statement
                .attribute_or("effect", SpeechEffect::Whispered.as_str())
                .to_string(),
            text: content,
        })
        .into(),
        MacroVerb::Strong => Say::with_markup(SsmlEmphasis {
            level: statement
                .attribute_or("level", EmphasisLevel::Strong.as_str())
                .to_string(),
            text: content,
        })
        .into(),
        MacroVerb::Pause => Say::with_markup(SsmlBreak {
            strength: statement.attribute_or("strength", "").to_string(),
            time: content,
        })
        .into(),
        MacroVerb::SayAs(interpretation) => Say::with_markup(SsmlSayAs {
            interpret_as: interpretation.as_str().to_string(),
            format: statement.attribute_or("format", "").to_string(),
            text: content,
        })
        .into(),
        MacroVerb::Hangup => Hangup.into(),
        MacroVerb::Dtmf => Play {
            digits: content,
            ..Default::default()
        }
        .into(),
        MacroVerb::Play => Play {
            url: content,
            loop_count: statement.int_attribute("loop", 0),
            ..Default::default()
        }
        .into(),
        MacroVerb::Say => Say {
            text: content,
            voice: statement
                .attribute_or("voice", defaults.voice.as_deref().unwrap_or(""))
                .to_string(),
            language: statement
                .attribute_or("language", defaults.language.as_deref().unwrap_or(""))
                .to_string(),
            loop_count: statement.int_attribute("loop", 0),
            ..Default::default()
        }
        .into(),
        MacroVerb::Dial => {
            let record = if statement.int_attribute("record", 0) == 1 {
                DialRecord::RecordFromAnswer.as_str().to_string()
            } else {
                String::new()
            };
            Dial {
                number: content,
                record,
                ..Default::default()
            }
            .into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_covers_say_as_keywords() {
        assert_eq!(MacroVerb::lookup("p"), Some(MacroVerb::Paragraph));
        assert_eq!(
            MacroVerb::lookup("telephone"),
            Some(MacroVerb::SayAs(InterpretAs::Telephone))
        );
        assert_eq!(
            MacroVerb::lookup("spell-out"),
            Some(MacroVerb::SayAs(InterpretAs::SpellOut))
        );
        assert_eq!(MacroVerb::lookup("gather"), None);
        assert_eq!(MacroVerb::lookup("Say"), None);
    }

    #[test]
    fn test_every_interpretation_is_a_macro_verb() {
        for interpretation in InterpretAs::ALL {
            assert!(MacroVerb::lookup(interpretation.as_str()).is_some());
        }
    }
}
