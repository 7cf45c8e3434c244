//! Validation Engine
//!
//! Pure attribute predicates plus the [`Checks`] aggregator that turns a
//! node's predicate results into a single pass/fail with the names of every
//! failing attribute.

use crate::error::ValidationError;
use crate::markup::MarkupKind;
use crate::vocabulary::{AliceLanguage, BasicLanguage, HttpMethod, Voice, Vocabulary};

/// True iff every supplied result is true
pub fn all_of(results: &[bool]) -> bool {
    results.iter().all(|ok| *ok)
}

/// Value is exactly one of the allowed options
pub fn one_of(value: &str, allowed: &[&str]) -> bool {
    allowed.contains(&value)
}

/// Value is empty or exactly one of the allowed options
pub fn one_of_optional(value: &str, allowed: &[&str]) -> bool {
    value.is_empty() || one_of(value, allowed)
}

/// Value is a member of vocabulary `V`
pub fn in_vocabulary<V: Vocabulary>(value: &str) -> bool {
    V::parse(value).is_some()
}

/// Value is empty or a member of vocabulary `V`
pub fn in_vocabulary_optional<V: Vocabulary>(value: &str) -> bool {
    value.is_empty() || in_vocabulary::<V>(value)
}

/// Value is not the empty string
pub fn required(value: &str) -> bool {
    !value.is_empty()
}

/// Value is one or more ASCII digits
pub fn numeric(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Value is empty or numeric
pub fn numeric_optional(value: &str) -> bool {
    value.is_empty() || numeric(value)
}

/// Value is one or more digits or `w` (half second wait) markers
pub fn numeric_or_wait(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit() || b == b'w')
}

/// Value is empty or a touch-tone sequence
pub fn numeric_or_wait_optional(value: &str) -> bool {
    value.is_empty() || numeric_or_wait(value)
}

/// Value lies in `low..=high`
pub fn int_between(value: u32, low: u32, high: u32) -> bool {
    (low..=high).contains(&value)
}

/// Value is unset (0) or lies in `low..=high`
pub fn int_between_optional(value: u32, low: u32, high: u32) -> bool {
    value == 0 || int_between(value, low, high)
}

/// Method is empty (platform default), GET or POST
pub fn allowed_method(value: &str) -> bool {
    in_vocabulary_optional::<HttpMethod>(value)
}

/// Value only contains keypad keys (digits, `#` and `*`)
pub fn touch_tone_keys(value: &str) -> bool {
    value
        .bytes()
        .all(|b| b.is_ascii_digit() || b == b'#' || b == b'*')
}

/// Voice is empty, a built-in voice, or a neural `Polly.*` / `Google.*` voice
pub fn allowed_voice(voice: &str) -> bool {
    voice.is_empty()
        || in_vocabulary::<Voice>(voice)
        || is_neural_voice(voice)
}

/// Language is allowed for the given voice.
///
/// Neural voices carry their own locale, so any language passes for them.
pub fn allowed_language(voice: &str, language: &str) -> bool {
    if is_neural_voice(voice) {
        return true;
    }
    match Voice::parse(voice) {
        Some(Voice::Alice) => in_vocabulary_optional::<AliceLanguage>(language),
        Some(Voice::Man | Voice::Woman) | None => in_vocabulary_optional::<BasicLanguage>(language),
    }
}

fn is_neural_voice(voice: &str) -> bool {
    ["Polly.", "Google."]
        .iter()
        .any(|prefix| voice.len() > prefix.len() && voice.starts_with(prefix))
}

/// Whitespace separated event list where every token belongs to `V`.
///
/// Empty means "platform default"; repeats and any order are accepted.
pub fn allowed_callback_event<V: Vocabulary>(events: &str) -> bool {
    events.split_whitespace().all(in_vocabulary::<V>)
}

/// Collects attribute predicate results for one node
#[derive(Debug, Clone)]
pub struct Checks {
    kind: MarkupKind,
    results: Vec<(&'static str, bool)>,
}

impl Checks {
    pub fn new(kind: MarkupKind) -> Self {
        Self {
            kind,
            results: Vec::new(),
        }
    }

    /// Record the outcome of one predicate for the named attribute
    pub fn check(mut self, field: &'static str, ok: bool) -> Self {
        self.results.push((field, ok));
        self
    }

    pub fn passed(&self) -> bool {
        let outcomes: Vec<bool> = self.results.iter().map(|(_, ok)| *ok).collect();
        all_of(&outcomes)
    }

    /// Names of the attributes whose predicate failed, in check order
    pub fn failures(&self) -> Vec<&'static str> {
        self.results
            .iter()
            .filter(|(_, ok)| !ok)
            .map(|(field, _)| *field)
            .collect()
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.passed() {
            Ok(())
        } else {
            Err(ValidationError::Attributes {
                kind: self.kind,
                fields: self.failures(),
            })
        }
    }
}
