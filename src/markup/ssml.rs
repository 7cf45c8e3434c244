//! SSML markup carried inside Say

use serde::Serialize;

use super::{MarkupKind, Node};
use crate::error::ValidationError;
use crate::render::Element;
use crate::validation::{in_vocabulary, in_vocabulary_optional, required, Checks};
use crate::vocabulary::{
    BreakStrength, EmphasisLevel, InterpretAs, ProsodyPitch, ProsodyRate, ProsodyVolume,
    SpeechEffect,
};

/// A spoken paragraph (`<p>`)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SsmlText {
    pub text: String,
}

impl Node for SsmlText {
    const KIND: MarkupKind = MarkupKind::SsmlText;

    fn validate(&self) -> Result<(), ValidationError> {
        Checks::new(Self::KIND)
            .check("text", required(&self.text))
            .finish()
    }

    fn to_element(&self) -> Element {
        Element::new("p").text(&self.text)
    }
}

/// A pause in speech (`<break>`)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SsmlBreak {
    pub strength: String,
    /// Duration such as `500ms` or `2s`
    pub time: String,
}

impl Node for SsmlBreak {
    const KIND: MarkupKind = MarkupKind::SsmlBreak;

    fn validate(&self) -> Result<(), ValidationError> {
        Checks::new(Self::KIND)
            .check("strength", in_vocabulary_optional::<BreakStrength>(&self.strength))
            .check("time", self.time.is_empty() || is_duration(&self.time))
            .finish()
    }

    fn to_element(&self) -> Element {
        Element::new("break")
            .attr("strength", &self.strength)
            .attr("time", &self.time)
    }
}

/// Text read with a specific interpretation (`<say-as>`)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SsmlSayAs {
    pub interpret_as: String,
    /// Layout hint for dates, e.g. `mdy`
    pub format: String,
    pub text: String,
}

impl Node for SsmlSayAs {
    const KIND: MarkupKind = MarkupKind::SsmlSayAs;

    fn validate(&self) -> Result<(), ValidationError> {
        Checks::new(Self::KIND)
            .check(
                "interpret-as",
                in_vocabulary_optional::<InterpretAs>(&self.interpret_as),
            )
            .check("text", required(&self.text))
            .finish()
    }

    fn to_element(&self) -> Element {
        Element::new("say-as")
            .attr("interpret-as", &self.interpret_as)
            .attr("format", &self.format)
            .text(&self.text)
    }
}

/// Stressed text (`<emphasis>`)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SsmlEmphasis {
    pub level: String,
    pub text: String,
}

impl Node for SsmlEmphasis {
    const KIND: MarkupKind = MarkupKind::SsmlEmphasis;

    fn validate(&self) -> Result<(), ValidationError> {
        Checks::new(Self::KIND)
            .check("level", in_vocabulary_optional::<EmphasisLevel>(&self.level))
            .check("text", required(&self.text))
            .finish()
    }

    fn to_element(&self) -> Element {
        Element::new("emphasis")
            .attr("level", &self.level)
            .text(&self.text)
    }
}

/// Text with adjusted rate, volume or pitch (`<prosody>`)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SsmlProsody {
    /// Named rate or a percentage such as `80%`
    pub rate: String,
    /// Named volume or a decibel change such as `+6dB`
    pub volume: String,
    /// Named pitch or a relative percentage such as `-10%`
    pub pitch: String,
    pub text: String,
}

impl Node for SsmlProsody {
    const KIND: MarkupKind = MarkupKind::SsmlProsody;

    fn validate(&self) -> Result<(), ValidationError> {
        let rate_ok = in_vocabulary_optional::<ProsodyRate>(&self.rate)
            || self
                .rate
                .strip_suffix('%')
                .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()));
        let volume_ok = in_vocabulary_optional::<ProsodyVolume>(&self.volume)
            || self
                .volume
                .strip_suffix("dB")
                .is_some_and(is_signed_number);
        let pitch_ok = in_vocabulary_optional::<ProsodyPitch>(&self.pitch)
            || self.pitch.strip_suffix('%').is_some_and(is_signed_number);

        Checks::new(Self::KIND)
            .check("rate", rate_ok)
            .check("volume", volume_ok)
            .check("pitch", pitch_ok)
            .check("text", required(&self.text))
            .finish()
    }

    fn to_element(&self) -> Element {
        Element::new("prosody")
            .attr("rate", &self.rate)
            .attr("volume", &self.volume)
            .attr("pitch", &self.pitch)
            .text(&self.text)
    }
}

/// Vendor speech effect (`<amazon:effect>`), neural voices only
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SsmlEffect {
    pub name: String,
    pub text: String,
}

impl Node for SsmlEffect {
    const KIND: MarkupKind = MarkupKind::SsmlEffect;

    fn validate(&self) -> Result<(), ValidationError> {
        Checks::new(Self::KIND)
            .check(
                "name",
                self.name.is_empty() || in_vocabulary::<SpeechEffect>(&self.name),
            )
            .check("text", required(&self.text))
            .finish()
    }

    fn to_element(&self) -> Element {
        Element::new("amazon:effect")
            .attr("name", &self.name)
            .text(&self.text)
    }
}

/// `250ms`, `2s`, `1.5s`
fn is_duration(value: &str) -> bool {
    let amount = value
        .strip_suffix("ms")
        .or_else(|| value.strip_suffix('s'));
    amount.is_some_and(|n| {
        !n.is_empty()
            && n.bytes().all(|b| b.is_ascii_digit() || b == b'.')
            && n.bytes().filter(|b| *b == b'.').count() <= 1
            && n.bytes().next().is_some_and(|b| b.is_ascii_digit())
    })
}

/// `+6`, `-10`, `3.5`
fn is_signed_number(value: &str) -> bool {
    let digits = value
        .strip_prefix('+')
        .or_else(|| value.strip_prefix('-'))
        .unwrap_or(value);
    digits.bytes().next().is_some_and(|b| b.is_ascii_digit()) && digits.parse::<f64>().is_ok()
}
