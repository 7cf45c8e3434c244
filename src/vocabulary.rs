//! Protocol Vocabulary
//!
//! Closed value sets accepted by markup attributes. Each set is a `Copy`
//! enum implementing [`Vocabulary`], so validators can check membership
//! without string tables scattered across the node definitions.

use std::fmt;

/// A closed set of attribute values with a canonical wire spelling
pub trait Vocabulary: Copy + Sized + 'static {
    /// Every member of the set, in declaration order
    const ALL: &'static [Self];

    /// Wire spelling of the value
    fn as_str(self) -> &'static str;

    /// Look up a value by its exact wire spelling
    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == value)
    }

    /// Iterate over the wire spellings of the set
    fn values() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(|v| v.as_str())
    }
}

macro_rules! vocabulary {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl Vocabulary for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

vocabulary! {
    /// HTTP methods accepted for callback URLs
    HttpMethod {
        Get => "GET",
        Post => "POST",
    }
}

vocabulary! {
    /// Built-in text-to-speech voices
    Voice {
        Man => "man",
        Woman => "woman",
        Alice => "alice",
    }
}

vocabulary! {
    /// Languages spoken by the `man` and `woman` voices
    BasicLanguage {
        English => "en",
        EnglishUk => "en-gb",
        Spanish => "es",
        French => "fr",
        German => "de",
    }
}

vocabulary! {
    /// Locales spoken by the `alice` voice
    AliceLanguage {
        DanishDenmark => "da-DK",
        GermanGermany => "de-DE",
        EnglishAustralia => "en-AU",
        EnglishCanada => "en-CA",
        EnglishUk => "en-GB",
        EnglishIndia => "en-IN",
        EnglishUsa => "en-US",
        CatalanSpain => "ca-ES",
        SpanishSpain => "es-ES",
        SpanishMexico => "es-MX",
        FinnishFinland => "fi-FI",
        FrenchCanada => "fr-CA",
        FrenchFrance => "fr-FR",
        ItalianItaly => "it-IT",
        JapaneseJapan => "ja-JP",
        KoreanKorea => "ko-KR",
        NorwegianNorway => "nb-NO",
        DutchNetherlands => "nl-NL",
        PolishPoland => "pl-PL",
        PortugueseBrazil => "pt-BR",
        PortuguesePortugal => "pt-PT",
        RussianRussia => "ru-RU",
        SwedishSweden => "sv-SE",
        ChineseMandarin => "zh-CN",
        ChineseCantonese => "zh-HK",
        ChineseTaiwanese => "zh-TW",
    }
}

vocabulary! {
    /// Call progress events reported for Client, Number and Sip targets
    SipCallbackEvent {
        Initiated => "initiated",
        Ringing => "ringing",
        Answered => "answered",
        Completed => "completed",
    }
}

vocabulary! {
    /// Participant events reported for a Conference
    ConferenceCallbackEvent {
        Start => "start",
        End => "end",
        Join => "join",
        Leave => "leave",
        Mute => "mute",
        Hold => "hold",
        Speaker => "speaker",
    }
}

vocabulary! {
    /// Recording modes for Dial
    DialRecord {
        DoNotRecord => "do-not-record",
        RecordFromAnswer => "record-from-answer",
        RecordFromRinging => "record-from-ringing",
        RecordFromAnswerDual => "record-from-answer-dual",
        RecordFromRingingDual => "record-from-ringing-dual",
    }
}

vocabulary! {
    /// Recording modes for Conference
    ConferenceRecord {
        DoNotRecord => "do-not-record",
        RecordFromStart => "record-from-start",
    }
}

vocabulary! {
    /// Silence trimming for recordings
    Trim {
        TrimSilence => "trim-silence",
        DoNotTrim => "do-not-trim",
    }
}

vocabulary! {
    /// Beep behaviour when participants enter or leave a Conference
    Beep {
        True => "true",
        False => "false",
        OnEnter => "onEnter",
        OnExit => "onExit",
    }
}

vocabulary! {
    /// Signalling region for a Conference
    Region {
        Us1 => "us1",
        Ie1 => "ie1",
        Sg1 => "sg1",
        Br1 => "br1",
        Au1 => "au1",
        Jp1 => "jp1",
        De1 => "de1",
    }
}

vocabulary! {
    /// Country specific ringback tones played while a Dial rings
    RingTone {
        At => "at",
        Au => "au",
        Bg => "bg",
        Br => "br",
        Be => "be",
        Ch => "ch",
        Cl => "cl",
        Cn => "cn",
        Cz => "cz",
        De => "de",
        Dk => "dk",
        Ee => "ee",
        Es => "es",
        Fi => "fi",
        Fr => "fr",
        Gr => "gr",
        Hu => "hu",
        Il => "il",
        In => "in",
        It => "it",
        Lt => "lt",
        Jp => "jp",
        Mx => "mx",
        My => "my",
        Nl => "nl",
        No => "no",
        Nz => "nz",
        Ph => "ph",
        Pl => "pl",
        Pt => "pt",
        Ru => "ru",
        Se => "se",
        Sg => "sg",
        Th => "th",
        Uk => "uk",
        Us => "us",
        UsOld => "us-old",
        Tw => "tw",
        Ve => "ve",
        Za => "za",
    }
}

vocabulary! {
    /// Input modes for Gather
    GatherInput {
        Dtmf => "dtmf",
        Speech => "speech",
        DtmfSpeech => "dtmf speech",
    }
}

vocabulary! {
    /// Reasons given when rejecting a call
    RejectReason {
        Rejected => "rejected",
        Busy => "busy",
    }
}

vocabulary! {
    /// SSML `break` strengths
    BreakStrength {
        None => "none",
        XWeak => "x-weak",
        Weak => "weak",
        Medium => "medium",
        Strong => "strong",
        XStrong => "x-strong",
    }
}

vocabulary! {
    /// SSML `say-as` interpretations
    InterpretAs {
        SpellOut => "spell-out",
        Characters => "characters",
        Ordinal => "ordinal",
        Digits => "digits",
        Fraction => "fraction",
        Unit => "unit",
        Date => "date",
        Time => "time",
        Telephone => "telephone",
        Address => "address",
        Interjection => "interjection",
        Expletive => "expletive",
    }
}

vocabulary! {
    /// SSML `emphasis` levels
    EmphasisLevel {
        Strong => "strong",
        Moderate => "moderate",
        Reduced => "reduced",
    }
}

vocabulary! {
    /// Named SSML `prosody` rates
    ProsodyRate {
        XSlow => "x-slow",
        Slow => "slow",
        Medium => "medium",
        Fast => "fast",
        XFast => "x-fast",
    }
}

vocabulary! {
    /// Named SSML `prosody` pitches
    ProsodyPitch {
        XLow => "x-low",
        Low => "low",
        Medium => "medium",
        High => "high",
        XHigh => "x-high",
    }
}

vocabulary! {
    /// Named SSML `prosody` volumes
    ProsodyVolume {
        Silent => "silent",
        XSoft => "x-soft",
        Soft => "soft",
        Medium => "medium",
        Loud => "loud",
        XLoud => "x-loud",
    }
}

vocabulary! {
    /// Vendor speech effects (`amazon:effect`), neural voices only
    SpeechEffect {
        Whispered => "whispered",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_spelling() {
        assert_eq!(HttpMethod::parse("GET"), Some(HttpMethod::Get));
        assert_eq!(HttpMethod::parse("get"), None);
        assert_eq!(GatherInput::parse("dtmf speech"), Some(GatherInput::DtmfSpeech));
    }

    #[test]
    fn test_values_follow_declaration_order() {
        let events: Vec<_> = SipCallbackEvent::values().collect();
        assert_eq!(events, vec!["initiated", "ringing", "answered", "completed"]);
    }

    #[test]
    fn test_display_uses_wire_spelling() {
        assert_eq!(InterpretAs::SpellOut.to_string(), "spell-out");
        assert_eq!(AliceLanguage::ALL.len(), 26);
    }
}
