//! Verbs
//!
//! Instructions that may appear directly under a Response, plus the
//! composite Dial, Gather and Say which carry nested markup.

use serde::Serialize;

use super::{Children, Markup, MarkupKind, Node, DIAL_NOUNS, GATHER_VERBS, SSML_MARKUP};
use crate::error::ValidationError;
use crate::render::Element;
use crate::validation::{
    allowed_language, allowed_method, allowed_voice, in_vocabulary_optional,
    int_between_optional, numeric, numeric_or_wait_optional, required, touch_tone_keys, Checks,
};
use crate::vocabulary::{DialRecord, GatherInput, RejectReason, RingTone, Trim};

/// Connect the current caller to another party
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dial {
    pub action: String,
    pub method: String,
    /// Seconds to wait for an answer (5..=600)
    pub timeout: u32,
    pub hangup_on_star: bool,
    /// Maximum call duration in seconds
    pub time_limit: u32,
    pub caller_id: String,
    pub record: String,
    pub trim: String,
    pub ring_tone: String,
    pub recording_status_callback: String,
    pub recording_status_callback_method: String,
    pub answer_on_bridge: bool,
    /// Number dialled when no noun is nested
    pub number: String,
    pub children: Children,
}

impl Dial {
    /// Append a noun; legality is checked by `validate`
    pub fn add(&mut self, node: impl Into<Markup>) -> &mut Self {
        self.children.push(node);
        self
    }
}

impl Node for Dial {
    const KIND: MarkupKind = MarkupKind::Dial;

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        if let Err(err) = Checks::new(Self::KIND)
            .check("method", allowed_method(&self.method))
            .check("timeout", int_between_optional(self.timeout, 5, 600))
            .check("timeLimit", int_between_optional(self.time_limit, 1, 14400))
            .check("record", in_vocabulary_optional::<DialRecord>(&self.record))
            .check("trim", in_vocabulary_optional::<Trim>(&self.trim))
            .check("ringTone", in_vocabulary_optional::<RingTone>(&self.ring_tone))
            .check(
                "recordingStatusCallbackMethod",
                allowed_method(&self.recording_status_callback_method),
            )
            .finish()
        {
            errors.push(err);
        }
        self.children
            .validate_into(Self::KIND, DIAL_NOUNS, &mut errors);
        ValidationError::collect(Self::KIND, errors)
    }

    fn to_element(&self) -> Element {
        Element::new("Dial")
            .attr("action", &self.action)
            .attr("method", &self.method)
            .attr_num("timeout", self.timeout)
            .attr_flag("hangupOnStar", self.hangup_on_star)
            .attr_num("timeLimit", self.time_limit)
            .attr("callerId", &self.caller_id)
            .attr("record", &self.record)
            .attr("trim", &self.trim)
            .attr("ringTone", &self.ring_tone)
            .attr("recordingStatusCallback", &self.recording_status_callback)
            .attr(
                "recordingStatusCallbackMethod",
                &self.recording_status_callback_method,
            )
            .attr_flag("answerOnBridge", self.answer_on_bridge)
            .text(&self.number)
            .children(self.children.elements())
    }
}

/// Collect keypad digits or speech from the caller
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gather {
    pub action: String,
    pub method: String,
    pub timeout: u32,
    pub finish_on_key: String,
    pub num_digits: u32,
    pub input: String,
    pub language: String,
    pub hints: String,
    /// Seconds of silence ending speech input, or `auto`
    pub speech_timeout: String,
    pub partial_result_callback: String,
    pub partial_result_callback_method: String,
    pub profanity_filter: bool,
    pub children: Children,
}

impl Gather {
    /// Append a prompt; legality is checked by `validate`
    pub fn add(&mut self, node: impl Into<Markup>) -> &mut Self {
        self.children.push(node);
        self
    }
}

impl Node for Gather {
    const KIND: MarkupKind = MarkupKind::Gather;

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        let speech_timeout_ok = self.speech_timeout.is_empty()
            || self.speech_timeout == "auto"
            || numeric(&self.speech_timeout);

        if let Err(err) = Checks::new(Self::KIND)
            .check("method", allowed_method(&self.method))
            .check(
                "finishOnKey",
                self.finish_on_key.len() <= 1 && touch_tone_keys(&self.finish_on_key),
            )
            .check("input", in_vocabulary_optional::<GatherInput>(&self.input))
            .check("speechTimeout", speech_timeout_ok)
            .check(
                "partialResultCallbackMethod",
                allowed_method(&self.partial_result_callback_method),
            )
            .finish()
        {
            errors.push(err);
        }
        self.children
            .validate_into(Self::KIND, GATHER_VERBS, &mut errors);
        ValidationError::collect(Self::KIND, errors)
    }

    fn to_element(&self) -> Element {
        Element::new("Gather")
            .attr("action", &self.action)
            .attr("method", &self.method)
            .attr_num("timeout", self.timeout)
            .attr("finishOnKey", &self.finish_on_key)
            .attr_num("numDigits", self.num_digits)
            .attr("input", &self.input)
            .attr("language", &self.language)
            .attr("hints", &self.hints)
            .attr("speechTimeout", &self.speech_timeout)
            .attr("partialResultCallback", &self.partial_result_callback)
            .attr(
                "partialResultCallbackMethod",
                &self.partial_result_callback_method,
            )
            .attr_flag("profanityFilter", self.profanity_filter)
            .children(self.children.elements())
    }
}

/// Text-to-speech, optionally enriched with SSML markup
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Say {
    pub voice: String,
    pub language: String,
    #[serde(rename = "loop")]
    pub loop_count: u32,
    pub text: String,
    pub children: Children,
}

impl Say {
    /// Append SSML markup; legality is checked by `validate`
    pub fn add(&mut self, node: impl Into<Markup>) -> &mut Self {
        self.children.push(node);
        self
    }

    /// Say wrapping a single piece of SSML markup
    pub fn with_markup(node: impl Into<Markup>) -> Self {
        let mut say = Self::default();
        say.add(node);
        say
    }
}

impl Node for Say {
    const KIND: MarkupKind = MarkupKind::Say;

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        if let Err(err) = Checks::new(Self::KIND)
            .check("voice", allowed_voice(&self.voice))
            .check("language", allowed_language(&self.voice, &self.language))
            .check("text", required(&self.text) || !self.children.is_empty())
            .finish()
        {
            errors.push(err);
        }
        self.children
            .validate_into(Self::KIND, SSML_MARKUP, &mut errors);
        ValidationError::collect(Self::KIND, errors)
    }

    fn to_element(&self) -> Element {
        Element::new("Say")
            .attr("voice", &self.voice)
            .attr("language", &self.language)
            .attr_num("loop", self.loop_count)
            .text(&self.text)
            .children(self.children.elements())
    }
}

/// Play an audio file, or send touch-tones when `digits` is set
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Play {
    #[serde(rename = "loop")]
    pub loop_count: u32,
    pub digits: String,
    pub url: String,
}

impl Node for Play {
    const KIND: MarkupKind = MarkupKind::Play;

    fn validate(&self) -> Result<(), ValidationError> {
        Checks::new(Self::KIND)
            .check("digits", numeric_or_wait_optional(&self.digits))
            .check("url", required(&self.url) || required(&self.digits))
            .finish()
    }

    fn to_element(&self) -> Element {
        Element::new("Play")
            .attr_num("loop", self.loop_count)
            .attr("digits", &self.digits)
            .text(&self.url)
    }
}

/// Wait silently
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Pause {
    /// Seconds; the platform default applies when zero
    pub length: u32,
}

impl Node for Pause {
    const KIND: MarkupKind = MarkupKind::Pause;

    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    fn to_element(&self) -> Element {
        Element::new("Pause").attr_num("length", self.length)
    }
}

/// Record the caller's voice
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub action: String,
    pub method: String,
    pub timeout: u32,
    pub finish_on_key: String,
    pub max_length: u32,
    pub play_beep: bool,
    pub trim: String,
    pub recording_status_callback: String,
    pub recording_status_callback_method: String,
    pub transcribe: bool,
    pub transcribe_callback: String,
}

impl Node for Record {
    const KIND: MarkupKind = MarkupKind::Record;

    fn validate(&self) -> Result<(), ValidationError> {
        Checks::new(Self::KIND)
            .check("method", allowed_method(&self.method))
            .check("finishOnKey", touch_tone_keys(&self.finish_on_key))
            .check("trim", in_vocabulary_optional::<Trim>(&self.trim))
            .check(
                "recordingStatusCallbackMethod",
                allowed_method(&self.recording_status_callback_method),
            )
            .finish()
    }

    fn to_element(&self) -> Element {
        Element::new("Record")
            .attr("action", &self.action)
            .attr("method", &self.method)
            .attr_num("timeout", self.timeout)
            .attr("finishOnKey", &self.finish_on_key)
            .attr_num("maxLength", self.max_length)
            .attr_flag("playBeep", self.play_beep)
            .attr("trim", &self.trim)
            .attr("recordingStatusCallback", &self.recording_status_callback)
            .attr(
                "recordingStatusCallbackMethod",
                &self.recording_status_callback_method,
            )
            .attr_flag("transcribe", self.transcribe)
            .attr("transcribeCallback", &self.transcribe_callback)
    }
}

/// Hand call control to another document
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Redirect {
    pub method: String,
    pub url: String,
}

impl Node for Redirect {
    const KIND: MarkupKind = MarkupKind::Redirect;

    fn validate(&self) -> Result<(), ValidationError> {
        Checks::new(Self::KIND)
            .check("method", allowed_method(&self.method))
            .check("url", required(&self.url))
            .finish()
    }

    fn to_element(&self) -> Element {
        Element::new("Redirect")
            .attr("method", &self.method)
            .text(&self.url)
    }
}

/// Decline an incoming call without billing it
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Reject {
    pub reason: String,
}

impl Node for Reject {
    const KIND: MarkupKind = MarkupKind::Reject;

    fn validate(&self) -> Result<(), ValidationError> {
        Checks::new(Self::KIND)
            .check("reason", in_vocabulary_optional::<RejectReason>(&self.reason))
            .finish()
    }

    fn to_element(&self) -> Element {
        Element::new("Reject").attr("reason", &self.reason)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Hangup;

impl Node for Hangup {
    const KIND: MarkupKind = MarkupKind::Hangup;

    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    fn to_element(&self) -> Element {
        Element::new("Hangup")
    }
}

/// Leave the current queue
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Leave;

impl Node for Leave {
    const KIND: MarkupKind = MarkupKind::Leave;

    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    fn to_element(&self) -> Element {
        Element::new("Leave")
    }
}

/// Place the caller into a named queue
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Enqueue {
    pub action: String,
    pub method: String,
    pub wait_url: String,
    pub wait_url_method: String,
    pub workflow_sid: String,
    /// Queue name
    pub name: String,
}

impl Node for Enqueue {
    const KIND: MarkupKind = MarkupKind::Enqueue;

    fn validate(&self) -> Result<(), ValidationError> {
        Checks::new(Self::KIND)
            .check("method", allowed_method(&self.method))
            .check("waitUrlMethod", allowed_method(&self.wait_url_method))
            .check("name", required(&self.name) || required(&self.workflow_sid))
            .finish()
    }

    fn to_element(&self) -> Element {
        Element::new("Enqueue")
            .attr("action", &self.action)
            .attr("method", &self.method)
            .attr("waitUrl", &self.wait_url)
            .attr("waitUrlMethod", &self.wait_url_method)
            .attr("workflowSid", &self.workflow_sid)
            .text(&self.name)
    }
}

/// Reply with a text or media message
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub to: String,
    pub from: String,
    pub action: String,
    pub method: String,
    pub status_callback: String,
    pub body: String,
    /// Media URLs, one `<Media>` element each
    pub media: Vec<String>,
}

impl Node for Message {
    const KIND: MarkupKind = MarkupKind::Message;

    fn validate(&self) -> Result<(), ValidationError> {
        Checks::new(Self::KIND)
            .check("method", allowed_method(&self.method))
            .check("body", required(&self.body) || !self.media.is_empty())
            .check("media", self.media.iter().all(|url| required(url)))
            .finish()
    }

    fn to_element(&self) -> Element {
        let mut element = Element::new("Message")
            .attr("to", &self.to)
            .attr("from", &self.from)
            .attr("action", &self.action)
            .attr("method", &self.method)
            .attr("statusCallback", &self.status_callback);
        if !self.body.is_empty() {
            element = element.child(Element::new("Body").text(&self.body));
        }
        element.children(
            self.media
                .iter()
                .map(|url| Element::new("Media").text(url)),
        )
    }
}

/// Legacy text message verb
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sms {
    pub to: String,
    pub from: String,
    pub action: String,
    pub method: String,
    pub status_callback: String,
    pub body: String,
}

impl Node for Sms {
    const KIND: MarkupKind = MarkupKind::Sms;

    fn validate(&self) -> Result<(), ValidationError> {
        Checks::new(Self::KIND)
            .check("method", allowed_method(&self.method))
            .check("body", required(&self.body))
            .finish()
    }

    fn to_element(&self) -> Element {
        Element::new("Sms")
            .attr("to", &self.to)
            .attr("from", &self.from)
            .attr("action", &self.action)
            .attr("method", &self.method)
            .attr("statusCallback", &self.status_callback)
            .text(&self.body)
    }
}
