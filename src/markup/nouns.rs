//! Nouns
//!
//! Dial targets and the parameters passed to an identity-addressed Client.

use serde::Serialize;

use super::{Children, Markup, MarkupKind, Node, CLIENT_NOUNS};
use crate::error::ValidationError;
use crate::render::Element;
use crate::validation::{
    allowed_callback_event, allowed_method, in_vocabulary_optional, int_between_optional,
    numeric_or_wait_optional, required, Checks,
};
use crate::vocabulary::{
    Beep, ConferenceCallbackEvent, ConferenceRecord, Region, SipCallbackEvent, Trim,
};

/// Dial an application endpoint.
///
/// A client is addressed either by `name` (rendered as character data) or
/// by `identity` (rendered as an `<Identity>` element). Custom
/// [`Parameter`]s can only be attached to an identity-addressed client.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub method: String,
    pub url: String,
    pub status_callback: String,
    pub status_callback_event: String,
    pub status_callback_method: String,
    pub name: String,
    pub identity: String,
    pub children: Children,
}

impl Client {
    /// Append a parameter; legality is checked by `validate`
    pub fn add(&mut self, node: impl Into<Markup>) -> &mut Self {
        self.children.push(node);
        self
    }

    /// Exactly one of name and identity is set, and parameters only
    /// accompany an identity
    pub fn addressing_is_valid(&self) -> bool {
        let has_name = !self.name.is_empty();
        let has_identity = !self.identity.is_empty();
        if has_name == has_identity {
            return false;
        }
        self.children.is_empty() || has_identity
    }
}

impl Node for Client {
    const KIND: MarkupKind = MarkupKind::Client;

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        if let Err(err) = Checks::new(Self::KIND)
            .check("identity", self.addressing_is_valid())
            .check("method", allowed_method(&self.method))
            .check(
                "statusCallbackEvent",
                allowed_callback_event::<SipCallbackEvent>(&self.status_callback_event),
            )
            .check(
                "statusCallbackMethod",
                allowed_method(&self.status_callback_method),
            )
            .finish()
        {
            errors.push(err);
        }
        self.children
            .validate_into(Self::KIND, CLIENT_NOUNS, &mut errors);
        ValidationError::collect(Self::KIND, errors)
    }

    fn to_element(&self) -> Element {
        let mut element = Element::new("Client")
            .attr("method", &self.method)
            .attr("url", &self.url)
            .attr("statusCallback", &self.status_callback)
            .attr("statusCallbackEvent", &self.status_callback_event)
            .attr("statusCallbackMethod", &self.status_callback_method)
            .text(&self.name);
        if !self.identity.is_empty() {
            element = element.child(Element::new("Identity").text(&self.identity));
        }
        element.children(self.children.elements())
    }
}

/// Custom name/value pair forwarded to a Client
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Parameter {
    pub name: String,
    pub value: String,
}

impl Node for Parameter {
    const KIND: MarkupKind = MarkupKind::Parameter;

    fn validate(&self) -> Result<(), ValidationError> {
        Checks::new(Self::KIND)
            .check("name", required(&self.name))
            .check("value", required(&self.value))
            .finish()
    }

    fn to_element(&self) -> Element {
        Element::new("Parameter")
            .attr("name", &self.name)
            .attr("value", &self.value)
    }
}

/// Join a named conference room
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conference {
    pub muted: bool,
    pub beep: String,
    pub start_conference_on_enter: bool,
    pub end_conference_on_exit: bool,
    pub wait_url: String,
    pub wait_method: String,
    /// 2..=250, platform default when zero
    pub max_participants: u32,
    pub record: String,
    pub region: String,
    pub trim: String,
    pub status_callback: String,
    pub status_callback_event: String,
    pub status_callback_method: String,
    pub recording_status_callback: String,
    pub recording_status_callback_method: String,
    pub name: String,
}

impl Node for Conference {
    const KIND: MarkupKind = MarkupKind::Conference;

    fn validate(&self) -> Result<(), ValidationError> {
        Checks::new(Self::KIND)
            .check("beep", in_vocabulary_optional::<Beep>(&self.beep))
            .check("waitMethod", allowed_method(&self.wait_method))
            .check(
                "maxParticipants",
                int_between_optional(self.max_participants, 2, 250),
            )
            .check("record", in_vocabulary_optional::<ConferenceRecord>(&self.record))
            .check("region", in_vocabulary_optional::<Region>(&self.region))
            .check("trim", in_vocabulary_optional::<Trim>(&self.trim))
            .check(
                "statusCallbackEvent",
                allowed_callback_event::<ConferenceCallbackEvent>(&self.status_callback_event),
            )
            .check(
                "statusCallbackMethod",
                allowed_method(&self.status_callback_method),
            )
            .check(
                "recordingStatusCallbackMethod",
                allowed_method(&self.recording_status_callback_method),
            )
            .check("name", required(&self.name))
            .finish()
    }

    fn to_element(&self) -> Element {
        Element::new("Conference")
            .attr_flag("muted", self.muted)
            .attr("beep", &self.beep)
            .attr_flag("startConferenceOnEnter", self.start_conference_on_enter)
            .attr_flag("endConferenceOnExit", self.end_conference_on_exit)
            .attr("waitUrl", &self.wait_url)
            .attr("waitMethod", &self.wait_method)
            .attr_num("maxParticipants", self.max_participants)
            .attr("record", &self.record)
            .attr("region", &self.region)
            .attr("trim", &self.trim)
            .attr("statusCallback", &self.status_callback)
            .attr("statusCallbackEvent", &self.status_callback_event)
            .attr("statusCallbackMethod", &self.status_callback_method)
            .attr("recordingStatusCallback", &self.recording_status_callback)
            .attr(
                "recordingStatusCallbackMethod",
                &self.recording_status_callback_method,
            )
            .text(&self.name)
    }
}

/// Dial a phone number
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Number {
    /// Touch-tones played once the call connects, `w` waits half a second
    pub send_digits: String,
    pub url: String,
    pub method: String,
    pub status_callback: String,
    pub status_callback_event: String,
    pub status_callback_method: String,
    pub number: String,
}

impl Node for Number {
    const KIND: MarkupKind = MarkupKind::Number;

    fn validate(&self) -> Result<(), ValidationError> {
        Checks::new(Self::KIND)
            .check("sendDigits", numeric_or_wait_optional(&self.send_digits))
            .check("method", allowed_method(&self.method))
            .check(
                "statusCallbackEvent",
                allowed_callback_event::<SipCallbackEvent>(&self.status_callback_event),
            )
            .check(
                "statusCallbackMethod",
                allowed_method(&self.status_callback_method),
            )
            .check("number", required(&self.number))
            .finish()
    }

    fn to_element(&self) -> Element {
        Element::new("Number")
            .attr("sendDigits", &self.send_digits)
            .attr("url", &self.url)
            .attr("method", &self.method)
            .attr("statusCallback", &self.status_callback)
            .attr("statusCallbackEvent", &self.status_callback_event)
            .attr("statusCallbackMethod", &self.status_callback_method)
            .text(&self.number)
    }
}

/// Dial into a call queue
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Queue {
    pub url: String,
    pub method: String,
    pub reservation_sid: String,
    pub post_work_activity_sid: String,
    pub name: String,
}

impl Node for Queue {
    const KIND: MarkupKind = MarkupKind::Queue;

    fn validate(&self) -> Result<(), ValidationError> {
        Checks::new(Self::KIND)
            .check("method", allowed_method(&self.method))
            .check("name", required(&self.name))
            .finish()
    }

    fn to_element(&self) -> Element {
        Element::new("Queue")
            .attr("url", &self.url)
            .attr("method", &self.method)
            .attr("reservationSid", &self.reservation_sid)
            .attr("postWorkActivitySid", &self.post_work_activity_sid)
            .text(&self.name)
    }
}

/// Dial a SIP endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sip {
    pub username: String,
    pub password: String,
    pub url: String,
    pub method: String,
    pub status_callback: String,
    pub status_callback_event: String,
    pub status_callback_method: String,
    /// SIP URI, e.g. `sip:alice@example.com`
    pub address: String,
}

impl Node for Sip {
    const KIND: MarkupKind = MarkupKind::Sip;

    fn validate(&self) -> Result<(), ValidationError> {
        Checks::new(Self::KIND)
            .check("method", allowed_method(&self.method))
            .check(
                "statusCallbackEvent",
                allowed_callback_event::<SipCallbackEvent>(&self.status_callback_event),
            )
            .check(
                "statusCallbackMethod",
                allowed_method(&self.status_callback_method),
            )
            .check("address", required(&self.address))
            .finish()
    }

    fn to_element(&self) -> Element {
        Element::new("Sip")
            .attr("username", &self.username)
            .attr("password", &self.password)
            .attr("url", &self.url)
            .attr("method", &self.method)
            .attr("statusCallback", &self.status_callback)
            .attr("statusCallbackEvent", &self.status_callback_event)
            .attr("statusCallbackMethod", &self.status_callback_method)
            .text(&self.address)
    }
}
