//! Markup Object Model
//!
//! The closed set of call-control nodes: verbs, the nouns nested under
//! Dial and Client, and the SSML markup carried by Say.
//!
//! Composite nodes accept any [`Markup`] through `add` and only check the
//! nesting whitelist in `validate`, so a tree can be assembled freely and
//! checked once before rendering.

pub mod nouns;
pub mod ssml;
pub mod verbs;

use std::fmt;
use std::ops::Deref;

use serde::Serialize;

use crate::error::ValidationError;
use crate::render::Element;

pub use nouns::{Client, Conference, Number, Parameter, Queue, Sip};
pub use ssml::{SsmlBreak, SsmlEffect, SsmlEmphasis, SsmlProsody, SsmlSayAs, SsmlText};
pub use verbs::{
    Dial, Enqueue, Gather, Hangup, Leave, Message, Pause, Play, Record, Redirect, Reject, Say, Sms,
};

/// Stable discriminator of a markup node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MarkupKind {
    Response,
    Dial,
    Gather,
    Say,
    Play,
    Pause,
    Record,
    Redirect,
    Reject,
    Hangup,
    Leave,
    Enqueue,
    Message,
    Sms,
    Client,
    Conference,
    Number,
    Queue,
    Sip,
    Parameter,
    SsmlText,
    SsmlBreak,
    SsmlSayAs,
    SsmlEmphasis,
    SsmlProsody,
    SsmlEffect,
}

impl MarkupKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Response => "Response",
            Self::Dial => "Dial",
            Self::Gather => "Gather",
            Self::Say => "Say",
            Self::Play => "Play",
            Self::Pause => "Pause",
            Self::Record => "Record",
            Self::Redirect => "Redirect",
            Self::Reject => "Reject",
            Self::Hangup => "Hangup",
            Self::Leave => "Leave",
            Self::Enqueue => "Enqueue",
            Self::Message => "Message",
            Self::Sms => "Sms",
            Self::Client => "Client",
            Self::Conference => "Conference",
            Self::Number => "Number",
            Self::Queue => "Queue",
            Self::Sip => "Sip",
            Self::Parameter => "Parameter",
            Self::SsmlText => "SSMLText",
            Self::SsmlBreak => "SSMLBreak",
            Self::SsmlSayAs => "SSMLSayAs",
            Self::SsmlEmphasis => "SSMLEmphasis",
            Self::SsmlProsody => "SSMLProsody",
            Self::SsmlEffect => "SSMLEffect",
        }
    }
}

impl fmt::Display for MarkupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verbs allowed directly under Response
pub const TOP_LEVEL_VERBS: &[MarkupKind] = &[
    MarkupKind::Dial,
    MarkupKind::Say,
    MarkupKind::Gather,
    MarkupKind::Enqueue,
    MarkupKind::Hangup,
    MarkupKind::Leave,
    MarkupKind::Message,
    MarkupKind::Sms,
    MarkupKind::Pause,
    MarkupKind::Play,
    MarkupKind::Record,
    MarkupKind::Redirect,
    MarkupKind::Reject,
];

/// Dial targets
pub const DIAL_NOUNS: &[MarkupKind] = &[
    MarkupKind::Client,
    MarkupKind::Conference,
    MarkupKind::Number,
    MarkupKind::Queue,
    MarkupKind::Sip,
];

/// Verbs that may prompt the caller while Gather listens
pub const GATHER_VERBS: &[MarkupKind] = &[MarkupKind::Say, MarkupKind::Play, MarkupKind::Pause];

pub const CLIENT_NOUNS: &[MarkupKind] = &[MarkupKind::Parameter];

pub const SSML_MARKUP: &[MarkupKind] = &[
    MarkupKind::SsmlText,
    MarkupKind::SsmlBreak,
    MarkupKind::SsmlSayAs,
    MarkupKind::SsmlEmphasis,
    MarkupKind::SsmlProsody,
    MarkupKind::SsmlEffect,
];

/// Capability shared by every node type
pub trait Node {
    const KIND: MarkupKind;

    /// Check attributes and, for composites, every child
    fn validate(&self) -> Result<(), ValidationError>;

    /// Lower the node to its rendering surface
    fn to_element(&self) -> Element;
}

macro_rules! markup_variants {
    ($($variant:ident),+ $(,)?) => {
        /// Any markup node
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(tag = "type")]
        pub enum Markup {
            $($variant($variant)),+
        }

        impl Markup {
            pub fn kind(&self) -> MarkupKind {
                match self {
                    $(Self::$variant(_) => MarkupKind::$variant),+
                }
            }

            pub fn validate(&self) -> Result<(), ValidationError> {
                match self {
                    $(Self::$variant(node) => node.validate()),+
                }
            }

            pub fn to_element(&self) -> Element {
                match self {
                    $(Self::$variant(node) => node.to_element()),+
                }
            }
        }

        $(
            impl From<$variant> for Markup {
                fn from(node: $variant) -> Self {
                    Self::$variant(node)
                }
            }
        )+
    };
}

markup_variants! {
    Dial,
    Gather,
    Say,
    Play,
    Pause,
    Record,
    Redirect,
    Reject,
    Hangup,
    Leave,
    Enqueue,
    Message,
    Sms,
    Client,
    Conference,
    Number,
    Queue,
    Sip,
    Parameter,
    SsmlText,
    SsmlBreak,
    SsmlSayAs,
    SsmlEmphasis,
    SsmlProsody,
    SsmlEffect,
}

impl Markup {
    /// Type discriminator as a string, e.g. `"Say"` or `"SSMLBreak"`
    pub fn type_name(&self) -> &'static str {
        self.kind().as_str()
    }
}

/// Append-only child list of a composite node
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Children(Vec<Markup>);

impl Children {
    pub fn push(&mut self, node: impl Into<Markup>) {
        self.0.push(node.into());
    }

    /// Check each child against `allowed`, then validate the legal ones
    pub(crate) fn validate_into(
        &self,
        parent: MarkupKind,
        allowed: &[MarkupKind],
        errors: &mut Vec<ValidationError>,
    ) {
        for child in &self.0 {
            let kind = child.kind();
            if !allowed.contains(&kind) {
                errors.push(ValidationError::IllegalChild {
                    parent,
                    child: kind,
                });
                continue;
            }
            if let Err(err) = child.validate() {
                errors.push(err);
            }
        }
    }

    pub(crate) fn elements(&self) -> impl Iterator<Item = Element> + '_ {
        self.0.iter().map(Markup::to_element)
    }
}

impl Deref for Children {
    type Target = [Markup];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<M: Into<Markup>> FromIterator<M> for Children {
    fn from_iter<I: IntoIterator<Item = M>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
