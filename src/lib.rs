//! Call-control markup builder
//!
//! This library provides:
//! - A validated object model of verbs, nouns and SSML markup
//! - A compact macro language that parses into the same model
//! - A Response document that renders to indented XML
//!
//! ```
//! use twiml::{Response, Say};
//!
//! let mut response = Response::new();
//! response.add(Say { text: "Hello".to_string(), ..Default::default() }).unwrap();
//! let xml = response.encode().unwrap();
//! assert!(xml.contains("<Say>Hello</Say>"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod markup;
pub mod parser;
pub mod render;
pub mod response;
pub mod validation;
pub mod vocabulary;

// Re-exports for clean public API
pub use config::Config;
pub use error::{Error, ParseError, Result, ValidationError};
pub use markup::{
    Client, Conference, Dial, Enqueue, Gather, Hangup, Leave, Markup, MarkupKind, Message, Node,
    Number, Parameter, Pause, Play, Queue, Record, Redirect, Reject, Say, Sip, Sms, SsmlBreak,
    SsmlEffect, SsmlEmphasis, SsmlProsody, SsmlSayAs, SsmlText,
};
pub use parser::{parse, parse_str, MacroDefaults, ParseResult, Parser};
pub use render::Element;
pub use response::Response;
pub use vocabulary::Vocabulary;
