//! Response Document
//!
//! The root container handed to the voice platform. Unlike nested `add`,
//! [`Response::add`] checks the top-level whitelist immediately.

use serde::Serialize;

use crate::error::{Error, Result, ValidationError};
use crate::markup::{Markup, MarkupKind, TOP_LEVEL_VERBS};
use crate::parser;
use crate::render::{self, Element};

/// Ordered list of top-level verbs
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Response {
    verbs: Vec<Markup>,
}

impl Response {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a response from nodes, failing on the first illegal top-level kind
    pub fn from_nodes(nodes: impl IntoIterator<Item = Markup>) -> std::result::Result<Self, ValidationError> {
        let mut response = Self::new();
        for node in nodes {
            response.add(node)?;
        }
        Ok(response)
    }

    /// Parse a macro string leniently and collect its verbs
    pub fn from_macro(input: &str) -> std::result::Result<Self, ValidationError> {
        Self::from_nodes(parser::parse_str(input))
    }

    /// Append a verb; anything outside the top-level whitelist is rejected
    /// and not added
    pub fn add(&mut self, verb: impl Into<Markup>) -> std::result::Result<&mut Self, ValidationError> {
        let verb = verb.into();
        let kind = verb.kind();
        if !TOP_LEVEL_VERBS.contains(&kind) {
            return Err(ValidationError::IllegalChild {
                parent: MarkupKind::Response,
                child: kind,
            });
        }
        self.verbs.push(verb);
        Ok(self)
    }

    pub fn verbs(&self) -> &[Markup] {
        &self.verbs
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// Validate the whole tree, reporting every defect in one pass
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.verbs.is_empty() {
            return Err(ValidationError::EmptyDocument);
        }
        let errors = self
            .verbs
            .iter()
            .filter_map(|verb| verb.validate().err())
            .collect();
        ValidationError::collect(MarkupKind::Response, errors)
    }

    pub fn to_element(&self) -> Element {
        Element::new("Response").children(self.verbs.iter().map(Markup::to_element))
    }

    /// Render without validating.
    ///
    /// An unvalidated tree with illegal nesting still renders; use
    /// [`Response::encode`] unless the tree was validated already.
    pub fn render(&self) -> Result<String> {
        if self.verbs.is_empty() {
            return Err(Error::EmptyDocument);
        }
        render::write_document(&self.to_element())
    }

    /// Validate, then render
    pub fn encode(&self) -> Result<String> {
        self.validate()?;
        self.render()
    }
}
