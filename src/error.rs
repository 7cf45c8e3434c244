//! Error types
//!
//! Validation findings, macro parse failures and document writer failures.

use thiserror::Error;

use crate::markup::MarkupKind;

/// A defect found while validating a markup tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A child whose kind is not in its parent's whitelist
    #[error("{child} is not allowed inside {parent}")]
    IllegalChild {
        parent: MarkupKind,
        child: MarkupKind,
    },

    /// A Response without any verbs
    #[error("Response must contain at least one verb")]
    EmptyDocument,

    /// One or more attribute checks failed on a single node
    #[error("{kind} markup failed validation: {}", .fields.join(", "))]
    Attributes {
        kind: MarkupKind,
        fields: Vec<&'static str>,
    },

    /// Several findings collected while validating a composite node
    #[error("{kind} has {} validation errors", .errors.len())]
    Aggregate {
        kind: MarkupKind,
        errors: Vec<ValidationError>,
    },
}

impl ValidationError {
    /// Fold a list of findings into a single result.
    ///
    /// No findings is success, one finding is returned unchanged, more are
    /// wrapped into an [`ValidationError::Aggregate`] for `kind`.
    pub fn collect(
        kind: MarkupKind,
        mut errors: Vec<ValidationError>,
    ) -> std::result::Result<(), Self> {
        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(Self::Aggregate { kind, errors }),
        }
    }

    /// Every non-aggregate finding, depth first
    pub fn leaves(&self) -> Vec<&ValidationError> {
        match self {
            Self::Aggregate { errors, .. } => errors.iter().flat_map(|e| e.leaves()).collect(),
            other => vec![other],
        }
    }

    /// True if this finding, or any nested one, rejects a child of `child` kind
    pub fn rejects_child(&self, child: MarkupKind) -> bool {
        self.leaves().iter().any(|e| {
            matches!(e, Self::IllegalChild { child: c, .. } if *c == child)
        })
    }
}

/// A failure while parsing a macro string in strict mode
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown macro verb '{verb}' at offset {offset}")]
    UnknownVerb { verb: String, offset: usize },
}

/// Crate level error
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Rendering was asked for a Response without verbs
    #[error("cannot encode an empty response")]
    EmptyDocument,

    #[error("xml writer: {0}")]
    Xml(String),
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;
