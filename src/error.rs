//! Error taxonomy shared by every fallible boundary in the crate.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type returned by the public API and the CLI driver.
#[derive(Debug, Error)]
pub enum XcoverError {
    #[error("failed to parse schema at {location}: {reason}")]
    SchemaParse { reason: String, location: String },

    #[error("schema enumeration invariant violated: {0}")]
    Enumeration(String),

    #[error("failed to parse XML document {path}: {reason}")]
    XmlParse { path: PathBuf, reason: String },

    #[error("generation is infeasible: {reason}")]
    Infeasible { reason: String },

    #[error("generation timed out after {elapsed_ms}ms with best coverage {best_coverage:.2}")]
    Timeout {
        elapsed_ms: u64,
        best_coverage: f64,
    },

    #[error("validation failed for {path}: {reason} (first error at {location})")]
    ValidationFailure {
        path: PathBuf,
        reason: String,
        location: String,
    },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("XML parsing error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    #[error("XML deserialization error: {0}")]
    QuickXmlDe(#[from] quick_xml::DeError),

    #[error("attribute error: {0}")]
    QuickXmlAttr(#[from] quick_xml::events::attributes::AttrError),
}

pub type Result<T> = std::result::Result<T, XcoverError>;

/// A non-fatal condition surfaced in a report rather than aborting a run.
#[derive(Debug, Clone)]
pub enum Warning {
    /// An XML path was found in an instance document with no matching entry
    /// in the ground set.
    UndefinedPath { path: String },
    /// The materializer could not descend far enough to satisfy a required
    /// descendant because of the max-depth emergency-descent cap.
    Materialization { path: String, detail: String },
    /// A truncation happened while extracting optional items for pairwise
    /// coverage.
    OptionalTruncated { kept: usize, dropped: usize },
    /// A validated instance document failed structurally: a required child
    /// or attribute was missing at some visited node. Collected per file
    /// rather than aborting the batch.
    ValidationFailure {
        path: PathBuf,
        reason: String,
        location: String,
    },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::UndefinedPath { path } => {
                write!(f, "path not defined in schema: {path}")
            }
            Warning::Materialization { path, detail } => {
                write!(f, "materialization warning at {path}: {detail}")
            }
            Warning::OptionalTruncated { kept, dropped } => {
                write!(
                    f,
                    "optional item list truncated to {kept} items ({dropped} dropped)"
                )
            }
            Warning::ValidationFailure { path, reason, location } => {
                write!(f, "{}: {reason} at {location}", path.display())
            }
        }
    }
}
