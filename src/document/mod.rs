//! Translation document model.
//!
//! A translation file is an optional single leading comment line (the
//! header) followed by a flat YAML mapping of translation keys to scalar
//! values. Loading lives in `loader`, canonical serialization in `writer`.

mod loader;
mod scalar;
mod writer;

pub use loader::{load_document, parse_document};
pub use scalar::Scalar;
pub use writer::{render_document, write_document};

use indexmap::IndexMap;
use std::io;
use thiserror::Error;

/// Flat key/value entries, in file enumeration order.
pub type EntryMap = IndexMap<String, Scalar>;

/// Errors raised while loading or writing a translation document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid translation file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("cannot render value for key {key}: {source}")]
    Render {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A parsed translation file.
///
/// `header` is the first line of the file when that line is a `#` comment,
/// trimmed of surrounding whitespace and stored without a trailing
/// newline. The header line is never part of `entries`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationDocument {
    pub header: Option<String>,
    pub entries: EntryMap,
}
