//! Header-aware translation file loading.

use std::fs;
use std::io;
use std::path::Path;

use super::{DocumentError, EntryMap, TranslationDocument};

/// Load a translation file from disk.
///
/// A missing file is not an error: it means the locale has no entries yet
/// and yields an empty document. Malformed content is fatal; treating a
/// corrupt file as empty would overwrite human-authored translations on
/// the next write.
pub fn load_document(path: &Path) -> Result<TranslationDocument, DocumentError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Ok(TranslationDocument::default());
        }
        Err(e) => return Err(DocumentError::Io(e)),
    };

    parse_document(&content).map_err(|source| DocumentError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Split an optional leading `#` comment line from `content` and parse the
/// remainder as a flat YAML mapping.
///
/// Only the first line is inspected: if it starts with `#` after trimming
/// surrounding whitespace it becomes the header and everything after the
/// first newline is the structured section; otherwise the entire content
/// is parsed.
pub fn parse_document(content: &str) -> Result<TranslationDocument, serde_yaml::Error> {
    if content.is_empty() {
        return Ok(TranslationDocument::default());
    }

    let (first_line, rest) = match content.find('\n') {
        Some(pos) => (&content[..pos], &content[pos + 1..]),
        None => (content, ""),
    };

    let first_line = first_line.trim();
    if first_line.starts_with('#') {
        Ok(TranslationDocument {
            header: Some(first_line.to_string()),
            entries: parse_entries(rest)?,
        })
    } else {
        Ok(TranslationDocument {
            header: None,
            entries: parse_entries(content)?,
        })
    }
}

/// An empty or comment-only section parses to an empty mapping.
fn parse_entries(text: &str) -> Result<EntryMap, serde_yaml::Error> {
    let entries: Option<EntryMap> = serde_yaml::from_str(text)?;
    Ok(entries.unwrap_or_default())
}
