//! Canonical serialization of translation documents.

use std::fs;
use std::path::Path;

use super::{DocumentError, TranslationDocument};

/// Render the canonical text form: the header line when present, then one
/// `key: <literal>` line per entry with keys in ascending code-point
/// order. The sort is load-bearing: it makes output byte-stable across
/// runs and across locales.
pub fn render_document(doc: &TranslationDocument) -> Result<String, DocumentError> {
    let mut out = String::new();

    if let Some(header) = &doc.header {
        out.push_str(header);
        out.push('\n');
    }

    let mut keys: Vec<&String> = doc.entries.keys().collect();
    keys.sort_unstable();

    for key in keys {
        let literal = doc.entries[key.as_str()]
            .to_literal()
            .map_err(|source| DocumentError::Render {
                key: key.clone(),
                source,
            })?;
        out.push_str(key);
        out.push_str(": ");
        out.push_str(&literal);
        out.push('\n');
    }

    Ok(out)
}

/// Replace the file at `path` with the canonical rendering.
///
/// The previous contents are fully discarded. The rendering goes to a
/// sibling temporary file first and is renamed into place, so an
/// interrupted run cannot leave a truncated file that still parses as a
/// smaller-but-valid document.
pub fn write_document(path: &Path, doc: &TranslationDocument) -> Result<(), DocumentError> {
    let text = render_document(doc)?;

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, &text)?;
    fs::rename(&temp_path, path)?;

    Ok(())
}
