//! Orphan report accumulation and rendering.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Orphaned keys found in one target file.
#[derive(Debug, Clone)]
pub struct OrphanSection {
    pub path: PathBuf,
    pub keys: Vec<String>,
}

/// Accumulates orphaned keys across a run and renders the advisory
/// Markdown report. The report is written once at the end of a run and
/// never read back; when no target had orphans, no file is produced at
/// all.
#[derive(Debug, Default)]
pub struct OrphanReportBuilder {
    sections: Vec<OrphanSection>,
}

impl OrphanReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the orphans of one target, in processing order. A target
    /// without orphans leaves no trace in the report.
    pub fn append(&mut self, path: &Path, keys: &[String]) {
        if keys.is_empty() {
            return;
        }
        self.sections.push(OrphanSection {
            path: path.to_path_buf(),
            keys: keys.to_vec(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn sections(&self) -> &[OrphanSection] {
        &self.sections
    }

    /// Render the report document, or `None` when no target had orphans.
    pub fn render(&self) -> Option<String> {
        if self.sections.is_empty() {
            return None;
        }

        let mut out = String::from(
            "## Orphaned Translation Keys Detected\n\n\
             The following keys exist in target locale files but are missing from the source file:\n\n",
        );

        for section in &self.sections {
            out.push_str(&format!("### {}\n", section.path.display()));
            for key in &section.keys {
                out.push_str(&format!("- `{}`\n", key));
            }
            out.push('\n');
        }

        Some(out)
    }

    /// Write the report to `path` when non-empty. Returns whether a file
    /// was written.
    pub fn write_to(&self, path: &Path) -> Result<bool, io::Error> {
        match self.render() {
            Some(report) => {
                fs::write(path, report)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
