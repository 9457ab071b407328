//! Sync pipeline orchestration.
//!
//! Sequences the per-run work: canonicalize the source file, then for
//! each target load, reconcile, rewrite, and accumulate orphans; finally
//! write the orphan report when any target had orphans. The pipeline owns
//! no algorithmic logic itself.
//!
//! Runs are strictly sequential, one file at a time, with no retries: the
//! first fatal error aborts the whole run. A missing target file is not
//! fatal; it means the locale has no entries yet and gets populated from
//! the source.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::config::SyncConfig;
use crate::document::{
    load_document, render_document, write_document, DocumentError, TranslationDocument,
};
use crate::reconcile::reconcile;
use crate::report::OrphanReportBuilder;

/// Pipeline errors
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("source file not found: {0}")]
    SourceMissing(PathBuf),

    #[error("translation file error: {0}")]
    Document(#[from] DocumentError),

    #[error("cannot write orphan report: {0}")]
    Report(#[from] io::Error),
}

impl PipelineError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PipelineError::SourceMissing(_) => 1,
            PipelineError::Document(_) => 2,
            PipelineError::Report(_) => 3,
        }
    }
}

/// Per-target outcome of a sync run.
#[derive(Debug, Clone, Serialize)]
pub struct TargetSummary {
    /// Target file path as configured.
    pub path: String,
    /// Keys injected from the source, in source order.
    pub added: Vec<String>,
    /// Orphaned keys, in the target's original order.
    pub orphans: Vec<String>,
}

/// Full outcome of a sync run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SyncSummary {
    pub source: String,
    pub targets: Vec<TargetSummary>,
    pub report: String,
    pub report_written: bool,
}

impl SyncSummary {
    pub fn total_added(&self) -> usize {
        self.targets.iter().map(|target| target.added.len()).sum()
    }

    pub fn total_orphans(&self) -> usize {
        self.targets.iter().map(|target| target.orphans.len()).sum()
    }
}

/// Run the full sync.
///
/// The source file is rewritten canonically before any target is touched,
/// so its own sort order is enforced even when no target changes. Every
/// target is then rewritten whether or not it changed; modification time
/// is not a change signal.
pub fn run_sync(config: &SyncConfig) -> Result<SyncSummary, PipelineError> {
    if !config.source.exists() {
        return Err(PipelineError::SourceMissing(config.source.clone()));
    }

    let source_doc = load_document(&config.source)?;
    write_document(&config.source, &source_doc)?;

    let mut report = OrphanReportBuilder::new();
    let mut summary = SyncSummary {
        source: config.source.display().to_string(),
        report: config.report.display().to_string(),
        ..SyncSummary::default()
    };

    for target_path in &config.targets {
        let target_doc = load_document(target_path)?;
        let outcome = reconcile(&source_doc.entries, &target_doc.entries);

        let updated = TranslationDocument {
            header: target_doc.header,
            entries: outcome.entries,
        };
        write_document(target_path, &updated)?;

        report.append(target_path, &outcome.orphans);
        summary.targets.push(TargetSummary {
            path: target_path.display().to_string(),
            added: outcome.added,
            orphans: outcome.orphans,
        });
    }

    summary.report_written = report.write_to(&config.report)?;

    Ok(summary)
}

/// Per-target drift found by a check run.
#[derive(Debug, Clone, Serialize)]
pub struct TargetDrift {
    pub path: String,
    /// Source keys the target lacks, i.e. what `sync` would inject.
    pub missing_keys: Vec<String>,
    /// Orphaned keys. Advisory only; orphans never fail the gate.
    pub orphans: Vec<String>,
    /// On-disk bytes differ from the canonical rendering.
    pub needs_rewrite: bool,
}

/// Outcome of a read-only check run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckSummary {
    pub source: String,
    pub source_needs_rewrite: bool,
    pub targets: Vec<TargetDrift>,
}

impl CheckSummary {
    /// True when every file is complete and byte-identical to what `sync`
    /// would write.
    pub fn is_clean(&self) -> bool {
        !self.source_needs_rewrite
            && self
                .targets
                .iter()
                .all(|target| target.missing_keys.is_empty() && !target.needs_rewrite)
    }
}

/// Run the same computation as [`run_sync`] without writing anything.
pub fn run_check(config: &SyncConfig) -> Result<CheckSummary, PipelineError> {
    if !config.source.exists() {
        return Err(PipelineError::SourceMissing(config.source.clone()));
    }

    let source_doc = load_document(&config.source)?;
    let source_canonical = render_document(&source_doc)?;
    let source_on_disk = fs::read_to_string(&config.source).map_err(DocumentError::Io)?;

    let mut summary = CheckSummary {
        source: config.source.display().to_string(),
        source_needs_rewrite: source_on_disk != source_canonical,
        targets: Vec::new(),
    };

    for target_path in &config.targets {
        let target_doc = load_document(target_path)?;
        let outcome = reconcile(&source_doc.entries, &target_doc.entries);

        let updated = TranslationDocument {
            header: target_doc.header,
            entries: outcome.entries,
        };
        let canonical = render_document(&updated)?;
        let on_disk = match fs::read_to_string(target_path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(DocumentError::Io(e).into()),
        };

        summary.targets.push(TargetDrift {
            path: target_path.display().to_string(),
            missing_keys: outcome.added,
            orphans: outcome.orphans,
            needs_rewrite: on_disk != canonical,
        });
    }

    Ok(summary)
}
