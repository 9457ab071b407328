//! Locale file synchronization.
//!
//! Keeps per-locale translation files consistent with one authoritative
//! source-language file. Missing keys are filled in with the source text
//! as a placeholder, keys with no source counterpart are reported as
//! orphans, and every touched file is rewritten in canonical form: keys
//! sorted ascending, string values double-quoted, and a single leading
//! comment line preserved verbatim.

pub mod config;
pub mod document;
pub mod pipeline;
pub mod reconcile;
pub mod report;

pub use config::{ConfigError, SyncConfig};
pub use document::{
    load_document, parse_document, render_document, write_document, DocumentError, EntryMap,
    Scalar, TranslationDocument,
};
pub use pipeline::{run_check, run_sync, CheckSummary, PipelineError, SyncSummary};
pub use reconcile::{reconcile, ReconcileOutcome};
pub use report::OrphanReportBuilder;
