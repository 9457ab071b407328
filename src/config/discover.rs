//! Sibling locale discovery.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extensions considered locale files during discovery.
const LOCALE_EXTENSIONS: &[&str] = &["yml", "yaml"];

/// Discover target locale files living next to `source`.
///
/// Scans the source file's directory (non-recursive), keeping
/// `.yml`/`.yaml` files other than the source itself. The result is
/// sorted by path so runs are deterministic regardless of directory
/// enumeration order.
pub fn discover_targets(source: &Path) -> Vec<PathBuf> {
    let dir = match source.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        Some(_) => Path::new("."),
        None => return Vec::new(),
    };

    let mut targets: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| LOCALE_EXTENSIONS.contains(&ext))
        })
        .filter(|path| path != source)
        .collect();

    targets.sort();
    targets
}
