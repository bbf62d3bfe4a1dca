//! Sequential file walker using the `ignore` crate's `WalkBuilder`.
//!
//! Supports `.baselineignore` (gitignore syntax, hierarchical) on top of
//! `.gitignore`. Entries are visited in file-name order. Size limits are not
//! applied here; oversized files are reported by the scanner.

use std::path::Path;

use baseline_core::config::ScanConfig;
use baseline_core::{Dialect, FileType};

use super::types::DiscoveredFile;

pub const IGNORE_FILE_NAME: &str = ".baselineignore";

/// Directories never scanned regardless of ignore files.
pub const DEFAULT_IGNORES: &[&str] = &["node_modules", ".git"];

/// Walk `root` collecting every JS/CSS file admitted by `file_type`.
///
/// Walk errors are logged and skipped; files with other extensions are
/// skipped silently.
pub fn walk_directory(root: &Path, config: &ScanConfig, file_type: FileType) -> Vec<DiscoveredFile> {
    let respect_gitignore = config.effective_respect_gitignore();

    let mut builder = ignore::WalkBuilder::new(root);
    builder
        .hidden(false)
        .git_ignore(respect_gitignore)
        .git_global(respect_gitignore)
        .git_exclude(respect_gitignore)
        .require_git(false)
        .add_custom_ignore_filename(IGNORE_FILE_NAME)
        .follow_links(config.effective_follow_symlinks())
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut overrides = ignore::overrides::OverrideBuilder::new(root);
    for pattern in DEFAULT_IGNORES {
        add_override(&mut overrides, &format!("!{pattern}/**"));
        add_override(&mut overrides, &format!("!{pattern}"));
    }
    for pattern in &config.extra_ignore {
        add_override(&mut overrides, &format!("!{pattern}"));
    }
    match overrides.build() {
        Ok(built) => {
            builder.overrides(built);
        }
        Err(e) => tracing::warn!(error = %e, "ignoring invalid ignore patterns"),
    }

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, "directory walk error");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let path = entry.path();
        let Some(dialect) = Dialect::from_extension(path.extension().and_then(|e| e.to_str()))
        else {
            continue;
        };
        if !file_type.admits(dialect) {
            continue;
        }
        let size = match entry.metadata() {
            Ok(metadata) => metadata.len(),
            Err(e) => {
                // The read in the scanner reports the real failure.
                tracing::debug!(path = %path.display(), error = %e, "metadata unavailable");
                0
            }
        };
        files.push(DiscoveredFile {
            relative: relative_path(root, path),
            path: path.to_path_buf(),
            dialect,
            size,
        });
    }
    tracing::debug!(root = %root.display(), count = files.len(), "discovery complete");
    files
}

fn add_override(builder: &mut ignore::overrides::OverrideBuilder, glob: &str) {
    if let Err(e) = builder.add(glob) {
        tracing::warn!(pattern = glob, error = %e, "invalid ignore pattern");
    }
}

/// `/`-separated path of `path` below `root`.
pub fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
