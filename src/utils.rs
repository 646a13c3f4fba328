//! File collection and path display helpers.

use std::path::{Path, PathBuf};

/// Folder names skipped by default when walking directories.
pub const DEFAULT_EXCLUDE_FOLDERS: &[&str] = &[
    "node_modules",
    "dist",
    "build",
    "out",
    "coverage",
    "vendor",
    "target",
    ".git",
    ".venv",
];

/// Normalize a path for display: strip a leading `./` and use forward
/// slashes on every platform.
#[must_use]
pub fn normalize_display_path(path: &Path) -> String {
    let display = path.display().to_string().replace('\\', "/");
    match display.strip_prefix("./") {
        Some(stripped) => stripped.to_owned(),
        None => display,
    }
}

/// Check whether a folder name matches any exclusion pattern.
fn is_excluded(name: &str, excludes: &[String]) -> bool {
    excludes.iter().any(|ex| ex == name)
}

/// Collect source files under `root` whose extension is in `extensions`.
///
/// Walks gitignore-aware (respects `.gitignore`, global gitignore and
/// `.git/info/exclude`), skipping excluded folders at traversal time so
/// `node_modules` and friends are never descended into. A `root` that is
/// itself a file is returned as-is when its extension matches.
///
/// Results are sorted for deterministic processing order.
#[must_use]
pub fn collect_source_files(
    root: &Path,
    extensions: &[String],
    exclude: &[String],
) -> Vec<PathBuf> {
    use ignore::WalkBuilder;

    if root.is_file() {
        if has_matching_extension(root, extensions) {
            return vec![root.to_path_buf()];
        }
        return Vec::new();
    }

    // Merge user excludes with the defaults.
    let mut all_excludes: Vec<String> = exclude.to_vec();
    all_excludes.extend(DEFAULT_EXCLUDE_FOLDERS.iter().map(|&s| s.to_owned()));

    let excludes_for_filter = all_excludes;
    let root_for_filter = root.to_path_buf();

    let walker = WalkBuilder::new(root)
        .hidden(false) // Excluded-folder defaults cover the hidden dirs we care about
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .filter_entry(move |entry| {
            if entry.path() == root_for_filter {
                return true;
            }

            // Only filter directories; files are extension-filtered later.
            if !entry.file_type().is_some_and(|ft| ft.is_dir()) {
                return true;
            }

            if let Some(name) = entry.file_name().to_str() {
                if is_excluded(name, &excludes_for_filter) {
                    return false;
                }
            }

            true
        })
        .build();

    let mut files = Vec::new();
    for entry in walker.flatten() {
        let path = entry.path();
        if entry.file_type().is_some_and(|ft| ft.is_dir()) {
            continue;
        }
        if has_matching_extension(path, extensions) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    files
}

fn has_matching_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e == ext))
}
