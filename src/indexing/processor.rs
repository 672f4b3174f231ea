use crate::doc_report::DocReport;
use crate::indexing::extractor::extract_or_empty;
use crate::parsers::is_supported_file;
use log::{debug, info, trace, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Walks `root_path` and collects the documented functions of every
/// eligible file, keyed by its path relative to `root_path`.
///
/// Within each directory, files come in listing order and ahead of any
/// subdirectory; nothing is sorted by name.
pub fn build_report(root_path: &Path) -> DocReport {
    info!("Scanning {:?} for documented functions", root_path);

    let files_to_process = collect_files_to_process(root_path);
    debug!("Found {} eligible files", files_to_process.len());

    let mut report = DocReport::new();
    for path in &files_to_process {
        let functions = extract_or_empty(path);
        let relative = relative_path(root_path, path);
        if !report.add_file(relative, functions) {
            trace!("No documented functions in {:?}", path);
        }
    }

    info!(
        "Scanned {} files: {} documented, {} functions extracted",
        files_to_process.len(),
        report.file_count(),
        report.function_count()
    );

    report
}

fn collect_files_to_process(root_path: &Path) -> Vec<PathBuf> {
    let mut files_to_process = Vec::new();

    // Stable sort: only moves subdirectories behind their sibling files.
    let walker = WalkDir::new(root_path)
        .sort_by(|a, b| a.file_type().is_dir().cmp(&b.file_type().is_dir()));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {:?}: {}", root_path, e);
                continue;
            }
        };

        let path = entry.path();
        // Symlinks are not followed for descent, but a link to a file counts.
        if !entry.file_type().is_file() && !(entry.path_is_symlink() && path.is_file()) {
            continue;
        }

        if !is_supported_file(path) {
            trace!("Skipping unsupported file: {:?}", path);
            continue;
        }

        files_to_process.push(path.to_path_buf());
    }

    files_to_process
}

fn relative_path(root_path: &Path, path: &Path) -> String {
    path.strip_prefix(root_path)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}
