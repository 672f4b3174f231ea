use crate::doc_report::DocFunction;
use crate::error::{DocError, Result};
use crate::parsers::find_doc_functions;
use log::{error, info, trace};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Reads `file_path` and returns its documented functions in source order.
pub fn extract_doc_functions(file_path: &Path) -> Result<Vec<DocFunction>> {
    trace!("Extracting documented functions from: {:?}", file_path);

    let content = fs::read_to_string(file_path).map_err(|source| DocError::Read {
        path: file_path.to_path_buf(),
        source,
    })?;

    let functions = find_doc_functions(&normalize_newlines(&content));
    info!(
        "Extracted {} functions from {}",
        functions.len(),
        file_path.display()
    );
    Ok(functions)
}

/// Reads sources with universal newlines: `\r\n` and lone `\r` become `\n`.
fn normalize_newlines(content: &str) -> Cow<'_, str> {
    if content.contains('\r') {
        Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(content)
    }
}

/// Like [`extract_doc_functions`], but a read failure is logged and treated
/// as a file with no documented functions.
pub fn extract_or_empty(file_path: &Path) -> Vec<DocFunction> {
    match extract_doc_functions(file_path) {
        Ok(functions) => functions,
        Err(e) => {
            error!("Error processing file {}: {}", file_path.display(), e);
            Vec::new()
        }
    }
}
