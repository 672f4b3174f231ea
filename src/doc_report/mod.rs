mod function;
pub mod markdown;

pub use function::DocFunction;
pub use markdown::{REPORT_TITLE, render_markdown};

/// Documented functions grouped by file path, relative to the scanned root.
///
/// Files keep the order in which they were inserted, and a file with no
/// documented functions is never stored.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DocReport {
    files: Vec<(String, Vec<DocFunction>)>,
}

impl DocReport {
    pub fn new() -> Self {
        DocReport { files: Vec::new() }
    }

    /// Records the functions found in `file_path`. Returns `false` and
    /// stores nothing when `functions` is empty.
    ///
    /// Each path is expected once, as a single directory walk yields it.
    pub fn add_file(&mut self, file_path: String, functions: Vec<DocFunction>) -> bool {
        if functions.is_empty() {
            return false;
        }

        self.files.push((file_path, functions));
        true
    }

    pub fn functions_in_file(&self, file_path: &str) -> Option<&[DocFunction]> {
        self.files
            .iter()
            .find(|(path, _)| path == file_path)
            .map(|(_, functions)| functions.as_slice())
    }

    pub fn files(&self) -> impl Iterator<Item = (&str, &[DocFunction])> {
        self.files
            .iter()
            .map(|(path, functions)| (path.as_str(), functions.as_slice()))
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn function_count(&self) -> usize {
        self.files.iter().map(|(_, functions)| functions.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
