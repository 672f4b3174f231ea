//! Pattern-based JSDoc scanner.
//!
//! Matches a `/** ... */` block, optional whitespace, an optional `export`
//! modifier, then `function <name>(`. No syntax tree is built.

use crate::doc_report::DocFunction;
use log::trace;
use regex::Regex;
use std::sync::LazyLock;

// The comment body may not contain `*/`, so a block that documents something
// other than a function never merges with a later one.
static RE_DOC_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(/\*\*(?:[^*]|\*+[^*/])*\*+/)\s*(?:export\s+)?function\s+(\w+)\s*\(").unwrap()
});

/// Returns every documented function declaration in `content`, in source
/// order. Matches are leftmost-first and never overlap.
pub fn find_doc_functions(content: &str) -> Vec<DocFunction> {
    RE_DOC_FUNCTION
        .captures_iter(content)
        .map(|caps| {
            let function = DocFunction::new(caps[1].to_string(), caps[2].to_string());
            trace!("Matched documented function: {}", function.name);
            function
        })
        .collect()
}
