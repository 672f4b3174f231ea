pub mod extractor;
pub mod processor;

pub use extractor::{extract_doc_functions, extract_or_empty};
pub use processor::build_report;
