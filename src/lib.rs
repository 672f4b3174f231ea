pub mod config;
pub mod doc_report;
pub mod error;
pub mod indexing;
pub mod parsers;
pub mod utils;

pub use config::Config;
pub use doc_report::{DocFunction, DocReport, render_markdown};
pub use error::DocError;
pub use indexing::{build_report, extract_doc_functions};
pub use parsers::find_doc_functions;
pub use utils::io::write_markdown;

use log::debug;

/// Scans `config.source_dir`, renders the markdown report and writes it to
/// `config.output_file`.
///
/// Unreadable source files are logged and left out. A failed write is
/// logged and returned, and the caller decides whether it matters.
pub fn generate_functions_doc(config: &Config) -> error::Result<DocReport> {
    debug!(
        "Source dir: {:?}, output file: {:?}",
        config.source_dir, config.output_file
    );

    let report = build_report(&config.source_dir);
    let markdown = render_markdown(&report);
    write_markdown(&markdown, &config.output_file)?;

    Ok(report)
}

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
