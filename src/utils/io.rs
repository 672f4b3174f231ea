use crate::error::{DocError, Result};
use log::{error, info};
use std::fs;
use std::path::Path;

/// Writes `markdown` to `output_path`, replacing whatever was there.
pub fn write_markdown(markdown: &str, output_path: &Path) -> Result<()> {
    match fs::write(output_path, markdown) {
        Ok(_) => {
            info!(
                "Documentation successfully written to {}",
                output_path.display()
            );
            Ok(())
        }
        Err(e) => {
            error!("Error writing to file {}: {}", output_path.display(), e);
            Err(DocError::Write {
                path: output_path.to_path_buf(),
                source: e,
            })
        }
    }
}
