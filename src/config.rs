use std::env;
use std::io;
use std::path::{Path, PathBuf};

/// Directory, relative to the working directory, that gets scanned.
pub const SOURCE_DIR_NAME: &str = "source";

/// Report file, relative to the working directory.
pub const OUTPUT_FILE_NAME: &str = "functions.md";

/// File-name suffix of eligible source files.
pub const SUPPORTED_EXTENSION: &str = ".ts";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source_dir: PathBuf,
    pub output_file: PathBuf,
}

impl Config {
    pub fn new(source_dir: impl Into<PathBuf>, output_file: impl Into<PathBuf>) -> Self {
        Config {
            source_dir: source_dir.into(),
            output_file: output_file.into(),
        }
    }

    pub fn from_dir(base: &Path) -> Self {
        Config::new(base.join(SOURCE_DIR_NAME), base.join(OUTPUT_FILE_NAME))
    }

    pub fn from_current_dir() -> io::Result<Self> {
        let cwd = env::current_dir()?;
        Ok(Config::from_dir(&cwd))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_derived_from_base_dir() {
        let config = Config::from_dir(Path::new("/work"));
        assert_eq!(config.source_dir, PathBuf::from("/work/source"));
        assert_eq!(config.output_file, PathBuf::from("/work/functions.md"));
    }
}
