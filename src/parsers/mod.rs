pub mod jsdoc;

use crate::config::SUPPORTED_EXTENSION;
use std::path::Path;

pub use jsdoc::find_doc_functions;

/// A file is eligible when its name ends with the supported extension.
/// Files such as `types.d.ts` qualify; `.tsx` files do not.
pub fn is_supported_file(file_path: &Path) -> bool {
    file_path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(SUPPORTED_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_ts_suffix_is_supported() {
        assert!(is_supported_file(Path::new("source/array.ts")));
        assert!(is_supported_file(Path::new("source/types/array.type.ts")));
        assert!(is_supported_file(Path::new("lib.d.ts")));
        assert!(!is_supported_file(Path::new("source/special.tsx")));
        assert!(!is_supported_file(Path::new("notes.txt")));
        assert!(!is_supported_file(Path::new("webpack.config.js")));
        assert!(!is_supported_file(Path::new("source")));
    }
}
