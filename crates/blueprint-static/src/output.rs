//! Output file helpers.

use std::fs;
use std::path::Path;

use crate::error::BuildError;

/// Write `contents` to `path`, creating missing parent directories and
/// replacing any existing file.
pub fn write_file(path: &Path, contents: &str) -> Result<(), BuildError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| BuildError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, contents).map_err(|source| BuildError::Write {
        path: path.to_path_buf(),
        source,
    })
}
