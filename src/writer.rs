use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};

/// Writes `content` to a file that must not exist yet.
///
/// Parent directories are not created.
///
/// # Errors
/// * `Error::WriteError` carrying the underlying I/O error
pub fn write_new_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    debug!("Writing file: {}", path.display());

    let to_write_error = |source| Error::WriteError { path: path.to_path_buf(), source };
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(to_write_error)?;
    file.write_all(content.as_bytes()).map_err(to_write_error)
}
