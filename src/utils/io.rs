// src/utils/io.rs
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

/// Get the application data directory
pub fn get_app_data_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "passaudit", "passaudit")
        .map(|proj_dirs| proj_dirs.data_dir().to_path_buf())
}

/// Open (truncating) an output file for buffered writing.
///
/// Parent directories are not created; a missing directory is reported as
/// an I/O error to the caller.
pub fn create_output_file(path: &Path) -> io::Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}
