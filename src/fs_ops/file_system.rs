use crate::fs_ops::fs_error::FsError;
use crate::utils::file_utils::{file_to_string, string_to_file, string_to_new_file};
use std::path::Path;

pub struct FileSystem {
    pub write_function: fn(path: &Path, content: &str) -> Result<(), FsError>,
    pub read_function: fn(path: &Path) -> Result<String, FsError>,
    // Fails with AlreadyExists instead of truncating
    pub create_new_function: fn(path: &Path, content: &str) -> Result<(), FsError>,
}

impl FileSystem {
    pub fn new() -> FileSystem {
        Self {
            write_function: string_to_file,
            read_function: file_to_string,
            create_new_function: string_to_new_file,
        }
    }
}

impl Default for FileSystem {
    fn default() -> Self {
        Self::new()
    }
}
