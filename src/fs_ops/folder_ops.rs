use crate::fs_ops::fs_error::FsError;
use std::fs;
use std::path::Path;

/// Creates a single directory. An existing path is reported as
/// `FsError::AlreadyExists`, distinct from other failures.
pub fn create_folder(path: &Path) -> Result<(), FsError> {
    match fs::create_dir(path) {
        Ok(_) => {
            log::info!("Folder {} created successfully", path.to_string_lossy());
            Ok(())
        }
        Err(error) => {
            let error = FsError::from_io(&error, path);
            log::error!("Failed creating folder {} with error {}", path.to_string_lossy(), error);
            Err(error)
        }
    }
}

pub fn rename_folder(old_path: &Path, new_path: &Path) -> Result<(), FsError> {
    if !old_path.is_dir() {
        return Err(FsError::NotFound(format!(
            "folder {} does not exist",
            old_path.to_string_lossy()
        )));
    }
    fs::rename(old_path, new_path).map_err(|e| FsError::from_io(&e, old_path))?;
    log::info!(
        "Folder {} renamed to {}",
        old_path.to_string_lossy(),
        new_path.to_string_lossy()
    );
    Ok(())
}

/// Removes the folder and everything below it.
pub fn delete_folder(path: &Path) -> Result<(), FsError> {
    if !path.is_dir() {
        return Err(FsError::NotFound(format!(
            "folder {} does not exist",
            path.to_string_lossy()
        )));
    }
    fs::remove_dir_all(path).map_err(|e| FsError::from_io(&e, path))?;
    log::info!("Folder {} deleted", path.to_string_lossy());
    Ok(())
}
