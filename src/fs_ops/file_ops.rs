use crate::fs_ops::fs_error::FsError;
use crate::utils::file_utils::{file_to_string, string_to_file, verify_valid_file};
use crate::utils::log_utils::size_as_string;
use std::fs;
use std::path::Path;

/// Writes `content` to `path`, creating or truncating the file.
pub fn create_file(path: &Path, content: &str) -> Result<(), FsError> {
    string_to_file(path, content)?;
    log::info!("File {} created", path.to_string_lossy());
    Ok(())
}

pub fn rename_file(old_path: &Path, new_path: &Path) -> Result<(), FsError> {
    verify_valid_file(old_path)?;
    fs::rename(old_path, new_path).map_err(|e| FsError::from_io(&e, old_path))?;
    log::info!(
        "File {} renamed to {}",
        old_path.to_string_lossy(),
        new_path.to_string_lossy()
    );
    Ok(())
}

pub fn delete_file(path: &Path) -> Result<(), FsError> {
    verify_valid_file(path)?;
    match fs::remove_file(path) {
        Ok(_) => {
            log::info!("File {} removed successfully", path.to_string_lossy());
            Ok(())
        }
        Err(error) => {
            log::error!(
                "Failed removing {} with error {}",
                path.to_string_lossy(),
                error
            );
            Err(FsError::from_io(&error, path))
        }
    }
}

/// Lists the names of the non-directory entries of `dir`, sorted.
pub fn list_files(dir: &Path) -> Result<Vec<String>, FsError> {
    let entries = fs::read_dir(dir).map_err(|e| FsError::from_io(&e, dir))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| FsError::from_io(&e, dir))?;
        let file_type = entry.file_type().map_err(|e| FsError::from_io(&e, &entry.path()))?;
        if !file_type.is_dir() {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
    }
    names.sort();
    Ok(names)
}

pub fn read_file(path: &Path) -> Result<String, FsError> {
    let content = file_to_string(path)?;
    log::debug!(
        "Read {} from {}",
        size_as_string(content.len() as u64),
        path.to_string_lossy()
    );
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_lifecycle() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        let renamed = dir.path().join("renamed.json");

        create_file(&path, "{}").unwrap();
        assert_eq!(read_file(&path).unwrap(), "{}");

        rename_file(&path, &renamed).unwrap();
        assert!(read_file(&path).unwrap_err().is_not_found());
        assert_eq!(read_file(&renamed).unwrap(), "{}");

        delete_file(&renamed).unwrap();
        assert!(delete_file(&renamed).unwrap_err().is_not_found());
    }

    #[test]
    fn test_rename_missing_file() {
        let dir = tempdir().unwrap();
        let result = rename_file(&dir.path().join("nope.json"), &dir.path().join("b.json"));
        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_list_files_skips_directories() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.json"), "[]").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        assert_eq!(list_files(dir.path()).unwrap(), vec!["a.json", "b.txt"]);
        assert!(list_files(&dir.path().join("missing")).unwrap_err().is_not_found());
    }
}
