use crate::fs_ops::fs_error::FsError;
use std::{
    fs::{File, OpenOptions},
    io::{Read, Write},
    path::Path,
};

pub(crate) fn generate_file_error(file_name: &Path, description: &str) -> String {
    if file_name.is_absolute() {
        format!("{} {}", file_name.display(), description)
    } else {    // path is not absolute
        match std::env::current_dir() {
            Ok(current_dir) => format!(
                "{}/{} {}",
                current_dir.display(),
                file_name.display(),
                description
            ),
            Err(_) => format!("{} {}", file_name.display(), description),
        }
    }
}

pub fn verify_valid_file(file_name: &Path) -> Result<(), FsError> {
    if file_name.as_os_str().is_empty() { Err(FsError::IOError(String::from("The path is empty"))) }
    else if !file_name.exists() { Err(FsError::NotFound(generate_file_error(file_name, "does not exist"))) }
    else if file_name.is_dir() { Err(FsError::IOError(generate_file_error(file_name, "is a directory, not a file"))) }
    else {
        Ok(())
    }
}

pub fn read_file_encoding(file_name: &Path) -> Result<&'static encoding_rs::Encoding, FsError> {
    verify_valid_file(file_name)?;
    let mut file = File::open(file_name).map_err(|e| FsError::from_io(&e, file_name))?;
    let mut buf = [0u8; 2];
    if file.read_exact(&mut buf).is_err() { return Ok(encoding_rs::UTF_8); }
    if buf == [255, 254] { return Ok(encoding_rs::UTF_16LE); }
    Ok(encoding_rs::UTF_8)
}

pub fn file_to_string(file_name: &Path) -> Result<String, FsError> {
    verify_valid_file(file_name)?;
    let encoding = Some(read_file_encoding(file_name)?);
    let file = File::open(file_name).map_err(|e| FsError::from_io(&e, file_name))?;
    let mut content = String::new();
    let mut rdr = encoding_rs_io::DecodeReaderBytesBuilder::new()
        .bom_sniffing(true)
        .strip_bom(true)
        .encoding(encoding)
        .build(file);
    rdr.read_to_string(&mut content).map_err(|e| FsError::from_io(&e, file_name))?;
    Ok(content)
}

// Single whole-buffer overwrite, no temp file and no rename
pub fn string_to_file(file_name: &Path, content: &str) -> Result<(), FsError> {
    let mut file = File::create(file_name).map_err(|e| FsError::from_io(&e, file_name))?;
    file.write_all(content.as_bytes())
        .map_err(|e| FsError::from_io(&e, file_name))
}

// The OS refuses an existing path, nothing is checked beforehand
pub fn string_to_new_file(file_name: &Path, content: &str) -> Result<(), FsError> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(file_name)
        .map_err(|e| FsError::from_io(&e, file_name))?;
    file.write_all(content.as_bytes())
        .map_err(|e| FsError::from_io(&e, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn basic() {
        let res = file_to_string(Path::new(""));
        match res {
            Ok(_) => unreachable!(),
            Err(error) => assert!(error.message().starts_with("The path is empty")),
        }

        let dir = tempdir().unwrap();
        assert!(file_to_string(dir.path())
            .unwrap_err()
            .message()
            .ends_with("is a directory, not a file"));

        let file_name = dir.path().join("foo.txt");
        match file_to_string(&file_name) {
            Ok(_) => unreachable!(),
            Err(error) => assert!(error.is_not_found()),
        }

        string_to_file(&file_name, "alex").unwrap();
        assert_eq!(file_to_string(&file_name).unwrap(), "alex");
    }

    #[test]
    fn test_overwrite_replaces_whole_content() {
        let dir = tempdir().unwrap();
        let file_name = dir.path().join("store.json");
        string_to_file(&file_name, "a much longer first content").unwrap();
        string_to_file(&file_name, "[]").unwrap();
        assert_eq!(fs::read_to_string(&file_name).unwrap(), "[]");
    }

    #[test]
    fn test_new_file_never_truncates() {
        let dir = tempdir().unwrap();
        let file_name = dir.path().join("store.json");
        string_to_new_file(&file_name, "[]").unwrap();
        assert_eq!(fs::read_to_string(&file_name).unwrap(), "[]");

        match string_to_new_file(&file_name, "{}") {
            Err(FsError::AlreadyExists(_)) => {}
            other => panic!("expected AlreadyExists, got {:?}", other),
        }
        assert_eq!(fs::read_to_string(&file_name).unwrap(), "[]");
    }

    #[test]
    fn test_file_with_utf16_bom() {
        let dir = tempdir().unwrap();
        let file_name = dir.path().join("utf16.txt");
        let mut bytes = vec![255u8, 254u8];
        for unit in "{}".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        fs::write(&file_name, bytes).unwrap();
        assert_eq!(read_file_encoding(&file_name).unwrap(), encoding_rs::UTF_16LE);
        assert_eq!(file_to_string(&file_name).unwrap(), "{}");
    }
}
