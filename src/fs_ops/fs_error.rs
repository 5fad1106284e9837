use std::fmt;
use std::io::ErrorKind;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    NotFound(String),
    AlreadyExists(String),
    ParseError(String),
    IOError(String),
}

impl FsError {
    // Classifies an OS error by its kind, keeping the path for the message
    pub fn from_io(error: &std::io::Error, path: &Path) -> FsError {
        let message = format!("{}: {}", path.display(), error);
        match error.kind() {
            ErrorKind::NotFound => FsError::NotFound(message),
            ErrorKind::AlreadyExists => FsError::AlreadyExists(message),
            _ => FsError::IOError(message),
        }
    }

    pub fn message(&self) -> String {
        match self {
            FsError::NotFound(message)
            | FsError::AlreadyExists(message)
            | FsError::ParseError(message)
            | FsError::IOError(message) => message.clone(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound(_))
    }
}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FsError::NotFound(error) => write!(f, "NotFound: {error}"),
            FsError::AlreadyExists(error) => write!(f, "AlreadyExists: {error}"),
            FsError::ParseError(error) => write!(f, "ParseError: {error}"),
            FsError::IOError(error) => write!(f, "IOError: {error}"),
        }
    }
}

impl std::error::Error for FsError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_classification() {
        let path = Path::new("store.json");
        let not_found = io::Error::new(ErrorKind::NotFound, "missing");
        let exists = io::Error::new(ErrorKind::AlreadyExists, "exists");
        let denied = io::Error::new(ErrorKind::PermissionDenied, "denied");

        assert!(FsError::from_io(&not_found, path).is_not_found());
        assert_eq!(
            FsError::from_io(&exists, path),
            FsError::AlreadyExists("store.json: exists".to_string())
        );
        assert_eq!(
            FsError::from_io(&denied, path),
            FsError::IOError("store.json: denied".to_string())
        );
    }

    #[test]
    fn test_display_is_distinguishable() {
        assert!(FsError::NotFound("a".to_string()).to_string().starts_with("NotFound"));
        assert!(FsError::ParseError("a".to_string()).to_string().starts_with("ParseError"));
        assert_eq!(FsError::IOError("disk".to_string()).message(), "disk");
    }
}
