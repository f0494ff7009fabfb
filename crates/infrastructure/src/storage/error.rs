//! Shared error mapping for filesystem access

use std::io;
use std::path::Path;

use application::ApplicationError;

/// Map an I/O error on `path` to an application-layer error
pub fn map_io_error(path: &Path, e: &io::Error) -> ApplicationError {
    match e.kind() {
        io::ErrorKind::NotFound => {
            ApplicationError::Storage(format!("File not found: {}", path.display()))
        },
        io::ErrorKind::PermissionDenied => {
            ApplicationError::Storage(format!("Permission denied: {}", path.display()))
        },
        _ => ApplicationError::Storage(format!("I/O error on {}: {e}", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_path() {
        let err = map_io_error(Path::new("/data/a.csv"), &io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.to_string(), "Storage error: File not found: /data/a.csv");
    }

    #[test]
    fn other_errors_keep_the_cause() {
        let err = map_io_error(Path::new("x"), &io::Error::other("disk on fire"));
        assert!(matches!(err, ApplicationError::Storage(ref msg) if msg.contains("disk on fire")));
    }
}
