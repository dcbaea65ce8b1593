use thiserror::Error;

/// Errors surfaced to the user as modal alerts.
///
/// There are exactly three user-visible failures (failed read, failed
/// write, rejected printer dialog) plus the guard for saving a document
/// that has no backing file yet. All of them abort the triggering
/// command without mutating any state.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Cannot open file: {0}")]
    Read(std::io::Error),

    #[error("Cannot save file: {0}")]
    Write(std::io::Error),

    #[error("Cannot access printer")]
    PrinterUnavailable,

    #[error("Cannot save file: the document is untitled")]
    Untitled,
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = AppError::Read(io_err);
        assert!(err.to_string().starts_with("Cannot open file: "));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_write_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = AppError::Write(io_err);
        assert!(err.to_string().starts_with("Cannot save file: "));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_fixed_messages() {
        assert_eq!(AppError::PrinterUnavailable.to_string(), "Cannot access printer");
        assert_eq!(
            AppError::Untitled.to_string(),
            "Cannot save file: the document is untitled"
        );
    }
}
