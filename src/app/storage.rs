use std::borrow::Cow;
use std::fs;

use super::error::{AppError, Result};

/// Read an entire document as text.
///
/// Line terminators are normalized on the way in: `\r\n` and lone `\r`
/// both become `\n`, so the rest of the application only ever sees
/// newline-terminated text no matter where the file came from.
pub fn read_document(path: &str) -> Result<String> {
    let raw = fs::read_to_string(path).map_err(AppError::Read)?;
    Ok(normalize_newlines(&raw).into_owned())
}

/// Write an entire document as text, replacing whatever was there.
///
/// Newlines are re-encoded to the platform convention on the way out
/// (`\r\n` on Windows). This is a plain truncating overwrite, with no
/// atomic rename-swap and no backup file.
pub fn write_document(path: &str, text: &str) -> Result<()> {
    let encoded = encode_newlines(text);
    fs::write(path, encoded.as_bytes()).map_err(AppError::Write)
}

fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

#[cfg(windows)]
fn encode_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\n') {
        Cow::Owned(text.replace('\n', "\r\n"))
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(not(windows))]
fn encode_newlines(text: &str) -> Cow<'_, str> {
    Cow::Borrowed(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn path_str(path: &std::path::Path) -> String {
        path.to_string_lossy().to_string()
    }

    #[test]
    fn test_read_normalizes_crlf() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("crlf.txt");
        fs::write(&path, b"one\r\ntwo\r\nthree").unwrap();

        let text = read_document(&path_str(&path)).unwrap();
        assert_eq!(text, "one\ntwo\nthree");
    }

    #[test]
    fn test_read_normalizes_bare_cr() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cr.txt");
        fs::write(&path, b"one\rtwo\r\nthree\n").unwrap();

        let text = read_document(&path_str(&path)).unwrap();
        assert_eq!(text, "one\ntwo\nthree\n");
    }

    #[test]
    fn test_read_leaves_lf_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lf.txt");
        fs::write(&path, b"one\ntwo\n").unwrap();

        let text = read_document(&path_str(&path)).unwrap();
        assert_eq!(text, "one\ntwo\n");
    }

    #[test]
    fn test_read_missing_file_is_read_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.txt");

        let err = read_document(&path_str(&path)).unwrap_err();
        assert!(matches!(err, AppError::Read(_)));
        assert!(err.to_string().starts_with("Cannot open file: "));
    }

    #[test]
    fn test_read_rejects_invalid_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("binary.dat");
        fs::write(&path, [0xff, 0xfe, 0x41]).unwrap();

        let err = read_document(&path_str(&path)).unwrap_err();
        assert!(matches!(err, AppError::Read(_)));
    }

    #[test]
    fn test_write_error_when_parent_missing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.txt");

        let err = write_document(&path_str(&path), "text").unwrap_err();
        assert!(matches!(err, AppError::Write(_)));
        assert!(err.to_string().starts_with("Cannot save file: "));
    }

    #[test]
    fn test_write_read_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("round.txt");

        write_document(&path_str(&path), "hello\nworld").unwrap();
        let text = read_document(&path_str(&path)).unwrap();
        assert_eq!(text, "hello\nworld");
    }

    #[test]
    fn test_write_truncates_previous_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("trunc.txt");

        write_document(&path_str(&path), "a much longer first version\n").unwrap();
        write_document(&path_str(&path), "short").unwrap();

        let text = read_document(&path_str(&path)).unwrap();
        assert_eq!(text, "short");
    }

    #[cfg(not(windows))]
    #[test]
    fn test_write_keeps_lf_on_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("unix.txt");

        write_document(&path_str(&path), "hello\nworld").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"hello\nworld");
    }

    #[cfg(windows)]
    #[test]
    fn test_write_uses_crlf_on_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("windows.txt");

        write_document(&path_str(&path), "hello\nworld").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"hello\r\nworld");
    }
}
