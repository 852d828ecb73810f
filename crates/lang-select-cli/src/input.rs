//! Acquiring the text to extract from.

use crate::error::Result;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Read the input text.
///
/// `recent` wins when it names an existing file; otherwise `file` is read,
/// with `-` meaning stdin.
pub fn read_input(file: &str, recent: Option<&Path>) -> Result<String> {
    if let Some(path) = recent.filter(|path| path.exists()) {
        debug!("Reading recent text from {}", path.display());
        return Ok(fs::read_to_string(path)?);
    }

    if file == "-" {
        debug!("Reading text from stdin");
        return read_from(io::stdin().lock());
    }

    debug!("Reading text from {}", file);
    Ok(fs::read_to_string(file)?)
}

/// Read all text from a reader.
pub fn read_from<R: Read>(mut reader: R) -> Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}

/// Write the input text to `path` so a later run can reuse it with `--recent`.
pub fn save_recent(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)?;
    debug!("Saved input to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    #[test]
    fn test_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answer.md");
        fs::write(&path, "1. One\n2. Two\n").unwrap();

        let text = read_input(path.to_str().unwrap(), None).unwrap();
        assert_eq!(text, "1. One\n2. Two\n");
    }

    #[test]
    fn test_recent_takes_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file.md");
        let recent = dir.path().join("recent.md");
        fs::write(&file, "- from file").unwrap();
        fs::write(&recent, "- from recent").unwrap();

        let text = read_input(file.to_str().unwrap(), Some(&recent)).unwrap();
        assert_eq!(text, "- from recent");
    }

    #[test]
    fn test_missing_recent_falls_back_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file.md");
        fs::write(&file, "- from file").unwrap();

        let text = read_input(file.to_str().unwrap(), Some(&dir.path().join("nope"))).unwrap();
        assert_eq!(text, "- from file");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.md");
        let result = read_input(missing.to_str().unwrap(), None);
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn test_read_from_reader() {
        let text = read_from("* piped".as_bytes()).unwrap();
        assert_eq!(text, "* piped");
    }

    #[test]
    fn test_save_recent_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache").join("recent.txt");

        save_recent(&path, "# Saved\n- item").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Saved\n- item");
    }
}
