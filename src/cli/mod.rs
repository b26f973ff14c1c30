pub mod output;

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

pub const STDIN_SOURCE: &str = "<stdin>";

/// Read one input source; `-` means standard input
pub fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        return read_stdin();
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

pub fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read standard input")?;
    Ok(buffer)
}

pub fn source_name(path: &Path) -> String {
    if path == Path::new("-") {
        STDIN_SOURCE.to_string()
    } else {
        path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_source_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[F] custName").unwrap();
        assert_eq!(read_source(file.path()).unwrap(), "[F] custName");
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = read_source(Path::new("/nonexistent/fields.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_source_name() {
        assert_eq!(source_name(Path::new("-")), STDIN_SOURCE);
        assert_eq!(source_name(Path::new("fields.txt")), "fields.txt");
    }
}
