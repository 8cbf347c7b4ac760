use std::fs;
use std::path::Path;

use crate::app::infrastructure::error::Result;

/// A file-chooser filter: human description plus glob pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFilter {
    pub description: &'static str,
    pub pattern: &'static str,
}

pub const TEXT_FILES: FileFilter = FileFilter {
    description: "Text files",
    pattern: "*.txt",
};

pub const PDF_FILES: FileFilter = FileFilter {
    description: "PDF files",
    pattern: "*.pdf",
};

/// Read a whole file as UTF-8. Invalid UTF-8 surfaces as an `InvalidData` I/O error.
pub fn load_text(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)?;
    log::info!("Loaded {} ({} bytes)", path.display(), content.len());
    Ok(content)
}

/// Write `text` as UTF-8, replacing any existing file.
pub fn save_text(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text)?;
    log::info!("Saved {} ({} bytes)", path.display(), text.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::infrastructure::error::AppError;
    use tempfile::tempdir;

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("note.txt");
        let text = "héllo\nwörld\n";
        save_text(&path, text).unwrap();
        assert_eq!(load_text(&path).unwrap(), text);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_text(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, AppError::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));
    }

    #[test]
    fn test_load_invalid_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("binary.txt");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();
        let err = load_text(&path).unwrap_err();
        assert!(matches!(err, AppError::Io(ref e) if e.kind() == std::io::ErrorKind::InvalidData));
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("dir.txt");
        assert!(save_text(&path, "x").is_err());
    }
}
