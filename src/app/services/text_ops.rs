use std::path::{Path, PathBuf};

/// Extract filename from a file path
///
/// Returns the filename component of a path, or "Unknown" if it can't be extracted.
pub fn extract_filename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Append `.{ext}` when the chosen path has no extension at all.
/// A path that already carries any extension is returned unchanged.
pub fn with_default_extension(path: &Path, ext: &str) -> PathBuf {
    if path.extension().is_some_and(|e| !e.is_empty()) {
        return path.to_path_buf();
    }
    let mut name = path.as_os_str().to_os_string();
    // "report." has an empty extension; don't produce "report..pdf"
    if !name.to_string_lossy().ends_with('.') {
        name.push(".");
    }
    name.push(ext);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_filename_from_path() {
        assert_eq!(extract_filename("/home/user/test.txt"), "test.txt");
        assert_eq!(extract_filename("letter.txt"), "letter.txt");
        assert_eq!(extract_filename("/path/with/many/levels/notes"), "notes");
    }

    #[test]
    fn test_extract_filename_edge_cases() {
        assert_eq!(extract_filename(""), "Unknown");
        assert_eq!(extract_filename("."), "Unknown");
        assert_eq!(extract_filename("/"), "Unknown");
    }

    #[test]
    fn test_extension_added_when_missing() {
        assert_eq!(
            with_default_extension(Path::new("/tmp/report"), "pdf"),
            PathBuf::from("/tmp/report.pdf")
        );
    }

    #[test]
    fn test_existing_extension_kept() {
        assert_eq!(
            with_default_extension(Path::new("/tmp/report.PDF"), "pdf"),
            PathBuf::from("/tmp/report.PDF")
        );
        assert_eq!(
            with_default_extension(Path::new("/tmp/report.txt"), "pdf"),
            PathBuf::from("/tmp/report.txt")
        );
    }

    #[test]
    fn test_trailing_dot() {
        assert_eq!(
            with_default_extension(Path::new("/tmp/report."), "pdf"),
            PathBuf::from("/tmp/report.pdf")
        );
    }
}
