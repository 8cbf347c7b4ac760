use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::app::services::text_ops::extract_filename;

pub const UNTITLED: &str = "Untitled";

/// Shared "modified since last load/save" flag.
///
/// The editing surface holds a clone and raises it from its change
/// notification; the controller lowers it after a successful load or save.
#[derive(Debug, Clone, Default)]
pub struct ModifiedFlag(Rc<Cell<bool>>);

impl ModifiedFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> bool {
        self.0.get()
    }

    pub fn set(&self, modified: bool) {
        self.0.set(modified);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocState {
    Clean,
    Dirty,
}

/// The single open document. Its text lives in the editing surface.
#[derive(Debug)]
pub struct Document {
    pub file_path: Option<PathBuf>,
    pub display_name: String,
    modified: ModifiedFlag,
}

impl Document {
    pub fn new(modified: ModifiedFlag) -> Self {
        modified.set(false);
        Self {
            file_path: None,
            display_name: UNTITLED.to_string(),
            modified,
        }
    }

    pub fn state(&self) -> DocState {
        if self.modified.get() {
            DocState::Dirty
        } else {
            DocState::Clean
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.state() == DocState::Dirty
    }

    pub fn mark_dirty(&self) {
        self.modified.set(true);
    }

    pub fn mark_clean(&self) {
        self.modified.set(false);
    }

    /// Associate the document with a file it was just loaded from or saved to.
    pub fn attach_path(&mut self, path: &Path) {
        self.display_name = extract_filename(&path.to_string_lossy());
        self.file_path = Some(path.to_path_buf());
        self.mark_clean();
    }

    /// Forget the file association (File > New).
    pub fn reset(&mut self) {
        self.file_path = None;
        self.display_name = UNTITLED.to_string();
        self.mark_clean();
    }

    /// Directory of the associated file, used as the start of file dialogs.
    pub fn directory(&self) -> Option<PathBuf> {
        self.file_path
            .as_deref()
            .and_then(Path::parent)
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
    }

    pub fn window_title(&self) -> String {
        let prefix = if self.is_dirty() { "*" } else { "" };
        format!("{}{} - InkPad", prefix, self.display_name)
    }
}
