//! Seams between the application state and the GUI toolkit.
//!
//! `AppState` only talks to the outside world through these traits. The
//! FLTK implementations live in `crate::ui`; tests use in-memory fakes.

use std::path::{Path, PathBuf};

use crate::app::domain::format::{FontSpec, Rgb, TextFormat};
use crate::app::infrastructure::error::Result;
use crate::app::services::file_io::FileFilter;
use crate::app::services::layout::{PageGeometry, PageLayout, paginate};
use crate::app::services::pdf;

/// Answer to the "save your changes?" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveChoice {
    Save,
    Discard,
    Cancel,
}

/// The text-editing surface and its window chrome.
///
/// The surface owns the text and its native edit history. It must raise the
/// document's `ModifiedFlag` whenever its content changes.
pub trait EditorView {
    fn text(&self) -> String;
    fn set_text(&mut self, text: &str);

    fn undo(&mut self);
    fn redo(&mut self);
    fn cut(&mut self);
    fn copy(&mut self);
    fn paste(&mut self);

    fn apply_format(&mut self, format: &TextFormat);

    fn set_title(&mut self, title: &str);
    fn set_status(&mut self, message: &str);
}

/// Modal dialogs. Every method blocks until the dialog is dismissed.
pub trait Dialogs {
    fn open_path(&mut self, filter: &FileFilter, start_dir: Option<&Path>) -> Option<PathBuf>;
    fn save_path(&mut self, title: &str, filter: &FileFilter, start_dir: Option<&Path>) -> Option<PathBuf>;
    fn ask_save(&mut self, message: &str) -> SaveChoice;
    fn pick_font(&mut self, current: FontSpec) -> Option<FontSpec>;
    fn pick_color(&mut self, current: Rgb) -> Option<Rgb>;
    fn alert(&mut self, message: &str);
    fn about(&mut self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintTarget {
    /// A physical or system printer chosen in the native print dialog.
    Device,
    /// A PDF file at the given path.
    Pdf(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintOutcome {
    Printed,
    Cancelled,
}

/// Everything a print backend needs to render the document.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintJob {
    pub title: String,
    pub text: String,
    pub format: TextFormat,
    pub target: PrintTarget,
}

impl PrintJob {
    pub fn layout(&self, geometry: PageGeometry) -> PageLayout {
        paginate(&self.text, &self.format, geometry)
    }

    /// Lay the job out on A4 and write it as a PDF file.
    pub fn export_pdf(&self, path: &Path) -> Result<()> {
        let layout = self.layout(PageGeometry::A4);
        pdf::export_pdf(path, &layout, &self.format, &self.title)
    }
}

pub trait PrintBackend {
    fn print(&mut self, job: &PrintJob) -> Result<PrintOutcome>;
    fn preview(&mut self, job: &PrintJob);
}
