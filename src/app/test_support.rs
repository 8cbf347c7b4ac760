//! In-memory stand-ins for the GUI seams.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use crate::app::domain::document::ModifiedFlag;
use crate::app::domain::format::{FontSpec, Rgb, TextFormat};
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::ports::{
    Dialogs, EditorView, PrintBackend, PrintJob, PrintOutcome, PrintTarget, SaveChoice,
};
use crate::app::services::file_io::FileFilter;

/// Text surface that raises the modified flag on every change, like the FLTK buffer.
pub struct FakeView {
    pub text: String,
    pub modified: ModifiedFlag,
    pub title: String,
    pub status: String,
    pub format: Option<TextFormat>,
    pub edit_calls: Vec<&'static str>,
}

impl FakeView {
    pub fn new(modified: ModifiedFlag) -> Self {
        Self {
            text: String::new(),
            modified,
            title: String::new(),
            status: String::new(),
            format: None,
            edit_calls: Vec::new(),
        }
    }

    /// Simulate the user typing at the end of the buffer.
    pub fn type_text(&mut self, s: &str) {
        self.text.push_str(s);
        self.modified.set(true);
    }
}

impl EditorView for FakeView {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.modified.set(true);
    }

    fn undo(&mut self) {
        self.edit_calls.push("undo");
    }

    fn redo(&mut self) {
        self.edit_calls.push("redo");
    }

    fn cut(&mut self) {
        self.edit_calls.push("cut");
    }

    fn copy(&mut self) {
        self.edit_calls.push("copy");
    }

    fn paste(&mut self) {
        self.edit_calls.push("paste");
    }

    fn apply_format(&mut self, format: &TextFormat) {
        self.format = Some(*format);
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_status(&mut self, message: &str) {
        self.status = message.to_string();
    }
}

/// Dialogs answering from scripted queues. An empty queue means "cancelled".
#[derive(Default)]
pub struct FakeDialogs {
    pub open_paths: VecDeque<PathBuf>,
    pub save_paths: VecDeque<PathBuf>,
    pub answers: VecDeque<SaveChoice>,
    pub fonts: VecDeque<FontSpec>,
    pub colors: VecDeque<Rgb>,
    pub prompts: Vec<String>,
    pub save_dialog_titles: Vec<String>,
    pub alerts: Vec<String>,
    pub about_shown: usize,
}

impl Dialogs for FakeDialogs {
    fn open_path(&mut self, _filter: &FileFilter, _start_dir: Option<&Path>) -> Option<PathBuf> {
        self.open_paths.pop_front()
    }

    fn save_path(&mut self, title: &str, _filter: &FileFilter, _start_dir: Option<&Path>) -> Option<PathBuf> {
        self.save_dialog_titles.push(title.to_string());
        self.save_paths.pop_front()
    }

    fn ask_save(&mut self, message: &str) -> SaveChoice {
        self.prompts.push(message.to_string());
        self.answers.pop_front().unwrap_or(SaveChoice::Cancel)
    }

    fn pick_font(&mut self, _current: FontSpec) -> Option<FontSpec> {
        self.fonts.pop_front()
    }

    fn pick_color(&mut self, _current: Rgb) -> Option<Rgb> {
        self.colors.pop_front()
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn about(&mut self) {
        self.about_shown += 1;
    }
}

/// Printer that records jobs and writes real PDFs for PDF targets.
pub struct FakePrinter {
    pub jobs: Vec<PrintJob>,
    pub previews: Vec<PrintJob>,
    pub device_outcome: PrintOutcome,
    pub fail: bool,
}

impl Default for FakePrinter {
    fn default() -> Self {
        Self {
            jobs: Vec::new(),
            previews: Vec::new(),
            device_outcome: PrintOutcome::Printed,
            fail: false,
        }
    }
}

impl PrintBackend for FakePrinter {
    fn print(&mut self, job: &PrintJob) -> Result<PrintOutcome> {
        self.jobs.push(job.clone());
        if self.fail {
            return Err(AppError::Print("printer offline".to_string()));
        }
        match &job.target {
            PrintTarget::Device => Ok(self.device_outcome),
            PrintTarget::Pdf(path) => {
                job.export_pdf(path)?;
                Ok(PrintOutcome::Printed)
            }
        }
    }

    fn preview(&mut self, job: &PrintJob) {
        self.previews.push(job.clone());
    }
}
