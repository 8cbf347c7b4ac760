use std::path::{Path, PathBuf};

use super::controllers::dirty_guard::{DiscardHost, GuardOutcome, SaveOutcome, guard_discard};
use super::domain::document::{Document, ModifiedFlag};
use super::domain::format::{Alignment, TextFormat};
use super::domain::messages::Message;
use super::domain::settings::AppSettings;
use super::ports::{Dialogs, EditorView, PrintBackend, PrintJob, PrintOutcome, PrintTarget, SaveChoice};
use super::services::file_io::{self, PDF_FILES, TEXT_FILES};
use super::services::text_ops::{extract_filename, with_default_extension};

/// Whether the event loop should keep running after a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct AppState<V: EditorView, D: Dialogs, P: PrintBackend> {
    pub view: V,
    pub dialogs: D,
    pub printer: P,
    pub document: Document,
    pub format: TextFormat,
    /// Last directory used in a file open/save dialog.
    pub last_directory: Option<PathBuf>,
}

impl<V: EditorView, D: Dialogs, P: PrintBackend> AppState<V, D, P> {
    /// `modified` must be the flag the view raises on content changes.
    pub fn new(view: V, dialogs: D, printer: P, modified: ModifiedFlag, settings: &AppSettings) -> Self {
        let mut state = Self {
            view,
            dialogs,
            printer,
            document: Document::new(modified),
            format: TextFormat::with_font(settings.font()),
            last_directory: None,
        };
        state.view.apply_format(&state.format);
        state.update_window_title();
        state
    }

    /// Route one message to its handler.
    pub fn dispatch(&mut self, msg: Message) -> Flow {
        match msg {
            Message::FileNew => self.file_new(),
            Message::FileOpen => self.file_open(),
            Message::FileSave => {
                self.file_save();
            }
            Message::FileSaveAs => {
                self.file_save_as();
            }
            Message::FilePrint => self.file_print(),
            Message::FilePrintPreview => self.print_preview(),
            Message::FileExportPdf => self.export_pdf(),
            Message::FileQuit | Message::WindowClose => {
                if self.file_quit() {
                    return Flow::Exit;
                }
            }

            Message::EditUndo => self.view.undo(),
            Message::EditRedo => self.view.redo(),
            Message::EditCut => self.view.cut(),
            Message::EditCopy => self.view.copy(),
            Message::EditPaste => self.view.paste(),

            Message::FormatBold => self.toggle_bold(),
            Message::FormatItalic => self.toggle_italic(),
            Message::FormatUnderline => self.toggle_underline(),
            Message::FormatAlign(alignment) => self.set_alignment(alignment),
            Message::FormatFont => self.choose_font(),
            Message::FormatColor => self.choose_color(),

            Message::ShowAbout => self.dialogs.about(),
            Message::BufferModified => {}
        }
        self.update_window_title();
        Flow::Continue
    }

    pub fn update_window_title(&mut self) {
        let title = self.document.window_title();
        self.view.set_title(&title);
    }

    fn dialog_directory(&self) -> Option<PathBuf> {
        self.last_directory
            .clone()
            .or_else(|| self.document.directory())
    }

    fn remember_directory(&mut self, path: &Path) {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.last_directory = Some(parent.to_path_buf());
        }
    }

    // --- File operations ---

    pub fn file_new(&mut self) {
        if guard_discard(self) == GuardOutcome::Abort {
            return;
        }
        self.view.set_text("");
        self.document.reset();
        self.view.set_status("New document");
    }

    pub fn file_open(&mut self) {
        if guard_discard(self) == GuardOutcome::Abort {
            return;
        }
        let dir = self.dialog_directory();
        if let Some(path) = self.dialogs.open_path(&TEXT_FILES, dir.as_deref()) {
            self.open_file(&path);
        }
    }

    /// Load `path` into the editor. On failure nothing about the current document changes.
    pub fn open_file(&mut self, path: &Path) {
        match file_io::load_text(path) {
            Ok(content) => {
                self.remember_directory(path);
                self.view.set_text(&content);
                self.document.attach_path(path);
                self.view.set_status(&format!("Opened {}", self.document.display_name));
            }
            Err(e) => {
                log::warn!("Failed to open {}: {}", path.display(), e);
                self.dialogs.alert(&format!("Error opening file: {}", e));
            }
        }
    }

    /// Save to the document's file, asking for one if it has none yet.
    pub fn file_save(&mut self) -> SaveOutcome {
        match self.document.file_path.clone() {
            Some(path) => self.write_to(&path),
            None => self.file_save_as(),
        }
    }

    pub fn file_save_as(&mut self) -> SaveOutcome {
        let dir = self.dialog_directory();
        match self.dialogs.save_path("Save File", &TEXT_FILES, dir.as_deref()) {
            Some(path) => self.write_to(&path),
            None => SaveOutcome::Cancelled,
        }
    }

    fn write_to(&mut self, path: &Path) -> SaveOutcome {
        self.remember_directory(path);
        let text = self.view.text();
        match file_io::save_text(path, &text) {
            Ok(()) => {
                self.document.attach_path(path);
                self.view.set_status("File saved");
                SaveOutcome::Saved
            }
            Err(e) => {
                log::warn!("Failed to save {}: {}", path.display(), e);
                self.dialogs.alert(&format!("Error saving file: {}", e));
                SaveOutcome::Failed
            }
        }
    }

    /// Handle quit request. Returns `true` if the app should exit.
    pub fn file_quit(&mut self) -> bool {
        guard_discard(self) == GuardOutcome::Proceed
    }

    // --- Print & export ---

    fn print_job(&self, target: PrintTarget) -> PrintJob {
        PrintJob {
            title: self.document.display_name.clone(),
            text: self.view.text(),
            format: self.format,
            target,
        }
    }

    pub fn file_print(&mut self) {
        let job = self.print_job(PrintTarget::Device);
        match self.printer.print(&job) {
            Ok(PrintOutcome::Printed) => {
                log::info!("Printed {}", job.title);
                self.view.set_status("Sent to printer");
            }
            Ok(PrintOutcome::Cancelled) => {}
            Err(e) => {
                log::warn!("Printing failed: {}", e);
                self.dialogs.alert(&format!("Error printing: {}", e));
            }
        }
    }

    pub fn print_preview(&mut self) {
        let job = self.print_job(PrintTarget::Device);
        self.printer.preview(&job);
    }

    pub fn export_pdf(&mut self) {
        let dir = self.dialog_directory();
        let Some(chosen) = self.dialogs.save_path("Export PDF", &PDF_FILES, dir.as_deref()) else {
            return;
        };
        let path = with_default_extension(&chosen, "pdf");
        self.remember_directory(&path);

        let job = self.print_job(PrintTarget::Pdf(path.clone()));
        match self.printer.print(&job) {
            Ok(PrintOutcome::Printed) => {
                let name = extract_filename(&path.to_string_lossy());
                self.view.set_status(&format!("Exported to {}", name));
            }
            Ok(PrintOutcome::Cancelled) => {}
            Err(e) => {
                log::warn!("PDF export to {} failed: {}", path.display(), e);
                self.dialogs.alert(&format!("Error exporting PDF: {}", e));
            }
        }
    }

    // --- Format ---

    fn update_format(&mut self, format: TextFormat) {
        if format == self.format {
            return;
        }
        self.format = format;
        self.view.apply_format(&self.format);
        self.document.mark_dirty();
    }

    pub fn toggle_bold(&mut self) {
        let format = TextFormat { bold: !self.format.bold, ..self.format };
        self.update_format(format);
    }

    pub fn toggle_italic(&mut self) {
        let format = TextFormat { italic: !self.format.italic, ..self.format };
        self.update_format(format);
    }

    pub fn toggle_underline(&mut self) {
        let format = TextFormat { underline: !self.format.underline, ..self.format };
        self.update_format(format);
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        let format = TextFormat { alignment, ..self.format };
        self.update_format(format);
    }

    pub fn choose_font(&mut self) {
        if let Some(font) = self.dialogs.pick_font(self.format.font) {
            let format = TextFormat { font, ..self.format };
            self.update_format(format);
        }
    }

    pub fn choose_color(&mut self) {
        if let Some(color) = self.dialogs.pick_color(self.format.color) {
            let format = TextFormat { color, ..self.format };
            self.update_format(format);
        }
    }
}

impl<V: EditorView, D: Dialogs, P: PrintBackend> DiscardHost for AppState<V, D, P> {
    fn is_dirty(&self) -> bool {
        self.document.is_dirty()
    }

    fn ask_save(&mut self, message: &str) -> SaveChoice {
        self.dialogs.ask_save(message)
    }

    fn save(&mut self) -> SaveOutcome {
        self.file_save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::format::{FontFamily, FontSpec, Rgb};
    use crate::app::test_support::{FakeDialogs, FakePrinter, FakeView};
    use std::fs;
    use tempfile::tempdir;

    type TestState = AppState<FakeView, FakeDialogs, FakePrinter>;

    fn new_state() -> TestState {
        let flag = ModifiedFlag::new();
        AppState::new(
            FakeView::new(flag.clone()),
            FakeDialogs::default(),
            FakePrinter::default(),
            flag,
            &AppSettings::default(),
        )
    }

    #[test]
    fn test_starts_clean_with_settings_font() {
        let state = new_state();
        assert!(!state.document.is_dirty());
        assert_eq!(state.view.title, "Untitled - InkPad");
        assert_eq!(state.view.format, Some(state.format));
        assert_eq!(state.format.font, FontSpec::new(FontFamily::Helvetica, 14));
    }

    #[test]
    fn test_edits_make_document_dirty_and_title_shows_it() {
        let mut state = new_state();
        state.view.type_text("abc");
        assert!(state.document.is_dirty());
        state.dispatch(Message::BufferModified);
        assert_eq!(state.view.title, "*Untitled - InkPad");
    }

    #[test]
    fn test_save_clears_modified_flag() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.txt");
        let mut state = new_state();
        state.view.type_text("one");
        state.view.type_text(" two");
        state.dialogs.save_paths.push_back(path.clone());

        assert_eq!(state.dispatch(Message::FileSave), Flow::Continue);
        assert!(!state.document.is_dirty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "one two");
        assert_eq!(state.document.file_path, Some(path));
        assert_eq!(state.view.title, "a.txt - InkPad");
        assert_eq!(state.view.status, "File saved");
    }

    #[test]
    fn test_second_save_reuses_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.txt");
        let mut state = new_state();
        state.dialogs.save_paths.push_back(path.clone());
        state.view.type_text("v1");
        state.file_save();
        state.view.type_text(" v2");
        assert_eq!(state.file_save(), SaveOutcome::Saved);
        assert_eq!(state.dialogs.save_dialog_titles.len(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), "v1 v2");
    }

    #[test]
    fn test_save_as_always_asks() {
        let dir = tempdir().unwrap();
        let mut state = new_state();
        state.dialogs.save_paths.push_back(dir.path().join("a.txt"));
        state.dialogs.save_paths.push_back(dir.path().join("b.txt"));
        state.file_save();
        state.dispatch(Message::FileSaveAs);
        assert_eq!(state.document.display_name, "b.txt");
        assert_eq!(state.dialogs.save_dialog_titles.len(), 2);
    }

    #[test]
    fn test_cancelled_save_dialog_keeps_dirty() {
        let mut state = new_state();
        state.view.type_text("x");
        assert_eq!(state.file_save(), SaveOutcome::Cancelled);
        assert!(state.document.is_dirty());
        assert!(state.dialogs.alerts.is_empty());
    }

    #[test]
    fn test_failed_save_alerts_and_keeps_dirty() {
        let dir = tempdir().unwrap();
        let mut state = new_state();
        state.view.type_text("x");
        state.dialogs.save_paths.push_back(dir.path().join("missing").join("a.txt"));
        assert_eq!(state.file_save(), SaveOutcome::Failed);
        assert!(state.document.is_dirty());
        assert!(state.document.file_path.is_none());
        assert_eq!(state.dialogs.alerts.len(), 1);
        assert!(state.dialogs.alerts[0].starts_with("Error saving file"));
    }

    #[test]
    fn test_save_then_open_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("round.txt");
        let mut state = new_state();
        state.view.type_text("line one\nline two\n");
        state.dialogs.save_paths.push_back(path.clone());
        state.file_save();

        let mut other = new_state();
        other.dialogs.open_paths.push_back(path.clone());
        other.dispatch(Message::FileOpen);
        assert_eq!(other.view.text, "line one\nline two\n");
        assert!(!other.document.is_dirty());
        assert_eq!(other.document.file_path, Some(path));
    }

    #[test]
    fn test_open_failure_leaves_document_untouched() {
        let dir = tempdir().unwrap();
        let bad = dir.path().join("bad.txt");
        fs::write(&bad, [0xc3, 0x28]).unwrap();

        let mut state = new_state();
        state.view.type_text("keep me");
        state.dialogs.answers.push_back(SaveChoice::Discard);
        state.dialogs.open_paths.push_back(bad);
        state.dispatch(Message::FileOpen);

        assert_eq!(state.view.text, "keep me");
        assert!(state.document.is_dirty());
        assert!(state.document.file_path.is_none());
        assert!(state.dialogs.alerts[0].starts_with("Error opening file"));
    }

    #[test]
    fn test_failed_open_does_not_move_dialog_directory() {
        let good = tempdir().unwrap();
        let saved = good.path().join("notes.txt");
        let elsewhere = tempdir().unwrap();

        let mut state = new_state();
        state.view.type_text("x");
        state.dialogs.save_paths.push_back(saved);
        state.file_save();
        assert_eq!(state.last_directory.as_deref(), Some(good.path()));

        state.open_file(&elsewhere.path().join("missing.txt"));
        assert_eq!(state.last_directory.as_deref(), Some(good.path()));
        assert_eq!(state.dialogs.alerts.len(), 1);
    }

    #[test]
    fn test_open_is_guarded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("other.txt");
        fs::write(&path, "other").unwrap();

        let mut state = new_state();
        state.view.type_text("draft");
        state.dialogs.answers.push_back(SaveChoice::Cancel);
        state.dialogs.open_paths.push_back(path);
        state.dispatch(Message::FileOpen);

        assert_eq!(state.view.text, "draft");
        assert_eq!(state.dialogs.prompts.len(), 1);
        assert_eq!(state.dialogs.open_paths.len(), 1, "open dialog must not be shown");
    }

    #[test]
    fn test_new_on_clean_document_does_not_prompt() {
        let mut state = new_state();
        state.dispatch(Message::FileNew);
        assert!(state.dialogs.prompts.is_empty());
        assert!(!state.document.is_dirty());
    }

    #[test]
    fn test_new_with_discard_clears_buffer() {
        let mut state = new_state();
        state.view.set_text("hello");
        state.document.mark_clean();
        state.view.type_text(" world");
        assert!(state.document.is_dirty());

        state.dialogs.answers.push_back(SaveChoice::Discard);
        state.dispatch(Message::FileNew);

        assert_eq!(state.dialogs.prompts.len(), 1);
        assert_eq!(state.view.text, "");
        assert!(!state.document.is_dirty());
        assert_eq!(state.view.title, "Untitled - InkPad");
    }

    #[test]
    fn test_new_with_save_writes_file_first() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("kept.txt");
        let mut state = new_state();
        state.view.type_text("precious");
        state.dialogs.answers.push_back(SaveChoice::Save);
        state.dialogs.save_paths.push_back(path.clone());
        state.dispatch(Message::FileNew);

        assert_eq!(fs::read_to_string(&path).unwrap(), "precious");
        assert_eq!(state.view.text, "");
        assert!(state.document.file_path.is_none());
    }

    #[test]
    fn test_new_aborts_when_save_is_cancelled() {
        let mut state = new_state();
        state.view.type_text("precious");
        state.dialogs.answers.push_back(SaveChoice::Save);
        state.dispatch(Message::FileNew);
        assert_eq!(state.view.text, "precious");
        assert!(state.document.is_dirty());
    }

    #[test]
    fn test_quit_cancel_keeps_window_open() {
        let mut state = new_state();
        state.view.type_text("unsaved");
        state.dialogs.answers.push_back(SaveChoice::Cancel);
        assert_eq!(state.dispatch(Message::FileQuit), Flow::Continue);
        assert_eq!(state.view.text, "unsaved");
        assert!(state.document.is_dirty());
    }

    #[test]
    fn test_window_close_is_guarded_like_quit() {
        let mut state = new_state();
        state.view.type_text("unsaved");
        state.dialogs.answers.push_back(SaveChoice::Discard);
        assert_eq!(state.dispatch(Message::WindowClose), Flow::Exit);
        assert_eq!(state.dialogs.prompts.len(), 1);
    }

    #[test]
    fn test_quit_clean_exits_without_prompt() {
        let mut state = new_state();
        assert_eq!(state.dispatch(Message::FileQuit), Flow::Exit);
        assert!(state.dialogs.prompts.is_empty());
    }

    #[test]
    fn test_edit_actions_forward_to_view() {
        let mut state = new_state();
        for msg in [
            Message::EditUndo,
            Message::EditRedo,
            Message::EditCut,
            Message::EditCopy,
            Message::EditPaste,
        ] {
            state.dispatch(msg);
        }
        assert_eq!(state.view.edit_calls, vec!["undo", "redo", "cut", "copy", "paste"]);
    }

    #[test]
    fn test_format_toggles_apply_and_dirty() {
        let mut state = new_state();
        state.dispatch(Message::FormatBold);
        assert!(state.format.bold);
        assert_eq!(state.view.format.map(|f| f.bold), Some(true));
        assert!(state.document.is_dirty());

        state.dispatch(Message::FormatBold);
        assert!(!state.format.bold);

        state.dispatch(Message::FormatItalic);
        state.dispatch(Message::FormatUnderline);
        assert!(state.format.italic && state.format.underline);
    }

    #[test]
    fn test_same_alignment_is_not_a_change() {
        let mut state = new_state();
        state.dispatch(Message::FormatAlign(Alignment::Left));
        assert!(!state.document.is_dirty());
        state.dispatch(Message::FormatAlign(Alignment::Justify));
        assert_eq!(state.format.alignment, Alignment::Justify);
        assert!(state.document.is_dirty());
    }

    #[test]
    fn test_font_and_color_pickers() {
        let mut state = new_state();
        state.dispatch(Message::FormatFont);
        state.dispatch(Message::FormatColor);
        assert!(!state.document.is_dirty(), "cancelled pickers change nothing");

        let courier = FontSpec::new(FontFamily::Courier, 20);
        state.dialogs.fonts.push_back(courier);
        state.dialogs.colors.push_back(Rgb(10, 20, 30));
        state.dispatch(Message::FormatFont);
        state.dispatch(Message::FormatColor);
        assert_eq!(state.format.font, courier);
        assert_eq!(state.format.color, Rgb(10, 20, 30));
        assert_eq!(state.view.format, Some(state.format));
    }

    #[test]
    fn test_format_survives_new_document() {
        let mut state = new_state();
        state.dispatch(Message::FormatBold);
        state.dialogs.answers.push_back(SaveChoice::Discard);
        state.dispatch(Message::FileNew);
        assert!(state.format.bold);
    }

    #[test]
    fn test_print_builds_device_job() {
        let mut state = new_state();
        state.view.type_text("to paper");
        state.dispatch(Message::FilePrint);
        let job = &state.printer.jobs[0];
        assert_eq!(job.target, PrintTarget::Device);
        assert_eq!(job.text, "to paper");
        assert_eq!(state.view.status, "Sent to printer");
        assert!(state.document.is_dirty(), "printing does not save");
    }

    #[test]
    fn test_print_cancel_is_silent() {
        let mut state = new_state();
        state.printer.device_outcome = PrintOutcome::Cancelled;
        state.dispatch(Message::FilePrint);
        assert!(state.dialogs.alerts.is_empty());
        assert!(state.view.status.is_empty());
    }

    #[test]
    fn test_print_failure_alerts() {
        let mut state = new_state();
        state.printer.fail = true;
        state.dispatch(Message::FilePrint);
        assert_eq!(state.dialogs.alerts, vec!["Error printing: Print error: printer offline"]);
    }

    #[test]
    fn test_preview_uses_current_format() {
        let mut state = new_state();
        state.dispatch(Message::FormatAlign(Alignment::Center));
        state.dispatch(Message::FilePrintPreview);
        assert_eq!(state.printer.previews[0].format.alignment, Alignment::Center);
    }

    #[test]
    fn test_export_pdf_appends_extension() {
        let dir = tempdir().unwrap();
        let mut state = new_state();
        state.view.type_text("pdf body");
        state.dialogs.save_paths.push_back(dir.path().join("report"));
        state.dispatch(Message::FileExportPdf);

        let expected = dir.path().join("report.pdf");
        assert_eq!(state.printer.jobs[0].target, PrintTarget::Pdf(expected.clone()));
        let bytes = fs::read(&expected).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert_eq!(state.view.status, "Exported to report.pdf");
        assert!(state.document.is_dirty(), "export does not count as saving");
    }

    #[test]
    fn test_export_pdf_cancelled_dialog() {
        let mut state = new_state();
        state.dispatch(Message::FileExportPdf);
        assert!(state.printer.jobs.is_empty());
    }

    #[test]
    fn test_export_pdf_failure_alerts() {
        let dir = tempdir().unwrap();
        let mut state = new_state();
        state.dialogs.save_paths.push_back(dir.path().join("nope").join("x.pdf"));
        state.dispatch(Message::FileExportPdf);
        assert_eq!(state.dialogs.alerts.len(), 1);
        assert!(state.dialogs.alerts[0].starts_with("Error exporting PDF"));
    }

    #[test]
    fn test_dialogs_start_in_last_directory() {
        let dir = tempdir().unwrap();
        let mut state = new_state();
        state.dialogs.save_paths.push_back(dir.path().join("a.txt"));
        state.file_save();
        assert_eq!(state.last_directory.as_deref(), Some(dir.path()));
    }

    #[test]
    fn test_about() {
        let mut state = new_state();
        state.dispatch(Message::ShowAbout);
        assert_eq!(state.dialogs.about_shown, 1);
    }
}
