use std::path::{Path, PathBuf};

use fltk::dialog::{self, ColorMode};

use crate::app::domain::format::{FontSpec, Rgb};
use crate::app::ports::{Dialogs, SaveChoice};
use crate::app::services::file_io::FileFilter;

use super::dialogs::about::show_about_dialog;
use super::dialogs::font_picker::show_font_dialog;
use super::file_dialogs::{native_open_dialog, native_save_dialog};

/// `Dialogs` backed by FLTK's modal dialogs and the native file chooser.
#[derive(Default)]
pub struct FltkDialogs;

/// Button index from `choice2_default`; `None` means the dialog was closed.
fn save_choice(index: Option<i32>) -> SaveChoice {
    match index {
        Some(0) => SaveChoice::Save,
        Some(1) => SaveChoice::Discard,
        _ => SaveChoice::Cancel,
    }
}

impl Dialogs for FltkDialogs {
    fn open_path(&mut self, filter: &FileFilter, start_dir: Option<&Path>) -> Option<PathBuf> {
        native_open_dialog(filter, start_dir)
    }

    fn save_path(&mut self, title: &str, filter: &FileFilter, start_dir: Option<&Path>) -> Option<PathBuf> {
        native_save_dialog(title, filter, start_dir)
    }

    fn ask_save(&mut self, message: &str) -> SaveChoice {
        save_choice(dialog::choice2_default(message, "Save", "Discard", "Cancel"))
    }

    fn pick_font(&mut self, current: FontSpec) -> Option<FontSpec> {
        show_font_dialog(current)
    }

    fn pick_color(&mut self, _current: Rgb) -> Option<Rgb> {
        dialog::color_chooser("Text Color", ColorMode::Byte).map(|(r, g, b)| Rgb(r, g, b))
    }

    fn alert(&mut self, message: &str) {
        dialog::alert_default(message);
    }

    fn about(&mut self) {
        show_about_dialog();
    }
}
