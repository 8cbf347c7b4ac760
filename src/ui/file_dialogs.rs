use std::path::{Path, PathBuf};

use fltk::dialog::{FileDialogOptions, FileDialogType, NativeFileChooser};

use crate::app::services::file_io::FileFilter;

/// FLTK filter syntax: "Description\tPattern".
fn native_filter(filter: &FileFilter) -> String {
    format!("{}\t{}", filter.description, filter.pattern)
}

fn run_chooser(mut nfc: NativeFileChooser, filter: &FileFilter, start_dir: Option<&Path>) -> Option<PathBuf> {
    nfc.set_filter(&native_filter(filter));
    if let Some(dir) = start_dir {
        if let Err(e) = nfc.set_directory(&dir) {
            log::debug!("Could not preselect {}: {}", dir.display(), e);
        }
    }
    nfc.show(); // blocks until close
    let filename = nfc.filename();
    if filename.as_os_str().is_empty() {
        None
    } else {
        Some(filename)
    }
}

pub fn native_open_dialog(filter: &FileFilter, start_dir: Option<&Path>) -> Option<PathBuf> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseFile);
    nfc.set_title("Open File");
    run_chooser(nfc, filter, start_dir)
}

pub fn native_save_dialog(title: &str, filter: &FileFilter, start_dir: Option<&Path>) -> Option<PathBuf> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseSaveFile);
    nfc.set_title(title);
    nfc.set_option(FileDialogOptions::SaveAsConfirm);
    run_chooser(nfc, filter, start_dir)
}
