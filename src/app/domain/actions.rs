use super::format::Alignment;
use super::messages::Message;

/// Keyboard accelerator, independent of the GUI toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Accel {
    pub ctrl: bool,
    pub shift: bool,
    pub key: char,
}

impl Accel {
    const fn ctrl(key: char) -> Option<Accel> {
        Some(Accel { ctrl: true, shift: false, key })
    }

    const fn ctrl_shift(key: char) -> Option<Accel> {
        Some(Accel { ctrl: true, shift: true, key })
    }

    pub fn label(&self) -> String {
        let mut out = String::new();
        if self.ctrl {
            out.push_str("Ctrl+");
        }
        if self.shift {
            out.push_str("Shift+");
        }
        out.push(self.key.to_ascii_uppercase());
        out
    }
}

/// One row of the action table: what a menu entry sends and how it is reached.
#[derive(Debug, Clone, Copy)]
pub struct Action {
    pub message: Message,
    pub menu_path: &'static str,
    pub accel: Option<Accel>,
    /// Toolbar button caption, if the action appears on the toolbar.
    pub toolbar: Option<&'static str>,
    /// Start a new menu/toolbar group before this entry.
    pub divider_before: bool,
}

const fn action(
    message: Message,
    menu_path: &'static str,
    accel: Option<Accel>,
    toolbar: Option<&'static str>,
    divider_before: bool,
) -> Action {
    Action { message, menu_path, accel, toolbar, divider_before }
}

pub const ACTIONS: &[Action] = &[
    // File
    action(Message::FileNew, "File/New", Accel::ctrl('n'), Some("New"), false),
    action(Message::FileOpen, "File/Open...", Accel::ctrl('o'), Some("Open"), false),
    action(Message::FileSave, "File/Save", Accel::ctrl('s'), Some("Save"), false),
    action(Message::FileSaveAs, "File/Save As...", Accel::ctrl_shift('s'), None, false),
    action(Message::FilePrint, "File/Print...", Accel::ctrl('p'), Some("Print"), true),
    action(Message::FilePrintPreview, "File/Print Preview", Accel::ctrl_shift('p'), Some("Preview"), false),
    action(Message::FileExportPdf, "File/Export PDF...", Accel::ctrl('e'), Some("PDF"), false),
    action(Message::FileQuit, "File/Quit", Accel::ctrl('q'), None, true),
    // Edit
    action(Message::EditUndo, "Edit/Undo", Accel::ctrl('z'), Some("Undo"), true),
    action(Message::EditRedo, "Edit/Redo", Accel::ctrl('y'), Some("Redo"), false),
    action(Message::EditCut, "Edit/Cut", Accel::ctrl('x'), Some("Cut"), true),
    action(Message::EditCopy, "Edit/Copy", Accel::ctrl('c'), Some("Copy"), false),
    action(Message::EditPaste, "Edit/Paste", Accel::ctrl('v'), Some("Paste"), false),
    // Format
    action(Message::FormatBold, "Format/Bold", Accel::ctrl('b'), Some("B"), true),
    action(Message::FormatItalic, "Format/Italic", Accel::ctrl('i'), Some("I"), false),
    action(Message::FormatUnderline, "Format/Underline", Accel::ctrl('u'), Some("U"), false),
    action(Message::FormatAlign(Alignment::Left), "Format/Align Left", Accel::ctrl('l'), None, true),
    action(Message::FormatAlign(Alignment::Right), "Format/Align Right", Accel::ctrl('r'), None, false),
    action(Message::FormatAlign(Alignment::Center), "Format/Center", Accel::ctrl('k'), None, false),
    action(Message::FormatAlign(Alignment::Justify), "Format/Justify", Accel::ctrl('j'), None, false),
    action(Message::FormatFont, "Format/Font...", None, None, true),
    action(Message::FormatColor, "Format/Color...", None, None, false),
    // Help
    action(Message::ShowAbout, "Help/About InkPad", None, None, false),
];

pub fn toolbar_actions() -> impl Iterator<Item = &'static Action> {
    ACTIONS.iter().filter(|a| a.toolbar.is_some())
}
