use super::format::Alignment;

/// All messages that can be sent through the FLTK channel.
/// Each menu, toolbar and window callback sends one of these; `AppState::dispatch` handles them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // File
    FileNew,
    FileOpen,
    FileSave,
    FileSaveAs,
    FilePrint,
    FilePrintPreview,
    FileExportPdf,
    FileQuit,
    WindowClose,

    // Edit
    EditUndo,
    EditRedo,
    EditCut,
    EditCopy,
    EditPaste,

    // Format
    FormatBold,
    FormatItalic,
    FormatUnderline,
    FormatAlign(Alignment),
    FormatFont,
    FormatColor,

    // Help
    ShowAbout,

    // Editor content changed (typing, undo, paste); refreshes the title
    BufferModified,
}
