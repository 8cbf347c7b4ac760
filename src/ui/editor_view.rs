use fltk::{
    app::Sender,
    enums::{Color, Font},
    frame::Frame,
    prelude::*,
    text::{StyleTableEntryExt, TextAttr, TextBuffer, TextEditor},
    window::Window,
};

use crate::app::domain::document::ModifiedFlag;
use crate::app::domain::format::{FontFamily, Rgb, TextFormat};
use crate::app::domain::messages::Message;
use crate::app::ports::EditorView;

/// Style character used for every byte of the style buffer.
const BASE_STYLE: &str = "A";

/// Map the editor-wide format to one of FLTK's built-in faces.
pub fn fltk_font(format: &TextFormat) -> Font {
    match (format.font.family, format.bold, format.italic) {
        (FontFamily::Helvetica, false, false) => Font::Helvetica,
        (FontFamily::Helvetica, true, false) => Font::HelveticaBold,
        (FontFamily::Helvetica, false, true) => Font::HelveticaItalic,
        (FontFamily::Helvetica, true, true) => Font::HelveticaBoldItalic,
        (FontFamily::Courier, false, false) => Font::Courier,
        (FontFamily::Courier, true, false) => Font::CourierBold,
        (FontFamily::Courier, false, true) => Font::CourierItalic,
        (FontFamily::Courier, true, true) => Font::CourierBoldItalic,
        (FontFamily::Times, false, false) => Font::Times,
        (FontFamily::Times, true, false) => Font::TimesBold,
        (FontFamily::Times, false, true) => Font::TimesItalic,
        (FontFamily::Times, true, true) => Font::TimesBoldItalic,
    }
}

/// The FLTK text editor plus the window title and status line.
pub struct FltkEditorView {
    editor: TextEditor,
    buffer: TextBuffer,
    style_buffer: TextBuffer,
    window: Window,
    status: Frame,
    dark_mode: bool,
}

impl FltkEditorView {
    /// Wire a fresh buffer into `editor`. Every insertion or deletion raises
    /// `modified` and notifies the event loop.
    pub fn new(
        mut editor: TextEditor,
        window: Window,
        status: Frame,
        modified: ModifiedFlag,
        sender: Sender<Message>,
        dark_mode: bool,
    ) -> Self {
        let mut buffer = TextBuffer::default();
        let style_buffer = TextBuffer::default();

        let mut style_buf = style_buffer.clone();
        buffer.add_modify_callback(move |pos, inserted, deleted, _restyled, _deleted_text| {
            if inserted > 0 || deleted > 0 {
                // Keep the style buffer byte-aligned with the text buffer.
                if deleted > 0 {
                    style_buf.remove(pos, pos + deleted);
                }
                if inserted > 0 {
                    style_buf.insert(pos, &BASE_STYLE.repeat(inserted as usize));
                }
                modified.set(true);
                sender.send(Message::BufferModified);
            }
        });

        editor.set_buffer(buffer.clone());

        Self {
            editor,
            buffer,
            style_buffer,
            window,
            status,
            dark_mode,
        }
    }

    fn screen_color(&self, color: Rgb) -> Color {
        // Default black text would vanish on the dark background.
        if self.dark_mode && color == Rgb::BLACK {
            return Color::from_rgb(220, 220, 220);
        }
        Color::from_rgb(color.0, color.1, color.2)
    }
}

impl EditorView for FltkEditorView {
    fn text(&self) -> String {
        self.buffer.text()
    }

    fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
        self.editor.set_insert_position(0);
        self.editor.show_insert_position();
    }

    fn undo(&mut self) {
        self.editor.undo().ok();
    }

    fn redo(&mut self) {
        self.editor.redo().ok();
    }

    fn cut(&mut self) {
        self.editor.cut();
    }

    fn copy(&mut self) {
        self.editor.copy();
    }

    fn paste(&mut self) {
        self.editor.paste();
    }

    /// Alignment has no on-screen counterpart in `Fl_Text_Display`; it only
    /// shapes print, preview and PDF output.
    fn apply_format(&mut self, format: &TextFormat) {
        let font = fltk_font(format);
        let size = format.font.size as i32;
        let color = self.screen_color(format.color);

        self.editor.set_text_font(font);
        self.editor.set_text_size(size);
        self.editor.set_text_color(color);

        let entry = StyleTableEntryExt {
            color,
            attr: if format.underline { TextAttr::Underline } else { TextAttr::None },
            font,
            size,
            bgcolor: self.editor.color(),
        };
        self.editor
            .set_highlight_data_ext(self.style_buffer.clone(), vec![entry]);
        self.editor.redraw();
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_label(title);
    }

    fn set_status(&mut self, message: &str) {
        self.status.set_label(message);
        self.status.redraw();
    }
}
