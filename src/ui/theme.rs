use fltk::{
    enums::Color,
    frame::Frame,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::TextEditor,
    window::Window,
};

pub fn apply_theme(
    editor: &mut TextEditor,
    window: &mut Window,
    menu: &mut MenuBar,
    toolbar: &mut Flex,
    status: &mut Frame,
    is_dark: bool,
) {
    if is_dark {
        editor.set_color(Color::from_rgb(30, 30, 30));
        editor.set_text_color(Color::from_rgb(220, 220, 220));
        editor.set_cursor_color(Color::from_rgb(255, 255, 255));
        editor.set_selection_color(Color::from_rgb(70, 70, 100));
        window.set_color(Color::from_rgb(25, 25, 25));
        window.set_label_color(Color::from_rgb(220, 220, 220));
        menu.set_color(Color::from_rgb(35, 35, 35));
        menu.set_text_color(Color::from_rgb(220, 220, 220));
        menu.set_selection_color(Color::from_rgb(60, 60, 60)); // Hover color
        toolbar.set_color(Color::from_rgb(35, 35, 35));
        status.set_color(Color::from_rgb(35, 35, 35));
        status.set_label_color(Color::from_rgb(180, 180, 180));
    } else {
        editor.set_color(Color::White);
        editor.set_text_color(Color::Black);
        editor.set_cursor_color(Color::Black);
        editor.set_selection_color(Color::from_rgb(173, 216, 230));
        window.set_color(Color::from_rgb(240, 240, 240));
        window.set_label_color(Color::Black);
        menu.set_color(Color::from_rgb(240, 240, 240));
        menu.set_text_color(Color::Black);
        menu.set_selection_color(Color::from_rgb(200, 200, 200)); // Hover color
        toolbar.set_color(Color::from_rgb(240, 240, 240));
        status.set_color(Color::from_rgb(230, 230, 230));
        status.set_label_color(Color::from_rgb(60, 60, 60));
    }

    editor.redraw();
    window.redraw();
    menu.redraw();
    toolbar.redraw();
    status.redraw();
}
