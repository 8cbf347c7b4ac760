use fltk::{
    button::Button,
    enums::Align,
    frame::Frame,
    menu::Choice,
    misc::Spinner,
    prelude::*,
    window::Window,
};
use std::cell::RefCell;
use std::rc::Rc;

use crate::app::domain::format::{FontFamily, FontSpec};

/// Show the font dialog. Returns `None` when the user cancels.
pub fn show_font_dialog(current: FontSpec) -> Option<FontSpec> {
    let mut dialog = Window::default()
        .with_size(300, 150)
        .with_label("Font")
        .center_screen();
    dialog.make_modal(true);

    Frame::default()
        .with_pos(15, 15)
        .with_size(70, 25)
        .with_label("Family:")
        .with_align(Align::Left | Align::Inside);
    let mut family_choice = Choice::default().with_pos(90, 15).with_size(195, 25);
    for family in FontFamily::all() {
        family_choice.add_choice(family.display_name());
    }
    family_choice.set_value(family_index(current.family));

    Frame::default()
        .with_pos(15, 55)
        .with_size(70, 25)
        .with_label("Size:")
        .with_align(Align::Left | Align::Inside);
    let mut size_spinner = Spinner::default().with_pos(90, 55).with_size(80, 25);
    size_spinner.set_range(FontSpec::MIN_SIZE as f64, FontSpec::MAX_SIZE as f64);
    size_spinner.set_step(1.0);
    size_spinner.set_value(current.size as f64);

    let mut ok_btn = Button::default().with_pos(110, 105).with_size(80, 30).with_label("OK");
    let mut cancel_btn = Button::default().with_pos(205, 105).with_size(80, 30).with_label("Cancel");

    dialog.end();
    dialog.show();

    let result: Rc<RefCell<Option<FontSpec>>> = Rc::new(RefCell::new(None));

    let result_ok = result.clone();
    let dialog_ok = dialog.clone();
    ok_btn.set_callback(move |_| {
        let family = index_to_family(family_choice.value()).unwrap_or(current.family);
        let size = size_spinner.value().round() as u32;
        *result_ok.borrow_mut() = Some(FontSpec::new(family, size));
        dialog_ok.clone().hide();
    });

    let dialog_cancel = dialog.clone();
    cancel_btn.set_callback(move |_| {
        dialog_cancel.clone().hide();
    });

    super::run_dialog(&dialog);

    *result.borrow()
}

fn family_index(family: FontFamily) -> i32 {
    FontFamily::all()
        .iter()
        .position(|f| *f == family)
        .map(|i| i as i32)
        .unwrap_or(0)
}

fn index_to_family(index: i32) -> Option<FontFamily> {
    if index < 0 {
        return None;
    }
    FontFamily::all().get(index as usize).copied()
}
