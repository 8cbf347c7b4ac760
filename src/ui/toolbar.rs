use fltk::{
    app::Sender,
    button::Button,
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
};

use crate::app::domain::actions::toolbar_actions;
use crate::app::domain::messages::Message;

pub const TOOLBAR_HEIGHT: i32 = 30;

/// Row of buttons mirroring the menu actions that carry a toolbar caption.
pub fn build_toolbar(sender: &Sender<Message>) -> Flex {
    let mut row = Flex::default();
    row.set_type(FlexType::Row);
    row.set_margin(2);
    row.set_spacing(2);

    for action in toolbar_actions() {
        let Some(caption) = action.toolbar else {
            continue;
        };
        if action.divider_before {
            let gap = Frame::default();
            row.fixed(&gap, 8);
        }
        let mut btn = Button::default().with_label(caption);
        let width = if caption.len() <= 1 { 28 } else { 58 };
        row.fixed(&btn, width);

        let tip = match action.accel {
            Some(accel) => format!("{} ({})", tooltip_name(action.menu_path), accel.label()),
            None => tooltip_name(action.menu_path).to_string(),
        };
        btn.set_tooltip(&tip);

        let s = *sender;
        let message = action.message;
        btn.set_callback(move |_| s.send(message));
    }

    // Filler keeps the buttons packed to the left.
    Frame::default();
    row.end();
    row
}

/// "File/Open..." -> "Open"
fn tooltip_name(menu_path: &str) -> &str {
    menu_path
        .rsplit('/')
        .next()
        .unwrap_or(menu_path)
        .trim_end_matches("...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tooltip_name() {
        assert_eq!(tooltip_name("File/Open..."), "Open");
        assert_eq!(tooltip_name("Format/Bold"), "Bold");
        assert_eq!(tooltip_name("Quit"), "Quit");
    }
}
