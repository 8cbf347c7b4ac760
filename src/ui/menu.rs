use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::actions::{ACTIONS, Accel, Action};
use crate::app::domain::messages::Message;

fn shortcut(accel: Option<Accel>) -> Shortcut {
    let Some(accel) = accel else {
        return Shortcut::None;
    };
    let mut modifiers = Shortcut::None;
    if accel.ctrl {
        modifiers = modifiers | Shortcut::Ctrl;
    }
    if accel.shift {
        modifiers = modifiers | Shortcut::Shift;
    }
    modifiers | accel.key
}

fn top_menu(action: &Action) -> &str {
    action.menu_path.split('/').next().unwrap_or_default()
}

/// FLTK draws a divider *below* an item, so the flag goes on the entry
/// preceding one that starts a new group within the same menu.
fn divider_after(actions: &[Action], index: usize) -> bool {
    match (actions.get(index), actions.get(index + 1)) {
        (Some(current), Some(next)) => next.divider_before && top_menu(current) == top_menu(next),
        _ => false,
    }
}

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    for (i, action) in ACTIONS.iter().enumerate() {
        let flag = if divider_after(ACTIONS, i) {
            MenuFlag::MenuDivider
        } else {
            MenuFlag::Normal
        };
        let s = *sender;
        let message = action.message;
        menu.add(action.menu_path, shortcut(action.accel), flag, move |_| s.send(message));
    }
}
