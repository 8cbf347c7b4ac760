use fltk::{
    app::{self, Sender},
    enums::{Align, Event, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    menu::MenuBar,
    prelude::*,
    text::{TextEditor, WrapMode},
    window::Window,
};

use crate::app::domain::document::UNTITLED;
use crate::app::domain::messages::Message;
use crate::app::domain::settings::AppSettings;

use super::toolbar::{TOOLBAR_HEIGHT, build_toolbar};

const STATUS_HEIGHT: i32 = 22;

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub toolbar: Flex,
    pub editor: TextEditor,
    pub status: Frame,
}

pub fn build_main_window(settings: &AppSettings, sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 800, 600, None);
    wind.set_label(&format!("{} - InkPad", UNTITLED));
    wind.set_xclass("InkPad");

    let mut flex = Flex::new(0, 0, 800, 600, None);
    flex.set_type(FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    let mut toolbar = build_toolbar(sender);
    flex.fixed(&toolbar, TOOLBAR_HEIGHT);
    if !settings.show_toolbar {
        toolbar.hide();
        flex.fixed(&toolbar, 0);
    }

    let mut editor = TextEditor::new(0, 0, 0, 0, "");
    if settings.word_wrap_enabled {
        editor.wrap_mode(WrapMode::AtBounds, 0);
    }

    let mut status = Frame::default();
    status.set_frame(FrameType::FlatBox);
    status.set_align(Align::Left | Align::Inside);
    status.set_label_size(12);
    flex.fixed(&status, STATUS_HEIGHT);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    // Closing the window goes through the unsaved-changes guard like File/Quit.
    let s = *sender;
    wind.set_callback(move |_| {
        if app::event() == Event::Close {
            s.send(Message::WindowClose);
        }
    });

    MainWidgets {
        wind,
        menu,
        toolbar,
        editor,
        status,
    }
}
