use fltk::{app, prelude::*};

use ink_pad::app::infrastructure::logging::init_logging;
use ink_pad::app::infrastructure::platform::resolve_dark_mode;
use ink_pad::app::{AppSettings, AppState, Flow, Message, ModifiedFlag};
use ink_pad::ui::editor_view::FltkEditorView;
use ink_pad::ui::fltk_dialogs::FltkDialogs;
use ink_pad::ui::main_window::build_main_window;
use ink_pad::ui::menu::build_menu;
use ink_pad::ui::printing::FltkPrinter;
use ink_pad::ui::theme::apply_theme;

fn main() {
    init_logging();

    let app = app::App::default();
    let settings = AppSettings::load();
    let dark_mode = resolve_dark_mode(settings.theme_mode);
    log::info!("Starting InkPad {} (dark mode: {})", env!("CARGO_PKG_VERSION"), dark_mode);

    let (sender, receiver) = app::channel::<Message>();

    let mut w = build_main_window(&settings, &sender);
    build_menu(&mut w.menu, &sender);
    apply_theme(&mut w.editor, &mut w.wind, &mut w.menu, &mut w.toolbar, &mut w.status, dark_mode);

    let modified = ModifiedFlag::new();
    let view = FltkEditorView::new(
        w.editor.clone(),
        w.wind.clone(),
        w.status.clone(),
        modified.clone(),
        sender,
        dark_mode,
    );
    let mut state = AppState::new(view, FltkDialogs, FltkPrinter, modified, &settings);

    w.wind.show();
    w.editor.take_focus().ok();

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            if state.dispatch(msg) == Flow::Exit {
                log::info!("Exiting");
                break;
            }
        }
    }
}
