//! FLTK front end: widgets, dialogs and the implementations of the
//! application's GUI seams.

pub mod dialogs;
pub mod editor_view;
pub mod file_dialogs;
pub mod fltk_dialogs;
pub mod main_window;
pub mod menu;
pub mod printing;
pub mod theme;
pub mod toolbar;
