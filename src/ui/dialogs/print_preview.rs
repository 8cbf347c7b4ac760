use fltk::{
    button::Button,
    draw,
    enums::{Color, FrameType},
    frame::Frame,
    prelude::*,
    window::Window,
};
use std::cell::Cell;
use std::rc::Rc;

use crate::app::domain::format::TextFormat;
use crate::app::services::layout::PageLayout;
use crate::ui::printing::draw_page;

const PAGE_WIDTH_PX: i32 = 420;
const BUTTON_ROW: i32 = 45;

fn page_label(index: usize, count: usize) -> String {
    format!("Page {} of {}", index + 1, count)
}

/// Show the paginated document in a modal window.
pub fn show_print_preview(title: &str, layout: PageLayout, format: TextFormat) {
    let scale = PAGE_WIDTH_PX as f32 / layout.geometry.width;
    let page_height_px = (layout.geometry.height * scale).round() as i32;
    let win_w = PAGE_WIDTH_PX + 40;
    let win_h = page_height_px + 40 + BUTTON_ROW;

    let mut dialog = Window::default()
        .with_size(win_w, win_h)
        .with_label(&format!("Print Preview - {}", title))
        .center_screen();
    dialog.make_modal(true);
    dialog.set_color(Color::from_rgb(128, 128, 128));

    let count = layout.page_count();
    let layout = Rc::new(layout);
    let current = Rc::new(Cell::new(0usize));

    let mut page = Frame::new(20, 20, PAGE_WIDTH_PX, page_height_px, None);
    page.set_frame(FrameType::FlatBox);
    page.set_color(Color::White);
    {
        let layout = layout.clone();
        let current = current.clone();
        page.draw(move |f| {
            draw::draw_rect_fill(f.x(), f.y(), f.w(), f.h(), Color::White);
            draw_page(&layout, current.get(), &format, f.x(), f.y(), scale);
        });
    }

    let row_y = win_h - BUTTON_ROW + 5;
    let mut prev_btn = Button::new(20, row_y, 80, 30, "Prev");
    let mut indicator = Frame::new(110, row_y, win_w - 310, 30, None);
    indicator.set_label(&page_label(0, count));
    indicator.set_label_color(Color::White);
    let mut next_btn = Button::new(win_w - 190, row_y, 80, 30, "Next");
    let mut close_btn = Button::new(win_w - 100, row_y, 80, 30, "Close");

    dialog.end();

    let mut turn_page = {
        let current = current.clone();
        let page = page.clone();
        let indicator = indicator.clone();
        move |delta: isize| {
            let next = current.get() as isize + delta;
            if next < 0 || next as usize >= count {
                return;
            }
            current.set(next as usize);
            indicator.clone().set_label(&page_label(next as usize, count));
            page.clone().redraw();
        }
    };
    let mut turn_back = turn_page.clone();
    prev_btn.set_callback(move |_| turn_back(-1));
    next_btn.set_callback(move |_| turn_page(1));

    let mut dialog_close = dialog.clone();
    close_btn.set_callback(move |_| dialog_close.hide());

    dialog.show();
    super::run_dialog(&dialog);
}
