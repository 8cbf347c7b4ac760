//! Printing and print preview on top of FLTK's drawing API.

use std::ffi::{c_char, c_int, c_void};

use fltk::{draw, enums::Color};

use crate::app::domain::format::TextFormat;
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::ports::{PrintBackend, PrintJob, PrintOutcome, PrintTarget};
use crate::app::services::layout::{LaidLine, PageGeometry, PageLayout};

use super::dialogs::print_preview::show_print_preview;
use super::editor_view::fltk_font;

/// Draw page `index` of `layout` with its top-left corner at (`x0`, `y0`).
///
/// Layout units are points; `scale` converts them to device units.
pub fn draw_page(layout: &PageLayout, index: usize, format: &TextFormat, x0: i32, y0: i32, scale: f32) {
    let Some(page) = layout.pages.get(index) else {
        return;
    };
    let geometry = layout.geometry;
    let advance = layout.font_size * format.font.family.average_advance();
    let font_px = ((layout.font_size * scale).round() as i32).max(1);
    let to_x = |pt: f32| x0 + (pt * scale).round() as i32;
    let to_y = |pt: f32| y0 + (pt * scale).round() as i32;

    draw::set_font(fltk_font(format), font_px);
    draw::set_draw_color(Color::from_rgb(format.color.0, format.color.1, format.color.2));

    for (i, line) in page.lines.iter().enumerate() {
        if line.text.is_empty() {
            continue;
        }
        let left = geometry.margin + line.x;
        let baseline = layout.baseline_from_top(i);

        if line.word_spacing > 0.0 {
            draw_justified(line, advance, |pt, word| {
                draw::draw_text(word, to_x(left + pt), to_y(baseline));
            });
        } else {
            draw::draw_text(&line.text, to_x(left), to_y(baseline));
        }

        if format.underline {
            let uy = to_y(baseline + layout.font_size * 0.12);
            draw::draw_line(to_x(left), uy, to_x(left + line.width), uy);
        }
    }
}

/// Place each word of a justified line, stretching every space by the line's word spacing.
fn draw_justified<F: FnMut(f32, &str)>(line: &LaidLine, advance: f32, mut emit: F) {
    let mut chars_before = 0usize;
    let mut spaces_before = 0usize;
    for word in line.text.split(' ') {
        if !word.is_empty() {
            let x = chars_before as f32 * advance + spaces_before as f32 * line.word_spacing;
            emit(x, word);
        }
        chars_before += word.chars().count() + 1;
        spaces_before += 1;
    }
}

// `fltk::printer::Printer::begin_job` folds every failure into one error,
// so the job is driven through cfltk directly to tell a cancel from a fault.
unsafe extern "C" {
    fn Fl_Printer_new() -> *mut c_void;
    fn Fl_Printer_delete(printer: *mut c_void);
    fn Fl_Printer_begin_job(
        printer: *mut c_void,
        pagecount: c_int,
        frompage: *mut c_int,
        topage: *mut c_int,
        perr_message: *mut *mut c_char,
    ) -> c_int;
    fn Fl_Printer_begin_page(printer: *mut c_void) -> c_int;
    fn Fl_Printer_printable_rect(printer: *mut c_void, w: *mut c_int, h: *mut c_int) -> c_int;
    fn Fl_Printer_end_page(printer: *mut c_void) -> c_int;
    fn Fl_Printer_end_job(printer: *mut c_void);
}

/// `Fl_Printer::begin_job` status: 0 starts the job, 1 means the user
/// cancelled the dialog, anything else is a printer error.
fn begin_job_status(code: i32) -> Result<Option<PrintOutcome>> {
    match code {
        0 => Ok(None),
        1 => Ok(Some(PrintOutcome::Cancelled)),
        n => Err(AppError::Print(format!("printer unavailable (error {})", n))),
    }
}

/// Owned `Fl_Printer`, deleted on drop.
struct NativePrinter {
    inner: *mut c_void,
}

impl NativePrinter {
    fn new() -> Result<Self> {
        // SAFETY: Fl_Printer_new has no preconditions; a null result is rejected below.
        let inner = unsafe { Fl_Printer_new() };
        if inner.is_null() {
            return Err(AppError::Print("cannot create printer".to_string()));
        }
        Ok(Self { inner })
    }

    fn begin_job(&mut self, pages: usize) -> i32 {
        let mut from = 0;
        let mut to = 0;
        // SAFETY: `inner` is a live Fl_Printer; the out-pointers are locals and a
        // null error-message pointer tells FLTK not to allocate one.
        unsafe {
            Fl_Printer_begin_job(
                self.inner,
                pages as c_int,
                &mut from,
                &mut to,
                std::ptr::null_mut(),
            )
        }
    }

    fn begin_page(&mut self) -> i32 {
        // SAFETY: `inner` is a live Fl_Printer with a started job.
        unsafe { Fl_Printer_begin_page(self.inner) }
    }

    fn printable_rect(&self) -> (i32, i32) {
        let mut w = 0;
        let mut h = 0;
        // SAFETY: `inner` is a live Fl_Printer; w and h are locals.
        unsafe {
            Fl_Printer_printable_rect(self.inner, &mut w, &mut h);
        }
        (w, h)
    }

    fn end_page(&mut self) -> i32 {
        // SAFETY: `inner` is a live Fl_Printer with an open page.
        unsafe { Fl_Printer_end_page(self.inner) }
    }

    fn end_job(&mut self) {
        // SAFETY: `inner` is a live Fl_Printer with a started job.
        unsafe { Fl_Printer_end_job(self.inner) }
    }
}

impl Drop for NativePrinter {
    fn drop(&mut self) {
        // SAFETY: `inner` came from Fl_Printer_new and is deleted exactly once.
        unsafe { Fl_Printer_delete(self.inner) }
    }
}

/// `PrintBackend` driving the native print dialog.
#[derive(Default)]
pub struct FltkPrinter;

impl FltkPrinter {
    fn print_device(&self, job: &PrintJob) -> Result<PrintOutcome> {
        let layout = job.layout(PageGeometry::A4);
        let mut printer = NativePrinter::new()?;

        if let Some(outcome) = begin_job_status(printer.begin_job(layout.page_count()))? {
            log::info!("Print dialog cancelled");
            return Ok(outcome);
        }

        for index in 0..layout.page_count() {
            if printer.begin_page() != 0 {
                printer.end_job();
                return Err(AppError::Print(format!("cannot start page {}", index + 1)));
            }
            let (width, height) = printer.printable_rect();
            let scale = (width as f32 / layout.geometry.width).min(height as f32 / layout.geometry.height);
            draw_page(&layout, index, &job.format, 0, 0, scale);
            if printer.end_page() != 0 {
                printer.end_job();
                return Err(AppError::Print(format!("cannot finish page {}", index + 1)));
            }
        }
        printer.end_job();

        log::info!("Printed {} page(s) of {}", layout.page_count(), job.title);
        Ok(PrintOutcome::Printed)
    }
}

impl PrintBackend for FltkPrinter {
    fn print(&mut self, job: &PrintJob) -> Result<PrintOutcome> {
        match &job.target {
            PrintTarget::Device => self.print_device(job),
            PrintTarget::Pdf(path) => {
                job.export_pdf(path)?;
                Ok(PrintOutcome::Printed)
            }
        }
    }

    fn preview(&mut self, job: &PrintJob) {
        let layout = job.layout(PageGeometry::A4);
        show_print_preview(&job.title, layout, job.format);
    }
}
