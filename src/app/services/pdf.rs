//! Minimal PDF 1.4 writer for exporting a laid-out document.
//!
//! Output uses one of the standard Type1 fonts with WinAnsiEncoding, so no
//! font program has to be embedded. Characters WinAnsi cannot encode are
//! written as `?`.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::app::domain::format::TextFormat;
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::layout::PageLayout;

const CATALOG_ID: usize = 1;
const PAGES_ID: usize = 2;
const FONT_ID: usize = 3;
const INFO_ID: usize = 4;
const FIRST_PAGE_ID: usize = 5;

struct PdfWriter {
    out: Vec<u8>,
    offsets: Vec<(usize, usize)>,
}

impl PdfWriter {
    fn new() -> Self {
        let mut out = Vec::new();
        // Binary comment line marks the file as 8-bit for transfer tools.
        out.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");
        Self {
            out,
            offsets: Vec::new(),
        }
    }

    fn object(&mut self, id: usize, body: &[u8]) -> std::io::Result<()> {
        self.offsets.push((id, self.out.len()));
        write!(self.out, "{} 0 obj\n", id)?;
        self.out.extend_from_slice(body);
        self.out.extend_from_slice(b"\nendobj\n");
        Ok(())
    }

    fn stream(&mut self, id: usize, content: &[u8]) -> std::io::Result<()> {
        let mut body = format!("<< /Length {} >>\nstream\n", content.len()).into_bytes();
        body.extend_from_slice(content);
        body.extend_from_slice(b"\nendstream");
        self.object(id, &body)
    }

    fn finish(mut self) -> std::io::Result<Vec<u8>> {
        self.offsets.sort_by_key(|(id, _)| *id);
        let xref_start = self.out.len();
        let size = self.offsets.len() + 1;
        write!(self.out, "xref\n0 {}\n0000000000 65535 f \n", size)?;
        for (_, offset) in &self.offsets {
            write!(self.out, "{:010} 00000 n \n", offset)?;
        }
        write!(
            self.out,
            "trailer\n<< /Size {} /Root {} 0 R /Info {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            size, CATALOG_ID, INFO_ID, xref_start
        )?;
        Ok(self.out)
    }
}

/// WinAnsi code for `ch`, covering Latin-1 plus the 0x80-0x9F punctuation block.
fn winansi_byte(ch: char) -> Option<u8> {
    let byte = match ch {
        '\u{a0}'..='\u{ff}' => ch as u8,
        '\u{20ac}' => 0x80,
        '\u{201a}' => 0x82,
        '\u{0192}' => 0x83,
        '\u{201e}' => 0x84,
        '\u{2026}' => 0x85,
        '\u{2020}' => 0x86,
        '\u{2021}' => 0x87,
        '\u{02c6}' => 0x88,
        '\u{2030}' => 0x89,
        '\u{0160}' => 0x8a,
        '\u{2039}' => 0x8b,
        '\u{0152}' => 0x8c,
        '\u{017d}' => 0x8e,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201c}' => 0x93,
        '\u{201d}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{02dc}' => 0x98,
        '\u{2122}' => 0x99,
        '\u{0161}' => 0x9a,
        '\u{203a}' => 0x9b,
        '\u{0153}' => 0x9c,
        '\u{017e}' => 0x9e,
        '\u{0178}' => 0x9f,
        _ => return None,
    };
    Some(byte)
}

/// Escape a string for a PDF literal string, mapping to WinAnsi bytes.
fn pdf_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('(');
    for ch in text.chars() {
        match ch {
            '(' | ')' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            ' '..='~' => out.push(ch),
            _ => match winansi_byte(ch) {
                Some(byte) => out.push_str(&format!("\\{:03o}", byte)),
                None => out.push('?'),
            },
        }
    }
    out.push(')');
    out
}

fn page_content(layout: &PageLayout, format: &TextFormat, page_index: usize) -> Vec<u8> {
    let geometry = layout.geometry;
    let (r, g, b) = format.color.to_unit();
    let mut content = String::new();
    let mut underlines = String::new();

    content.push_str(&format!(
        "BT\n/F1 {:.2} Tf\n{:.3} {:.3} {:.3} rg\n",
        layout.font_size, r, g, b
    ));
    for (i, line) in layout.pages[page_index].lines.iter().enumerate() {
        if line.text.is_empty() {
            continue;
        }
        let x = geometry.margin + line.x;
        let y = geometry.height - layout.baseline_from_top(i);
        content.push_str(&format!(
            "{:.3} Tw\n1 0 0 1 {:.2} {:.2} Tm\n{} Tj\n",
            line.word_spacing,
            x,
            y,
            pdf_string(&line.text)
        ));
        if format.underline {
            let uy = y - layout.font_size * 0.12;
            underlines.push_str(&format!(
                "{:.2} {:.2} m {:.2} {:.2} l S\n",
                x,
                uy,
                x + line.width,
                uy
            ));
        }
    }
    content.push_str("ET\n");

    if !underlines.is_empty() {
        content.push_str(&format!(
            "{:.3} {:.3} {:.3} RG\n{:.2} w\n",
            r,
            g,
            b,
            (layout.font_size * 0.06).max(0.5)
        ));
        content.push_str(&underlines);
    }
    content.into_bytes()
}

/// Serialize `layout` as a PDF document.
pub fn render_pdf(layout: &PageLayout, format: &TextFormat, title: &str) -> Result<Vec<u8>> {
    let page_count = layout.page_count();
    if page_count == 0 {
        return Err(AppError::Pdf("document has no pages".to_string()));
    }
    let geometry = layout.geometry;
    let mut w = PdfWriter::new();

    w.object(
        CATALOG_ID,
        format!("<< /Type /Catalog /Pages {} 0 R >>", PAGES_ID).as_bytes(),
    )?;

    let kids: Vec<String> = (0..page_count)
        .map(|i| format!("{} 0 R", FIRST_PAGE_ID + 2 * i))
        .collect();
    w.object(
        PAGES_ID,
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} /MediaBox [0 0 {:.2} {:.2}] >>",
            kids.join(" "),
            page_count,
            geometry.width,
            geometry.height
        )
        .as_bytes(),
    )?;

    w.object(
        FONT_ID,
        format!(
            "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
            format.base14_font()
        )
        .as_bytes(),
    )?;

    w.object(
        INFO_ID,
        format!("<< /Title {} /Producer (InkPad) >>", pdf_string(title)).as_bytes(),
    )?;

    for i in 0..page_count {
        let page_id = FIRST_PAGE_ID + 2 * i;
        let content_id = page_id + 1;
        w.object(
            page_id,
            format!(
                "<< /Type /Page /Parent {} 0 R /Resources << /Font << /F1 {} 0 R >> >> /Contents {} 0 R >>",
                PAGES_ID, FONT_ID, content_id
            )
            .as_bytes(),
        )?;
        w.stream(content_id, &page_content(layout, format, i))?;
    }

    Ok(w.finish()?)
}

/// Render and write a PDF file.
pub fn export_pdf(path: &Path, layout: &PageLayout, format: &TextFormat, title: &str) -> Result<()> {
    let bytes = render_pdf(layout, format, title)?;
    fs::write(path, &bytes)?;
    log::info!(
        "Exported {} page(s) to {}",
        layout.page_count(),
        path.display()
    );
    Ok(())
}
