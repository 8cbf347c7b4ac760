//! Page layout shared by printing, print preview and PDF export.
//!
//! Units are PostScript points. Text is measured with the font family's
//! average advance, which is exact for Courier and close enough for the
//! proportional faces to place wrapped and aligned lines on a page.

use crate::app::domain::format::{Alignment, TextFormat};

const TAB_WIDTH: usize = 4;
const LINE_SPACING: f32 = 1.2;
/// Absorbs f32 rounding when a line fits the text width exactly.
const FIT_EPSILON: f32 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl PageGeometry {
    /// A4 portrait with 2 cm margins.
    pub const A4: PageGeometry = PageGeometry {
        width: 595.0,
        height: 842.0,
        margin: 56.7,
    };

    pub fn text_width(&self) -> f32 {
        (self.width - 2.0 * self.margin).max(1.0)
    }

    pub fn text_height(&self) -> f32 {
        (self.height - 2.0 * self.margin).max(1.0)
    }
}

/// A single output line, positioned relative to the page's left margin.
///
/// Leading indentation is carried by `x`; `text` starts at the first word.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidLine {
    pub text: String,
    pub x: f32,
    /// Extra space added to every ASCII space (justified lines only).
    pub word_spacing: f32,
    /// Rendered width including justification stretch.
    pub width: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub lines: Vec<LaidLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub geometry: PageGeometry,
    pub font_size: f32,
    pub line_height: f32,
    pub pages: Vec<Page>,
}

impl PageLayout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Baseline of line `index` measured down from the top edge of the page.
    pub fn baseline_from_top(&self, index: usize) -> f32 {
        self.geometry.margin + self.font_size + index as f32 * self.line_height
    }
}

struct Measure {
    advance: f32,
}

impl Measure {
    fn width(&self, s: &str) -> f32 {
        s.chars().count() as f32 * self.advance
    }
}

/// Lay `text` out into pages with the given format.
///
/// An empty text still produces one (empty) page.
pub fn paginate(text: &str, format: &TextFormat, geometry: PageGeometry) -> PageLayout {
    let font_size = format.font.size as f32;
    let line_height = font_size * LINE_SPACING;
    let measure = Measure {
        advance: font_size * format.font.family.average_advance(),
    };
    let max_width = geometry.text_width();

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let paragraph = paragraph.strip_suffix('\r').unwrap_or(paragraph);
        layout_paragraph(paragraph, format.alignment, max_width, &measure, &mut lines);
    }
    // A trailing newline ends the last paragraph; it does not start a new one.
    if text.ends_with('\n') {
        lines.pop();
    }

    let per_page = (((geometry.text_height() + FIT_EPSILON) / line_height).floor() as usize).max(1);
    let mut pages: Vec<Page> = lines
        .chunks(per_page)
        .map(|chunk| Page {
            lines: chunk.to_vec(),
        })
        .collect();
    if pages.is_empty() {
        pages.push(Page::default());
    }

    PageLayout {
        geometry,
        font_size,
        line_height,
        pages,
    }
}

/// Expand tabs to the next tab stop, counting columns from the start of the paragraph.
fn expand_tabs(paragraph: &str) -> String {
    let mut out = String::with_capacity(paragraph.len());
    let mut column = 0;
    for ch in paragraph.chars() {
        if ch == '\t' {
            let pad = TAB_WIDTH - column % TAB_WIDTH;
            out.extend(std::iter::repeat_n(' ', pad));
            column += pad;
        } else {
            out.push(ch);
            column += 1;
        }
    }
    out
}

/// Split into (preceding spaces, word) pairs. Trailing spaces are dropped.
fn words_with_separators(body: &str) -> Vec<(&str, &str)> {
    let mut pairs = Vec::new();
    let mut rest = body;
    loop {
        let word_start = rest.len() - rest.trim_start_matches(' ').len();
        let (separator, tail) = rest.split_at(word_start);
        if tail.is_empty() {
            break;
        }
        let word_end = tail.find(' ').unwrap_or(tail.len());
        let (word, tail) = tail.split_at(word_end);
        pairs.push((separator, word));
        rest = tail;
    }
    pairs
}

fn layout_paragraph(
    paragraph: &str,
    alignment: Alignment,
    max_width: f32,
    measure: &Measure,
    out: &mut Vec<LaidLine>,
) {
    let expanded = expand_tabs(paragraph);
    let body = expanded.trim_start_matches(' ');
    // At least one character must still fit after the indent.
    let max_indent = ((max_width + FIT_EPSILON) / measure.advance).floor().max(1.0) as usize - 1;
    let indent = (expanded.len() - body.len()).min(max_indent);
    let indent_width = indent as f32 * measure.advance;

    let mut rows: Vec<String> = Vec::new();
    let mut current = String::new();
    let limit = |rows: &Vec<String>| if rows.is_empty() { max_width - indent_width } else { max_width };

    for (separator, word) in words_with_separators(body) {
        if !current.is_empty() {
            let candidate = format!("{}{}{}", current, separator, word);
            if measure.width(&candidate) <= limit(&rows) + FIT_EPSILON {
                current = candidate;
                continue;
            }
            rows.push(std::mem::take(&mut current));
        }
        // Words wider than the line are broken at character boundaries.
        let mut rest = word;
        while measure.width(rest) > limit(&rows) + FIT_EPSILON {
            let fit = (((limit(&rows) + FIT_EPSILON) / measure.advance).floor() as usize).max(1);
            let split_at = rest.char_indices().nth(fit).map_or(rest.len(), |(i, _)| i);
            rows.push(rest[..split_at].to_string());
            rest = &rest[split_at..];
        }
        current = rest.to_string();
    }
    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }

    let last = rows.len() - 1;
    for (i, row) in rows.into_iter().enumerate() {
        let lead = if i == 0 { indent_width } else { 0.0 };
        out.push(position_line(row, lead, alignment, i == last, max_width, measure));
    }
}

/// Place a row whose first `lead` points are indentation.
///
/// The indent is folded into `x`, so `text` never starts with a space and
/// every space in it receives `word_spacing`.
fn position_line(
    text: String,
    lead: f32,
    alignment: Alignment,
    ends_paragraph: bool,
    max_width: f32,
    measure: &Measure,
) -> LaidLine {
    let natural = measure.width(&text);
    let slack = (max_width - lead - natural).max(0.0);
    let gaps = text.matches(' ').count();
    let (x, word_spacing) = match alignment {
        Alignment::Left => (lead, 0.0),
        Alignment::Right => (lead + slack, 0.0),
        Alignment::Center => (lead + slack / 2.0, 0.0),
        Alignment::Justify if ends_paragraph || gaps == 0 => (lead, 0.0),
        Alignment::Justify => (lead, slack / gaps as f32),
    };
    LaidLine {
        width: natural + word_spacing * gaps as f32,
        text,
        x,
        word_spacing,
    }
}
