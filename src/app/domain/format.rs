use serde::Deserialize;

/// Paragraph alignment applied to the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Right,
    Center,
    Justify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum FontFamily {
    Helvetica,
    Courier,
    Times,
}

impl FontFamily {
    pub fn all() -> &'static [FontFamily] {
        &[Self::Helvetica, Self::Courier, Self::Times]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::Courier => "Courier",
            Self::Times => "Times",
        }
    }

    /// Average glyph advance as a fraction of the font size.
    /// Courier is exact; the proportional faces use their typical average.
    pub fn average_advance(&self) -> f32 {
        match self {
            Self::Helvetica => 0.52,
            Self::Courier => 0.6,
            Self::Times => 0.47,
        }
    }

    /// Name of the matching standard Type1 font.
    pub fn base14_name(&self, bold: bool, italic: bool) -> &'static str {
        match (self, bold, italic) {
            (Self::Helvetica, false, false) => "Helvetica",
            (Self::Helvetica, true, false) => "Helvetica-Bold",
            (Self::Helvetica, false, true) => "Helvetica-Oblique",
            (Self::Helvetica, true, true) => "Helvetica-BoldOblique",
            (Self::Courier, false, false) => "Courier",
            (Self::Courier, true, false) => "Courier-Bold",
            (Self::Courier, false, true) => "Courier-Oblique",
            (Self::Courier, true, true) => "Courier-BoldOblique",
            (Self::Times, false, false) => "Times-Roman",
            (Self::Times, true, false) => "Times-Bold",
            (Self::Times, false, true) => "Times-Italic",
            (Self::Times, true, true) => "Times-BoldItalic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSpec {
    pub family: FontFamily,
    pub size: u32,
}

impl FontSpec {
    pub const MIN_SIZE: u32 = 6;
    pub const MAX_SIZE: u32 = 72;

    pub fn new(family: FontFamily, size: u32) -> Self {
        Self {
            family,
            size: size.clamp(Self::MIN_SIZE, Self::MAX_SIZE),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// Components scaled to 0.0..=1.0 for PDF color operators.
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        )
    }
}

/// Editor-wide character and paragraph formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextFormat {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub alignment: Alignment,
    pub font: FontSpec,
    pub color: Rgb,
}

impl TextFormat {
    pub fn with_font(font: FontSpec) -> Self {
        Self {
            font,
            ..Self::default()
        }
    }

    pub fn base14_font(&self) -> &'static str {
        self.font.family.base14_name(self.bold, self.italic)
    }
}

impl Default for TextFormat {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            alignment: Alignment::Left,
            font: FontSpec::new(FontFamily::Helvetica, 14),
            color: Rgb::BLACK,
        }
    }
}
