//! Row/column blocks: the unit handed to a `DocumentBuilder`.
//!
//! A `Row` is a horizontal strip of fixed height (mm) split into weighted
//! columns on a 12-column grid. Each column holds styled text, an icon, or nothing.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    Normal,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    pub fn is_bold(self) -> bool {
        matches!(self, FontStyle::Bold | FontStyle::BoldItalic)
    }
}

/// Typeface variant within the family. `Light` is only used for the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontVariant {
    Regular,
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in points.
    pub size: f32,
    pub style: FontStyle,
    pub variant: FontVariant,
    pub align: Align,
    pub color: Rgb,
    /// Offset from the top of the cell, mm.
    pub top: f32,
    /// Offset from the left of the cell, mm.
    pub left: f32,
}

impl TextStyle {
    pub fn new(size: f32) -> Self {
        TextStyle {
            size,
            style: FontStyle::Normal,
            variant: FontVariant::Regular,
            align: Align::Left,
            color: Rgb::BLACK,
            top: 0.0,
            left: 0.0,
        }
    }

    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    pub fn bold(self) -> Self {
        self.with_style(FontStyle::Bold)
    }

    pub fn italic(self) -> Self {
        self.with_style(FontStyle::Italic)
    }

    pub fn light(mut self) -> Self {
        self.variant = FontVariant::Light;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn top(mut self, top: f32) -> Self {
        self.top = top;
        self
    }

    pub fn left(mut self, left: f32) -> Self {
        self.left = left;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextCell {
    pub text: String,
    pub style: TextStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hyperlink: Option<String>,
}

/// The fixed icon set shipped with the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    MapPin,
    Phone,
    Mail,
    Link,
    Linkedin,
    Github,
    Box,
    Building,
    Layers,
    GraduationCap,
}

impl Icon {
    pub const ALL: [Icon; 10] = [
        Icon::MapPin,
        Icon::Phone,
        Icon::Mail,
        Icon::Link,
        Icon::Linkedin,
        Icon::Github,
        Icon::Box,
        Icon::Building,
        Icon::Layers,
        Icon::GraduationCap,
    ];

    /// File name inside the icons directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Icon::MapPin => "map-pin.png",
            Icon::Phone => "phone.png",
            Icon::Mail => "mail.png",
            Icon::Link => "link.png",
            Icon::Linkedin => "linkedin.png",
            Icon::Github => "github.png",
            Icon::Box => "box.png",
            Icon::Building => "building-2.png",
            Icon::Layers => "layers.png",
            Icon::GraduationCap => "graduation-cap.png",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageCell {
    pub icon: Icon,
    /// Share of the available cell area the icon fills, 0–100.
    pub percent: f32,
    pub top: f32,
    pub left: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellContent {
    Text(TextCell),
    Image(ImageCell),
    Empty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Col {
    /// Relative width on the 12-column grid.
    pub width: u8,
    pub content: CellContent,
}

impl Col {
    pub fn text(width: u8, text: impl Into<String>, style: TextStyle) -> Self {
        Col {
            width,
            content: CellContent::Text(TextCell {
                text: text.into(),
                style,
                hyperlink: None,
            }),
        }
    }

    pub fn link(
        width: u8,
        text: impl Into<String>,
        style: TextStyle,
        url: impl Into<String>,
    ) -> Self {
        Col {
            width,
            content: CellContent::Text(TextCell {
                text: text.into(),
                style,
                hyperlink: Some(url.into()),
            }),
        }
    }

    pub fn image(width: u8, icon: Icon, percent: f32) -> Self {
        Col {
            width,
            content: CellContent::Image(ImageCell {
                icon,
                percent,
                top: 0.0,
                left: 0.0,
            }),
        }
    }

    pub fn empty(width: u8) -> Self {
        Col {
            width,
            content: CellContent::Empty,
        }
    }

    /// Shifts an image cell inside its column. No effect on other content.
    pub fn offset(mut self, top: f32, left: f32) -> Self {
        if let CellContent::Image(img) = &mut self.content {
            img.top = top;
            img.left = left;
        }
        self
    }

    pub fn as_text(&self) -> Option<&TextCell> {
        match &self.content {
            CellContent::Text(cell) => Some(cell),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Row height in mm.
    pub height: f32,
    pub cols: Vec<Col>,
    /// Fill colour painted across the full content width (separator bars).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Rgb>,
}

impl Row {
    pub fn new(height: f32, cols: Vec<Col>) -> Self {
        Row {
            height,
            cols,
            background: None,
        }
    }

    /// Single full-width text row.
    pub fn text(height: f32, text: impl Into<String>, style: TextStyle) -> Self {
        Row::new(height, vec![Col::text(12, text, style)])
    }

    pub fn spacer(height: f32) -> Self {
        Row::new(height, vec![Col::empty(12)])
    }

    pub fn separator(height: f32, color: Rgb) -> Self {
        Row {
            height,
            cols: vec![Col::empty(12)],
            background: Some(color),
        }
    }

    pub fn text_cells(&self) -> impl Iterator<Item = &TextCell> {
        self.cols.iter().filter_map(Col::as_text)
    }
}

/// Every row of a resume in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentPlan {
    pub rows: Vec<Row>,
}

impl DocumentPlan {
    pub fn total_height(&self) -> f32 {
        self.rows.iter().map(|r| r.height).sum()
    }

    pub fn hyperlinks(&self) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .flat_map(Row::text_cells)
            .filter_map(|c| c.hyperlink.as_deref())
    }
}
