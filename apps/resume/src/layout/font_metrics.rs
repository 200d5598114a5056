//! Static font-metric tables for the two resume font families.
//!
//! Character widths are in em units (relative to font size), taken from the
//! published advance widths of each face. Italic faces share the upright
//! widths; the light face is measured with the regular table. The tables are
//! an approximation good to a fraction of a millimetre per line, which is all
//! wrapping and right-alignment need.
//! All tables cover ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32.

use serde::{Deserialize, Serialize};

use super::blocks::FontStyle;

/// Millimetres per typographic point.
pub const PT_TO_MM: f32 = 25.4 / 72.0;

// ────────────────────────────────────────────────────────────────────────────
// Font family enum
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFamily {
    /// Built-in PDF base font, used when custom fonts fail to load.
    Helvetica,
    /// Custom embedded family loaded from the fonts directory.
    DejaVuSans,
}

// ────────────────────────────────────────────────────────────────────────────
// Page configuration
// ────────────────────────────────────────────────────────────────────────────

/// Page geometry in millimetres. Rows are laid out on a 12-column grid
/// spanning the width between the left and right margins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub width_mm: f32,
    pub height_mm: f32,
    pub margin_left_mm: f32,
    pub margin_top_mm: f32,
    pub margin_right_mm: f32,
    pub margin_bottom_mm: f32,
    pub grid_columns: u8,
    /// Baseline-to-baseline distance as a multiple of the font size.
    pub line_spacing: f32,
}

/// A4 portrait with 10 mm left/top/right margins and a 20 mm bottom margin
/// that leaves room for the page number.
pub fn default_page_config() -> PageConfig {
    PageConfig {
        width_mm: 210.0,
        height_mm: 297.0,
        margin_left_mm: 10.0,
        margin_top_mm: 10.0,
        margin_right_mm: 10.0,
        margin_bottom_mm: 20.0,
        grid_columns: 12,
        line_spacing: 1.15,
    }
}

impl PageConfig {
    pub fn content_width_mm(&self) -> f32 {
        self.width_mm - self.margin_left_mm - self.margin_right_mm
    }

    /// Lowest y (from the top of the page) a row may reach.
    pub fn content_bottom_mm(&self) -> f32 {
        self.height_mm - self.margin_bottom_mm
    }

    /// Width of a column of `weight` grid units. When the weights of a row add
    /// up to more than the grid, they are scaled down to fit.
    pub fn column_width_mm(&self, weight: u8, row_total: u32) -> f32 {
        let grid = row_total.max(self.grid_columns as u32) as f32;
        self.content_width_mm() * weight as f32 / grid
    }

    pub fn line_height_mm(&self, size_pt: f32) -> f32 {
        size_pt * PT_TO_MM * self.line_spacing
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for one weight of a font family.
///
/// `widths[i]` = width of ASCII character `(i + 32)`, covering 0x20 (space) through 0x7E (~).
pub struct FontMetricTable {
    pub family: FontFamily,
    pub bold: bool,
    widths: [f32; 95],
    /// Fallback width for non-ASCII characters (codepoints > 0x7E).
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    ///
    /// Non-ASCII characters fall back to `average_char_width`.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Rendered width in millimetres at `size_pt`.
    pub fn width_mm(&self, s: &str, size_pt: f32) -> f32 {
        self.measure_str(s) * size_pt * PT_TO_MM
    }

    pub fn space_width_mm(&self, size_pt: f32) -> f32 {
        self.space_width * size_pt * PT_TO_MM
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

/// Helvetica / Helvetica-Oblique.
static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    family: FontFamily::Helvetica,
    bold: false,
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0     1     2     3     4     5     6     7     8     9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :     ;     <     =     >     ?     @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [     \     ]     ^     _     `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {     |     }     ~
        0.334, 0.260, 0.334, 0.584,
    ],
    average_char_width: 0.58,
    space_width: 0.278,
};

/// Helvetica-Bold / Helvetica-BoldOblique.
static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    family: FontFamily::Helvetica,
    bold: true,
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.278, 0.333, 0.474, 0.556, 0.556, 0.889, 0.722, 0.238, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0     1     2     3     4     5     6     7     8     9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :     ;     <     =     >     ?     @
        0.333, 0.333, 0.584, 0.584, 0.584, 0.611, 0.975,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.722, 0.722, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.556, 0.722, 0.611, 0.833,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [     \     ]     ^     _     `
        0.333, 0.278, 0.333, 0.584, 0.556, 0.333,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.556, 0.611, 0.556, 0.611, 0.556, 0.333, 0.611, 0.611, 0.278, 0.278, 0.556, 0.278, 0.889,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.611, 0.611, 0.611, 0.611, 0.389, 0.556, 0.333, 0.611, 0.556, 0.778, 0.556, 0.556, 0.500,
        // {     |     }     ~
        0.389, 0.280, 0.389, 0.584,
    ],
    average_char_width: 0.61,
    space_width: 0.278,
};

/// DejaVu Sans / Oblique / ExtraLight. Roughly 6% wider than Helvetica.
static DEJAVU_SANS_TABLE: FontMetricTable = FontMetricTable {
    family: FontFamily::DejaVuSans,
    bold: false,
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.318, 0.401, 0.460, 0.838, 0.636, 0.950, 0.780, 0.275, 0.390, 0.390, 0.500, 0.838, 0.318, 0.361, 0.318, 0.337,
        // 0     1     2     3     4     5     6     7     8     9
        0.636, 0.636, 0.636, 0.636, 0.636, 0.636, 0.636, 0.636, 0.636, 0.636,
        // :     ;     <     =     >     ?     @
        0.337, 0.337, 0.838, 0.838, 0.838, 0.531, 1.000,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.684, 0.686, 0.698, 0.770, 0.632, 0.575, 0.775, 0.752, 0.295, 0.295, 0.656, 0.557, 0.863,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.748, 0.787, 0.603, 0.787, 0.695, 0.635, 0.611, 0.732, 0.684, 0.989, 0.685, 0.611, 0.685,
        // [     \     ]     ^     _     `
        0.390, 0.337, 0.390, 0.838, 0.500, 0.500,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.613, 0.635, 0.550, 0.635, 0.615, 0.352, 0.635, 0.634, 0.278, 0.278, 0.579, 0.278, 0.974,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.634, 0.612, 0.635, 0.635, 0.411, 0.521, 0.392, 0.634, 0.592, 0.818, 0.592, 0.592, 0.525,
        // {     |     }     ~
        0.636, 0.337, 0.636, 0.838,
    ],
    average_char_width: 0.62,
    space_width: 0.318,
};

/// DejaVu Sans Bold / BoldOblique.
static DEJAVU_SANS_BOLD_TABLE: FontMetricTable = FontMetricTable {
    family: FontFamily::DejaVuSans,
    bold: true,
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.348, 0.456, 0.521, 0.838, 0.696, 1.002, 0.872, 0.306, 0.457, 0.457, 0.523, 0.838, 0.380, 0.415, 0.380, 0.365,
        // 0     1     2     3     4     5     6     7     8     9
        0.696, 0.696, 0.696, 0.696, 0.696, 0.696, 0.696, 0.696, 0.696, 0.696,
        // :     ;     <     =     >     ?     @
        0.400, 0.400, 0.838, 0.838, 0.838, 0.580, 1.000,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.774, 0.762, 0.734, 0.830, 0.683, 0.683, 0.821, 0.837, 0.372, 0.372, 0.775, 0.637, 0.995,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.837, 0.850, 0.733, 0.850, 0.770, 0.720, 0.682, 0.812, 0.774, 1.103, 0.771, 0.724, 0.725,
        // [     \     ]     ^     _     `
        0.457, 0.365, 0.457, 0.838, 0.500, 0.500,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.675, 0.716, 0.593, 0.716, 0.678, 0.435, 0.716, 0.712, 0.343, 0.343, 0.665, 0.343, 1.042,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.712, 0.687, 0.716, 0.716, 0.493, 0.595, 0.478, 0.712, 0.652, 0.924, 0.645, 0.652, 0.582,
        // {     |     }     ~
        0.712, 0.365, 0.712, 0.838,
    ],
    average_char_width: 0.70,
    space_width: 0.348,
};

/// Returns the static metric table for a family and style.
pub fn get_metrics(family: FontFamily, style: FontStyle) -> &'static FontMetricTable {
    match (family, style.is_bold()) {
        (FontFamily::Helvetica, false) => &HELVETICA_TABLE,
        (FontFamily::Helvetica, true) => &HELVETICA_BOLD_TABLE,
        (FontFamily::DejaVuSans, false) => &DEJAVU_SANS_TABLE,
        (FontFamily::DejaVuSans, true) => &DEJAVU_SANS_BOLD_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
