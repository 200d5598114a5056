//! Fixed look of the resume: colours, sizes and row heights (mm).

use super::blocks::Rgb;

/// Accent colour for section headings and separator bars.
pub const THEME_COLOR: Rgb = Rgb::new(70, 130, 180);
/// Colour of hyperlinked text.
pub const LINK_COLOR: Rgb = Rgb::new(0, 0, 255);

pub const NAME_SIZE: f32 = 20.0;
pub const TITLE_SIZE: f32 = 14.0;
pub const HEADING_SIZE: f32 = 12.0;
pub const ENTRY_TITLE_SIZE: f32 = 11.0;
pub const BODY_SIZE: f32 = 10.0;
pub const BULLET_SIZE: f32 = 9.0;

pub const NAME_ROW: f32 = 15.0;
pub const CONTACT_ROW: f32 = 8.0;
pub const TITLE_ROW: f32 = 10.0;
pub const SUMMARY_ROW: f32 = 15.0;
pub const SPACER_ROW: f32 = 5.0;
pub const HEADING_ROW: f32 = 10.0;
pub const SEPARATOR_ROW: f32 = 0.25;
pub const SKILL_ROW: f32 = 5.0;
pub const ENTRY_TITLE_ROW: f32 = 8.0;
pub const TECH_ROW: f32 = 5.0;

pub const EXPERIENCE_BULLET_ROW: f32 = 5.0;
pub const PROJECT_BULLET_ROW: f32 = 6.0;
/// Added to a bullet row when its achievement is flagged as overflowing.
pub const OVERFLOW_EXTRA: f32 = 2.0;

pub const CONTACT_ICON_PERCENT: f32 = 60.0;
pub const HEADING_ICON_PERCENT: f32 = 80.0;

pub const BULLET_PREFIX: &str = "• ";
pub const TECH_PREFIX: &str = "Tech: ";
