// Layout: turns a ResumeDocument into rows of weighted columns.
// Pure and deterministic; nothing here touches the filesystem or the PDF library.

pub mod blocks;
pub mod font_metrics;
pub mod overflow;
pub mod sections;
pub mod theme;
pub mod wrap;

// Re-export the public API consumed by the renderer and the assembler.
pub use blocks::{
    Align, CellContent, Col, DocumentPlan, FontStyle, FontVariant, Icon, ImageCell, Rgb, Row,
    TextCell, TextStyle,
};
pub use font_metrics::{default_page_config, get_metrics, FontFamily, PageConfig};
pub use overflow::{apply_estimated_overflow, audit_overflow, OverflowFinding, OverflowVerdict};
pub use sections::{layout_resume, Section};
