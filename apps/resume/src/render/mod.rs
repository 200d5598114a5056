//! Document builders: anything that accepts rows and produces a savable artifact.

pub mod fonts;
pub mod icons;
pub mod links;
pub mod pagination;
pub mod pdf;
pub mod recorder;

use crate::errors::ResumeError;
use crate::layout::Row;

pub use fonts::{FontFace, FontSet};
pub use icons::IconStore;
pub use pdf::PdfBuilder;
pub use recorder::RecordingBuilder;

/// The external document-layout capability the resume is drawn into.
///
/// Rows arrive in document order; `finish` assembles the pages and returns
/// the bytes to persist.
pub trait DocumentBuilder {
    fn add_row(&mut self, row: &Row) -> Result<(), ResumeError>;

    fn finish(self) -> Result<Vec<u8>, ResumeError>
    where
        Self: Sized;
}
