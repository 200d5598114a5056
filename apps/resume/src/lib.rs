//! JSON resume to PDF renderer.
//!
//! `context` loads and checks the input, `layout` turns it into rows on a
//! 12-column grid, `render` draws rows into a PDF, and `generation` ties the
//! three together.

pub mod config;
pub mod context;
pub mod errors;
pub mod generation;
pub mod layout;
pub mod models;
pub mod render;

pub use errors::ResumeError;
pub use generation::{
    build_document, generate, DocumentSource, FontMode, GenerateOptions, GenerationReport,
};
pub use models::ResumeDocument;
