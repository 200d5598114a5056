//! Document assembly: input resolution, font fallback, row emission, output.
//!
//! Flow: resolve document → validate (warnings only) → load fonts (fall back
//!       to Helvetica) → optional overflow estimate → build rows → save.
//!
//! The output file is touched only after the whole document has been built,
//! so a failed run leaves no partial PDF behind.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{info, warn};

use crate::config::Config;
use crate::context::{load_resume, validate_resume};
use crate::errors::ResumeError;
use crate::layout::{apply_estimated_overflow, default_page_config, layout_resume};
use crate::models::ResumeDocument;
use crate::render::{DocumentBuilder, FontSet, IconStore, PdfBuilder};

// ────────────────────────────────────────────────────────────────────────────
// Options and report
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum DocumentSource {
    File(PathBuf),
    /// The built-in sample resume.
    Sample,
}

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub source: DocumentSource,
    pub output: PathBuf,
    pub fonts_dir: PathBuf,
    pub icons_dir: PathBuf,
    pub page_numbers: bool,
    /// Replace every achievement's overflow flag with the metric estimate.
    pub auto_overflow: bool,
}

impl GenerateOptions {
    pub fn from_config(config: &Config) -> Self {
        GenerateOptions {
            source: DocumentSource::File(config.input.clone()),
            output: config.output.clone(),
            fonts_dir: config.fonts_dir.clone(),
            icons_dir: config.icons_dir.clone(),
            page_numbers: config.page_numbers,
            auto_overflow: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontMode {
    Custom,
    Builtin,
}

#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub output: PathBuf,
    pub pages: usize,
    pub bytes: usize,
    pub elapsed: Duration,
    pub font_mode: FontMode,
    /// Number of content warnings raised by validation.
    pub warnings: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

pub fn resolve_document(source: &DocumentSource) -> Result<ResumeDocument, ResumeError> {
    match source {
        DocumentSource::File(path) => load_resume(path),
        DocumentSource::Sample => {
            info!("Using built-in sample resume");
            Ok(ResumeDocument::sample())
        }
    }
}

/// Emits every row of `doc` into `builder`, in document order.
pub fn build_document<B: DocumentBuilder>(
    doc: &ResumeDocument,
    builder: &mut B,
) -> Result<(), ResumeError> {
    let plan = layout_resume(doc);
    info!("Emitting {} rows ({:.1} mm)", plan.rows.len(), plan.total_height());
    for row in &plan.rows {
        builder.add_row(row)?;
    }
    Ok(())
}

/// Generates the PDF described by `options` and writes it to `options.output`.
pub fn generate(options: &GenerateOptions) -> Result<GenerationReport, ResumeError> {
    let started = Instant::now();

    // Step 1: Resolve and check the document
    let mut doc = resolve_document(&options.source)?;
    let warnings = validate_resume(&doc);
    for w in &warnings {
        warn!(field = %w.field, "{}", w.reason);
    }

    // Step 2: Fonts (the only recovered failure)
    let fonts = FontSet::load_or_builtin(&options.fonts_dir);
    let font_mode = if fonts.is_builtin() {
        FontMode::Builtin
    } else {
        FontMode::Custom
    };
    let page = default_page_config();

    if options.auto_overflow {
        doc = apply_estimated_overflow(&doc, fonts.family(), &page);
        info!("Overflow flags replaced by {:?} estimate", fonts.family());
    }

    // Step 3: Build
    let title = if doc.name.trim().is_empty() {
        "Resume".to_string()
    } else {
        format!("{} - Resume", doc.name.trim())
    };
    let mut builder = PdfBuilder::new(
        &title,
        page,
        fonts,
        IconStore::new(&options.icons_dir),
        options.page_numbers,
    );
    build_document(&doc, &mut builder)?;
    let pages = builder.page_count();
    let bytes = builder.finish()?;

    // Step 4: Persist
    std::fs::write(&options.output, &bytes).map_err(|source| ResumeError::Save {
        path: options.output.clone(),
        source,
    })?;

    let report = GenerationReport {
        output: options.output.clone(),
        pages,
        bytes: bytes.len(),
        elapsed: started.elapsed(),
        font_mode,
        warnings: warnings.len(),
    };
    info!(
        "Wrote {} ({} pages, {} bytes, {:?} fonts, {} warnings)",
        report.output.display(),
        report.pages,
        report.bytes,
        report.font_mode,
        report.warnings
    );
    Ok(report)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::layout::Row;
    use crate::render::RecordingBuilder;

    const ICONS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icons-png");
    const FONTS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/fonts");

    fn options(dir: &Path, source: DocumentSource) -> GenerateOptions {
        GenerateOptions {
            source,
            output: dir.join("out.pdf"),
            fonts_dir: dir.join("no-fonts"),
            icons_dir: PathBuf::from(ICONS),
            page_numbers: true,
            auto_overflow: false,
        }
    }

    #[test]
    fn test_build_document_matches_layout() {
        let doc = ResumeDocument::sample();
        let mut recorder = RecordingBuilder::new();
        build_document(&doc, &mut recorder).unwrap();
        assert_eq!(recorder.into_plan(), layout_resume(&doc));
    }

    #[test]
    fn test_build_document_stops_at_first_builder_error() {
        struct FailAfter(usize);
        impl DocumentBuilder for FailAfter {
            fn add_row(&mut self, _row: &Row) -> Result<(), ResumeError> {
                if self.0 == 0 {
                    return Err(ResumeError::Render("full".to_string()));
                }
                self.0 -= 1;
                Ok(())
            }
            fn finish(self) -> Result<Vec<u8>, ResumeError> {
                Ok(Vec::new())
            }
        }
        let mut builder = FailAfter(3);
        let err = build_document(&ResumeDocument::sample(), &mut builder).unwrap_err();
        assert!(matches!(err, ResumeError::Render(_)));
        assert_eq!(builder.0, 0);
    }

    #[test]
    fn test_sample_generates_with_font_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let report = generate(&options(dir.path(), DocumentSource::Sample)).unwrap();
        assert_eq!(report.font_mode, FontMode::Builtin);
        assert!(report.pages >= 1);
        let bytes = std::fs::read(&report.output).unwrap();
        assert_eq!(bytes.len(), report.bytes);
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_shipped_fonts_are_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let mut opts = options(dir.path(), DocumentSource::Sample);
        opts.fonts_dir = PathBuf::from(FONTS);
        let report = generate(&opts).unwrap();
        assert_eq!(report.font_mode, FontMode::Custom);
        let bytes = std::fs::read(&report.output).unwrap();
        assert!(lopdf::Document::load_mem(&bytes).is_ok());
    }

    #[test]
    fn test_report_counts_content_warnings() {
        let dir = tempfile::tempdir().unwrap();
        let mut doc = ResumeDocument::sample();
        doc.title = "  ".to_string();
        let expected = validate_resume(&doc).len();
        assert!(expected >= 1);
        let input = dir.path().join("resume.json");
        std::fs::write(&input, serde_json::to_string(&doc).unwrap()).unwrap();

        let report = generate(&options(dir.path(), DocumentSource::File(input))).unwrap();
        assert_eq!(report.warnings, expected);
    }

    #[test]
    fn test_malformed_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("resume.json");
        std::fs::write(&input, "{ not json").unwrap();
        let opts = options(dir.path(), DocumentSource::File(input));

        let err = generate(&opts).unwrap_err();
        assert!(matches!(err, ResumeError::Parse { .. }), "{err}");
        assert!(!opts.output.exists());
    }

    #[test]
    fn test_missing_input_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let opts = options(dir.path(), DocumentSource::File(dir.path().join("absent.json")));
        assert!(matches!(generate(&opts), Err(ResumeError::Io { .. })));
    }

    #[test]
    fn test_missing_icons_abort_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let mut opts = options(dir.path(), DocumentSource::Sample);
        opts.icons_dir = dir.path().join("no-icons");

        let err = generate(&opts).unwrap_err();
        assert!(matches!(err, ResumeError::Render(_)), "{err}");
        assert!(!opts.output.exists());
    }

    #[test]
    fn test_unwritable_output_is_save_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut opts = options(dir.path(), DocumentSource::Sample);
        opts.output = dir.path().join("missing-dir").join("out.pdf");
        assert!(matches!(generate(&opts), Err(ResumeError::Save { .. })));
    }

    #[test]
    fn test_empty_sections_still_generate() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("resume.json");
        std::fs::write(
            &input,
            r#"{"name":"A","title":"B","contact":{"location":"L","phone":"P","email":"E",
                "website":{"text":"w"},"linkedin":{"text":"l"},"github":{"text":"g"}}}"#,
        )
        .unwrap();
        let report = generate(&options(dir.path(), DocumentSource::File(input))).unwrap();
        assert_eq!(report.pages, 1);
    }
}
