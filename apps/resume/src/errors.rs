use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading, laying out, rendering or saving a resume.
///
/// Every variant aborts the run except `Font`, which the assembler recovers
/// from by switching to the built-in font configuration.
#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("Failed to read resume file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse resume JSON '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to load font '{path}': {reason}")]
    Font { path: PathBuf, reason: String },

    #[error("Render error: {0}")]
    Render(String),

    #[error("Failed to save document to '{path}': {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ResumeError {
    /// Short machine-readable code, used in log fields.
    pub fn code(&self) -> &'static str {
        match self {
            ResumeError::Io { .. } => "IO_ERROR",
            ResumeError::Parse { .. } => "PARSE_ERROR",
            ResumeError::Font { .. } => "FONT_ERROR",
            ResumeError::Render(_) => "RENDER_ERROR",
            ResumeError::Save { .. } => "SAVE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct_per_variant() {
        let io = ResumeError::Io {
            path: PathBuf::from("resume.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let render = ResumeError::Render("icon missing".to_string());
        assert_eq!(io.code(), "IO_ERROR");
        assert_eq!(render.code(), "RENDER_ERROR");
    }

    #[test]
    fn test_display_includes_path() {
        let err = ResumeError::Save {
            path: PathBuf::from("/readonly/resume.pdf"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/readonly/resume.pdf"), "got: {msg}");
        assert!(msg.contains("denied"), "got: {msg}");
    }
}
