//! Font configuration: the embedded DejaVu family, or the built-in Helvetica
//! set when any custom face fails to load.

use std::path::{Path, PathBuf};

use printpdf::font::{BuiltinFont, ParsedFont};
use tracing::{info, warn};

use crate::errors::ResumeError;
use crate::layout::{FontFamily, FontStyle, FontVariant};

/// One of the five faces a resume uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFace {
    Regular,
    Bold,
    Italic,
    BoldItalic,
    Light,
}

impl FontFace {
    pub const ALL: [FontFace; 5] = [
        FontFace::Regular,
        FontFace::Bold,
        FontFace::Italic,
        FontFace::BoldItalic,
        FontFace::Light,
    ];

    /// Light only applies to upright regular text.
    pub fn for_style(style: FontStyle, variant: FontVariant) -> Self {
        match (style, variant) {
            (FontStyle::Normal, FontVariant::Light) => FontFace::Light,
            (FontStyle::Normal, FontVariant::Regular) => FontFace::Regular,
            (FontStyle::Bold, _) => FontFace::Bold,
            (FontStyle::Italic, _) => FontFace::Italic,
            (FontStyle::BoldItalic, _) => FontFace::BoldItalic,
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            FontFace::Regular => "DejaVuSans.ttf",
            FontFace::Bold => "DejaVuSans-Bold.ttf",
            FontFace::Italic => "DejaVuSans-Oblique.ttf",
            FontFace::BoldItalic => "DejaVuSans-BoldOblique.ttf",
            FontFace::Light => "DejaVuSans-ExtraLight.ttf",
        }
    }

    /// Fixed resource name inside the PDF.
    pub fn resource_name(self) -> &'static str {
        self.file_name().trim_end_matches(".ttf")
    }

    /// Base-14 substitute. There is no light Helvetica, so light text uses
    /// the regular weight.
    pub fn builtin(self) -> BuiltinFont {
        match self {
            FontFace::Regular | FontFace::Light => BuiltinFont::Helvetica,
            FontFace::Bold => BuiltinFont::HelveticaBold,
            FontFace::Italic => BuiltinFont::HelveticaOblique,
            FontFace::BoldItalic => BuiltinFont::HelveticaBoldOblique,
        }
    }
}

/// Parsed custom faces, in `FontFace::ALL` order.
pub struct CustomFaces {
    faces: Vec<(FontFace, ParsedFont)>,
}

impl CustomFaces {
    pub fn iter(&self) -> impl Iterator<Item = (FontFace, &ParsedFont)> {
        self.faces.iter().map(|(face, font)| (*face, font))
    }
}

pub enum FontSet {
    Custom(Box<CustomFaces>),
    Builtin,
}

impl FontSet {
    /// Loads every face from `dir`. All five must parse; the first failure is
    /// returned and nothing is kept.
    pub fn load(dir: &Path) -> Result<Self, ResumeError> {
        let mut faces = Vec::with_capacity(FontFace::ALL.len());
        for face in FontFace::ALL {
            let path = dir.join(face.file_name());
            faces.push((face, parse_face(&path)?));
        }
        info!(dir = %dir.display(), "Loaded custom font family");
        Ok(FontSet::Custom(Box::new(CustomFaces { faces })))
    }

    /// Like `load`, but falls back to the built-in set with a warning.
    pub fn load_or_builtin(dir: &Path) -> Self {
        match Self::load(dir) {
            Ok(set) => set,
            Err(e) => {
                warn!(
                    code = e.code(),
                    error = %e,
                    "Custom fonts unavailable, falling back to built-in Helvetica"
                );
                FontSet::Builtin
            }
        }
    }

    /// Metric family used for wrapping and alignment.
    pub fn family(&self) -> FontFamily {
        match self {
            FontSet::Custom(_) => FontFamily::DejaVuSans,
            FontSet::Builtin => FontFamily::Helvetica,
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, FontSet::Builtin)
    }
}

fn parse_face(path: &Path) -> Result<ParsedFont, ResumeError> {
    let font_error = |reason: String| ResumeError::Font {
        path: PathBuf::from(path),
        reason,
    };
    let bytes = std::fs::read(path).map_err(|e| font_error(e.to_string()))?;
    let mut warnings = Vec::new();
    ParsedFont::from_bytes(&bytes, 0, &mut warnings)
        .ok_or_else(|| font_error("not a parsable TrueType/OpenType font".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_for_style() {
        assert_eq!(FontFace::for_style(FontStyle::Normal, FontVariant::Light), FontFace::Light);
        assert_eq!(FontFace::for_style(FontStyle::Bold, FontVariant::Light), FontFace::Bold);
        assert_eq!(
            FontFace::for_style(FontStyle::BoldItalic, FontVariant::Regular),
            FontFace::BoldItalic
        );
        assert_eq!(FontFace::for_style(FontStyle::Normal, FontVariant::Regular), FontFace::Regular);
    }

    #[test]
    fn test_missing_dir_is_font_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FontSet::load(&dir.path().join("nope")).err().unwrap();
        match err {
            ResumeError::Font { path, .. } => assert!(path.ends_with("DejaVuSans.ttf")),
            other => panic!("expected font error, got {other:?}"),
        }
    }

    #[test]
    fn test_garbage_font_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        for face in FontFace::ALL {
            std::fs::write(dir.path().join(face.file_name()), b"not a font").unwrap();
        }
        assert!(matches!(FontSet::load(dir.path()), Err(ResumeError::Font { .. })));
    }

    #[test]
    fn test_shipped_family_loads() {
        let dir = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/fonts"));
        let set = FontSet::load(dir).unwrap();
        assert_eq!(set.family(), FontFamily::DejaVuSans);
        let FontSet::Custom(custom) = set else {
            panic!("expected custom fonts");
        };
        let faces: Vec<FontFace> = custom.iter().map(|(face, _)| face).collect();
        assert_eq!(faces, FontFace::ALL);
    }

    #[test]
    fn test_resource_names_are_distinct() {
        let mut names: Vec<&str> = FontFace::ALL.iter().map(|f| f.resource_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), FontFace::ALL.len());
        assert_eq!(FontFace::Bold.resource_name(), "DejaVuSans-Bold");
    }

    #[test]
    fn test_fallback_uses_helvetica_metrics() {
        let set = FontSet::load_or_builtin(Path::new("/definitely/not/here"));
        assert!(set.is_builtin());
        assert_eq!(set.family(), FontFamily::Helvetica);
    }
}
