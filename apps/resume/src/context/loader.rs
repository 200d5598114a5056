use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::ResumeError;
use crate::models::ResumeDocument;

/// Reads and parses a resume JSON file. The whole file must parse; there are no
/// partial results.
pub fn load_resume(path: &Path) -> Result<ResumeDocument, ResumeError> {
    info!("Loading resume from {}", path.display());

    let raw = std::fs::read_to_string(path).map_err(|source| ResumeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(bytes = raw.len(), "Resume file read");

    parse_resume_at(&raw, path)
}

/// Parses resume JSON held in memory.
pub fn parse_resume(json: &str) -> Result<ResumeDocument, ResumeError> {
    parse_resume_at(json, &PathBuf::from("<memory>"))
}

fn parse_resume_at(json: &str, path: &Path) -> Result<ResumeDocument, ResumeError> {
    let doc: ResumeDocument = serde_json::from_str(json).map_err(|source| ResumeError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        skills = doc.skills.len(),
        experience = doc.experience.len(),
        projects = doc.projects.len(),
        education = doc.education.len(),
        "Resume parsed"
    );
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL: &str = r#"{
        "name": "Sam Lee",
        "title": "Engineer",
        "contact": {
            "location": "Oslo",
            "phone": "123",
            "email": "sam@example.com",
            "website": {"text": "sam.dev", "url": "https://sam.dev"},
            "linkedin": {"text": "in/sam", "url": ""},
            "github": {"text": "gh/sam", "url": "https://github.com/sam"}
        }
    }"#;

    #[test]
    fn test_parse_minimal_document_defaults_lists() {
        let doc = parse_resume(MINIMAL).unwrap();
        assert_eq!(doc.name, "Sam Lee");
        assert!(doc.summary.is_empty());
        assert!(doc.skills.is_empty());
        assert!(doc.experience.is_empty());
        assert!(doc.projects.is_empty());
        assert!(doc.education.is_empty());
        assert_eq!(doc.contact.linkedin.link_target(), None);
    }

    #[test]
    fn test_parse_preserves_order() {
        let json = r#"{
            "name": "A", "title": "B",
            "contact": {"location": "", "phone": "", "email": "",
                "website": {"text": ""}, "linkedin": {"text": ""}, "github": {"text": ""}},
            "skills": [
                {"category": "Zeta", "items": "z"},
                {"category": "Alpha", "items": "a"},
                {"category": "Mid", "items": "m"}
            ]
        }"#;
        let doc = parse_resume(json).unwrap();
        let categories: Vec<&str> = doc.skills.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(categories, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_missing_required_field_is_parse_error() {
        let err = parse_resume(r#"{"title": "Engineer"}"#).unwrap_err();
        assert!(matches!(err, ResumeError::Parse { .. }), "got {err:?}");
    }

    #[test]
    fn test_wrong_structure_is_parse_error() {
        let json = MINIMAL.replace(r#""title": "Engineer""#, r#""title": ["Engineer"]"#);
        let err = parse_resume(&json).unwrap_err();
        assert!(matches!(err, ResumeError::Parse { .. }), "got {err:?}");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_resume(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ResumeError::Io { .. }), "got {err:?}");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();
        let doc = load_resume(file.path()).unwrap();
        assert_eq!(doc.title, "Engineer");
    }
}
