//! Content checks that never abort a run. Each finding is a `ContentWarning`
//! which the assembler logs and `resume check` prints.

use serde::{Deserialize, Serialize};

use crate::models::{Achievement, ResumeDocument};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentWarning {
    /// Dotted path to the offending field, e.g. `experience[1].url`.
    pub field: String,
    pub reason: String,
}

const LINK_SCHEMES: &[&str] = &["http://", "https://", "mailto:"];

/// Runs all content checks and returns the findings in document order.
pub fn validate_resume(doc: &ResumeDocument) -> Vec<ContentWarning> {
    let mut warnings = Vec::new();

    if doc.name.trim().is_empty() {
        warnings.push(warning("name", "Name is empty; the header row will be blank"));
    }
    if doc.title.trim().is_empty() {
        warnings.push(warning("title", "Title is empty"));
    }

    let links = [
        ("contact.website", &doc.contact.website),
        ("contact.linkedin", &doc.contact.linkedin),
        ("contact.github", &doc.contact.github),
    ];
    for (field, link) in links {
        if let Some(url) = link.link_target() {
            if link.text.trim().is_empty() {
                warnings.push(warning(field, "Link has a URL but no display text"));
            }
            check_scheme(&mut warnings, &format!("{field}.url"), url);
        }
    }

    for (i, exp) in doc.experience.iter().enumerate() {
        let base = format!("experience[{i}]");
        if let Some(url) = exp.link_target() {
            check_scheme(&mut warnings, &format!("{base}.url"), url);
        }
        check_entry_body(&mut warnings, &base, &exp.achievements, &exp.tech);
    }

    for (i, proj) in doc.projects.iter().enumerate() {
        let base = format!("projects[{i}]");
        if let Some(url) = proj.link_target() {
            check_scheme(&mut warnings, &format!("{base}.url"), url);
        }
        check_entry_body(&mut warnings, &base, &proj.achievements, &proj.tech);
    }

    for (i, edu) in doc.education.iter().enumerate() {
        if let Some(url) = edu.link_target() {
            check_scheme(&mut warnings, &format!("education[{i}].url"), url);
        }
    }

    warnings
}

fn check_scheme(warnings: &mut Vec<ContentWarning>, field: &str, url: &str) {
    let lower = url.to_ascii_lowercase();
    if !LINK_SCHEMES.iter().any(|scheme| lower.starts_with(scheme)) {
        let message =
            format!("URL '{url}' has no http(s):// or mailto: scheme; PDF viewers may not open it");
        warnings.push(warning(field, &message));
    }
}

fn check_entry_body(
    warnings: &mut Vec<ContentWarning>,
    base: &str,
    achievements: &[Achievement],
    tech: &str,
) {
    if achievements.is_empty() {
        warnings.push(warning(&format!("{base}.achievements"), "Entry has no achievements"));
    }
    for (j, a) in achievements.iter().enumerate() {
        if a.text.trim().is_empty() {
            warnings.push(warning(
                &format!("{base}.achievements[{j}]"),
                "Achievement text is empty; a bare bullet will be rendered",
            ));
        }
    }
    if tech.trim().is_empty() {
        warnings.push(warning(&format!("{base}.tech"), "Tech line is empty"));
    }
}

fn warning(field: &str, reason: &str) -> ContentWarning {
    ContentWarning {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Experience, Project};

    #[test]
    fn test_sample_is_clean() {
        let warnings = validate_resume(&ResumeDocument::sample());
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    }

    #[test]
    fn test_missing_scheme_is_flagged() {
        let mut doc = ResumeDocument::sample();
        doc.contact.github.url = "github.com/javery".to_string();
        let warnings = validate_resume(&doc);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, "contact.github.url");
    }

    #[test]
    fn test_empty_url_is_not_flagged() {
        let mut doc = ResumeDocument::sample();
        doc.experience[0].url = Some(String::new());
        assert!(validate_resume(&doc).is_empty());
    }

    #[test]
    fn test_entry_without_achievements_or_tech() {
        let mut doc = ResumeDocument::sample();
        doc.experience = vec![Experience {
            company: "Acme".to_string(),
            title: "Dev".to_string(),
            url: None,
            dates: "2020".to_string(),
            achievements: vec![],
            tech: "  ".to_string(),
        }];
        doc.projects = vec![Project {
            name: "p".to_string(),
            url: Some("ftp://files.example".to_string()),
            achievements: vec![Achievement::new("")],
            tech: "Rust".to_string(),
        }];
        let fields: Vec<String> = validate_resume(&doc).into_iter().map(|w| w.field).collect();
        assert_eq!(
            fields,
            vec![
                "experience[0].achievements",
                "experience[0].tech",
                "projects[0].url",
                "projects[0].achievements[0]",
            ]
        );
    }

    #[test]
    fn test_blank_name_and_title() {
        let mut doc = ResumeDocument::sample();
        doc.name = " ".to_string();
        doc.title = String::new();
        let fields: Vec<String> = validate_resume(&doc).into_iter().map(|w| w.field).collect();
        assert_eq!(fields, vec!["name", "title"]);
    }
}
