//! Overflow audit: compares each achievement's `overflow` flag with the line
//! count estimated from font metrics.
//!
//! The flag stays authoritative for rendering. The audit only reports
//! disagreements; `apply_estimated_overflow` replaces the flags when the
//! operator explicitly asks for it.

use serde::{Deserialize, Serialize};

use super::blocks::FontStyle;
use super::font_metrics::{get_metrics, FontFamily, PageConfig};
use super::sections::Section;
use super::theme::{BULLET_PREFIX, BULLET_SIZE};
use super::wrap::line_count;
use crate::models::{Achievement, ResumeDocument};

/// How a flagged/unflagged achievement compares with its estimated line count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OverflowVerdict {
    /// Flag agrees with the estimate.
    Consistent,
    /// Text wraps but is not flagged; it will be clipped by the next row.
    MissingFlag { estimated_lines: usize },
    /// Flagged but fits on one line; the row wastes vertical space.
    UnneededFlag,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverflowFinding {
    pub section: Section,
    pub entry_index: usize,
    pub achievement_index: usize,
    pub text: String,
    pub verdict: OverflowVerdict,
}

/// Estimated printed lines of one bullet at the full content width.
pub fn estimate_bullet_lines(text: &str, family: FontFamily, page: &PageConfig) -> usize {
    let metrics = get_metrics(family, FontStyle::Normal);
    line_count(
        &format!("{BULLET_PREFIX}{text}"),
        metrics,
        BULLET_SIZE,
        page.content_width_mm(),
    )
}

fn verdict_for(
    achievement: &Achievement,
    family: FontFamily,
    page: &PageConfig,
) -> OverflowVerdict {
    let lines = estimate_bullet_lines(&achievement.text, family, page);
    match (achievement.overflow, lines > 1) {
        (false, true) => OverflowVerdict::MissingFlag {
            estimated_lines: lines,
        },
        (true, false) => OverflowVerdict::UnneededFlag,
        _ => OverflowVerdict::Consistent,
    }
}

/// Returns one finding per achievement whose flag disagrees with the estimate,
/// in document order.
pub fn audit_overflow(
    doc: &ResumeDocument,
    family: FontFamily,
    page: &PageConfig,
) -> Vec<OverflowFinding> {
    let experience = doc
        .experience
        .iter()
        .enumerate()
        .map(|(i, e)| (Section::Experience, i, &e.achievements));
    let projects = doc
        .projects
        .iter()
        .enumerate()
        .map(|(i, p)| (Section::Projects, i, &p.achievements));

    experience
        .chain(projects)
        .flat_map(|(section, entry_index, achievements)| {
            achievements
                .iter()
                .enumerate()
                .map(move |(achievement_index, a)| OverflowFinding {
                    section,
                    entry_index,
                    achievement_index,
                    text: a.text.clone(),
                    verdict: verdict_for(a, family, page),
                })
        })
        .filter(|f| f.verdict != OverflowVerdict::Consistent)
        .collect()
}

/// Returns a copy of `doc` with every overflow flag set from the estimate.
pub fn apply_estimated_overflow(
    doc: &ResumeDocument,
    family: FontFamily,
    page: &PageConfig,
) -> ResumeDocument {
    let mut out = doc.clone();
    let achievements = out
        .experience
        .iter_mut()
        .flat_map(|e| e.achievements.iter_mut())
        .chain(out.projects.iter_mut().flat_map(|p| p.achievements.iter_mut()));
    for a in achievements {
        a.overflow = estimate_bullet_lines(&a.text, family, page) > 1;
    }
    out
}
