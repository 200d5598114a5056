//! Section renderer: turns resume entities into rows.
//!
//! Every function here is pure. Output order follows input order, and the
//! only data-dependent branches are the URL check (link styling) and the
//! achievement overflow flag (row height).

use serde::{Deserialize, Serialize};

use super::blocks::{Align, Col, DocumentPlan, FontStyle, Icon, Row, TextStyle};
use super::theme::*;
use crate::models::{
    Achievement, Contact, Education, Experience, Link, Project, ResumeDocument, Skill,
};

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

/// The repeatable sections, in the order they appear on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Skills,
    Experience,
    Projects,
    Education,
}

impl Section {
    pub const ORDER: [Section; 4] = [
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Education,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Skills => "TECHNICAL SKILLS",
            Section::Experience => "WORK EXPERIENCE",
            Section::Projects => "PROJECTS",
            Section::Education => "EDUCATION",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Section::Skills => Icon::Box,
            Section::Experience => Icon::Building,
            Section::Projects => Icon::Layers,
            Section::Education => Icon::GraduationCap,
        }
    }
}

/// Which kind of entry an achievement belongs to; decides the base row height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Experience,
    Project,
}

impl EntryKind {
    fn base_bullet_height(self) -> f32 {
        match self {
            EntryKind::Experience => EXPERIENCE_BULLET_ROW,
            EntryKind::Project => PROJECT_BULLET_ROW,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Header, contact, intro
// ────────────────────────────────────────────────────────────────────────────

pub fn header_rows(doc: &ResumeDocument) -> Vec<Row> {
    vec![Row::text(
        NAME_ROW,
        &doc.name,
        TextStyle::new(NAME_SIZE).bold().top(3.0),
    )]
}

/// Two rows of three (icon, label) pairs. Link labels are blue bold-italic
/// with a hyperlink when their URL is set.
pub fn contact_rows(contact: &Contact) -> Vec<Row> {
    let plain = |icon: Icon, label: &str| -> [Col; 2] {
        [
            contact_icon(icon),
            Col::text(3, label, TextStyle::new(BODY_SIZE).top(1.0)),
        ]
    };
    let linked = |icon: Icon, link: &Link| -> [Col; 2] {
        let base = TextStyle::new(BODY_SIZE).top(1.0);
        let label = match link.link_target() {
            Some(url) => Col::link(
                3,
                &link.text,
                base.with_style(FontStyle::BoldItalic).color(LINK_COLOR),
                url,
            ),
            None => Col::text(3, &link.text, base),
        };
        [contact_icon(icon), label]
    };

    let first: Vec<Col> = [
        plain(Icon::MapPin, &contact.location),
        plain(Icon::Phone, &contact.phone),
        plain(Icon::Mail, &contact.email),
    ]
    .into_iter()
    .flatten()
    .collect();

    let second: Vec<Col> = [
        linked(Icon::Link, &contact.website),
        linked(Icon::Linkedin, &contact.linkedin),
        linked(Icon::Github, &contact.github),
    ]
    .into_iter()
    .flatten()
    .collect();

    vec![Row::new(CONTACT_ROW, first), Row::new(CONTACT_ROW, second)]
}

fn contact_icon(icon: Icon) -> Col {
    Col::image(1, icon, CONTACT_ICON_PERCENT).offset(1.0, 10.0)
}

/// Title line, summary paragraph and a spacer before the sections. The
/// summary row keeps its height when the summary is blank.
pub fn intro_rows(doc: &ResumeDocument) -> Vec<Row> {
    vec![
        Row::text(
            TITLE_ROW,
            &doc.title,
            TextStyle::new(TITLE_SIZE).bold().top(3.0),
        ),
        Row::text(
            SUMMARY_ROW,
            &doc.summary,
            TextStyle::new(BODY_SIZE).light().top(2.0),
        ),
        Row::spacer(SPACER_ROW),
    ]
}

pub fn separator_row() -> Row {
    Row::separator(SEPARATOR_ROW, THEME_COLOR)
}

// ────────────────────────────────────────────────────────────────────────────
// Repeatable sections
// ────────────────────────────────────────────────────────────────────────────

/// Icon + coloured title, then a full-width theme bar.
pub fn heading_rows(section: Section) -> Vec<Row> {
    vec![
        Row::new(
            HEADING_ROW,
            vec![
                Col::image(1, section.icon(), HEADING_ICON_PERCENT),
                Col::text(
                    11,
                    section.title(),
                    TextStyle::new(HEADING_SIZE).bold().color(THEME_COLOR).top(3.0),
                ),
            ],
        ),
        separator_row(),
    ]
}

pub fn skill_rows(skills: &[Skill]) -> Vec<Row> {
    skills
        .iter()
        .map(|skill| {
            Row::new(
                SKILL_ROW,
                vec![
                    Col::text(3, format!("{}:", skill.category), TextStyle::new(BODY_SIZE).bold()),
                    Col::text(9, &skill.items, TextStyle::new(BODY_SIZE)),
                ],
            )
        })
        .collect()
}

pub fn experience_rows(experience: &[Experience]) -> Vec<Row> {
    let mut rows = Vec::new();
    for exp in experience {
        rows.push(Row::new(
            ENTRY_TITLE_ROW,
            vec![
                entry_title(8, exp.heading(), exp.link_target()),
                date_col(&exp.dates),
            ],
        ));
        rows.extend(achievement_rows(EntryKind::Experience, &exp.achievements));
        rows.push(tech_row(&exp.tech));
    }
    rows
}

pub fn project_rows(projects: &[Project]) -> Vec<Row> {
    let mut rows = Vec::new();
    for proj in projects {
        rows.push(Row::new(
            ENTRY_TITLE_ROW,
            vec![entry_title(12, proj.name.clone(), proj.link_target())],
        ));
        rows.extend(achievement_rows(EntryKind::Project, &proj.achievements));
        rows.push(tech_row(&proj.tech));
    }
    rows
}

/// One row per school: name (linked when a URL is set) and date. The degree
/// is carried in the data but not printed.
pub fn education_rows(education: &[Education]) -> Vec<Row> {
    education
        .iter()
        .map(|edu| {
            Row::new(
                ENTRY_TITLE_ROW,
                vec![
                    entry_title(8, edu.school.clone(), edu.link_target()),
                    date_col(&edu.date),
                ],
            )
        })
        .collect()
}

/// Row height for one achievement bullet: base height, plus
/// `OVERFLOW_EXTRA` when the achievement is flagged.
pub fn achievement_row_height(kind: EntryKind, achievement: &Achievement) -> f32 {
    let base = kind.base_bullet_height();
    if achievement.overflow {
        base + OVERFLOW_EXTRA
    } else {
        base
    }
}

fn achievement_rows(
    kind: EntryKind,
    achievements: &[Achievement],
) -> impl Iterator<Item = Row> + '_ {
    achievements.iter().map(move |a| {
        Row::text(
            achievement_row_height(kind, a),
            format!("{BULLET_PREFIX}{}", a.text),
            TextStyle::new(BULLET_SIZE),
        )
    })
}

fn tech_row(tech: &str) -> Row {
    Row::text(
        TECH_ROW,
        format!("{TECH_PREFIX}{tech}"),
        TextStyle::new(BULLET_SIZE).italic(),
    )
}

/// Entry title: blue bold-italic hyperlink when a URL exists, plain bold otherwise.
fn entry_title(width: u8, text: String, url: Option<&str>) -> Col {
    let base = TextStyle::new(ENTRY_TITLE_SIZE);
    match url {
        Some(url) => Col::link(
            width,
            text,
            base.with_style(FontStyle::BoldItalic).color(LINK_COLOR),
            url,
        ),
        None => Col::text(width, text, base.bold()),
    }
}

fn date_col(date: &str) -> Col {
    Col::text(4, date, TextStyle::new(BODY_SIZE).align(Align::Right))
}

// ────────────────────────────────────────────────────────────────────────────
// Whole document
// ────────────────────────────────────────────────────────────────────────────

/// Rows for one section: heading followed by its entries (possibly none).
pub fn section_rows(section: Section, doc: &ResumeDocument) -> Vec<Row> {
    let mut rows = heading_rows(section);
    rows.extend(match section {
        Section::Skills => skill_rows(&doc.skills),
        Section::Experience => experience_rows(&doc.experience),
        Section::Projects => project_rows(&doc.projects),
        Section::Education => education_rows(&doc.education),
    });
    rows
}

/// Lays out the full resume in document order.
pub fn layout_resume(doc: &ResumeDocument) -> DocumentPlan {
    let mut rows = header_rows(doc);
    rows.extend(contact_rows(&doc.contact));
    rows.push(separator_row());
    rows.extend(intro_rows(doc));
    for section in Section::ORDER {
        rows.extend(section_rows(section, doc));
    }
    DocumentPlan { rows }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
