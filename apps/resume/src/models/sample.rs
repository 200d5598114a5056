//! Built-in resume used when no input file is given (`--sample`).

use super::resume::{
    Achievement, Contact, Education, Experience, Link, Project, ResumeDocument, Skill,
};

impl ResumeDocument {
    pub fn sample() -> Self {
        ResumeDocument {
            name: "Jordan Avery".to_string(),
            title: "Full Stack Developer".to_string(),
            contact: Contact {
                location: "Lisbon, Portugal".to_string(),
                phone: "+351 912 345 678".to_string(),
                email: "jordan.avery@example.com".to_string(),
                website: Link {
                    text: "jordanavery.dev".to_string(),
                    url: "https://jordanavery.dev".to_string(),
                },
                linkedin: Link {
                    text: "in/jordan-avery".to_string(),
                    url: "https://www.linkedin.com/in/jordan-avery".to_string(),
                },
                github: Link {
                    text: "github.com/javery".to_string(),
                    url: "https://github.com/javery".to_string(),
                },
            },
            summary: "Full stack developer with six years of experience building web platforms \
                      and data pipelines. Comfortable owning features end to end, from schema \
                      design to deployment and on-call."
                .to_string(),
            skills: vec![
                skill("Languages", "Rust, Go, TypeScript, Python, SQL"),
                skill("Frameworks", "Axum, React, Next.js, Django"),
                skill("Infrastructure", "PostgreSQL, Redis, Kafka, Docker, Kubernetes, AWS"),
                skill("Practices", "CI/CD, observability, code review, incident response"),
            ],
            experience: vec![
                Experience {
                    company: "Harbor Analytics".to_string(),
                    title: "Senior Software Engineer".to_string(),
                    url: Some("https://harbor-analytics.example".to_string()),
                    dates: "Mar 2022 - Present".to_string(),
                    achievements: vec![
                        Achievement::new(
                            "Led migration of the ingestion service to Rust, cutting p99 latency \
                             by 45%.",
                        ),
                        Achievement::overflowing(
                            "Designed a multi-tenant event store on PostgreSQL partitions that \
                             sustains 20k writes/s, replaced three legacy queues and cut storage \
                             costs by 30% across both regions.",
                        ),
                        Achievement::new(
                            "Mentored four engineers and introduced weekly design reviews.",
                        ),
                    ],
                    tech: "Rust, Go, PostgreSQL, Kafka, Kubernetes".to_string(),
                },
                Experience {
                    company: "Northwind Labs".to_string(),
                    title: "Software Engineer".to_string(),
                    url: None,
                    dates: "Jan 2019 - Feb 2022".to_string(),
                    achievements: vec![
                        Achievement::new(
                            "Built the customer dashboard in React used by 3,000 daily users.",
                        ),
                        Achievement::new(
                            "Automated release pipeline, reducing deploy time from 40 to 8 \
                             minutes.",
                        ),
                    ],
                    tech: "TypeScript, React, Python, Django, AWS".to_string(),
                },
            ],
            projects: vec![
                Project {
                    name: "tilemill-rs".to_string(),
                    url: Some("https://github.com/javery/tilemill-rs".to_string()),
                    achievements: vec![Achievement::new(
                        "Vector tile server rendering 1M features per second on a single core.",
                    )],
                    tech: "Rust, Tokio, PostGIS".to_string(),
                },
                Project {
                    name: "Budget Buddy".to_string(),
                    url: None,
                    achievements: vec![Achievement::new(
                        "Offline-first expense tracker with end-to-end encrypted sync.",
                    )],
                    tech: "TypeScript, SQLite, WebCrypto".to_string(),
                },
            ],
            education: vec![Education {
                school: "University of Porto".to_string(),
                degree: "BSc Computer Science".to_string(),
                url: Some("https://www.up.pt".to_string()),
                date: "2014 - 2018".to_string(),
            }],
        }
    }
}

fn skill(category: &str, items: &str) -> Skill {
    Skill {
        category: category.to_string(),
        items: items.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_has_every_section() {
        let doc = ResumeDocument::sample();
        assert!(!doc.skills.is_empty());
        assert!(!doc.experience.is_empty());
        assert!(!doc.projects.is_empty());
        assert!(!doc.education.is_empty());
    }

    #[test]
    fn test_sample_survives_json_roundtrip() {
        let doc = ResumeDocument::sample();
        let json = serde_json::to_string(&doc).unwrap();
        let back: ResumeDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, back);
    }
}
