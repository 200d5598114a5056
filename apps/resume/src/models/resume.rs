use serde::{Deserialize, Serialize};

/// A complete resume. Lists are rendered in the order they appear here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub name: String,
    pub title: String,
    pub contact: Contact,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub education: Vec<Education>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub location: String,
    pub phone: String,
    pub email: String,
    pub website: Link,
    pub linkedin: Link,
    pub github: Link,
}

/// Display text plus hyperlink target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub text: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub category: String,
    pub items: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub dates: String,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    pub tech: String,
}

/// One bullet. `overflow` marks text that needs a taller row to avoid clipping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub text: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub overflow: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    pub tech: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub degree: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub date: String,
}

/// Absent, empty and whitespace-only URLs all mean "no link".
fn non_blank(url: Option<&str>) -> Option<&str> {
    url.map(str::trim).filter(|u| !u.is_empty())
}

impl Link {
    pub fn link_target(&self) -> Option<&str> {
        non_blank(Some(&self.url))
    }
}

impl Experience {
    pub fn link_target(&self) -> Option<&str> {
        non_blank(self.url.as_deref())
    }

    /// Title row text, e.g. "Backend Engineer - Acme".
    pub fn heading(&self) -> String {
        format!("{} - {}", self.title, self.company)
    }
}

impl Project {
    pub fn link_target(&self) -> Option<&str> {
        non_blank(self.url.as_deref())
    }
}

impl Education {
    pub fn link_target(&self) -> Option<&str> {
        non_blank(self.url.as_deref())
    }
}

impl Achievement {
    pub fn new(text: impl Into<String>) -> Self {
        Achievement {
            text: text.into(),
            overflow: false,
        }
    }

    pub fn overflowing(text: impl Into<String>) -> Self {
        Achievement {
            text: text.into(),
            overflow: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_urls_have_no_link_target() {
        let mut edu = Education {
            school: "State University".to_string(),
            degree: "BSc".to_string(),
            url: None,
            date: "2018".to_string(),
        };
        assert_eq!(edu.link_target(), None);
        edu.url = Some(String::new());
        assert_eq!(edu.link_target(), None);
        edu.url = Some("   ".to_string());
        assert_eq!(edu.link_target(), None);
        edu.url = Some(" https://uni.example ".to_string());
        assert_eq!(edu.link_target(), Some("https://uni.example"));
    }

    #[test]
    fn test_contact_link_target() {
        let link = Link {
            text: "github.com/jdoe".to_string(),
            url: "https://github.com/jdoe".to_string(),
        };
        assert_eq!(link.link_target(), Some("https://github.com/jdoe"));
    }

    #[test]
    fn test_experience_heading_joins_title_and_company() {
        let exp = Experience {
            company: "Acme".to_string(),
            title: "Backend Engineer".to_string(),
            url: None,
            dates: "2020 - 2022".to_string(),
            achievements: vec![],
            tech: "Rust".to_string(),
        };
        assert_eq!(exp.heading(), "Backend Engineer - Acme");
    }

    #[test]
    fn test_overflow_defaults_to_false() {
        let a: Achievement = serde_json::from_str(r#"{"text":"Shipped it"}"#).unwrap();
        assert!(!a.overflow);
        let b: Achievement = serde_json::from_str(r#"{"text":"Long","overflow":true}"#).unwrap();
        assert!(b.overflow);
    }
}
