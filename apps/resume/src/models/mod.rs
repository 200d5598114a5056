pub mod resume;
pub mod sample;

pub use resume::{
    Achievement, Contact, Education, Experience, Link, Project, ResumeDocument, Skill,
};
