pub mod loader;
pub mod validation;

pub use loader::{load_resume, parse_resume};
pub use validation::{validate_resume, ContentWarning};
