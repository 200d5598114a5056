use std::path::PathBuf;

use anyhow::{Context, Result};

/// Runtime configuration loaded from environment variables (and `.env`).
/// Every value has a default; CLI flags override these in `main`.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub fonts_dir: PathBuf,
    pub icons_dir: PathBuf,
    pub page_numbers: bool,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from("resume.json"),
            output: PathBuf::from("resume.pdf"),
            fonts_dir: PathBuf::from("fonts"),
            icons_dir: PathBuf::from("icons-png"),
            page_numbers: true,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            input: env_path("RESUME_INPUT", defaults.input),
            output: env_path("RESUME_OUTPUT", defaults.output),
            fonts_dir: env_path("RESUME_FONTS_DIR", defaults.fonts_dir),
            icons_dir: env_path("RESUME_ICONS_DIR", defaults.icons_dir),
            page_numbers: match std::env::var("RESUME_PAGE_NUMBERS") {
                Ok(raw) => parse_flag(&raw).with_context(|| {
                    format!("RESUME_PAGE_NUMBERS must be a boolean, got '{raw}'")
                })?,
                Err(_) => defaults.page_numbers,
            },
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

fn env_path(key: &str, default: PathBuf) -> PathBuf {
    std::env::var_os(key).map(PathBuf::from).unwrap_or(default)
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("unrecognised flag value '{other}'"),
    }
}
