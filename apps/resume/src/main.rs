use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume::config::Config;
use resume::context::validate_resume;
use resume::generation::{generate, resolve_document, DocumentSource, GenerateOptions};
use resume::layout::{audit_overflow, default_page_config, layout_resume, OverflowVerdict};
use resume::render::{FontSet, IconStore};

#[derive(Parser, Debug)]
#[command(name = "resume", version, about = "Render a JSON resume to PDF")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Directory holding the DejaVu Sans faces.
    #[arg(long, global = true)]
    fonts_dir: Option<PathBuf>,

    /// Directory holding the PNG icon set.
    #[arg(long, global = true)]
    icons_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the PDF (default).
    Render(RenderArgs),
    /// Report validation warnings, overflow mismatches and missing assets.
    Check(SourceArgs),
    /// Print the layout plan as JSON.
    Plan(SourceArgs),
}

#[derive(Args, Debug, Default)]
struct SourceArgs {
    /// Resume JSON file (defaults to RESUME_INPUT or resume.json).
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Use the built-in sample resume instead of a file.
    #[arg(long, conflicts_with = "input")]
    sample: bool,
}

#[derive(Args, Debug, Default)]
struct RenderArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output PDF path (defaults to RESUME_OUTPUT or resume.pdf).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Set every achievement's overflow flag from the estimated line count.
    #[arg(long)]
    auto_overflow: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Some(dir) = cli.fonts_dir {
        config.fonts_dir = dir;
    }
    if let Some(dir) = cli.icons_dir {
        config.icons_dir = dir;
    }

    match cli.command.unwrap_or_else(|| Command::Render(RenderArgs::default())) {
        Command::Render(args) => run_render(&config, args),
        Command::Check(args) => run_check(&config, &args),
        Command::Plan(args) => run_plan(&config, &args),
    }
}

fn source(config: &Config, args: &SourceArgs) -> DocumentSource {
    if args.sample {
        DocumentSource::Sample
    } else {
        DocumentSource::File(args.input.clone().unwrap_or_else(|| config.input.clone()))
    }
}

fn run_render(config: &Config, args: RenderArgs) -> Result<()> {
    let mut options = GenerateOptions::from_config(config);
    options.source = source(config, &args.source);
    options.auto_overflow = args.auto_overflow;
    if let Some(output) = args.output {
        options.output = output;
    }

    let report = generate(&options)
        .inspect_err(|e| error!(code = e.code(), error = %e, "Resume generation failed"))
        .with_context(|| format!("Failed to generate {}", options.output.display()))?;

    info!("Resume generated successfully in {:?}", report.elapsed);
    println!(
        "Resume generated successfully in {:?}: {} ({} page(s), {} bytes, {} warning(s))",
        report.elapsed,
        report.output.display(),
        report.pages,
        report.bytes,
        report.warnings
    );
    Ok(())
}

fn run_check(config: &Config, args: &SourceArgs) -> Result<()> {
    let doc = resolve_document(&source(config, args)).context("Failed to load resume")?;
    let family = FontSet::load_or_builtin(&config.fonts_dir).family();

    let warnings = validate_resume(&doc);
    let findings = audit_overflow(&doc, family, &default_page_config());
    let missing = IconStore::new(&config.icons_dir).missing();

    for w in &warnings {
        println!("warning  {}: {}", w.field, w.reason);
    }
    for f in &findings {
        let what = match &f.verdict {
            OverflowVerdict::MissingFlag { estimated_lines } => {
                format!("wraps to ~{estimated_lines} lines but is not marked overflow")
            }
            OverflowVerdict::UnneededFlag => "marked overflow but fits on one line".to_string(),
            OverflowVerdict::Consistent => continue,
        };
        println!(
            "overflow {}[{}].achievements[{}]: {what}",
            format!("{:?}", f.section).to_lowercase(),
            f.entry_index,
            f.achievement_index
        );
    }
    for icon in &missing {
        println!("asset    missing icon {}", icon.file_name());
    }

    println!(
        "{} warning(s), {} overflow finding(s), {} missing icon(s) [{family:?} metrics]",
        warnings.len(),
        findings.len(),
        missing.len()
    );
    Ok(())
}

fn run_plan(config: &Config, args: &SourceArgs) -> Result<()> {
    let doc = resolve_document(&source(config, args)).context("Failed to load resume")?;
    let plan = layout_resume(&doc);
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
