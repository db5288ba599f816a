//! doxylink CLI - turns Doxygen XML into cross-linked documentation

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use doxylink_core::{Config, Pipeline, PipelineError, PipelineReport, Stylesheets};

#[derive(Parser, Debug)]
#[command(name = "doxylink")]
#[command(version = doxylink_core::VERSION)]
#[command(about = "Clean, cross-link and render Doxygen XML documentation", long_about = None)]
struct Cli {
    /// The directory containing Doxygen's XML output
    #[arg(short, long, default_value = ".")]
    input: PathBuf,

    /// The directory to write the converted files to
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// The name of the project (defaults to "Untitled")
    #[arg(short, long)]
    name: Option<String>,

    /// Only generate XML, skipping HTML
    #[arg(short = 'x', long = "xml")]
    xml_only: bool,

    /// Read settings from a TOML file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the XSLT stylesheets and css/ (defaults to the executable's directory)
    #[arg(short, long)]
    stylesheets: Option<PathBuf>,

    /// Increase log output (-v for progress, -vv for details)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = resolve_config(&cli);

    let verbose = config.as_ref().map_or(cli.verbose, |config| verbosity(&cli, config));
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_filter(verbose)))
        .target(env_logger::Target::Stderr)
        .init();

    match config.and_then(|config| generate_documentation(&cli, &config)) {
        Ok(report) => {
            print_report(&report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

/// `-v` count, raised to one when the config file asks for verbose output
fn verbosity(cli: &Cli, config: &Config) -> u8 {
    cli.verbose.max(u8::from(config.verbose))
}

fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// File settings with command-line flags applied on top
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_path(path)
            .with_context(|| format!("Failed to load config '{}'", path.display()))?,
        None => Config::default(),
    };

    if let Some(name) = &cli.name {
        config.project_name.clone_from(name);
    }
    if cli.xml_only {
        config.xml_only = true;
    }
    if cli.verbose > 0 {
        config.verbose = true;
    }
    if let Some(dir) = &cli.stylesheets {
        config.stylesheet_dir = Some(dir.clone());
    }
    Ok(config)
}

/// Directory the stylesheets are read from
fn stylesheet_dir(config: &Config) -> Result<PathBuf> {
    if let Some(dir) = &config.stylesheet_dir {
        return Ok(dir.clone());
    }
    let exe = std::env::current_exe().context("Failed to locate the doxylink executable")?;
    Ok(exe.parent().map_or_else(|| PathBuf::from("."), Path::to_path_buf))
}

/// Run the whole pipeline
fn generate_documentation(cli: &Cli, config: &Config) -> Result<PipelineReport> {
    let stylesheets = Stylesheets::xslt(&stylesheet_dir(config)?);
    let pipeline = Pipeline::new(&cli.input, &cli.output, config, stylesheets)?;

    let report = pipeline.run()?;
    println!("Generated: {}", pipeline.xml_dir().display());
    if !config.xml_only {
        println!("Generated: {}", pipeline.html_dir().display());
    }
    Ok(report)
}

fn print_report(report: &PipelineReport) {
    println!(
        "\n{} documents, {} references, {} undocumented inputs skipped",
        report.documents, report.references, report.undocumented
    );

    for warning in &report.warnings {
        eprintln!("Warning: {warning}");
    }
    for failure in &report.failures {
        eprintln!("Failed: {failure}");
    }
    for failure in &report.render_failures {
        eprintln!("Render failed: {failure}");
    }
}

/// Process exit code for a fatal error
fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<PipelineError>() {
        Some(PipelineError::InputNotFound(_)) => 2,
        Some(PipelineError::InputNotDirectory(_) | PipelineError::OutputNotDirectory(_)) => 20,
        _ => 1,
    }
}
