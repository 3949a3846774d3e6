//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

/// Scaffold - Bootstrap a project with AI assistant configuration
///
/// Creates a new project directory containing configuration templates for
/// the selected AI coding assistants, plus a README and a scaffold
/// manifest.
///
/// Examples:
///   scaffold --name demo --tools claude
///   scaffold --name demo --tools all --git
///   scaffold --name demo --tools cursor,gemini --path ~/projects
///   scaffold                      # interactive when run from a terminal
#[derive(Parser, Debug)]
#[command(name = "scaffold")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Destination project name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Tools to enable: comma-separated subset of
    /// claude, cursor, antigravity, gemini, or 'all'
    #[arg(short, long)]
    pub tools: Option<String>,

    /// Parent directory for the new project
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,

    /// Initialize git and register secret-scanning patterns
    #[arg(short, long)]
    pub git: bool,

    /// Template root directory (overrides SCAFFOLD_TEMPLATES and the
    /// user config dir)
    #[arg(long)]
    pub templates: Option<PathBuf>,

    /// Output the summary as JSON for scripting
    #[arg(long)]
    pub json: bool,

    /// List known tools and exit
    #[arg(long)]
    pub list_tools: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}
