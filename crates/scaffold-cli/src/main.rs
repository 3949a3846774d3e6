//! Scaffold CLI
//!
//! Bootstraps a new project directory with configuration for AI coding
//! assistants.

mod cli;
mod error;
mod interactive;
mod summary;

use std::io::IsTerminal;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use error::{CliError, Result};
use scaffold_core::ScaffoldRequest;
use scaffold_tools::{ToolRegistry, ToolSelection};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
        tracing::debug!("Verbose mode enabled");
    }

    if let Some(shell) = cli.completions {
        let mut command = Cli::command();
        clap_complete::generate(shell, &mut command, "scaffold", &mut std::io::stdout());
        return Ok(());
    }

    if cli.list_tools {
        print_tool_list();
        return Ok(());
    }

    let (name, tools, git) = resolve_input(&cli)?;

    let template_source = scaffold_templates::discover(cli.templates.as_deref())?;
    let request = ScaffoldRequest {
        name,
        tools,
        parent: cli.path.clone(),
        git,
        template_source,
    };

    let report = scaffold_core::scaffold(request)?;

    if cli.json {
        summary::print_json(&report)?;
    } else {
        summary::print_human(&report);
    }
    Ok(())
}

/// Resolve name, tools, and git either from flags or interactively.
///
/// With no name and no tools on a terminal, prompts interactively. In
/// non-interactive mode both flags are required.
fn resolve_input(cli: &Cli) -> Result<(String, ToolSelection, bool)> {
    match (&cli.name, &cli.tools) {
        (Some(name), Some(tools)) => Ok((name.clone(), ToolSelection::parse(tools)?, cli.git)),
        (None, None) if std::io::stdin().is_terminal() => {
            let input = interactive::prompt()?;
            // --git still applies when given alongside no other flags
            Ok((input.name, input.tools, input.git || cli.git))
        }
        (None, None) => Err(CliError::user(
            "Missing required flags --name and --tools.\n\
             Usage: scaffold --name <NAME> --tools <csv|all> [--path <DIR>] [--git]",
        )),
        (None, Some(_)) => Err(CliError::user(
            "Missing required flag --name <NAME> (required in non-interactive mode).",
        )),
        (Some(_), None) => Err(CliError::user(
            "Missing required flag --tools <csv|all> (required in non-interactive mode).",
        )),
    }
}

fn print_tool_list() {
    println!("{}", "Known tools:".bold());
    for tool in ToolRegistry::with_builtins().list_known() {
        println!("  {tool}");
    }
    println!();
    println!("Use {} to select every tool.", "--tools all".cyan());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_cli() -> Cli {
        Cli::parse_from(["scaffold"])
    }

    #[test]
    fn resolve_input_with_both_flags() {
        let mut cli = base_cli();
        cli.name = Some("demo".into());
        cli.tools = Some("claude".into());

        let (name, tools, git) = resolve_input(&cli).unwrap();
        assert_eq!(name, "demo");
        assert_eq!(tools.to_csv(), "claude");
        assert!(!git);
    }

    #[test]
    fn resolve_input_missing_name_is_an_error() {
        let mut cli = base_cli();
        cli.tools = Some("claude".into());

        let err = resolve_input(&cli).unwrap_err();
        assert!(format!("{err}").contains("--name"));
    }

    #[test]
    fn resolve_input_missing_tools_is_an_error() {
        let mut cli = base_cli();
        cli.name = Some("demo".into());

        let err = resolve_input(&cli).unwrap_err();
        assert!(format!("{err}").contains("--tools"));
    }

    #[test]
    fn resolve_input_rejects_bad_tool_name() {
        let mut cli = base_cli();
        cli.name = Some("demo".into());
        cli.tools = Some("bogus".into());

        assert!(resolve_input(&cli).is_err());
    }
}
