//! Interactive prompts for scaffold setup
//!
//! Uses dialoguer for terminal-based interactive selection.

use colored::Colorize;
use dialoguer::{Confirm, Input, MultiSelect};
use scaffold_tools::{ToolRegistry, ToolSelection};

use crate::error::{CliError, Result};

/// Values collected from the interactive prompts.
#[derive(Debug)]
pub struct InteractiveInput {
    pub name: String,
    pub tools: ToolSelection,
    pub git: bool,
}

/// Run interactive prompts for project name, tools, and git.
///
/// Prompts the user, shows a summary, and asks for confirmation before
/// returning.
pub fn prompt() -> Result<InteractiveInput> {
    println!();

    let name: String = Input::new()
        .with_prompt("Project name")
        .default("my-project".to_string())
        .interact_text()?;

    let registry = ToolRegistry::with_builtins();
    let available_tools = registry.list_known();
    let tool_indices = MultiSelect::new()
        .with_prompt("Select tools (space to toggle, enter to confirm)")
        .items(&available_tools)
        .interact()?;
    if tool_indices.is_empty() {
        return Err(CliError::user("No tools selected."));
    }
    let csv = tool_indices
        .iter()
        .map(|&i| available_tools[i])
        .collect::<Vec<_>>()
        .join(",");
    let tools = ToolSelection::parse(&csv)?;

    let git = Confirm::new()
        .with_prompt("Initialize a git repository?")
        .default(false)
        .interact()?;

    println!();
    println!("{}", "Summary:".bold());
    println!("  {}: {}", "Project".dimmed(), name.cyan());
    println!("  {}: {}", "Tools".dimmed(), tools.to_csv().cyan());
    println!(
        "  {}: {}",
        "Git".dimmed(),
        if git { "yes".cyan() } else { "no".dimmed() }
    );
    println!();

    let proceed = Confirm::new()
        .with_prompt("Proceed?")
        .default(true)
        .interact()?;

    if !proceed {
        return Err(CliError::user("Scaffold cancelled by user."));
    }

    Ok(InteractiveInput { name, tools, git })
}
