//! Summary rendering for completed scaffold runs

use colored::Colorize;
use scaffold_core::ScaffoldReport;

use crate::error::Result;

/// Print the human-readable summary.
pub fn print_human(report: &ScaffoldReport) {
    println!(
        "{} Project scaffolded at {}",
        "OK".green().bold(),
        report.project_root.cyan()
    );
    println!(
        "   Tools: {}",
        report
            .tools
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
            .yellow()
    );
    for dir in &report.created_dirs {
        println!("   Created {}/", dir);
    }
    println!(
        "   {} files written, manifest at {}",
        report.files_copied,
        report.manifest_path.dimmed()
    );
    if report.git_initialized {
        println!("   Initialized git repository");
    }
    if report.secret_patterns_registered > 0 {
        println!(
            "   Registered {} git-secrets patterns",
            report.secret_patterns_registered
        );
    }
    for warning in &report.warnings {
        println!("{} {}", "warning:".yellow().bold(), warning);
    }
    println!();
    println!(
        "Next: {}",
        format!("cd {}", report.project_root).cyan()
    );
}

/// Print the summary as pretty JSON on stdout.
pub fn print_json(report: &ScaffoldReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| crate::error::CliError::user(format!("Failed to encode summary: {e}")))?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scaffold_tools::Tool;

    fn sample_report() -> ScaffoldReport {
        ScaffoldReport {
            project_root: "/tmp/demo".into(),
            tools: vec![Tool::Claude],
            created_dirs: vec![".claude".into()],
            files_copied: 4,
            manifest_path: "/tmp/demo/.scaffold/manifest.toml".into(),
            git_initialized: false,
            secret_patterns_registered: 0,
            warnings: vec![],
        }
    }

    #[test]
    fn json_summary_is_valid_and_complete() {
        let report = sample_report();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["project_root"], "/tmp/demo");
        assert_eq!(json["tools"][0], "claude");
        assert_eq!(json["files_copied"], 4);
        assert_eq!(json["git_initialized"], false);
    }

    #[test]
    fn print_human_does_not_panic() {
        print_human(&sample_report());
    }
}
