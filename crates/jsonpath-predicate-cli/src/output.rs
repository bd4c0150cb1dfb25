//! Output formatting utilities

use colored::Colorize;
use jsonpath_predicate::Verdict;

/// Set up color output based on user preference
pub fn setup_colors(mode: &str) {
    match mode.to_lowercase().as_str() {
        "always" => colored::control::set_override(true),
        "never" => colored::control::set_override(false),
        _ => colored::control::unset_override(),
    }
}

/// Format an error for display
pub fn format_error(error: &anyhow::Error) -> String {
    format!("{} {:#}", "Error:".red().bold(), error)
}

/// Format a verdict for display
pub fn format_verdict(verdict: &Verdict) -> String {
    match verdict {
        Verdict::True => "true".green().bold().to_string(),
        Verdict::False => "false".yellow().bold().to_string(),
        Verdict::Error(err) => format!("{} {}", "error:".red().bold(), err),
    }
}

/// Format one registry token with its operator name
pub fn format_operator(token: &str, name: Option<&str>) -> String {
    match name {
        Some(name) => format!("{:>10}  {}", token.cyan(), name.dimmed()),
        None => format!("{:>10}", token.cyan()),
    }
}
