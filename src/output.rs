// Colored terminal output for the CLI commands.

use colored::Colorize;

/// Cap a preview at `max_chars` characters, marking the cut with "...".
/// Counts characters rather than bytes so descriptions with accents or
/// emoji never split mid-codepoint.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Display a classification result for the `classify` command.
pub fn display_classification(raw: &str, cleaned: Option<&str>, result: &str) {
    println!("{}", "=== Classification ===".bold());
    println!("  {} {}", "Input:".dimmed(), truncate_chars(raw, 120));
    if let Some(cleaned) = cleaned {
        println!("  {} {}", "Cleaned:".dimmed(), truncate_chars(cleaned, 120));
    }
    if result.starts_with("Unable to classify") {
        println!("  {} {}", "Result:".dimmed(), result.red());
    } else {
        println!("  {} {}", "Result:".dimmed(), result.green().bold());
    }
}

/// One line of the `status` report: a labeled check mark or cross.
pub fn display_check(label: &str, ok: bool, detail: &str) {
    let mark = if ok { "ok".green() } else { "missing".red() };
    println!("  {label:<14} {mark}  {}", detail.dimmed());
}
