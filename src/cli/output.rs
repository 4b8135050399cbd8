//! Output formatting for CLI

use crate::graph::State;

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{key}:"), value);
}

/// Print a state's message and board, indented.
pub fn print_state(state: &State, verbose: bool) {
    let marker = if state.victory { " (victory)" } else { "" };
    println!(
        "  #{} [{}] level {}{marker}",
        state.id,
        state.id.anchor(),
        state.level
    );
    if !state.message.is_empty() {
        println!("  \"{}\"", state.message);
    }
    for row in state.rows() {
        println!("    {row}");
    }
    if verbose {
        println!("  key: {}", state.key);
    }
}
