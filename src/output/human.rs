use console::style;

/// Report an artifact that was written.
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Errors go to stderr so stdout stays limited to progress lines.
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}
