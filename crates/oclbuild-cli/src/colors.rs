//! Terminal color constants and report helpers for CLI output.

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const GREEN: &str = "\x1b[32m";
pub const CYAN: &str = "\x1b[36m";

/// Print a task header such as `oclbuild - build (min)`.
pub fn header(task: &str, detail: &str) {
    println!("\n{BOLD}oclbuild{RESET} - {task} {CYAN}{detail}{RESET}");
    println!("{}", "─".repeat(50));
}

/// Print a `✓ label value` line.
pub fn done(label: &str, value: impl std::fmt::Display) {
    println!("{GREEN}  ✓ {label}{RESET} {value}");
}

/// Print the closing timing line.
pub fn elapsed(start: std::time::Instant) {
    println!("{}", "─".repeat(50));
    println!("{DIM}Time:{RESET} {:.2}s", start.elapsed().as_secs_f64());
}
