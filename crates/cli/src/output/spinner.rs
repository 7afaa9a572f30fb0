use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use super::OutputMode;

fn style(template: &str) -> ProgressStyle {
    ProgressStyle::with_template(template).unwrap_or_else(|_| ProgressStyle::default_spinner())
}

pub fn create(msg: &str) -> ProgressBar {
    let sp = ProgressBar::new_spinner();
    sp.set_style(
        style("{spinner:.cyan.bold} {msg}")
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "]),
    );
    sp.set_message(msg.to_string());
    sp.enable_steady_tick(Duration::from_millis(80));
    sp
}

/// Spinner only in human mode; JSON output stays clean.
pub fn for_mode(mode: OutputMode, msg: &str) -> Option<ProgressBar> {
    match mode {
        OutputMode::Human => Some(create(msg)),
        OutputMode::Json => None,
    }
}

pub fn finish_ok(sp: &ProgressBar, msg: &str) {
    sp.set_style(style("{msg}"));
    sp.finish_with_message(format!("{} {}", "✓".green().bold(), msg));
}

pub fn finish_clear(sp: &ProgressBar) {
    sp.finish_and_clear();
}
