use colored::Colorize;
use serde::Serialize;

use crate::session::{Banner, BannerKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_success(msg: &str) {
    println!("{} {}", "✓".green().bold(), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg);
}

pub fn print_notice(banner: &Banner) {
    match banner.kind {
        BannerKind::Success => print_success(&banner.message),
        BannerKind::Error => print_error(&banner.message),
    }
}
