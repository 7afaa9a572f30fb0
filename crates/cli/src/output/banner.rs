use colored::{Color, Colorize};

use crate::output::theme;

const PANDA: &str = r"
      ▄▀▀▄   ▄▀▀▄
      ▀▄▄▀▀▀▀▀▄▄▀      FLYING PANDA
      █  ●   ●  █      visa slot alert tracker
      █    ▼    █
       ▀▄▄▄▄▄▄▄▀";

pub fn print_banner() {
    for (i, line) in PANDA.lines().skip(1).enumerate() {
        let color = if i % 2 == 0 { Color::BrightWhite } else { Color::Cyan };
        println!("{}", line.color(color).bold());
    }
    println!();
}

/// Banner plus build facts and the API the client talks to.
pub fn print_version_block(version: &str, server: &str) {
    print_banner();
    theme::print_kv("version", version);
    theme::print_kv("api", server);
    theme::print_kv("target", &format!("{}-{}", std::env::consts::ARCH, std::env::consts::OS));
    println!();
}
