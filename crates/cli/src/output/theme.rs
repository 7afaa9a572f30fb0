use colored::Colorize;

pub fn print_header(title: &str) {
    let width = title.chars().count() + 6;
    let border = "─".repeat(width);
    println!();
    println!("  ╭{}╮", border.cyan());
    println!("  │   {}   │", title.bright_cyan().bold());
    println!("  ╰{}╯", border.cyan());
    println!();
}

pub fn print_kv(label: &str, value: &str) {
    println!(
        "    {} {}",
        format!("{:<16}", label).dimmed(),
        value.bright_white()
    );
}

pub fn print_dim(msg: &str) {
    println!("  {}", msg.dimmed());
}

pub fn print_filters(country: Option<&str>, status: Option<&str>) {
    println!(
        "  {} {}   {} {}",
        "Country".dimmed(),
        country.unwrap_or("All Countries").bright_white(),
        "Status".dimmed(),
        status.unwrap_or("All Statuses").bright_white()
    );
}
