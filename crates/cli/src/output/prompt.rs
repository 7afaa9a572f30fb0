use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, FuzzySelect, Input, Select};

/// Free-text prompt prefilled with `initial`, so a rejected submit keeps
/// what the user typed.
pub fn input_text(prompt: &str, initial: &str) -> Result<String> {
    let value = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

/// `None` when the user escapes or there is no terminal.
pub fn choose(prompt: &str, items: &[String], default: usize) -> Option<usize> {
    Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact_opt()
        .ok()
        .flatten()
}

/// Searchable variant of [`choose`], used when picking one alert out of many.
pub fn choose_fuzzy(prompt: &str, items: &[String]) -> Option<usize> {
    FuzzySelect::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .interact_opt()
        .ok()
        .flatten()
}

/// Asks before removing an alert. Anything but an explicit yes keeps it.
pub fn confirm_delete() -> bool {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Are you sure you want to delete this alert?")
        .default(false)
        .interact()
        .unwrap_or(false)
}
