pub mod banner;
mod format;
pub mod prompt;
pub mod spinner;
pub mod table;
pub mod theme;

pub use format::{print_error, print_json, print_notice, print_success, OutputMode};
pub use table::{alerts_table, format_created};
