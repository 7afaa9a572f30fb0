use anyhow::{bail, Result};

use panda_common::{AlertStatus, VisaType};

/// Adds `http://` when no scheme is given and drops trailing slashes.
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}

pub fn parse_visa_type(s: &str) -> Result<VisaType> {
    match s.parse() {
        Ok(v) => Ok(v),
        Err(_) => bail!("visa type must be one of: {}", VisaType::allowed()),
    }
}

pub fn parse_status(s: &str) -> Result<AlertStatus> {
    match s.parse() {
        Ok(v) => Ok(v),
        Err(_) => bail!("status must be one of: {}", AlertStatus::allowed()),
    }
}
