use serde::{Deserialize, Serialize};

use crate::alert::Alert;

/// Query-string filters for listing alerts. Both comparisons ignore ASCII
/// case and are AND-combined; an empty string means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl AlertFilter {
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref().filter(|c| !c.is_empty())
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref().filter(|s| !s.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.country().is_none() && self.status().is_none()
    }

    pub fn matches(&self, alert: &Alert) -> bool {
        if let Some(country) = self.country() {
            if !alert.country.eq_ignore_ascii_case(country) {
                return false;
            }
        }
        if let Some(status) = self.status() {
            if !alert.status.as_str().eq_ignore_ascii_case(status) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::{AlertStatus, VisaType};
    use chrono::Utc;

    fn alert(country: &str, status: AlertStatus) -> Alert {
        Alert {
            id: format!("{country}-{status}"),
            country: country.into(),
            city: "Chennai".into(),
            visa_type: VisaType::Tourist,
            status,
            created_at: Utc::now(),
        }
    }

    fn filter(country: Option<&str>, status: Option<&str>) -> AlertFilter {
        AlertFilter {
            country: country.map(Into::into),
            status: status.map(Into::into),
        }
    }

    #[test]
    fn country_is_case_insensitive_exact() {
        let f = filter(Some("usa"), None);
        assert!(f.matches(&alert("USA", AlertStatus::Active)));
        assert!(!f.matches(&alert("Canada", AlertStatus::Active)));
        assert!(!f.matches(&alert("USA East", AlertStatus::Active)));
    }

    #[test]
    fn status_is_case_insensitive() {
        let f = filter(None, Some("booked"));
        assert!(f.matches(&alert("UK", AlertStatus::Booked)));
        assert!(!f.matches(&alert("UK", AlertStatus::Active)));
    }

    #[test]
    fn filters_are_and_combined() {
        let f = filter(Some("UK"), Some("Active"));
        assert!(f.matches(&alert("uk", AlertStatus::Active)));
        assert!(!f.matches(&alert("uk", AlertStatus::Expired)));
        assert!(!f.matches(&alert("USA", AlertStatus::Active)));
    }

    #[test]
    fn empty_strings_are_ignored() {
        let f = filter(Some(""), Some(""));
        assert!(f.is_empty());
        assert!(f.matches(&alert("Anywhere", AlertStatus::Expired)));
    }

    #[test]
    fn unknown_status_matches_nothing() {
        let f = filter(None, Some("Pending"));
        assert!(!f.matches(&alert("USA", AlertStatus::Active)));
    }
}
