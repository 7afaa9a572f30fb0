use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    pub value: String,
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognised value '{}'", self.value)
    }
}

impl std::error::Error for ParseEnumError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisaType {
    Tourist,
    Business,
    Student,
}

impl VisaType {
    pub const ALL: [VisaType; 3] = [VisaType::Tourist, VisaType::Business, VisaType::Student];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tourist => "Tourist",
            Self::Business => "Business",
            Self::Student => "Student",
        }
    }

    /// Comma-separated list of accepted names, as shown in validation messages.
    pub fn allowed() -> String {
        Self::ALL.map(|v| v.as_str()).join(", ")
    }
}

impl fmt::Display for VisaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VisaType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ParseEnumError { value: s.to_string() })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertStatus {
    #[default]
    Active,
    Booked,
    Expired,
}

impl AlertStatus {
    pub const ALL: [AlertStatus; 3] = [AlertStatus::Active, AlertStatus::Booked, AlertStatus::Expired];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Booked => "Booked",
            Self::Expired => "Expired",
        }
    }

    pub fn allowed() -> String {
        Self::ALL.map(|s| s.as_str()).join(", ")
    }

    /// Active → Booked → Expired → Active.
    pub fn next(self) -> Self {
        match self {
            Self::Active => Self::Booked,
            Self::Booked => Self::Expired,
            Self::Expired => Self::Active,
        }
    }
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ParseEnumError { value: s.to_string() })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub country: String,
    pub city: String,
    pub visa_type: VisaType,
    pub status: AlertStatus,
    #[serde(with = "crate::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Alert {
    pub fn from_new(new: NewAlert, id: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            country: new.country,
            city: new.city,
            visa_type: new.visa_type,
            status: new.status.unwrap_or_default(),
            created_at,
        }
    }

    /// Overwrites the fields present in `patch`. `id` and `created_at` are
    /// not part of a patch and so never change.
    pub fn apply(&mut self, patch: AlertPatch) {
        if let Some(country) = patch.country {
            self.country = country;
        }
        if let Some(city) = patch.city {
            self.city = city;
        }
        if let Some(visa_type) = patch.visa_type {
            self.visa_type = visa_type;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAlert {
    pub country: String,
    pub city: String,
    pub visa_type: VisaType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AlertStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visa_type: Option<VisaType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AlertStatus>,
}

impl AlertPatch {
    pub fn status(status: AlertStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.country.is_none()
            && self.city.is_none()
            && self.visa_type.is_none()
            && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Alert {
        Alert {
            id: "alert-1".into(),
            country: "USA".into(),
            city: "New Delhi".into(),
            visa_type: VisaType::Tourist,
            status: AlertStatus::Active,
            created_at: Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn status_cycle_wraps() {
        assert_eq!(AlertStatus::Active.next(), AlertStatus::Booked);
        assert_eq!(AlertStatus::Booked.next(), AlertStatus::Expired);
        assert_eq!(AlertStatus::Expired.next(), AlertStatus::Active);
    }

    #[test]
    fn parse_is_exact_case() {
        assert_eq!("Student".parse::<VisaType>().unwrap(), VisaType::Student);
        assert!("student".parse::<VisaType>().is_err());
        assert_eq!("Booked".parse::<AlertStatus>().unwrap(), AlertStatus::Booked);
        assert!("Pending".parse::<AlertStatus>().is_err());
    }

    #[test]
    fn allowed_lists_match_messages() {
        assert_eq!(VisaType::allowed(), "Tourist, Business, Student");
        assert_eq!(AlertStatus::allowed(), "Active, Booked, Expired");
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["visaType"], "Tourist");
        assert_eq!(json["status"], "Active");
        assert_eq!(json["createdAt"], "2026-03-01T09:30:00.000Z");
        assert!(json.get("visa_type").is_none());
    }

    #[test]
    fn from_new_defaults_status() {
        let new = NewAlert {
            country: "UK".into(),
            city: "Bangalore".into(),
            visa_type: VisaType::Business,
            status: None,
        };
        let alert = Alert::from_new(new, "x".into(), Utc::now());
        assert_eq!(alert.status, AlertStatus::Active);
    }

    #[test]
    fn apply_only_touches_present_fields() {
        let mut alert = sample();
        let before = alert.clone();
        alert.apply(AlertPatch::status(AlertStatus::Expired));

        assert_eq!(alert.status, AlertStatus::Expired);
        assert_eq!(alert.id, before.id);
        assert_eq!(alert.country, before.country);
        assert_eq!(alert.city, before.city);
        assert_eq!(alert.visa_type, before.visa_type);
        assert_eq!(alert.created_at, before.created_at);
    }

    #[test]
    fn patch_serialization_omits_absent_fields() {
        let json = serde_json::to_string(&AlertPatch::status(AlertStatus::Booked)).unwrap();
        assert_eq!(json, r#"{"status":"Booked"}"#);
        assert!(AlertPatch::default().is_empty());
    }
}
