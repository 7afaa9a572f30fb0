use chrono::Utc;
use panda_common::{Alert, AlertStatus, NewAlert, VisaType};

use super::alert_store::new_id;

pub fn sample_alerts() -> Vec<Alert> {
    let now = Utc::now();
    [
        ("USA", "New Delhi", VisaType::Tourist, AlertStatus::Active),
        ("Canada", "Mumbai", VisaType::Student, AlertStatus::Active),
        ("UK", "Bangalore", VisaType::Business, AlertStatus::Booked),
    ]
    .into_iter()
    .map(|(country, city, visa_type, status)| {
        let new = NewAlert {
            country: country.into(),
            city: city.into(),
            visa_type,
            status: Some(status),
        };
        Alert::from_new(new, new_id(), now)
    })
    .collect()
}
