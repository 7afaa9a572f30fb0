//! Field checks applied to raw request bodies before they reach the store.
//!
//! Checks run on `serde_json::Value` so a wrongly-typed field is reported as
//! a violation alongside the others instead of failing deserialization.
//! Every violation is collected; callers get all of them at once.

use serde_json::{Map, Value};

use panda_common::{AlertPatch, AlertStatus, NewAlert, VisaType};

pub type Violations = Vec<String>;

const NOT_AN_OBJECT: &str = "Request body must be a JSON object";

pub fn validate_create(body: &Value) -> Result<NewAlert, Violations> {
    let obj = as_object(body)?;
    let mut errors = Violations::new();

    let country = non_empty_string(obj.get("country"));
    if country.is_none() {
        errors.push("Country is required and must be a non-empty string".into());
    }

    let city = non_empty_string(obj.get("city"));
    if city.is_none() {
        errors.push("City is required and must be a non-empty string".into());
    }

    let visa_type = match obj.get("visaType").filter(|v| is_provided(v)) {
        None => {
            errors.push("Visa type is required".into());
            None
        }
        Some(v) => {
            let parsed = v.as_str().and_then(|s| s.parse::<VisaType>().ok());
            if parsed.is_none() {
                errors.push(visa_type_message());
            }
            parsed
        }
    };

    let status = match obj.get("status").filter(|v| is_provided(v)) {
        None => None,
        Some(v) => {
            let parsed = v.as_str().and_then(|s| s.parse::<AlertStatus>().ok());
            if parsed.is_none() {
                errors.push(status_message());
            }
            parsed
        }
    };

    match (country, city, visa_type) {
        (Some(country), Some(city), Some(visa_type)) if errors.is_empty() => Ok(NewAlert {
            country,
            city,
            visa_type,
            status,
        }),
        _ => Err(errors),
    }
}

/// Partial-update counterpart of [`validate_create`]: a field is checked only
/// when its key is present, and a present `null` counts as invalid. Keys
/// outside the patchable set (`id`, `createdAt`, ...) are ignored.
pub fn validate_update(body: &Value) -> Result<AlertPatch, Violations> {
    let obj = as_object(body)?;
    let mut errors = Violations::new();
    let mut patch = AlertPatch::default();

    if let Some(v) = obj.get("country") {
        match non_empty_string(Some(v)) {
            Some(country) => patch.country = Some(country),
            None => errors.push("Country must be a non-empty string".into()),
        }
    }

    if let Some(v) = obj.get("city") {
        match non_empty_string(Some(v)) {
            Some(city) => patch.city = Some(city),
            None => errors.push("City must be a non-empty string".into()),
        }
    }

    if let Some(v) = obj.get("visaType") {
        match v.as_str().and_then(|s| s.parse::<VisaType>().ok()) {
            Some(visa_type) => patch.visa_type = Some(visa_type),
            None => errors.push(visa_type_message()),
        }
    }

    if let Some(v) = obj.get("status") {
        match v.as_str().and_then(|s| s.parse::<AlertStatus>().ok()) {
            Some(status) => patch.status = Some(status),
            None => errors.push(status_message()),
        }
    }

    if errors.is_empty() {
        Ok(patch)
    } else {
        Err(errors)
    }
}

fn as_object(body: &Value) -> Result<&Map<String, Value>, Violations> {
    body.as_object().ok_or_else(|| vec![NOT_AN_OBJECT.to_string()])
}

/// The string is kept as sent; trimming only decides emptiness.
fn non_empty_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

// null, false, 0 and "" count as "not provided" for optional create fields.
fn is_provided(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn visa_type_message() -> String {
    format!("Visa type must be one of: {}", VisaType::allowed())
}

fn status_message() -> String {
    format!("Status must be one of: {}", AlertStatus::allowed())
}
