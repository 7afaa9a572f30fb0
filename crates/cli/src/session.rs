//! View state for the interactive client: the current list, filters,
//! known countries and short-lived banners.

use std::time::{Duration, Instant};

use panda_common::{Alert, AlertFilter, AlertStatus, NewAlert, VisaType};

use crate::client::AlertClient;

pub const BANNER_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
    raised_at: Instant,
}

impl Banner {
    pub fn new(kind: BannerKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            raised_at: Instant::now(),
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.raised_at) >= BANNER_TTL
    }
}

/// Input for the create form. `Default` is the blank form the user returns
/// to after a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertForm {
    pub country: String,
    pub city: String,
    pub visa_type: VisaType,
    pub status: AlertStatus,
}

impl Default for AlertForm {
    fn default() -> Self {
        Self {
            country: String::new(),
            city: String::new(),
            visa_type: VisaType::Tourist,
            status: AlertStatus::Active,
        }
    }
}

impl AlertForm {
    pub fn to_request(&self) -> NewAlert {
        NewAlert {
            country: self.country.clone(),
            city: self.city.clone(),
            visa_type: self.visa_type,
            status: Some(self.status),
        }
    }
}

/// Distinct countries in order of first appearance.
pub fn distinct_countries(alerts: &[Alert]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for alert in alerts {
        if !seen.contains(&alert.country) {
            seen.push(alert.country.clone());
        }
    }
    seen
}

pub struct Session {
    client: AlertClient,
    pub alerts: Vec<Alert>,
    pub loading: bool,
    pub filter: AlertFilter,
    /// Countries seen in the last unfiltered fetch; feeds the country picker.
    pub countries: Vec<String>,
    success: Option<Banner>,
    error: Option<Banner>,
}

impl Session {
    pub fn new(client: AlertClient) -> Self {
        Self {
            client,
            alerts: Vec::new(),
            loading: false,
            filter: AlertFilter::default(),
            countries: Vec::new(),
            success: None,
            error: None,
        }
    }

    pub async fn refresh(&mut self) {
        self.loading = true;
        self.error = None;

        match self.client.list(&self.filter).await {
            Ok(resp) => {
                if self.filter.is_empty() {
                    self.countries = distinct_countries(&resp.data);
                }
                self.alerts = resp.data;
            }
            Err(e) => self.raise(BannerKind::Error, e.to_string()),
        }

        self.loading = false;
    }

    pub async fn set_country_filter(&mut self, country: Option<String>) {
        self.filter.country = country;
        self.refresh().await;
    }

    pub async fn set_status_filter(&mut self, status: Option<AlertStatus>) {
        self.filter.status = status.map(|s| s.as_str().to_string());
        self.refresh().await;
    }

    pub async fn clear_filters(&mut self) {
        self.filter = AlertFilter::default();
        self.refresh().await;
    }

    /// Returns true when the alert was created, so the caller can reset its form.
    pub async fn create(&mut self, form: &AlertForm) -> bool {
        self.error = None;
        match self.client.create(&form.to_request()).await {
            Ok(_) => {
                self.raise(BannerKind::Success, "Alert created successfully!");
                self.refresh().await;
                true
            }
            Err(e) => {
                self.raise(BannerKind::Error, e.to_string());
                false
            }
        }
    }

    /// Advances the alert's status one step along the cycle.
    pub async fn cycle_status(&mut self, id: &str) -> Option<AlertStatus> {
        self.error = None;
        let Some(current) = self.alerts.iter().find(|a| a.id == id).map(|a| a.status) else {
            self.raise(BannerKind::Error, "Alert not found");
            return None;
        };

        let next = current.next();
        match self.client.update_status(id, next).await {
            Ok(_) => {
                self.raise(BannerKind::Success, format!("Status updated to {next}!"));
                self.refresh().await;
                Some(next)
            }
            Err(e) => {
                self.raise(BannerKind::Error, e.to_string());
                None
            }
        }
    }

    /// Deletes without asking; confirmation belongs to the caller.
    pub async fn delete(&mut self, id: &str) -> bool {
        self.error = None;
        match self.client.delete(id).await {
            Ok(_) => {
                self.raise(BannerKind::Success, "Alert deleted successfully!");
                self.refresh().await;
                true
            }
            Err(e) => {
                self.raise(BannerKind::Error, e.to_string());
                false
            }
        }
    }

    fn raise(&mut self, kind: BannerKind, message: impl Into<String>) {
        let banner = Banner::new(kind, message);
        match kind {
            BannerKind::Success => self.success = Some(banner),
            BannerKind::Error => self.error = Some(banner),
        }
    }

    pub fn expire_banners_at(&mut self, now: Instant) {
        if self.success.as_ref().is_some_and(|b| b.is_expired_at(now)) {
            self.success = None;
        }
        if self.error.as_ref().is_some_and(|b| b.is_expired_at(now)) {
            self.error = None;
        }
    }

    pub fn expire_banners(&mut self) {
        self.expire_banners_at(Instant::now());
    }

    /// Live banners, error first.
    pub fn banners(&self) -> impl Iterator<Item = &Banner> {
        self.error.iter().chain(self.success.iter())
    }

    #[cfg(test)]
    pub fn success(&self) -> Option<&str> {
        self.success.as_ref().map(|b| b.message.as_str())
    }

    #[cfg(test)]
    pub fn error(&self) -> Option<&str> {
        self.error.as_ref().map(|b| b.message.as_str())
    }
}
