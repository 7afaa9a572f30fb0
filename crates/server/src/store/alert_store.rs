use chrono::Utc;
use parking_lot::RwLock;
use std::sync::Arc;
use uuid::Uuid;

use panda_common::{Alert, AlertFilter, AlertPatch, NewAlert};

use super::sample::sample_alerts;

/// Random v4 UUID; ids are never reused once an alert is deleted.
pub(super) fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Insertion-ordered in-memory alert collection. Clones share the same
/// underlying data; every operation takes the lock once.
#[derive(Clone, Default)]
pub struct AlertStore {
    alerts: Arc<RwLock<Vec<Alert>>>,
}

impl AlertStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alerts(alerts: Vec<Alert>) -> Self {
        Self {
            alerts: Arc::new(RwLock::new(alerts)),
        }
    }

    pub fn with_sample_data() -> Self {
        Self::with_alerts(sample_alerts())
    }

    pub fn list(&self) -> Vec<Alert> {
        self.alerts.read().clone()
    }

    pub fn filter(&self, filter: &AlertFilter) -> Vec<Alert> {
        self.alerts
            .read()
            .iter()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<Alert> {
        self.alerts.read().iter().find(|a| a.id == id).cloned()
    }

    pub fn create(&self, new: NewAlert) -> Alert {
        let alert = Alert::from_new(new, new_id(), Utc::now());
        self.alerts.write().push(alert.clone());
        alert
    }

    pub fn update(&self, id: &str, patch: AlertPatch) -> Option<Alert> {
        let mut alerts = self.alerts.write();
        let alert = alerts.iter_mut().find(|a| a.id == id)?;
        alert.apply(patch);
        Some(alert.clone())
    }

    pub fn delete(&self, id: &str) -> Option<Alert> {
        let mut alerts = self.alerts.write();
        let index = alerts.iter().position(|a| a.id == id)?;
        Some(alerts.remove(index))
    }

    pub fn count(&self) -> usize {
        self.alerts.read().len()
    }
}
