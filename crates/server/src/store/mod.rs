mod alert_store;
mod sample;

pub use alert_store::AlertStore;
pub use sample::sample_alerts;
