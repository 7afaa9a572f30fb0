pub mod alert;
pub mod envelope;
pub mod filter;
pub mod timestamp;

pub use alert::{Alert, AlertPatch, AlertStatus, NewAlert, ParseEnumError, VisaType};
pub use envelope::{ErrorResponse, HealthResponse, ItemResponse, ListResponse};
pub use filter::AlertFilter;
