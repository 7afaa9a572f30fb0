mod alerts;
mod error;
mod fallback;
mod health;
mod router;

pub use error::{panic_response, ApiError};
pub use router::{api_routes, router, with_middleware, AppState};
