pub mod config;
pub mod logging;
pub mod middleware;
pub mod rest;
pub mod shutdown;
pub mod store;
pub mod validation;
