//! HTTP front of the loan approval model.

pub mod config;
pub mod inference;
pub mod models;
pub mod routes;

pub use config::ServerConfig;
pub use inference::ModelState;
