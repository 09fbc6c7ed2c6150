//! Server crate for the StreamNexus recommendation service.
//!
//! This crate contains the service facade that coordinates the catalog,
//! the recommendation engine and the analytics log, plus the thin HTTP
//! layer in front of it.

pub mod api;
pub mod config;
pub mod error;
pub mod service;

pub use api::create_router;
pub use config::Config;
pub use service::{ServiceStatus, StreamService};
