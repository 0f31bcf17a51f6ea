//! Jolpica F1 API integration
//!
//! HTTP client for the Jolpica (Ergast successor) Formula 1 data API.
//! Payloads are passed through untouched; this crate only builds request
//! paths from a fixed resource vocabulary and normalizes failures.

mod client;
mod resource;

pub use client::{F1Api, JolpicaClient, JolpicaConfig, JolpicaError};
pub use resource::Resource;
