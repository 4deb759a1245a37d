//! JotForm REST API client.
//!
//! This crate provides a blocking client for the JotForm API v1. It covers
//! the user, form, question, submission, folder and report resources, passing
//! resource payloads through as raw JSON for the caller to interpret.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
mod serde_helpers;

pub use client::JotformClient;
pub use client::builder::JotformClientBuilder;
pub use error::{ClientError, Result};
pub use models::{ApiResponse, FormDefinition, HistoryQuery, ListOptions};
