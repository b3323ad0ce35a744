// Portfolio API module.
// Provides client and types for interacting with the backend REST API.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::ApiClient;
pub use types::{WorkDraft, WorkItem};
