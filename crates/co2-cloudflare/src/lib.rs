//! Async client for the Cloudflare GraphQL zone-analytics API.
//!
//! One query surface: daily HTTP request and byte aggregates for a zone
//! over a bounded date window (`httpRequests1dGroups`). The client is
//! deliberately small -- a single bearer-authenticated POST with
//! null-proof response extraction. Callers decide what a failure means;
//! this crate only reports it as a typed [`Error`].

pub mod analytics;
pub mod client;
pub mod error;
pub mod transport;

pub use analytics::TrafficGroup;
pub use client::{CloudflareClient, GRAPHQL_ENDPOINT};
pub use error::Error;
pub use transport::TransportConfig;
