//! HTTP transport module.
//!
//! Provides the `HttpClient` used to fetch configuration and meeting
//! documents, and the `LoaderError` taxonomy shared by the whole pipeline.

pub mod client;
pub mod error;

pub use client::HttpClient;
pub use error::LoaderError;
