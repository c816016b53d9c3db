//! minutecache - fetch, validate and cache town council meeting records.
//!
//! The crate is built around a single [`Loader`] that owns two pieces of
//! state: the currently loaded [`Configuration`] and an in-memory cache of
//! validated [`Meeting`] documents keyed by file identifier. Loading a
//! meeting fetches it over HTTP, decodes the JSON body, validates it
//! against the configuration, and memoizes the result;
//! [`Loader::load_all_meetings`] fans out over every configured file
//! concurrently, tolerates individual failures, and returns the survivors
//! sorted most recent first.

pub mod api;
pub mod loader;
pub mod models;
pub mod validate;

pub use api::{HttpClient, LoaderError};
pub use loader::{Loader, Preloaded, DEFAULT_CONFIG_PATH};
pub use models::{Configuration, Meeting, MeetingStatus, Motion};
pub use validate::Warning;
