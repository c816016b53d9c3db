//! Data models for council meeting records.
//!
//! - `Configuration`: the loader settings, including the list of meeting
//!   files and the council roster
//! - `Meeting`, `Motion`: one meeting record and its agenda items
//! - `MeetingStatus`: the known meeting lifecycle states

pub mod config;
pub mod meeting;

pub use config::Configuration;
pub use meeting::{Meeting, MeetingStatus, Motion};
