//! The loader: config store, meeting cache, and aggregation.
//!
//! A `Loader` owns its configuration slot and its cache outright, so
//! independent instances share nothing. All state mutation happens with
//! `&mut self` between awaits; the concurrent fetch tasks borrow only the
//! HTTP client and the configuration immutably and return owned results.

use std::cmp::Reverse;
use std::collections::HashMap;

use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::api::{HttpClient, LoaderError};
use crate::models::{Configuration, Meeting};
use crate::validate;

/// Config file fetched by `preload` when no explicit path is given.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Result of a full preload: the configuration plus every meeting that
/// loaded cleanly, most recent first.
#[derive(Debug, Clone)]
pub struct Preloaded {
    pub config: Configuration,
    pub meetings: Vec<Meeting>,
}

/// Fetches, validates and caches council meeting records.
pub struct Loader {
    client: HttpClient,
    base_url: String,
    config: Option<Configuration>,
    cache: HashMap<String, Meeting>,
}

impl Loader {
    pub fn new(base_url: impl Into<String>) -> Result<Self, LoaderError> {
        Ok(Self {
            client: HttpClient::new()?,
            base_url: base_url.into(),
            config: None,
            cache: HashMap::new(),
        })
    }

    /// Resolve a file identifier against the base URL. Identifiers that are
    /// already absolute URLs are used verbatim.
    fn resolve(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!(
                "{}/{}",
                self.base_url.trim_end_matches('/'),
                path.trim_start_matches('/')
            )
        }
    }

    /// Fetch and store the configuration.
    ///
    /// Overwrites any previously loaded configuration, no merge. The
    /// meeting cache is left alone: meetings validated under the old
    /// configuration stay cached until `clear_cache`.
    pub async fn load_config(&mut self, path: &str) -> Result<Configuration, LoaderError> {
        let url = self.resolve(path);
        let config: Configuration = self.client.fetch_json(&url, path).await?;
        debug!(path, files = config.meeting_files.len(), "configuration loaded");
        self.config = Some(config.clone());
        Ok(config)
    }

    /// Current configuration, if one has been loaded. Never fetches.
    pub fn config(&self) -> Option<&Configuration> {
        self.config.as_ref()
    }

    /// Load one meeting file, memoized by `path`.
    ///
    /// A cache hit returns immediately with no fetch and no re-validation.
    /// On a miss the document is fetched, decoded and validated; validation
    /// warnings are logged and the document is cached anyway, but a hard
    /// validation failure aborts the load and caches nothing, so a later
    /// call retries the fetch.
    pub async fn load_meeting_file(&mut self, path: &str) -> Result<Meeting, LoaderError> {
        if let Some(meeting) = self.cache.get(path) {
            debug!(path, "cache hit");
            return Ok(meeting.clone());
        }

        let url = self.resolve(path);
        let meeting = fetch_meeting(&self.client, &url, path, self.config.as_ref()).await?;
        self.cache.insert(path.to_string(), meeting.clone());
        Ok(meeting)
    }

    /// Cached meeting for `path`, if any. Pure lookup, no side effects.
    pub fn cached_meeting(&self, path: &str) -> Option<&Meeting> {
        self.cache.get(path)
    }

    /// Drop every cached meeting. The configuration is unaffected.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Load every configured meeting file, tolerating individual failures.
    ///
    /// Requires a loaded configuration; the precondition is checked before
    /// any fetch is issued. All uncached files are fetched concurrently and
    /// the barrier waits for every one of them regardless of individual
    /// outcomes. Per-file failures are logged and the file is omitted; the
    /// aggregate call itself never fails because one file did. Survivors
    /// come back sorted descending by date, with the `meetingFiles` order
    /// breaking ties.
    pub async fn load_all_meetings(&mut self) -> Result<Vec<Meeting>, LoaderError> {
        let paths = match self.config.as_ref() {
            Some(config) => config.meeting_files.clone(),
            None => return Err(LoaderError::ConfigNotLoaded),
        };

        // Cache hits are resolved up front; misses fetch concurrently and
        // are stored only after the barrier. Consequence: a path listed
        // twice while uncached is fetched twice - there is no per-key
        // in-flight dedup, and the second store overwrites the first with
        // an equivalent value.
        let plan: Vec<(String, Option<Meeting>, String)> = paths
            .into_iter()
            .map(|path| {
                let cached = self.cache.get(&path).cloned();
                let url = self.resolve(&path);
                (path, cached, url)
            })
            .collect();

        let client = &self.client;
        let config = self.config.as_ref();
        let tasks: Vec<_> = plan
            .into_iter()
            .map(|(path, cached, url)| async move {
                let outcome = match cached {
                    Some(meeting) => Ok((meeting, false)),
                    None => fetch_meeting(client, &url, &path, config)
                        .await
                        .map(|meeting| (meeting, true)),
                };
                (path, outcome)
            })
            .collect();

        let settled = join_all(tasks).await;

        let mut meetings = Vec::with_capacity(settled.len());
        for (path, outcome) in settled {
            match outcome {
                Ok((meeting, fresh)) => {
                    if fresh {
                        self.cache.insert(path, meeting.clone());
                    }
                    meetings.push(meeting);
                }
                Err(e) => warn!(path = %path, error = %e, "skipping meeting file"),
            }
        }

        sort_by_date_desc(&mut meetings);
        Ok(meetings)
    }

    /// Load the default configuration, then every meeting it names.
    ///
    /// Per-file tolerance applies only inside `load_all_meetings`; a
    /// failure to load the configuration itself is fatal here.
    pub async fn preload(&mut self) -> Result<Preloaded, LoaderError> {
        let config = self.load_config(DEFAULT_CONFIG_PATH).await?;
        let meetings = self.load_all_meetings().await?;
        info!(count = meetings.len(), "meetings loaded");
        Ok(Preloaded { config, meetings })
    }
}

/// Fetch, decode and validate a single meeting document. Warnings are
/// logged here; only hard failures propagate.
async fn fetch_meeting(
    client: &HttpClient,
    url: &str,
    path: &str,
    config: Option<&Configuration>,
) -> Result<Meeting, LoaderError> {
    let meeting: Meeting = client.fetch_json(url, path).await?;
    for warning in validate::validate(&meeting, path, config)? {
        warn!(path, %warning, "validation warning");
    }
    Ok(meeting)
}

/// Stable descending sort by parsed date. Meetings whose date does not
/// parse sort as oldest; equal keys keep their existing relative order.
fn sort_by_date_desc(meetings: &mut [Meeting]) {
    for meeting in meetings.iter() {
        if meeting.date_key().is_none() {
            warn!(
                date = meeting.date.as_deref().unwrap_or(""),
                "unparseable meeting date, sorting as oldest"
            );
        }
    }
    meetings.sort_by_cached_key(|meeting| Reverse(meeting.date_key()));
}
