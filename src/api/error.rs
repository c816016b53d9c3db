use thiserror::Error;

/// Errors produced by the load pipeline.
///
/// `load_config` and `load_meeting_file` surface these to the caller
/// unchanged. `load_all_meetings` downgrades per-file errors to logged
/// warnings and omits the file from its result.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// The server answered with a non-success status.
    #[error("failed to fetch {path}: {status}")]
    Transport { path: String, status: String },

    /// The request never completed (connection, TLS, timeout).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not the JSON we expected.
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: String,
        source: serde_json::Error,
    },

    /// A meeting document is missing a required top-level field.
    #[error("{source_label}: missing required field `{field}`")]
    MissingField {
        field: &'static str,
        source_label: String,
    },

    /// A motion inside a completed meeting is missing a required field.
    #[error("{source_label}: motion {index} is missing required field `{field}`")]
    MissingMotionField {
        index: usize,
        field: &'static str,
        source_label: String,
    },

    /// An operation that needs the configuration ran before `load_config`.
    #[error("configuration must be loaded first")]
    ConfigNotLoaded,
}

impl LoaderError {
    pub(crate) fn from_status(path: &str, status: reqwest::StatusCode) -> Self {
        let text = status.canonical_reason().unwrap_or("unknown status");
        LoaderError::Transport {
            path: path.to_string(),
            status: format!("{} {}", status.as_u16(), text),
        }
    }
}
