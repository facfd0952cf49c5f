//! Failure taxonomy of the download pipeline.
//!
//! Every stage of the pipeline reports its failures through
//! [`DownloadError`]. A failure is fatal at the point of occurrence unless
//! the run was started with `--keep-going`, in which case per-track failures
//! are collected into the run summary instead of aborting the run.

use thiserror::Error;

/// The failure kinds of the download pipeline, one per stage.
///
/// Each kind maps to a distinct non-zero process exit code (see
/// [`DownloadError::exit_code`]) so scripted callers can tell the failing
/// stage apart. Reasons are carried as plain strings; the underlying status
/// code or condition is folded into the message.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// The given link does not have the exact
    /// `https://open.spotify.com/playlist/<id>` shape.
    #[error("invalid Spotify playlist link: {link}")]
    InvalidLink { link: String },

    /// The client-credentials token exchange did not succeed.
    #[error("Spotify token exchange failed: {reason}")]
    Auth { reason: String },

    /// The playlist track listing could not be retrieved.
    #[error("failed to retrieve playlist tracks: {reason}")]
    Resolve { reason: String },

    /// The video search request itself failed.
    #[error("video search failed: {reason}")]
    Search { reason: String },

    /// The video search returned zero results for a query.
    #[error("no match found for query '{query}'")]
    NoMatch { query: String },

    /// The matched video exposes no audio-only stream variant.
    #[error("no audio-only stream available for video {video_id}")]
    NoAudioStream { video_id: String },

    /// Downloading or storing the audio stream failed.
    #[error("failed to fetch audio: {reason}")]
    Fetch { reason: String },

    /// A network operation or the downloader exceeded its time budget.
    #[error("{context} timed out after {seconds}s")]
    Timeout { context: String, seconds: u64 },
}

impl DownloadError {
    /// Process exit code for this failure kind.
    ///
    /// Codes 2-7 cover the pipeline stages; exit code 1 is reserved for
    /// untyped fatal conditions (configuration loading) and 0 for normal
    /// completion.
    pub fn exit_code(&self) -> i32 {
        match self {
            DownloadError::InvalidLink { .. } => 2,
            DownloadError::Auth { .. } => 3,
            DownloadError::Resolve { .. } => 4,
            DownloadError::Search { .. } | DownloadError::NoMatch { .. } => 5,
            DownloadError::NoAudioStream { .. } | DownloadError::Fetch { .. } => 6,
            DownloadError::Timeout { .. } => 7,
        }
    }

    /// Classifies a transport-level error from the HTTP client.
    ///
    /// Timeouts get their own variant so they surface distinctly; every
    /// other transport failure is handed to the stage-specific constructor.
    pub fn from_transport<F>(err: reqwest::Error, context: &str, stage: F) -> Self
    where
        F: FnOnce(String) -> DownloadError,
    {
        if err.is_timeout() {
            DownloadError::Timeout {
                context: context.to_string(),
                seconds: crate::config::http_timeout_secs(),
            }
        } else {
            stage(err.to_string())
        }
    }
}
