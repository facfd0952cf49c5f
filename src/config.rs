//! Configuration management for the Spotify Playlist Downloader.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration including Spotify API credentials, the
//! YouTube Data API key, and network time budgets.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `spodlcli/.env`. Variables already present in
/// the environment take precedence; a missing file is not an error.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/spodlcli/.env`
/// - macOS: `~/Library/Application Support/spodlcli/.env`
/// - Windows: `%LOCALAPPDATA%/spodlcli/.env`
///
/// # Errors
///
/// This function will return an error if:
/// - The parent directory cannot be created
/// - The `.env` file exists but cannot be read or parsed
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spodlcli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if async_fs::metadata(&path).await.is_ok() {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    }

    Ok(())
}

/// Returns the Spotify API client ID for the client-credentials grant.
///
/// Retrieves the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable which
/// contains the client ID obtained when registering the application with
/// Spotify's developer platform.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").expect("SPOTIFY_API_AUTH_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret for the client-credentials grant.
///
/// Retrieves the `SPOTIFY_API_AUTH_CLIENT_SECRET` environment variable. The
/// client secret should be kept confidential and never exposed in logs or
/// version control.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_SECRET` environment variable is not set.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_SECRET").expect("SPOTIFY_API_AUTH_CLIENT_SECRET must be set")
}

/// Returns the Spotify OAuth token exchange URL.
///
/// Retrieves the `SPOTIFY_API_TOKEN_URL` environment variable, e.g.
/// `https://accounts.spotify.com/api/token`.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_TOKEN_URL` environment variable is not set.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").expect("SPOTIFY_API_TOKEN_URL must be set")
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable, e.g.
/// `https://api.spotify.com/v1`.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_URL` environment variable is not set.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").expect("SPOTIFY_API_URL must be set")
}

/// Returns the YouTube Data API key used for video searches.
///
/// # Panics
///
/// Panics if the `YOUTUBE_API_KEY` environment variable is not set.
pub fn youtube_api_key() -> String {
    env::var("YOUTUBE_API_KEY").expect("YOUTUBE_API_KEY must be set")
}

/// Returns the YouTube Data API base URL.
///
/// Retrieves the `YOUTUBE_API_URL` environment variable, e.g.
/// `https://www.googleapis.com/youtube/v3`.
///
/// # Panics
///
/// Panics if the `YOUTUBE_API_URL` environment variable is not set.
pub fn youtube_apiurl() -> String {
    env::var("YOUTUBE_API_URL").expect("YOUTUBE_API_URL must be set")
}

/// Time budget in seconds for a single HTTP request.
///
/// Read from `HTTP_TIMEOUT_SECS`, defaulting to 30 seconds when unset or
/// unparsable.
pub fn http_timeout_secs() -> u64 {
    env::var("HTTP_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(30)
}

/// Time budget in seconds for downloading a single track.
///
/// Read from `FETCH_TIMEOUT_SECS`, defaulting to 300 seconds when unset or
/// unparsable.
pub fn fetch_timeout_secs() -> u64 {
    env::var("FETCH_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(300)
}

/// Name or path of the yt-dlp binary used for media fetching.
///
/// Read from `YTDLP_BIN`, defaulting to `yt-dlp` on the `PATH`.
pub fn ytdlp_bin() -> String {
    env::var("YTDLP_BIN").unwrap_or_else(|_| "yt-dlp".to_string())
}
