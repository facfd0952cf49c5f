//! Spotify Playlist Downloader CLI Library
//!
//! This library provides the building blocks for downloading the tracks of a
//! Spotify playlist as local audio files. Playlist metadata is resolved via
//! the Spotify Web API (client-credentials grant), each track is matched to a
//! YouTube video through the YouTube Data API, and the audio-only stream of
//! the match is fetched and stored with an audio file extension.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Failure taxonomy of the download pipeline
//! - `management` - Credential lifecycle management
//! - `spotify` - Spotify Web API client implementation
//! - `youtube` - YouTube search and media fetching
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers

pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod spotify;
pub mod types;
pub mod utils;
pub mod youtube;

/// Prints an informational message with a blue bullet point.
///
/// Used for general status updates throughout the application. Accepts the
/// same arguments as `println!`.
///
/// # Example
///
/// ```
/// info!("Fetching tracks for playlist {}...", playlist_id);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Used to confirm that an operation completed. Accepts the same arguments
/// as `println!`.
///
/// # Example
///
/// ```
/// success!("Downloaded {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the process with exit code 1 immediately after printing, so it
/// is reserved for unrecoverable conditions outside the download pipeline
/// (the pipeline itself reports typed errors that carry their own exit
/// codes, see `error::DownloadError`).
///
/// # Example
///
/// ```
/// error!("Cannot load environment. Err: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Highlights recoverable issues that don't require termination, such as a
/// truncated playlist page or a skipped track. Accepts the same arguments
/// as `println!`.
///
/// # Example
///
/// ```
/// warning!("Playlist has more tracks than a single page returns");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
