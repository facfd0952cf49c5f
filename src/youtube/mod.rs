//! # YouTube Integration Module
//!
//! Matches formatted song queries to YouTube videos and fetches their
//! audio-only streams.
//!
//! - [`search`] - Single-result video search against the YouTube Data API.
//!   The first hit is trusted unconditionally; no scoring or filtering by
//!   duration or channel happens. This is a known accuracy limitation.
//! - [`fetch`] - Audio download via the yt-dlp binary. The audio-only
//!   stream is stored as-is; only the file extension is changed afterwards,
//!   no re-encoding takes place.

pub mod fetch;
pub mod search;
