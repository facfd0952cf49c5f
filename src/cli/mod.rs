//! # CLI Module
//!
//! This module provides the command-line interface layer: it implements the
//! user-facing `download` command and coordinates between the Spotify
//! integration, the YouTube integration, and credential management.
//!
//! ## Control Flow
//!
//! ```text
//! CLI Layer (argument handling, progress feedback)
//!     ↓
//! Management Layer (credential lifecycle)
//!     ↓
//! API Layers (Spotify, YouTube)
//!     ↓
//! Network Layer (HTTP requests, yt-dlp subprocess)
//! ```
//!
//! The pipeline is strictly sequential: the playlist is resolved once, then
//! each track is searched and fetched one at a time in playlist order. By
//! default the first failure aborts the run; with `--keep-going` per-track
//! failures are collected and reported in the end-of-run summary instead.

mod download;

pub use download::download;
