//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! downloader: authentication via the OAuth 2.0 client-credentials grant and
//! retrieval of playlist track metadata. It handles all HTTP communication
//! with Spotify's services including error mapping and request time budgets.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI orchestrator)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (client-credentials token exchange)
//!     └── Playlist Operations (track listing)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication Strategy
//!
//! The client-credentials grant exchanges the application's client ID and
//! secret for a time-boxed access token without a user login step. The flow
//! suits this tool because only public playlist metadata is read; no
//! user-scoped permissions are required. Token lifecycle (reuse within the
//! validity window, replacement on expiry) is handled by
//! [`crate::management::TokenManager`]; this module only performs the raw
//! exchange.
//!
//! ## Error Handling
//!
//! All functions return [`crate::error::DownloadError`] values that name the
//! failing stage and carry the underlying status code or condition. There is
//! no retry or backoff: a non-success response from either endpoint is
//! fatal to the run.
//!
//! ## API Coverage
//!
//! - `POST {token_url}` - client-credentials token exchange
//! - `GET /playlists/{id}/tracks` - playlist track listing (first page)

pub mod auth;
pub mod playlist;
