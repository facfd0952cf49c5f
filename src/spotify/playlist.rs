use std::time::Duration;

use reqwest::{Client, header::AUTHORIZATION};

use crate::{
    config,
    error::DownloadError,
    types::{PlaylistTracksResponse, Track},
    warning,
};

/// Retrieves the track listing of a playlist from the Spotify Web API.
///
/// Issues a single request for the playlist's tracks and maps each returned
/// entry into a [`Track`] record (title plus artist names in the order the
/// API returns them). Entries without track metadata - Spotify returns
/// these for removed or local-file items - are skipped with a warning.
///
/// Only the first page of results is consumed. When the response carries a
/// `next` cursor the remaining tracks are left behind and a warning reports
/// how many were skipped.
///
/// # Arguments
///
/// * `playlist_id` - Identifier extracted from the playlist link
/// * `auth_header` - Ready-to-use `Authorization` header value
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Track>)` - Tracks of the playlist's first page, in playlist order
/// - `Err(DownloadError::Resolve)` - Non-success status or malformed response
/// - `Err(DownloadError::Timeout)` - The request exceeded the HTTP time budget
pub async fn get_tracks(playlist_id: &str, auth_header: &str) -> Result<Vec<Track>, DownloadError> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );

    let client = Client::builder()
        .timeout(Duration::from_secs(config::http_timeout_secs()))
        .build()
        .map_err(|e| DownloadError::Resolve {
            reason: e.to_string(),
        })?;

    let response = client
        .get(&api_url)
        .header(AUTHORIZATION, auth_header)
        .send()
        .await
        .map_err(|e| {
            DownloadError::from_transport(e, "playlist request", |reason| DownloadError::Resolve {
                reason,
            })
        })?;

    if !response.status().is_success() {
        return Err(DownloadError::Resolve {
            reason: format!("status {}", response.status()),
        });
    }

    let json = response
        .json::<PlaylistTracksResponse>()
        .await
        .map_err(|e| DownloadError::Resolve {
            reason: e.to_string(),
        })?;

    if json.next.is_some() {
        let fetched = json.items.len() as u64;
        let total = json.total.unwrap_or(fetched);
        warning!(
            "Playlist has {} tracks but only the first {} were returned; the rest are skipped.",
            total,
            fetched
        );
    }

    let mut tracks = Vec::new();
    for item in json.items {
        match item.track {
            Some(track) => tracks.push(Track {
                title: track.name,
                artists: track.artists.into_iter().map(|a| a.name).collect(),
            }),
            None => warning!("Skipping a playlist entry without track metadata."),
        }
    }

    Ok(tracks)
}
