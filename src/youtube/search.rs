use std::time::Duration;

use reqwest::Client;

use crate::{
    config,
    error::DownloadError,
    types::{SearchResponse, VideoMatch},
};

/// Searches YouTube for a song query and returns the best-guess video.
///
/// Issues a single video-search request constrained to exactly one result
/// and returns that result's video identifier. There is no disambiguation
/// among alternatives: whatever the search API ranks first wins.
///
/// # Arguments
///
/// * `query` - Formatted song query (title plus artist names)
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(VideoMatch)` - Identifier of the first search result
/// - `Err(DownloadError::NoMatch)` - The search returned zero results
/// - `Err(DownloadError::Search)` - Non-success status or malformed response
/// - `Err(DownloadError::Timeout)` - The request exceeded the HTTP time budget
pub async fn find_best_match(query: &str) -> Result<VideoMatch, DownloadError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(config::http_timeout_secs()))
        .build()
        .map_err(|e| DownloadError::Search {
            reason: e.to_string(),
        })?;

    let api_url = format!("{uri}/search", uri = &config::youtube_apiurl());
    let api_key = config::youtube_api_key();

    let response = client
        .get(&api_url)
        .query(&[
            ("part", "snippet"),
            ("q", query),
            ("type", "video"),
            ("maxResults", "1"),
            ("key", api_key.as_str()),
        ])
        .send()
        .await
        .map_err(|e| {
            DownloadError::from_transport(e, "video search", |reason| DownloadError::Search {
                reason,
            })
        })?;

    if !response.status().is_success() {
        return Err(DownloadError::Search {
            reason: format!("status {}", response.status()),
        });
    }

    let json = response
        .json::<SearchResponse>()
        .await
        .map_err(|e| DownloadError::Search {
            reason: e.to_string(),
        })?;

    match json.items.into_iter().next() {
        Some(result) => Ok(VideoMatch {
            video_id: result.id.video_id,
        }),
        None => Err(DownloadError::NoMatch {
            query: query.to_string(),
        }),
    }
}
