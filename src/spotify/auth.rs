use std::time::Duration;

use chrono::Utc;
use reqwest::Client;

use crate::{
    config,
    error::DownloadError,
    types::{Token, TokenResponse},
};

/// Requests a new access token via the OAuth 2.0 client-credentials grant.
///
/// Sends the application's client ID and secret as a form-encoded POST to
/// the configured token endpoint and returns the resulting token together
/// with the timestamp it was obtained at. The caller decides how long the
/// token stays valid; the response's own expiry field is ignored in favor
/// of the provider's fixed one-hour default.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - Fresh access token with its type and obtained-at timestamp
/// - `Err(DownloadError::Auth)` - Non-success status or malformed response
/// - `Err(DownloadError::Timeout)` - The exchange exceeded the HTTP time budget
///
/// # Error Conditions
///
/// Common failures include:
/// - Invalid client ID or secret (401 from the token endpoint)
/// - Network connectivity issues
/// - Spotify accounts service errors
///
/// # Example
///
/// ```
/// let token = request_token().await?;
/// println!("Got {} token", token.token_type);
/// ```
pub async fn request_token() -> Result<Token, DownloadError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(config::http_timeout_secs()))
        .build()
        .map_err(|e| DownloadError::Auth {
            reason: e.to_string(),
        })?;

    let response = client
        .post(&config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "client_credentials"),
            ("client_id", &config::spotify_client_id()),
            ("client_secret", &config::spotify_client_secret()),
        ])
        .send()
        .await
        .map_err(|e| {
            DownloadError::from_transport(e, "Spotify token exchange", |reason| {
                DownloadError::Auth { reason }
            })
        })?;

    if !response.status().is_success() {
        return Err(DownloadError::Auth {
            reason: format!("status {}", response.status()),
        });
    }

    let json = response
        .json::<TokenResponse>()
        .await
        .map_err(|e| DownloadError::Auth {
            reason: e.to_string(),
        })?;

    Ok(Token {
        access_token: json.access_token,
        token_type: json.token_type,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
