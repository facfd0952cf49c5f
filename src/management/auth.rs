use chrono::Utc;

use crate::{error::DownloadError, spotify, types::Token};

// Validity window of a client-credentials token. Matches the provider's
// default of one hour and is deliberately not read from the token response.
const TOKEN_VALIDITY_SECS: u64 = 3600;

pub struct TokenManager {
    token: Option<Token>,
}

impl TokenManager {
    pub fn new() -> Self {
        TokenManager { token: None }
    }

    pub fn with_token(token: Token) -> Self {
        TokenManager { token: Some(token) }
    }

    /// Returns a ready-to-use `Authorization` header value.
    ///
    /// Performs the client-credentials exchange first if no token is held or
    /// the validity window has elapsed; within the window the stored token
    /// is reused without a second exchange.
    pub async fn get_valid_token(&mut self) -> Result<String, DownloadError> {
        if self.needs_refresh() {
            self.token = Some(spotify::auth::request_token().await?);
        }

        match &self.token {
            Some(token) => Ok(format!("{} {}", token.token_type, token.access_token)),
            None => Err(DownloadError::Auth {
                reason: "no token obtained".to_string(),
            }),
        }
    }

    pub fn needs_refresh(&self) -> bool {
        match &self.token {
            Some(token) => {
                let now = Utc::now().timestamp() as u64;
                now >= token.obtained_at + TOKEN_VALIDITY_SECS
            }
            None => true,
        }
    }

    pub fn current_token(&self) -> Option<&Token> {
        self.token.as_ref()
    }
}
