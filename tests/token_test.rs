use chrono::Utc;
use spodlcli::management::TokenManager;
use spodlcli::types::Token;

// Helper function to create a test token obtained at the given timestamp
fn create_test_token(obtained_at: u64) -> Token {
    Token {
        access_token: "BQC-test-access-token".to_string(),
        token_type: "Bearer".to_string(),
        obtained_at,
    }
}

#[test]
fn test_empty_manager_needs_refresh() {
    let manager = TokenManager::new();
    assert!(manager.needs_refresh());
    assert!(manager.current_token().is_none());
}

#[test]
fn test_fresh_token_is_reused() {
    let now = Utc::now().timestamp() as u64;
    let manager = TokenManager::with_token(create_test_token(now));

    // Within the validity window no second exchange is triggered
    assert!(!manager.needs_refresh());
}

#[test]
fn test_token_near_end_of_window_is_still_reused() {
    let now = Utc::now().timestamp() as u64;
    let manager = TokenManager::with_token(create_test_token(now - 3500));
    assert!(!manager.needs_refresh());
}

#[test]
fn test_expired_token_triggers_refresh() {
    let now = Utc::now().timestamp() as u64;
    let manager = TokenManager::with_token(create_test_token(now - 3601));
    assert!(manager.needs_refresh());
}

#[test]
fn test_stored_token_is_kept_verbatim() {
    let now = Utc::now().timestamp() as u64;
    let manager = TokenManager::with_token(create_test_token(now));

    let token = manager.current_token().expect("token was installed");
    assert_eq!(token.access_token, "BQC-test-access-token");
    assert_eq!(token.token_type, "Bearer");
    assert_eq!(token.obtained_at, now);
}
