use spodlcli::types::{PlaylistTracksResponse, SearchResponse, TokenResponse};

#[test]
fn test_deserialize_token_response_ignores_expiry_field() {
    // The provider reports its own expiry; the validity window is fixed
    // application-side, so the field is simply not modeled.
    let json = r#"{"access_token":"BQC-abc","token_type":"Bearer","expires_in":3600}"#;
    let response: TokenResponse = serde_json::from_str(json).unwrap();

    assert_eq!(response.access_token, "BQC-abc");
    assert_eq!(response.token_type, "Bearer");
}

#[test]
fn test_deserialize_playlist_tracks_response() {
    let json = r#"{
        "items": [
            {"track": {"name": "Song A", "artists": [{"name": "A"}, {"name": "B"}]}},
            {"track": null}
        ],
        "next": null,
        "total": 2
    }"#;
    let response: PlaylistTracksResponse = serde_json::from_str(json).unwrap();

    assert_eq!(response.items.len(), 2);
    assert!(response.next.is_none());
    assert_eq!(response.total, Some(2));

    let first = response.items[0].track.as_ref().unwrap();
    assert_eq!(first.name, "Song A");
    let artists: Vec<&str> = first.artists.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(artists, vec!["A", "B"]);

    // Removed or local-file entries come back without track metadata
    assert!(response.items[1].track.is_none());
}

#[test]
fn test_deserialize_paginated_playlist_response_keeps_cursor() {
    let json = r#"{
        "items": [{"track": {"name": "Song", "artists": [{"name": "A"}]}}],
        "next": "https://api.spotify.com/v1/playlists/x/tracks?offset=100",
        "total": 250
    }"#;
    let response: PlaylistTracksResponse = serde_json::from_str(json).unwrap();

    assert!(response.next.is_some());
    assert_eq!(response.total, Some(250));
}

#[test]
fn test_deserialize_search_response() {
    let json = r#"{"items":[{"id":{"kind":"youtube#video","videoId":"dQw4w9WgXcQ"}}]}"#;
    let response: SearchResponse = serde_json::from_str(json).unwrap();

    assert_eq!(response.items.len(), 1);
    assert_eq!(response.items[0].id.video_id, "dQw4w9WgXcQ");
}

#[test]
fn test_deserialize_empty_search_response() {
    let json = r#"{"items":[]}"#;
    let response: SearchResponse = serde_json::from_str(json).unwrap();

    assert!(response.items.is_empty());
}
