use spodlcli::types::Track;
use spodlcli::utils::*;

// Helper function to create a test track
fn create_test_track(title: &str, artists: &[&str]) -> Track {
    Track {
        title: title.to_string(),
        artists: artists.iter().map(|a| a.to_string()).collect(),
    }
}

#[test]
fn test_is_spotify_playlist_link_accepts_exact_shape() {
    assert!(is_spotify_playlist_link(
        "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M"
    ));

    // Underscores are part of the identifier alphabet
    assert!(is_spotify_playlist_link(
        "https://open.spotify.com/playlist/abc_123"
    ));
}

#[test]
fn test_is_spotify_playlist_link_rejects_other_resource_types() {
    // An album link addresses the wrong resource entirely
    assert!(!is_spotify_playlist_link(
        "https://open.spotify.com/album/123"
    ));
    assert!(!is_spotify_playlist_link(
        "https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC"
    ));
    assert!(!is_spotify_playlist_link(
        "https://open.spotify.com/artist/123"
    ));
}

#[test]
fn test_is_spotify_playlist_link_rejects_malformed_links() {
    assert!(!is_spotify_playlist_link(""));

    // Missing identifier
    assert!(!is_spotify_playlist_link(
        "https://open.spotify.com/playlist/"
    ));

    // Wrong scheme or domain
    assert!(!is_spotify_playlist_link(
        "http://open.spotify.com/playlist/abc"
    ));
    assert!(!is_spotify_playlist_link("https://spotify.com/playlist/abc"));

    // Trailing query parameters or slashes are not part of the shape
    assert!(!is_spotify_playlist_link(
        "https://open.spotify.com/playlist/abc?si=123"
    ));
    assert!(!is_spotify_playlist_link(
        "https://open.spotify.com/playlist/abc/"
    ));

    // Whitespace anywhere invalidates the link
    assert!(!is_spotify_playlist_link(
        " https://open.spotify.com/playlist/abc"
    ));
    assert!(!is_spotify_playlist_link(
        "https://open.spotify.com/playlist/abc def"
    ));
}

#[test]
fn test_extract_playlist_id() {
    assert_eq!(
        extract_playlist_id("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M"),
        "37i9dQZF1DXcBWIGoYBM5M"
    );
}

#[test]
fn test_format_song_query_preserves_artist_order() {
    let track = create_test_track("Song", &["A", "B"]);
    assert_eq!(format_song_query(&track), "Song - A B ");

    let reversed = create_test_track("Song", &["B", "A"]);
    assert_eq!(format_song_query(&reversed), "Song - B A ");
}

#[test]
fn test_format_song_query_is_deterministic() {
    let track = create_test_track("Song", &["A", "B"]);
    assert_eq!(format_song_query(&track), format_song_query(&track));
}

#[test]
fn test_format_song_query_without_artists() {
    let track = create_test_track("Instrumental", &[]);
    assert_eq!(format_song_query(&track), "Instrumental - ");
}

#[test]
fn test_format_song_query_single_artist() {
    let track = create_test_track("Karma Police", &["Radiohead"]);
    assert_eq!(format_song_query(&track), "Karma Police - Radiohead ");
}

#[test]
fn test_watch_url() {
    assert_eq!(
        watch_url("dQw4w9WgXcQ"),
        "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
    );
}
