use std::sync::LazyLock;

use regex::Regex;

use crate::types::Track;

static PLAYLIST_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://open\.spotify\.com/playlist/[A-Za-z0-9_]+$")
        .expect("playlist link pattern is valid")
});

pub fn is_spotify_playlist_link(link: &str) -> bool {
    PLAYLIST_LINK.is_match(link)
}

pub fn extract_playlist_id(link: &str) -> String {
    link.rsplit('/').next().unwrap_or_default().to_string()
}

pub fn format_song_query(track: &Track) -> String {
    let mut query = format!("{} - ", track.title);
    for artist in &track.artists {
        query.push_str(artist);
        query.push(' ');
    }
    query
}

pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}
