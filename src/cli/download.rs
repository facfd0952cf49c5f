use std::path::PathBuf;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error::DownloadError,
    info,
    management::TokenManager,
    spotify, success,
    types::{Track, TrackTableRow},
    utils, warning, youtube,
};

pub async fn download(
    link: String,
    output_dir: String,
    keep_going: bool,
) -> Result<(), DownloadError> {
    // Reject malformed links before any network service is contacted.
    if !utils::is_spotify_playlist_link(&link) {
        return Err(DownloadError::InvalidLink { link });
    }

    let playlist_id = utils::extract_playlist_id(&link);

    let mut token_mgr = TokenManager::new();
    let auth_header = token_mgr.get_valid_token().await?;

    info!("Fetching tracks for playlist {}...", playlist_id);
    let tracks = spotify::playlist::get_tracks(&playlist_id, &auth_header).await?;
    success!("Found {} tracks.", tracks.len());

    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let total = tracks.len();
    let mut rows: Vec<TrackTableRow> = Vec::new();
    let mut downloaded = 0;

    for (idx, track) in tracks.iter().enumerate() {
        let label = track_label(track);
        pb.set_message(format!(
            "Downloading {label} ({count}/{total})",
            label = label,
            count = idx + 1,
            total = total
        ));

        match process_track(track, &output_dir).await {
            Ok(path) => {
                downloaded += 1;
                rows.push(TrackTableRow {
                    track: label,
                    status: "ok".to_string(),
                    detail: path.display().to_string(),
                });
            }
            Err(e) if keep_going => {
                warning!("{}", e);
                rows.push(TrackTableRow {
                    track: label,
                    status: "failed".to_string(),
                    detail: e.to_string(),
                });
            }
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        }
    }

    pb.finish_and_clear();

    if !rows.is_empty() {
        let table = Table::new(rows);
        println!("{}", table);
    }

    success!(
        "Downloaded {downloaded}/{total} tracks to {dir}.",
        downloaded = downloaded,
        total = total,
        dir = output_dir
    );
    Ok(())
}

async fn process_track(track: &Track, output_dir: &str) -> Result<PathBuf, DownloadError> {
    let query = utils::format_song_query(track);
    let video = youtube::search::find_best_match(&query).await?;
    youtube::fetch::fetch_audio(&video.video_id, output_dir).await
}

fn track_label(track: &Track) -> String {
    match track.artists.first() {
        Some(artist) => format!("{} - {}", track.title, artist),
        None => track.title.clone(),
    }
}
