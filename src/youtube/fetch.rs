use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::{process::Command, time::timeout};

use crate::{config, error::DownloadError, utils};

/// Downloads the audio-only stream of a YouTube video into `output_dir`.
///
/// Invokes the yt-dlp binary with `-f bestaudio`, so only an audio-only
/// stream variant is fetched; which variant wins among several is left to
/// the downloader's own ordering. The file lands in `output_dir` named
/// after the video title, and its extension is then changed to `.mp3`
/// without touching the bytes - the container stays whatever the stream
/// used. Same-named files from earlier runs are overwritten.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(PathBuf)` - Path of the renamed audio file
/// - `Err(DownloadError::NoAudioStream)` - The video has no audio-only variant
/// - `Err(DownloadError::Fetch)` - Directory not writable, downloader missing
///   or failed, or the rename failed
/// - `Err(DownloadError::Timeout)` - The download exceeded its time budget
pub async fn fetch_audio(video_id: &str, output_dir: &str) -> Result<PathBuf, DownloadError> {
    async_fs::create_dir_all(output_dir)
        .await
        .map_err(|e| DownloadError::Fetch {
            reason: format!("cannot create output directory {}: {}", output_dir, e),
        })?;

    let url = utils::watch_url(video_id);
    let template = format!("{}/%(title)s.%(ext)s", output_dir.trim_end_matches('/'));
    let socket_timeout = config::http_timeout_secs().to_string();
    let ytdlp = config::ytdlp_bin();

    let mut cmd = Command::new(&ytdlp);
    cmd.args([
        "-f",
        "bestaudio",
        "--no-playlist",
        "--force-overwrites",
        "--socket-timeout",
        socket_timeout.as_str(),
        "--no-simulate",
        "--print",
        "after_move:filepath",
        "-o",
        template.as_str(),
        url.as_str(),
    ]);

    let fetch_timeout = Duration::from_secs(config::fetch_timeout_secs());
    let output = match timeout(fetch_timeout, cmd.output()).await {
        Ok(result) => result.map_err(|e| DownloadError::Fetch {
            reason: format!("cannot run {}: {}", ytdlp, e),
        })?,
        Err(_) => {
            return Err(DownloadError::Timeout {
                context: format!("audio download for video {}", video_id),
                seconds: fetch_timeout.as_secs(),
            });
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(classify_failure(video_id, &stderr));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let downloaded = match stdout.lines().last().map(str::trim) {
        Some(line) if !line.is_empty() => PathBuf::from(line),
        _ => {
            return Err(DownloadError::Fetch {
                reason: format!("downloader reported no output file for video {}", video_id),
            });
        }
    };

    let destination = audio_destination(&downloaded);
    async_fs::rename(&downloaded, &destination)
        .await
        .map_err(|e| DownloadError::Fetch {
            reason: format!(
                "cannot rename {} to {}: {}",
                downloaded.display(),
                destination.display(),
                e
            ),
        })?;

    Ok(destination)
}

// The stream is kept as-is; only the extension changes.
fn audio_destination(path: &Path) -> PathBuf {
    path.with_extension("mp3")
}

fn classify_failure(video_id: &str, stderr: &str) -> DownloadError {
    if stderr.contains("Requested format is not available") {
        return DownloadError::NoAudioStream {
            video_id: video_id.to_string(),
        };
    }

    let last_line = stderr
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("unknown error");

    DownloadError::Fetch {
        reason: format!("video {}: {}", video_id, last_line.trim()),
    }
}
