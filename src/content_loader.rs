use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::content::{ContentItem, ContentPools, LayoutTag, MediaKind, TickerFeed};
use crate::error::{ContentError, Result};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Playlist {
    media: Vec<ContentItem>,
    ads: Vec<ContentItem>,
    ticker: TickerFeed,
    fallback: Option<ContentItem>,
}

// --- Helper: Load a JSON playlist into rotation pools ---
pub fn load_playlist(path: &Path) -> Result<ContentPools> {
    let bytes = fs::read(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let playlist: Playlist = serde_json::from_slice(&bytes).map_err(|source| ContentError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        path = %path.display(),
        media = playlist.media.len(),
        ads = playlist.ads.len(),
        "playlist loaded"
    );
    Ok(ContentPools::partition(playlist.media, &playlist.ads, playlist.ticker)
        .with_sidebar_fallback(playlist.fallback))
}

fn media_kind(path: &Path) -> Option<MediaKind> {
    let ext = path.extension().and_then(|s| s.to_str())?.to_lowercase();
    match ext.as_str() {
        "png" | "jpg" | "jpeg" | "bmp" | "gif" => Some(MediaKind::Image),
        "mp4" | "webm" | "mov" => Some(MediaKind::Video),
        _ => None,
    }
}

// --- Helper: Load and Sort Media Paths ---
pub fn load_sorted_media_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let io_err = |source| ContentError::Io {
        path: dir_path.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir_path).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && media_kind(&path).is_some() {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        Err(ContentError::NoMedia(dir_path.to_path_buf()))
    } else {
        Ok(paths)
    }
}

/// Turns every media file in `dir_path` into a primary media item, ordered by
/// file name and numbered from 1.
pub fn load_media_dir(dir_path: &Path) -> Result<Vec<ContentItem>> {
    let items = load_sorted_media_paths(dir_path)?
        .into_iter()
        .zip(1u64..)
        .filter_map(|(path, id)| {
            let kind = media_kind(&path)?;
            Some(ContentItem::new(id, kind, path.to_string_lossy(), LayoutTag::All))
        })
        .collect();
    Ok(items)
}
