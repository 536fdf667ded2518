//! Media sources: turn a directory or a manifest file into a media list.

use shared::{MediaItem, MediaList};
use std::{
    cmp::Ordering,
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tokio::task::spawn_blocking;

pub const EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "tiff", "tif", "ico", "avif",
];

pub const MANIFEST_EXTENSION: &str = "json";

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid manifest {path}: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No photos found in {0}")]
    NoPhotos(PathBuf),

    #[error("Unsupported source: {0}")]
    Unsupported(PathBuf),

    #[error("Source loader stopped unexpectedly")]
    Interrupted,
}

pub type SourceResult<T> = Result<T, SourceError>;

/// What a source path points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    Directory(PathBuf),
    Manifest(PathBuf),
    /// A single photo; its directory is browsed starting at the photo.
    Photo(PathBuf),
}

impl MediaSource {
    pub fn detect(path: &Path) -> SourceResult<Self> {
        if path.is_dir() {
            Ok(Self::Directory(path.to_path_buf()))
        } else if path.is_file() && has_extension(path, &[MANIFEST_EXTENSION]) {
            Ok(Self::Manifest(path.to_path_buf()))
        } else if path.is_file() && is_supported_image(path) {
            Ok(Self::Photo(path.to_path_buf()))
        } else {
            Err(SourceError::Unsupported(path.to_path_buf()))
        }
    }
}

/// A loaded media list plus the index the browser should open at.
#[derive(Debug, Clone)]
pub struct LoadedMedia {
    pub media: MediaList,
    pub start_index: Option<usize>,
}

pub async fn load(path: PathBuf, include_hidden: bool) -> SourceResult<LoadedMedia> {
    spawn_blocking(move || load_sync(&path, include_hidden))
        .await
        .map_err(|_| SourceError::Interrupted)?
}

pub fn load_sync(path: &Path, include_hidden: bool) -> SourceResult<LoadedMedia> {
    let (media, start_index) = match MediaSource::detect(path)? {
        MediaSource::Directory(dir) => (scan_dir_sync(&dir, include_hidden)?, None),
        MediaSource::Manifest(file) => (load_manifest(&file)?, None),
        MediaSource::Photo(photo) => {
            let dir = photo_dir(&photo);
            let media = scan_dir_sync(&dir, include_hidden)?;
            let start = media
                .iter()
                .position(|item| item.photo.file_name() == photo.file_name());
            (media, start)
        }
    };

    if media.is_empty() {
        return Err(SourceError::NoPhotos(path.to_path_buf()));
    }

    tracing::info!("loaded {} photos from {}", media.len(), path.display());

    Ok(LoadedMedia { media, start_index })
}

/// Directory holding `photo`. A bare file name lives in the working directory.
fn photo_dir(photo: &Path) -> PathBuf {
    photo
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn scan_dir_sync(dir: &Path, include_hidden: bool) -> SourceResult<MediaList> {
    let entries = fs::read_dir(dir).map_err(|source| SourceError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut photos: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            if !include_hidden
                && let Some(name) = path.file_name().and_then(|name| name.to_str())
                && name.starts_with('.')
            {
                return false;
            }
            path.is_file() && is_supported_image(path)
        })
        .collect();

    photos.sort_by(|a, b| {
        let a_name = a.file_name().and_then(|name| name.to_str()).unwrap_or("");
        let b_name = b.file_name().and_then(|name| name.to_str()).unwrap_or("");
        human_sort(a_name, b_name)
    });

    Ok(photos.into_iter().map(MediaItem::new).collect())
}

/// Read a JSON array of media items. Relative paths resolve against the
/// manifest's own directory.
pub fn load_manifest(path: &Path) -> SourceResult<MediaList> {
    let content = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let items: Vec<MediaItem> =
        serde_json::from_str(&content).map_err(|source| SourceError::Manifest {
            path: path.to_path_buf(),
            source,
        })?;

    let base = path.parent().unwrap_or(Path::new(""));

    Ok(items
        .into_iter()
        .map(|mut item| {
            item.photo = resolve(base, &item.photo);
            item.thumb = item.thumb.map(|thumb| resolve(base, &thumb));
            item
        })
        .collect())
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

pub fn is_supported_image(path: &Path) -> bool {
    has_extension(path, EXTENSIONS)
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Natural ordering: digit runs compare by value, everything else
/// case-insensitively. `img2` sorts before `img10`.
pub fn human_sort(a: &str, b: &str) -> Ordering {
    let mut a_chars = a.chars().peekable();
    let mut b_chars = b.chars().peekable();

    loop {
        let (ac, bc) = match (a_chars.peek().copied(), b_chars.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ac), Some(bc)) => (ac, bc),
        };

        let ordering = if ac.is_ascii_digit() && bc.is_ascii_digit() {
            let a_num = take_number(&mut a_chars);
            let b_num = take_number(&mut b_chars);
            a_num.cmp(&b_num)
        } else {
            a_chars.next();
            b_chars.next();
            ac.to_lowercase().cmp(bc.to_lowercase())
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}

fn take_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> u64 {
    let mut value: u64 = 0;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        value = value.saturating_mul(10).saturating_add(u64::from(digit));
        chars.next();
    }
    value
}
