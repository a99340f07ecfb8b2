use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::ScanError;

/// A recognized photo found during enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRef {
    pub path: PathBuf,
    /// Lower-case, with the leading dot
    pub extension: String,
}

/// Lower-cased extension of `path` with its leading dot, e.g. `.jpg`
pub fn dotted_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|s| format!(".{}", s.to_lowercase()))
}

fn check_root(root: &Path) -> Result<(), ScanError> {
    let metadata = fs::metadata(root).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ScanError::NotFound(root.to_path_buf()),
        _ => ScanError::Unreadable {
            path: root.to_path_buf(),
            source: e,
        },
    })?;
    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }
    fs::read_dir(root).map_err(|source| ScanError::Unreadable {
        path: root.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Recursively lists photos under `root` whose extension is in `extensions`.
///
/// Hidden files and ignore files do not filter anything out; every
/// subdirectory is walked. Entries are visited in file-name order within a
/// directory so repeated runs over an unchanged folder see the same sequence.
pub fn scan_photos(root: &Path, extensions: &[String]) -> Result<Vec<PhotoRef>, ScanError> {
    check_root(root)?;

    let wanted: Vec<String> = extensions.iter().map(|e| e.to_lowercase()).collect();
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut photos = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let Some(extension) = dotted_extension(entry.path()) else {
            continue;
        };
        if wanted.contains(&extension) {
            photos.push(PhotoRef {
                path: entry.into_path(),
                extension,
            });
        }
    }

    debug!("Found {} photos under {}", photos.len(), root.display());
    Ok(photos)
}
