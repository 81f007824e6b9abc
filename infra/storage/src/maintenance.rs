use std::path::Path;
use std::time::{Duration, SystemTime};
use tracing::info;
use walkdir::{DirEntry, WalkDir};

pub(crate) fn purge_tmp(root: &Path) {
    let now = SystemTime::now();
    let threshold = Duration::from_secs(300);

    let (removed, failed) = remove_stale(root, now, threshold);
    if removed > 0 || failed > 0 {
        info!(removed, failed, "Cleaned up temporary files");
    }
}

fn remove_stale(root: &Path, now: SystemTime, threshold: Duration) -> (usize, usize) {
    let mut removed = 0;
    let mut failed = 0;

    WalkDir::new(root)
        .into_iter()
        .flatten()
        .filter(|entry| is_tmp(entry) && is_stale(entry, now, threshold))
        .for_each(|entry| match std::fs::remove_file(entry.path()) {
            Ok(()) => removed += 1,
            Err(err) => {
                tracing::warn!(p = %entry.path().display(), err = %err, "IO fail");
                failed += 1;
            },
        });

    (removed, failed)
}

fn is_tmp(entry: &DirEntry) -> bool {
    if !entry.file_type().is_file() {
        return false;
    }
    entry
        .path()
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.contains(".ohubtmp."))
}

fn is_stale(entry: &DirEntry, now: SystemTime, threshold: Duration) -> bool {
    std::fs::metadata(entry.path())
        .ok()
        .and_then(|m| m.modified().ok())
        .and_then(|modified| now.duration_since(modified).ok())
        .is_none_or(|age| age > threshold)
}
