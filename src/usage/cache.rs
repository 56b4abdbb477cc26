use std::fs::File;
use std::path::Path;
use std::time::{Duration, SystemTime};

use chrono::{DateTime, Utc};

use super::types::UsageSnapshot;

/// How long a fetched snapshot stays usable
pub(crate) const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Load the snapshot at `path` unless it is missing, malformed, or stale.
///
/// Age comes from `fetched_at` when the fetcher recorded it, otherwise from
/// the file's mtime. A `fetched_at` later than now falls back to the mtime,
/// and an mtime later than now makes the snapshot stale.
pub(crate) fn load_if_fresh(path: &Path, ttl: Duration) -> Option<UsageSnapshot> {
    load_if_fresh_at(path, ttl, Utc::now())
}

fn load_if_fresh_at(path: &Path, ttl: Duration, now: DateTime<Utc>) -> Option<UsageSnapshot> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            debug_log!("no usage cache at {}: {e}", path.display());
            return None;
        }
    };
    let snapshot: UsageSnapshot = match serde_json::from_reader(file) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            debug_log!("ignoring malformed usage cache {}: {e}", path.display());
            return None;
        }
    };

    // A timestamp from the future cannot be trusted to age out
    let fetched_at = match snapshot.fetched_at {
        Some(ts) if ts <= now => ts,
        Some(ts) => {
            debug_log!("usage cache {} fetched_at {ts} is in the future", path.display());
            file_mtime(path)?
        }
        None => file_mtime(path)?,
    };
    let Ok(age) = (now - fetched_at).to_std() else {
        debug_log!("usage cache {} was modified in the future", path.display());
        return None;
    };
    if age > ttl {
        debug_log!(
            "usage cache {} is stale ({}s > {}s)",
            path.display(),
            age.as_secs(),
            ttl.as_secs()
        );
        return None;
    }
    Some(snapshot)
}

fn file_mtime(path: &Path) -> Option<DateTime<Utc>> {
    let modified: SystemTime = std::fs::metadata(path).ok()?.modified().ok()?;
    Some(DateTime::<Utc>::from(modified))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usage::UsageWindow;

    fn save(path: &Path, snapshot: &UsageSnapshot) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_vec(snapshot)?)
    }

    fn snapshot(fetched_at: Option<DateTime<Utc>>) -> UsageSnapshot {
        UsageSnapshot {
            fetched_at,
            five_hour: Some(UsageWindow {
                utilization: 37.0,
                resets_at: None,
            }),
            seven_day: None,
        }
    }

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_if_fresh(&dir.path().join("nope.json"), DEFAULT_TTL), None);
    }

    #[test]
    fn malformed_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("usage.json");
        std::fs::write(&path, "{not json").unwrap();
        assert_eq!(load_if_fresh(&path, DEFAULT_TTL), None);
    }

    #[test]
    fn fresh_snapshot_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("usage.json");
        let snap = snapshot(Some(Utc::now()));
        save(&path, &snap).unwrap();
        assert_eq!(load_if_fresh(&path, DEFAULT_TTL), Some(snap));
    }

    #[test]
    fn stale_snapshot_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("usage.json");
        let now = Utc::now();
        save(&path, &snapshot(Some(now - chrono::Duration::minutes(10)))).unwrap();
        assert_eq!(load_if_fresh_at(&path, DEFAULT_TTL, now), None);
        assert!(load_if_fresh_at(&path, Duration::from_secs(900), now).is_some());
    }

    #[test]
    fn falls_back_to_mtime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("usage.json");
        save(&path, &snapshot(None)).unwrap();
        assert!(load_if_fresh(&path, DEFAULT_TTL).is_some());
        let later = Utc::now() + chrono::Duration::hours(1);
        assert_eq!(load_if_fresh_at(&path, DEFAULT_TTL, later), None);
    }

    #[test]
    fn future_fetched_at_falls_back_to_mtime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("usage.json");
        save(&path, &snapshot(Some(Utc::now() + chrono::Duration::days(1)))).unwrap();

        let now = Utc::now();
        assert!(load_if_fresh_at(&path, DEFAULT_TTL, now).is_some());
        let later = now + chrono::Duration::minutes(10);
        assert_eq!(load_if_fresh_at(&path, DEFAULT_TTL, later), None);
    }

    #[test]
    fn future_mtime_is_stale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("usage.json");
        save(&path, &snapshot(None)).unwrap();
        let earlier = Utc::now() - chrono::Duration::hours(1);
        assert_eq!(load_if_fresh_at(&path, DEFAULT_TTL, earlier), None);
    }
}
