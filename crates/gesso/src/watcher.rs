//! File watching for config re-checks.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc as async_mpsc;

/// Events emitted by the config watcher.
#[derive(Debug, Clone)]
pub enum WatchEvent {
    /// Config file was created or modified
    ConfigChanged(PathBuf),

    /// Config file was deleted
    ConfigRemoved(PathBuf),
}

/// Watcher for detecting config file changes.
pub struct ConfigWatcher {
    _watcher: RecommendedWatcher,
}

impl ConfigWatcher {
    /// Create a new watcher for the given config paths.
    ///
    /// Returns the watcher and a channel to receive events. Only events
    /// for the given paths are forwarded.
    pub fn new(
        paths: &[PathBuf],
    ) -> Result<(Self, async_mpsc::Receiver<WatchEvent>), std::io::Error> {
        let (sync_tx, sync_rx) = mpsc::channel();
        let (async_tx, async_rx) = async_mpsc::channel(100);

        // Create the watcher
        let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
            if let Ok(event) = res {
                let _ = sync_tx.send(event);
            }
        })
        .map_err(std::io::Error::other)?;

        // Editors often replace a file on save, so watch each config's
        // containing directory. Watching the canonical directory makes
        // event paths comparable to the watched set below.
        let mut watched = Vec::with_capacity(paths.len());
        for path in paths {
            let parent = path
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."));
            if let Ok(parent) = parent.canonicalize() {
                watcher
                    .watch(&parent, RecursiveMode::NonRecursive)
                    .map_err(std::io::Error::other)?;
                if let Some(file_name) = path.file_name() {
                    watched.push(parent.join(file_name));
                }
            }
        }

        // Spawn a task to forward events
        let async_tx_clone = async_tx.clone();
        std::thread::spawn(move || {
            let mut last_event_time = std::time::Instant::now();
            let debounce_duration = Duration::from_millis(100);

            while let Ok(event) = sync_rx.recv() {
                for path in event.paths {
                    // Unrelated files in a watched directory are not ours
                    if !watched.contains(&path) {
                        continue;
                    }

                    let watch_event = classify_event(&path, &event.kind);
                    if let Some(e) = watch_event {
                        // Debounce after classifying, so the access noise
                        // around a save cannot consume the window
                        let now = std::time::Instant::now();
                        if now.duration_since(last_event_time) < debounce_duration {
                            continue;
                        }
                        last_event_time = now;

                        let _ = async_tx_clone.blocking_send(e);
                    }
                }
            }
        });

        Ok((Self { _watcher: watcher }, async_rx))
    }
}

/// Classify a notify event into a WatchEvent, ignoring non-config files.
fn classify_event(path: &Path, kind: &notify::EventKind) -> Option<WatchEvent> {
    use notify::EventKind;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if !matches!(ext, "toml" | "json" | "yaml" | "yml") {
        return None;
    }

    match kind {
        EventKind::Create(_) | EventKind::Modify(_) => {
            Some(WatchEvent::ConfigChanged(path.to_path_buf()))
        }
        EventKind::Remove(_) => Some(WatchEvent::ConfigRemoved(path.to_path_buf())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn watches_config_changes() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("tailwind.toml");
        fs::write(&config_path, "content = []\n").unwrap();

        let (watcher, mut rx) = ConfigWatcher::new(&[config_path.clone()]).unwrap();

        // Give inotify time to set up
        tokio::time::sleep(Duration::from_millis(200)).await;

        // A plain in-place save must surface as a change
        fs::write(&config_path, "content = [\"./view/**/*.templ\"]\n").unwrap();

        // Wait for event with timeout
        let event = tokio::time::timeout(Duration::from_secs(3), rx.recv()).await;

        // Keep watcher alive until we're done
        drop(watcher);

        assert!(event.is_ok(), "timeout waiting for config watch event");
        assert!(matches!(
            event.unwrap(),
            Some(WatchEvent::ConfigChanged(_))
        ));
    }

    #[tokio::test]
    async fn ignores_sibling_config_files() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("tailwind.toml");
        let sibling = temp.path().join("Cargo.toml");
        fs::write(&config_path, "content = []\n").unwrap();
        fs::write(&sibling, "[package]\n").unwrap();

        let (watcher, mut rx) = ConfigWatcher::new(&[config_path.clone()]).unwrap();

        tokio::time::sleep(Duration::from_millis(200)).await;

        // A sibling change in the watched directory must not surface
        fs::write(&sibling, "[package]\nname = \"demo\"\n").unwrap();
        tokio::time::sleep(Duration::from_millis(300)).await;
        fs::write(&config_path, "content = [\"./view/**/*.templ\"]\n").unwrap();

        // The first event through must be for the watched config
        let event = tokio::time::timeout(Duration::from_secs(3), rx.recv()).await;

        drop(watcher);

        assert!(event.is_ok(), "timeout waiting for config watch event");
        match event.unwrap() {
            Some(WatchEvent::ConfigChanged(path)) => {
                assert!(path.ends_with("tailwind.toml"), "got {}", path.display());
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn ignores_non_config_files() {
        let kind = notify::EventKind::Modify(notify::event::ModifyKind::Any);

        assert!(classify_event(Path::new("notes.txt"), &kind).is_none());
        assert!(classify_event(Path::new("tailwind.toml"), &kind).is_some());
    }

    #[test]
    fn access_events_do_not_classify() {
        let kind = notify::EventKind::Access(notify::event::AccessKind::Any);

        assert!(classify_event(Path::new("tailwind.toml"), &kind).is_none());
    }
}
