// src/storage.rs
//! JSON-file key-value adapter: the whole value is (de)serialized on every
//! load/save. Read or decode failure falls back to the caller's initial
//! value; write failure is logged and swallowed. The in-memory value stays
//! the source of truth for the rest of the session.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// Load a serialized value from `path`, or return `fallback` when the file
/// is absent or does not decode.
pub fn load_or<T: DeserializeOwned>(path: &Path, fallback: T) -> T {
    match fs::read_to_string(path) {
        Ok(raw) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to decode stored payload, starting fresh");
                fallback
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => fallback,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read stored payload, starting fresh");
            fallback
        }
    }
}

/// Serialize `value` and rewrite `path` in full. Parent directories are
/// created on demand. Failure is logged, never propagated.
pub fn save<T: Serialize>(path: &Path, value: &T) {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!(path = %path.display(), error = %e, "failed to create data directory");
                return;
            }
        }
    }

    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to serialize payload");
            return;
        }
    };

    if let Err(e) = fs::write(path, raw) {
        warn!(path = %path.display(), error = %e, "failed to write stored payload");
    }
}
