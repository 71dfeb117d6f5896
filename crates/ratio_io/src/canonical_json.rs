//! Canonical JSON utilities (ratio_io)
//! - Objects: keys sorted lexicographically (UTF-8 byte order)
//! - Arrays: order preserved (ratio terms are ordered)
//! - Output: compact, no trailing newline
//! - Atomic write: temp file in the target directory, fsync, rename

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::IoError;

/// Render `v` as canonical JSON bytes.
pub fn to_canonical_json_bytes(v: &Value) -> Result<Vec<u8>, IoError> {
    let mut out = Vec::with_capacity(256);
    emit(v, &mut out)?;
    Ok(out)
}

/// Serialize any `T: Serialize` canonically (via `serde_json::Value`).
pub fn to_canonical_string<T: serde::Serialize>(value: &T) -> Result<String, IoError> {
    let v = serde_json::to_value(value)?;
    let bytes = to_canonical_json_bytes(&v)?;
    String::from_utf8(bytes).map_err(|e| IoError::Json {
        pointer: "/".into(),
        msg: e.to_string(),
    })
}

/// Write canonical JSON to `path`, replacing any existing file atomically.
pub fn write_canonical_file(path: &Path, v: &Value) -> Result<(), IoError> {
    let bytes = to_canonical_json_bytes(v)?;

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent)?;

    let tmp = tmp_path_for(path);
    let written = (|| -> std::io::Result<()> {
        let mut f = OpenOptions::new().write(true).create_new(true).open(&tmp)?;
        f.write_all(&bytes)?;
        f.sync_all()?;
        fs::rename(&tmp, path)
    })();

    if let Err(e) = written {
        let _ = fs::remove_file(&tmp);
        return Err(IoError::Path(format!("{}: {e}", path.display())));
    }
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "canonical json written");
    Ok(())
}

fn emit(v: &Value, out: &mut Vec<u8>) -> Result<(), IoError> {
    match v {
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            serde_json::to_writer(&mut *out, v)?;
        }
        Value::Array(items) => {
            out.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                emit(item, out)?;
            }
            out.push(b']');
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_unstable_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
            out.push(b'{');
            for (i, (k, val)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                serde_json::to_writer(&mut *out, k)?;
                out.push(b':');
                emit(val, out)?;
            }
            out.push(b'}');
        }
    }
    Ok(())
}

/// "<filename>.<pid>.<counter>.tmp" next to `target`.
fn tmp_path_for(target: &Path) -> PathBuf {
    use std::sync::atomic::{AtomicU64, Ordering};

    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let name = target
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("out");
    target.with_file_name(format!("{name}.{}.{n}.tmp", std::process::id()))
}
