use crate::rect::Rect;
use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Where layout files live: `<repo-root>/resources/layouts`.
pub fn default_layout_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("resources")
        .join("layouts")
}

/// Write a layout as a pretty-printed JSON array, creating the parent
/// directories as needed. An existing file at `path` is replaced whole.
pub fn save_layout(path: &Path, rects: &[Rect]) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }
    let json = serde_json::to_string_pretty(rects)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

pub fn load_layout(path: &Path) -> Result<Vec<Rect>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let rects = serde_json::from_str(&raw)
        .with_context(|| format!("bad layout file {}", path.display()))?;
    Ok(rects)
}
