use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$PAWPAL_HOME` if set, else `~/.pawpal`.
pub fn pawpal_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("PAWPAL_HOME") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".pawpal"))
}

pub fn ensure_pawpal_home() -> Result<PathBuf> {
    let dir = pawpal_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
