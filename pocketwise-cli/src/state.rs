use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub fn pocketwise_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".pocketwise"))
}

pub fn ensure_pocketwise_home() -> Result<PathBuf> {
    let dir = pocketwise_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
