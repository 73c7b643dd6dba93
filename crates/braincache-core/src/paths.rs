use anyhow::Result;
use std::path::PathBuf;

const BRAINCACHE_DIR: &str = ".braincache";
const DB_FILE: &str = "braincache.db";

/// Environment variable to override the BrainCache directory.
const BRAINCACHE_DIR_ENV: &str = "BRAINCACHE_DIR";

/// Resolve the BrainCache data directory.
/// Priority: BRAINCACHE_DIR env var > ~/.braincache/
pub fn resolve_braincache_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(BRAINCACHE_DIR_ENV)
        && !dir.trim().is_empty()
    {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|h| h.join(BRAINCACHE_DIR))
        .ok_or_else(|| anyhow::anyhow!("Failed to determine home directory"))
}

/// Ensure the BrainCache directory exists and return its path.
pub fn ensure_braincache_dir() -> Result<PathBuf> {
    let dir = resolve_braincache_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the database path: ~/.braincache/braincache.db
pub fn database_path() -> Result<PathBuf> {
    Ok(resolve_braincache_dir()?.join(DB_FILE))
}

/// Ensure database path exists and return as string.
pub fn ensure_database_path() -> Result<PathBuf> {
    Ok(ensure_braincache_dir()?.join(DB_FILE))
}

/// Convenience helper returning the database path as a UTF-8 string.
pub fn ensure_database_path_string() -> Result<String> {
    Ok(ensure_database_path()?.to_string_lossy().into_owned())
}
