//! Connection URI resolution.
//!
//! Accepted forms:
//! - `sqlite:///<path>` → `<path>`, SQLAlchemy style: `sqlite:///tokens.db` is
//!   relative, `sqlite:////tmp/tokens.db` is `/tmp/tokens.db`
//! - `file:<...>`       → SQLite URI filename, handed to SQLite untouched
//! - `<path>`           → plain filesystem path, `~/` expanded

use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use std::path::Path;

pub const SQLITE_SCHEME: &str = "sqlite://";
const SQLITE_PATH_PREFIX: &str = "sqlite:///";
const SQLITE_URI_PREFIX: &str = "file:";

/// Turn a connection URI into the filename SQLite should open.
pub fn resolve_sqlite_target(uri: &str) -> AppResult<String> {
    let uri = uri.trim();

    if uri.is_empty() {
        return Err(AppError::Config("missing connection URI".into()));
    }

    if let Some(rest) = uri.strip_prefix(SQLITE_PATH_PREFIX) {
        if rest.is_empty() {
            return Err(AppError::Config(format!("no database path in '{}'", uri)));
        }
        return Ok(expand_tilde(rest).to_string_lossy().to_string());
    }

    if uri.starts_with(SQLITE_SCHEME) {
        return Err(AppError::Config(format!(
            "expected {}<path> in '{}' (use four slashes for an absolute path)",
            SQLITE_PATH_PREFIX, uri
        )));
    }

    if uri.starts_with(SQLITE_URI_PREFIX) {
        return Ok(uri.to_string());
    }

    if let Some((scheme, _)) = uri.split_once("://") {
        return Err(AppError::Config(format!(
            "unsupported scheme '{}' (only {} and {} URIs are supported)",
            scheme, SQLITE_SCHEME, SQLITE_URI_PREFIX
        )));
    }

    Ok(expand_tilde(uri).to_string_lossy().to_string())
}

/// True when the target is a SQLite `file:` URI rather than a filesystem path.
pub fn is_uri_filename(target: &str) -> bool {
    target.starts_with(SQLITE_URI_PREFIX)
}

/// Build a `sqlite:///` URI for a filesystem path (`sqlite:////abs` for absolute ones).
pub fn sqlite_uri_for(path: &Path) -> String {
    format!("{}{}", SQLITE_PATH_PREFIX, path.to_string_lossy())
}
