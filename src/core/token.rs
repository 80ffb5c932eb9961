//! URL-safe random token generation.

use crate::errors::{AppError, AppResult};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngCore;
use rand::rngs::OsRng;

pub const DEFAULT_TOKEN_BYTES: usize = 32;
pub const MIN_TOKEN_BYTES: usize = 16;
pub const MAX_TOKEN_BYTES: usize = 1024;

/// Generate a token from `n_bytes` of OS randomness, base64url-encoded without padding.
pub fn generate_token(n_bytes: usize) -> AppResult<String> {
    if n_bytes < MIN_TOKEN_BYTES {
        return Err(AppError::InvalidToken(format!(
            "at least {} random bytes are required, got {}",
            MIN_TOKEN_BYTES, n_bytes
        )));
    }

    if n_bytes > MAX_TOKEN_BYTES {
        return Err(AppError::InvalidToken(format!(
            "at most {} random bytes are allowed, got {}",
            MAX_TOKEN_BYTES, n_bytes
        )));
    }

    let mut bytes = vec![0u8; n_bytes];
    OsRng.fill_bytes(&mut bytes);

    Ok(URL_SAFE_NO_PAD.encode(&bytes))
}

/// Reject tokens that are empty or whitespace only.
pub fn validate_token(token: &str) -> AppResult<()> {
    if token.trim().is_empty() {
        return Err(AppError::InvalidToken("token must not be empty".into()));
    }
    Ok(())
}

/// Short, log-safe rendering of a token: first 6 characters and an ellipsis.
pub fn preview(token: &str) -> String {
    let head: String = token.chars().take(6).collect();
    if head.len() < token.len() {
        format!("{}…", head)
    } else {
        head
    }
}
