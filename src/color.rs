//! Fill color tokens.
//!
//! Colors are carried as CSS-style hex tokens (`#rgb` or `#rrggbb`) so they
//! can be handed straight to the surface's `set_fill_color`. Invalid tokens
//! are never propagated as errors past this module: shape construction
//! sanitizes them down to [`DEFAULT_FILL_COLOR`].

use crate::constants::DEFAULT_FILL_COLOR;
use rand::Rng;
use thiserror::Error;

const HEX_DIGITS: &[u8] = b"0123456789ABCDEF";

/// Rejection reasons for a fill color token.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("color token {0:?} is not a #rgb or #rrggbb hex token")]
    InvalidToken(String),
}

/// Validate a hex color token, returning it unchanged on success.
pub fn parse_hex(token: &str) -> Result<&str, ColorError> {
    let digits = token
        .strip_prefix('#')
        .ok_or_else(|| ColorError::InvalidToken(token.to_string()))?;
    let valid_len = digits.len() == 3 || digits.len() == 6;
    if valid_len && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(token)
    } else {
        Err(ColorError::InvalidToken(token.to_string()))
    }
}

/// Normalize a fill token: valid tokens pass through, everything else
/// (including the empty string) falls back to [`DEFAULT_FILL_COLOR`].
pub fn sanitize(token: &str) -> String {
    match parse_hex(token) {
        Ok(valid) => valid.to_string(),
        Err(err) => {
            if !token.is_empty() {
                tracing::warn!(%err, "falling back to default fill");
            }
            DEFAULT_FILL_COLOR.to_string()
        }
    }
}

/// Generate a random `#rrggbb` token for the next pending shape.
pub fn random_color<R: Rng>(rng: &mut R) -> String {
    let mut token = String::with_capacity(7);
    token.push('#');
    for _ in 0..6 {
        token.push(HEX_DIGITS[rng.gen_range(0..HEX_DIGITS.len())] as char);
    }
    token
}
