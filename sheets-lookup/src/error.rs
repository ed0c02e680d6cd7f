use thiserror::Error;

/// Source-unavailable conditions. "Key not found" is not an error — the
/// trait returns `Ok(None)` for that, so operational logging can tell the
/// two apart.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("auth failure: {0}")]
    Auth(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("malformed sheet payload: {0}")]
    Malformed(String),
}
