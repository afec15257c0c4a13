//!
//! src/errors.rs
//!
//! Defines the error enum and conversions for everything the
//! client can surface to callers
//!

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TagError {
    /// The query or fetch legitimately matched zero tags. Not a transport fault.
    #[error("no tags found for the previous query")]
    NoTagsFound,
    #[error("http error: {0}")]
    Http(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("config error: {0}")]
    Config(String),
    /// A key string did not split into a known tonality and note.
    #[error("invalid key string: {0}")]
    InvalidKey(String),
    /// A remote file element carried no usable URL.
    #[error("remote file is missing its url")]
    MissingFileUrl,
}

impl From<reqwest::Error> for TagError {
    fn from(e: reqwest::Error) -> Self {
        TagError::Http(e.to_string())
    }
}

impl From<roxmltree::Error> for TagError {
    fn from(e: roxmltree::Error) -> Self {
        TagError::Parse(e.to_string())
    }
}
