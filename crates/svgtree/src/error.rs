//! Error types for svgtree

use std::io;
use thiserror::Error;

/// Main error type for svgtree
#[derive(Error, Debug)]
pub enum Error {
    /// The document declares an encoding label that is not recognized
    #[error("unsupported charset: {label}")]
    UnknownCharset { label: String },

    /// The input bytes are not valid in the detected encoding
    #[error("malformed byte sequence for encoding {encoding}")]
    Transcode { encoding: &'static str },

    /// The tokenizer rejected the document
    #[error("xml syntax error at byte {position}: {source}")]
    Syntax {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    /// Reading the source or writing the sink failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An element without a tag name cannot be serialized
    #[error("cannot serialize an element with an empty name")]
    UnnamedElement,

    #[error("max depth exceeded: {max}")]
    MaxDepthExceeded { max: usize },

    #[error("max size exceeded: {max}")]
    MaxSizeExceeded { max: usize },
}

impl Error {
    /// True for failures caused by character-set detection or transcoding
    pub const fn is_charset(&self) -> bool {
        matches!(self, Self::UnknownCharset { .. } | Self::Transcode { .. })
    }
}

/// Result type alias for svgtree
pub type Result<T> = std::result::Result<T, Error>;
