//! Parser and serializer configuration

use crate::error::{Error, Result};

/// Configuration for parser limits and tokenizer checks
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Accepted for API compatibility; no validation is performed
    pub validate: bool,
    /// Maximum element nesting depth, root counted as 1
    pub max_depth: Option<usize>,
    /// Maximum input size in bytes, checked before transcoding
    pub max_size: Option<usize>,
    /// Let the tokenizer reject end tags that do not close the open element
    pub check_end_names: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            validate: false,
            max_depth: None,
            max_size: None,
            check_end_names: true,
        }
    }
}

impl ParserConfig {
    #[must_use]
    pub const fn with_validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    #[must_use]
    pub const fn with_max_depth(mut self, max: usize) -> Self {
        self.max_depth = Some(max);
        self
    }

    #[must_use]
    pub const fn with_max_size(mut self, max: usize) -> Self {
        self.max_size = Some(max);
        self
    }

    pub fn validate_size(&self, size: usize) -> Result<()> {
        match self.max_size {
            Some(max) if size > max => Err(Error::MaxSizeExceeded { max }),
            _ => Ok(()),
        }
    }

    /// Check that opening one more element at `depth` stays within limits
    pub fn validate_depth(&self, depth: usize) -> Result<()> {
        match self.max_depth {
            Some(max) if depth > max => Err(Error::MaxDepthExceeded { max }),
            _ => Ok(()),
        }
    }
}

/// Configuration options for serialization
#[derive(Debug, Clone, Default)]
pub struct SerializeConfig {
    /// Number of spaces per nesting level; `None` writes compact output
    pub indent: Option<usize>,
    /// Write attributes sorted by key instead of document order
    pub sort_attributes: bool,
    /// Emit `<?xml version="1.0" encoding="UTF-8"?>` first
    pub xml_declaration: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_have_no_limits() {
        let config = ParserConfig::default();
        assert!(!config.validate);
        assert!(config.check_end_names);
        assert!(config.validate_size(usize::MAX).is_ok());
        assert!(config.validate_depth(usize::MAX).is_ok());
    }

    #[test]
    fn test_limits() {
        let config = ParserConfig::default().with_max_depth(2).with_max_size(4);
        assert!(config.validate_depth(2).is_ok());
        assert!(matches!(
            config.validate_depth(3),
            Err(Error::MaxDepthExceeded { max: 2 })
        ));
        assert!(config.validate_size(4).is_ok());
        assert!(matches!(
            config.validate_size(5),
            Err(Error::MaxSizeExceeded { max: 4 })
        ));
    }
}
