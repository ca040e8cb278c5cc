//! Merger configuration.

use crate::token::safety::MAX_TOKEN_LEN;

/// Errors from an invalid [`MergerConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("max_token_len must be at least 1")]
    ZeroTokenLength,
    #[error("cache capacity must be at least 1 (use None for an unbounded cache)")]
    ZeroCacheCapacity,
}

/// Configuration for a [`Merger`](crate::merge::engine::Merger).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergerConfig {
    /// Longest accepted atomic class, in bytes. Longer tokens are dropped.
    pub max_token_len: usize,
    /// Classification cache bound. `None` keeps every entry forever; `Some(n)`
    /// evicts the least recently used entry once more than `n` are stored.
    pub cache_capacity: Option<usize>,
}

impl Default for MergerConfig {
    fn default() -> Self {
        Self {
            max_token_len: MAX_TOKEN_LEN,
            cache_capacity: None,
        }
    }
}

impl MergerConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the token length limit (builder).
    pub fn with_max_token_len(mut self, max_token_len: usize) -> Self {
        self.max_token_len = max_token_len;
        self
    }

    /// Bound the classification cache (builder).
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = Some(capacity);
        self
    }

    /// Keep every classification forever (builder).
    pub fn unbounded(mut self) -> Self {
        self.cache_capacity = None;
        self
    }

    /// Check the config for values the merger cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_token_len == 0 {
            return Err(ConfigError::ZeroTokenLength);
        }
        if self.cache_capacity == Some(0) {
            return Err(ConfigError::ZeroCacheCapacity);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MergerConfig::new();
        assert_eq!(config.max_token_len, 200);
        assert_eq!(config.cache_capacity, None);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_builders() {
        let config = MergerConfig::new()
            .with_max_token_len(64)
            .with_cache_capacity(1024);
        assert_eq!(config.max_token_len, 64);
        assert_eq!(config.cache_capacity, Some(1024));

        let config = config.unbounded();
        assert_eq!(config.cache_capacity, None);
    }

    #[test]
    fn test_validate_rejects_zeroes() {
        assert_eq!(
            MergerConfig::new().with_max_token_len(0).validate(),
            Err(ConfigError::ZeroTokenLength)
        );
        assert_eq!(
            MergerConfig::new().with_cache_capacity(0).validate(),
            Err(ConfigError::ZeroCacheCapacity)
        );
    }
}
