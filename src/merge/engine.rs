//! Merge engine: last-write-wins conflict resolution over class fragments.
//!
//! 1. Fragments are gated whole by the safety validator, then flattened into
//!    one indexed token stream.
//! 2. Each token is validated on its own and dropped if unsafe.
//! 3. Surviving tokens are classified through the shared cache.
//! 4. A grouped token overwrites whatever held its group key before it;
//!    custom tokens are all kept.
//! 5. Survivors are emitted in original index order, joined by single spaces.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::classify::cache::ClassCache;
use crate::classify::group::{Classification, GroupKey};
use crate::config::{ConfigError, MergerConfig};
use crate::token::safety::{check_fragment, check_token};
use crate::token::tokenizer::{ClassToken, Flatten};

/// Resolves conflicting utility classes.
///
/// Owns its classification cache; share one merger across threads (it is
/// `Send + Sync`) to share the cache.
#[derive(Debug)]
pub struct Merger {
    config: MergerConfig,
    cache: ClassCache,
}

impl Default for Merger {
    fn default() -> Self {
        Self {
            config: MergerConfig::default(),
            cache: ClassCache::unbounded(),
        }
    }
}

impl Merger {
    /// Create a merger from a validated config.
    pub fn new(config: MergerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(
            max_token_len = config.max_token_len,
            cache_capacity = ?config.cache_capacity,
            "creating class merger"
        );
        Ok(Self {
            cache: ClassCache::with_capacity(config.cache_capacity),
            config,
        })
    }

    pub fn config(&self) -> &MergerConfig {
        &self.config
    }

    /// The classification cache backing this merger.
    pub fn cache(&self) -> &ClassCache {
        &self.cache
    }

    /// Classify one token through the cache.
    pub fn classify(&self, token: &str) -> Classification {
        self.cache.get_or_classify(token)
    }

    /// Merge ordered class fragments into one class string.
    ///
    /// Later fragments win conflicts, so pass component base classes first,
    /// conditional classes next and the caller's override last. Unsafe input
    /// is dropped silently; this never fails.
    pub fn merge<I>(&self, fragments: I) -> String
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let fragments: Vec<I::Item> = fragments.into_iter().collect();
        let accepted = fragments
            .iter()
            .map(|fragment| fragment.as_ref())
            .filter(|fragment| match check_fragment(fragment) {
                Ok(()) => true,
                Err(reason) => {
                    trace!(fragment = %fragment, %reason, "dropping class fragment");
                    false
                }
            });

        let mut grouped: HashMap<GroupKey, ClassToken<'_>> = HashMap::new();
        let mut custom: Vec<ClassToken<'_>> = Vec::new();

        for token in Flatten::new(accepted, 0) {
            if let Err(reason) = check_token(token.text, self.config.max_token_len) {
                trace!(token = %token.text, %reason, "dropping class");
                continue;
            }
            match self.cache.get_or_classify(token.text).group {
                Some(key) => {
                    grouped.insert(key, token);
                }
                None => custom.push(token),
            }
        }

        let mut survivors: Vec<ClassToken<'_>> =
            grouped.into_values().chain(custom).collect();
        survivors.sort_unstable_by_key(|token| token.index);

        join(&survivors)
    }
}

fn join(tokens: &[ClassToken<'_>]) -> String {
    let len = tokens.iter().map(|t| t.text.len() + 1).sum::<usize>();
    let mut out = String::with_capacity(len);
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(token.text);
    }
    out
}
