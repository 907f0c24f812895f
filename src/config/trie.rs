//! Trie configuration module.
//!
//! This module defines configuration for the ternary search tree, including
//! key limits and the result queue backend used for prefix queries.

use super::ConfigResult;
use super::Validate;
use crate::data_structures::lanai_trie::{LanaiTrieConfig, DEFAULT_MAX_KEY_LENGTH};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Queue implementation handed out for prefix query results.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QueueBackend {
    /// Ring-buffer backed queue
    #[default]
    Array,
    /// Linked-list backed queue
    Linked,
}

/// Trie configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrieConfig {
    /// Maximum key length in characters
    pub max_key_length: usize,

    /// Queue implementation for prefix query results
    pub queue_backend: QueueBackend,
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self {
            max_key_length: DEFAULT_MAX_KEY_LENGTH,
            queue_backend: QueueBackend::default(),
        }
    }
}

impl TrieConfig {
    /// Builds the runtime trie options described by this section.
    pub fn to_trie_config(&self) -> LanaiTrieConfig {
        LanaiTrieConfig {
            max_key_length: self.max_key_length,
        }
    }
}

impl Validate for TrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_key_length == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.max_key_length".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
