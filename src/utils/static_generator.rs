//! In-memory journal generator for testing and offline use

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::traits::*;
use crate::types::*;

/// Journal generator that answers from a table of canned entries
///
/// Lookups ignore surrounding whitespace and letter case. Unknown
/// transactions produce [`JournalError::EmptyResponse`].
#[derive(Debug, Clone, Default)]
pub struct StaticJournalGenerator {
    entries: Arc<RwLock<HashMap<String, JournalEntry>>>,
}

impl StaticJournalGenerator {
    /// Create an empty generator
    pub fn new() -> Self {
        Self::default()
    }

    fn key(transaction: &str) -> String {
        transaction.trim().to_lowercase()
    }

    /// Register the entry returned for `transaction`
    pub fn insert(&self, transaction: &str, entry: JournalEntry) {
        let mut entries = match self.entries.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.insert(Self::key(transaction), entry);
    }

    /// Builder-style variant of [`insert`](Self::insert)
    pub fn with_entry(self, transaction: &str, entry: JournalEntry) -> Self {
        self.insert(transaction, entry);
        self
    }

    /// Number of registered transactions
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl JournalGenerator for StaticJournalGenerator {
    async fn generate(&self, transaction: &str) -> JournalResult<JournalEntry> {
        let entries = match self.entries.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries
            .get(&Self::key(transaction))
            .cloned()
            .ok_or(JournalError::EmptyResponse)
    }
}
