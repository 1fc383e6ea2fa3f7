//! Traits for the external journal generation service

use async_trait::async_trait;

use crate::types::*;

/// Source of journal entries for free-text transaction descriptions
///
/// This trait lets the crate work with any generation backend (the Gemini
/// REST API, a canned in-memory table, a different model provider) by
/// implementing this method. The transaction text is passed through as
/// given; validating it is the generator's concern.
#[async_trait]
pub trait JournalGenerator: Send + Sync {
    /// Translate a business transaction into a double-entry journal entry
    async fn generate(&self, transaction: &str) -> JournalResult<JournalEntry>;
}
