//! PromptRecord - Stored Prompt Text
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored prompt.
///
/// `id` is the record's current position in the store's ordered collection:
/// dense, 0-based, and positional rather than durable. Deleting a prompt
/// renumbers every record behind it, so callers must not cache ids across
/// deletes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PromptRecord {
    pub id: usize,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Present only after the prompt has been updated at least once.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl PromptRecord {
    /// Create a new prompt record at the given position.
    ///
    /// Content is expected to be trimmed already; the store enforces that.
    pub fn new(id: usize, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}
