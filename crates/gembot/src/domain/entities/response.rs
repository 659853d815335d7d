//! ResponseRecord - Archived Model Output

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A generated response, archived at generation time.
///
/// Response records are append-only: no exposed operation mutates or deletes
/// them, so ids are monotonically assigned and never reused. `prompt_index`
/// and `prompt` are snapshots of the source prompt as it was when the
/// generation ran; later prompt edits or deletes do not touch them.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResponseRecord {
    pub id: usize,
    pub prompt_index: usize,
    pub prompt: String,
    pub response: String,
    pub created_at: DateTime<Utc>,
}

impl ResponseRecord {
    pub fn new(
        id: usize,
        prompt_index: usize,
        prompt: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        Self {
            id,
            prompt_index,
            prompt: prompt.into(),
            response: response.into(),
            created_at: Utc::now(),
        }
    }
}
