//! Prompt/Response Store
//!
//! In-memory, non-persistent storage for prompts and their generated
//! responses. The store exclusively owns both collections; it is created
//! empty at process start and everything is discarded on termination.
//!
//! Prompt ids are dense and positional: a record's `id` always equals its
//! current position in the collection, so `delete_prompt` renumbers every
//! record behind the removed one. Response ids are assigned from the length
//! of the append-only response collection and are never reused.

use chrono::Utc;

use crate::domain::entities::{PromptRecord, ResponseRecord};
use crate::domain::errors::DomainError;

/// Old and new content returned by a successful update.
#[derive(Debug, Clone)]
pub struct PromptUpdate {
    pub index: usize,
    pub old_content: String,
    pub new_content: String,
}

/// Ordered prompt collection plus append-only response archive.
#[derive(Debug, Default)]
pub struct PromptStore {
    prompts: Vec<PromptRecord>,
    responses: Vec<ResponseRecord>,
}

impl PromptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new prompt at the end of the collection.
    ///
    /// Content is trimmed before storage; empty or whitespace-only content is
    /// rejected. The new record's id equals the pre-insert collection length.
    pub fn create_prompt(&mut self, content: &str) -> Result<PromptRecord, DomainError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Prompt cannot be empty"));
        }

        let record = PromptRecord::new(self.prompts.len(), trimmed);
        self.prompts.push(record.clone());
        Ok(record)
    }

    /// All stored prompts in order.
    pub fn list_prompts(&self) -> &[PromptRecord] {
        &self.prompts
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.len()
    }

    /// Get the prompt at the given position.
    pub fn get_prompt(&self, index: usize) -> Result<&PromptRecord, DomainError> {
        self.prompts
            .get(index)
            .ok_or_else(|| DomainError::not_found(index, self.prompts.len()))
    }

    /// Replace the content of the prompt at the given position.
    ///
    /// The record's id is unchanged; `updated_at` is stamped. Returns the old
    /// and new content.
    pub fn update_prompt(
        &mut self,
        index: usize,
        new_content: &str,
    ) -> Result<PromptUpdate, DomainError> {
        let count = self.prompts.len();
        let record = self
            .prompts
            .get_mut(index)
            .ok_or_else(|| DomainError::not_found(index, count))?;

        let trimmed = new_content.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("New prompt cannot be empty"));
        }

        let old_content = std::mem::replace(&mut record.content, trimmed.to_string());
        record.updated_at = Some(Utc::now());

        Ok(PromptUpdate {
            index,
            old_content,
            new_content: trimmed.to_string(),
        })
    }

    /// Remove the prompt at the given position.
    ///
    /// Every remaining record at a position >= index has its id decremented
    /// by one, keeping ids dense and 0-based. The removed record is returned
    /// with its pre-renumbering id. Any prompt index a caller obtained before
    /// this call is invalidated if it is >= the deleted index.
    pub fn delete_prompt(&mut self, index: usize) -> Result<PromptRecord, DomainError> {
        if index >= self.prompts.len() {
            return Err(DomainError::not_found(index, self.prompts.len()));
        }

        let removed = self.prompts.remove(index);
        for (position, record) in self.prompts.iter_mut().enumerate().skip(index) {
            record.id = position;
        }
        Ok(removed)
    }

    /// Archive a generated response for the prompt at `prompt_index`.
    ///
    /// `prompt` must be the content the generation actually ran with; the
    /// record snapshots it so later edits to the prompt do not rewrite
    /// history. The new record's id is the current archive length.
    pub fn record_response(
        &mut self,
        prompt_index: usize,
        prompt: &str,
        response: &str,
    ) -> ResponseRecord {
        let record = ResponseRecord::new(self.responses.len(), prompt_index, prompt, response);
        self.responses.push(record.clone());
        record
    }

    /// All archived responses in generation order.
    pub fn list_responses(&self) -> &[ResponseRecord] {
        &self.responses
    }

    pub fn response_count(&self) -> usize {
        self.responses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(contents: &[&str]) -> PromptStore {
        let mut store = PromptStore::new();
        for content in contents {
            store.create_prompt(content).expect("create should succeed");
        }
        store
    }

    #[test]
    fn test_create_rejects_empty_content() {
        let mut store = PromptStore::new();
        assert!(matches!(
            store.create_prompt(""),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            store.create_prompt("   \t\n"),
            Err(DomainError::Validation(_))
        ));
        assert_eq!(store.prompt_count(), 0);
    }

    #[test]
    fn test_create_trims_and_assigns_dense_ids() {
        let mut store = PromptStore::new();

        let first = store.create_prompt("  hello  ").unwrap();
        assert_eq!(first.id, 0);
        assert_eq!(first.content, "hello");
        assert!(first.updated_at.is_none());

        let second = store.create_prompt("world").unwrap();
        assert_eq!(second.id, 1);
        assert_eq!(store.prompt_count(), 2);
    }

    #[test]
    fn test_get_returns_positional_id() {
        let store = store_with(&["a", "b", "c"]);
        for index in 0..store.prompt_count() {
            assert_eq!(store.get_prompt(index).unwrap().id, index);
        }
    }

    #[test]
    fn test_get_out_of_range_is_not_found() {
        let store = store_with(&["a", "b"]);
        match store.get_prompt(5) {
            Err(DomainError::NotFound { index, count }) => {
                assert_eq!(index, 5);
                assert_eq!(count, 2);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_update_keeps_id_and_stamps_updated_at() {
        let mut store = store_with(&["original"]);

        let update = store.update_prompt(0, "  revised  ").unwrap();
        assert_eq!(update.old_content, "original");
        assert_eq!(update.new_content, "revised");

        let record = store.get_prompt(0).unwrap();
        assert_eq!(record.id, 0);
        assert_eq!(record.content, "revised");
        assert!(record.updated_at.is_some());
    }

    #[test]
    fn test_update_rejects_empty_and_bad_index() {
        let mut store = store_with(&["keep me"]);
        assert!(matches!(
            store.update_prompt(0, "   "),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            store.update_prompt(3, "new"),
            Err(DomainError::NotFound { .. })
        ));
        // Failed updates leave the record untouched
        assert_eq!(store.get_prompt(0).unwrap().content, "keep me");
    }

    #[test]
    fn test_delete_renumbers_remaining_records() {
        let mut store = store_with(&["A", "B", "C"]);

        let removed = store.delete_prompt(1).unwrap();
        assert_eq!(removed.id, 1);
        assert_eq!(removed.content, "B");

        assert_eq!(store.prompt_count(), 2);
        let first = store.get_prompt(0).unwrap();
        assert_eq!((first.id, first.content.as_str()), (0, "A"));
        let second = store.get_prompt(1).unwrap();
        assert_eq!((second.id, second.content.as_str()), (1, "C"));
    }

    #[test]
    fn test_delete_leaves_lower_positions_unchanged() {
        let mut store = store_with(&["a", "b", "c", "d"]);
        store.delete_prompt(2).unwrap();

        assert_eq!(store.get_prompt(0).unwrap().content, "a");
        assert_eq!(store.get_prompt(1).unwrap().content, "b");
        assert_eq!(store.get_prompt(2).unwrap().content, "d");
        for index in 0..store.prompt_count() {
            assert_eq!(store.get_prompt(index).unwrap().id, index);
        }
    }

    #[test]
    fn test_delete_out_of_range_is_not_found() {
        let mut store = store_with(&["only"]);
        assert!(matches!(
            store.delete_prompt(1),
            Err(DomainError::NotFound { .. })
        ));
        assert_eq!(store.prompt_count(), 1);
    }

    #[test]
    fn test_delete_last_then_first() {
        let mut store = store_with(&["x", "y"]);
        store.delete_prompt(1).unwrap();
        store.delete_prompt(0).unwrap();
        assert_eq!(store.prompt_count(), 0);
        assert!(matches!(
            store.delete_prompt(0),
            Err(DomainError::NotFound { .. })
        ));
    }

    #[test]
    fn test_response_ids_monotonic_across_prompt_deletes() {
        let mut store = store_with(&["A", "B", "C"]);

        let r0 = store.record_response(0, "A", "answer A");
        assert_eq!(r0.id, 0);

        store.delete_prompt(0).unwrap();
        let r1 = store.record_response(0, "B", "answer B");
        assert_eq!(r1.id, 1);

        store.delete_prompt(0).unwrap();
        let r2 = store.record_response(0, "C", "answer C");
        assert_eq!(r2.id, 2);

        assert_eq!(store.response_count(), 3);
        let ids: Vec<usize> = store.list_responses().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_response_snapshots_prompt_content() {
        let mut store = store_with(&["before"]);

        let content = store.get_prompt(0).unwrap().content.clone();
        let response = store.record_response(0, &content, "generated");
        store.update_prompt(0, "after").unwrap();

        assert_eq!(response.prompt, "before");
        assert_eq!(store.list_responses()[0].prompt, "before");
        assert_eq!(store.list_responses()[0].prompt_index, 0);
    }

    // Worked example: create A,B,C; delete index 1; the prompt at index 1 is
    // now C and a generation for index 1 must reference C's content.
    #[test]
    fn test_delete_then_generate_targets_renumbered_prompt() {
        let mut store = store_with(&["A", "B", "C"]);
        store.delete_prompt(1).unwrap();

        let target = store.get_prompt(1).unwrap().content.clone();
        assert_eq!(target, "C");

        let response = store.record_response(1, &target, "answer for C");
        assert_eq!(response.prompt_index, 1);
        assert_eq!(response.prompt, "C");
    }

    #[test]
    fn test_updated_at_absent_from_serialized_record_until_update() {
        let mut store = store_with(&["fresh"]);

        let json = serde_json::to_value(store.get_prompt(0).unwrap()).unwrap();
        assert!(json.get("updated_at").is_none());

        store.update_prompt(0, "edited").unwrap();
        let json = serde_json::to_value(store.get_prompt(0).unwrap()).unwrap();
        assert!(json.get("updated_at").is_some());
    }
}
