use std::future::Future;

use copydesk_common::{ContentItemId, ContentStatus};

use crate::domain::content::{AuditRecord, ContentItem, NewContentItem};
use crate::domain::workflow::transition::{TransitionOutcome, TransitionPlan};

#[cfg(test)]
pub mod memory;

/// Store for content items and their audit trail. The workflow engine only
/// talks to the store through this trait; the Postgres adapter and the
/// in-memory test double both implement it with the same conflict
/// semantics.
pub trait ContentRepository: Clone + Send + Sync + 'static {
    /// Persist a fresh draft item. Slugs are unique across the store.
    fn create(
        &self,
        new_item: NewContentItem,
    ) -> impl Future<Output = Result<ContentItem, RepositoryError>> + Send;

    /// Load one item by id.
    fn find(
        &self,
        id: ContentItemId,
    ) -> impl Future<Output = Result<ContentItem, RepositoryError>> + Send;

    /// Atomically re-check the plan's expected status under the item's
    /// write lock, apply the mutation and append the audit record. Either
    /// both writes commit or neither does.
    fn apply_transition(
        &self,
        plan: TransitionPlan,
    ) -> impl Future<Output = Result<TransitionOutcome, RepositoryError>> + Send;

    /// All audit records ever appended for one item, oldest first. An item
    /// without records yields an empty list.
    fn history(
        &self,
        id: ContentItemId,
    ) -> impl Future<Output = Result<Vec<AuditRecord>, RepositoryError>> + Send;
}

#[derive(Debug)]
pub enum RepositoryError {
    NotFound,
    /// The item moved between the caller's read and the write. Carries the
    /// status the plan expected and the one actually found.
    Conflict {
        expected: ContentStatus,
        actual: ContentStatus,
    },
    UniqueViolation(String),
    DatabaseError(String),
}
