use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use copydesk_common::{AuditRecordId, ContentItemId};

use crate::domain::content::{AuditRecord, ContentItem, NewContentItem};
use crate::domain::repository::{ContentRepository, RepositoryError};
use crate::domain::workflow::transition::{TransitionOutcome, TransitionPlan};

/// In-memory repository with the same atomicity and conflict semantics as
/// the Postgres adapter. Backs the engine tests; the map lock stands in
/// for the per-row write lock.
#[derive(Clone, Default)]
pub struct MemoryContentRepository {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    items: Mutex<HashMap<ContentItemId, StoredItem>>,
    last_record_id: AtomicI64,
}

struct StoredItem {
    item: ContentItem,
    records: Vec<AuditRecord>,
}

impl MemoryContentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_record_id(&self) -> AuditRecordId {
        AuditRecordId(self.inner.last_record_id.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

fn lock_poisoned() -> RepositoryError {
    RepositoryError::DatabaseError("content store lock poisoned".to_string())
}

impl ContentRepository for MemoryContentRepository {
    async fn create(&self, new_item: NewContentItem) -> Result<ContentItem, RepositoryError> {
        let mut items = self.inner.items.lock().map_err(|_| lock_poisoned())?;

        if items
            .values()
            .any(|stored| stored.item.slug == new_item.slug)
        {
            return Err(RepositoryError::UniqueViolation(format!(
                "content item with slug {} already exists",
                new_item.slug
            )));
        }

        let item = ContentItem::new_draft(ContentItemId::generate(), new_item, Utc::now());
        items.insert(
            item.id,
            StoredItem {
                item: item.clone(),
                records: Vec::new(),
            },
        );

        Ok(item)
    }

    async fn find(&self, id: ContentItemId) -> Result<ContentItem, RepositoryError> {
        let items = self.inner.items.lock().map_err(|_| lock_poisoned())?;
        items
            .get(&id)
            .map(|stored| stored.item.clone())
            .ok_or(RepositoryError::NotFound)
    }

    async fn apply_transition(
        &self,
        plan: TransitionPlan,
    ) -> Result<TransitionOutcome, RepositoryError> {
        let mut items = self.inner.items.lock().map_err(|_| lock_poisoned())?;
        let stored = items
            .get_mut(&plan.item_id)
            .ok_or(RepositoryError::NotFound)?;

        if stored.item.status != plan.from_status {
            return Err(RepositoryError::Conflict {
                expected: plan.from_status,
                actual: stored.item.status,
            });
        }

        let (updated, record) = plan.apply_to(&stored.item, Utc::now());
        let record = record.with_id(self.next_record_id());

        stored.item = updated.clone();
        stored.records.push(record.clone());

        Ok(TransitionOutcome {
            item: updated,
            record,
        })
    }

    async fn history(&self, id: ContentItemId) -> Result<Vec<AuditRecord>, RepositoryError> {
        let items = self.inner.items.lock().map_err(|_| lock_poisoned())?;
        Ok(items
            .get(&id)
            .map(|stored| stored.records.clone())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use copydesk_common::{ContentSlug, ContentStatus, ContentTitle, UserId};
    use uuid::Uuid;

    use crate::domain::workflow::transition::derive_action;

    use super::*;

    fn new_item(slug: &str) -> NewContentItem {
        NewContentItem {
            slug: ContentSlug::try_new(slug).unwrap(),
            title: ContentTitle::try_new("Launch note").unwrap(),
            owner_id: UserId(Uuid::new_v4()),
        }
    }

    fn plan_from(item: &ContentItem, from: ContentStatus, to: ContentStatus) -> TransitionPlan {
        TransitionPlan {
            item_id: item.id,
            from_status: from,
            to_status: to,
            action: derive_action(from, to),
            comment: None,
            acting_user_id: UserId(Uuid::new_v4()),
            reviewer_id: None,
        }
    }

    #[tokio::test]
    async fn duplicate_slugs_are_rejected() {
        let repository = MemoryContentRepository::new();
        repository.create(new_item("launch-note")).await.unwrap();

        let duplicate = repository.create(new_item("launch-note")).await;
        assert!(matches!(
            duplicate,
            Err(RepositoryError::UniqueViolation(_))
        ));
    }

    #[tokio::test]
    async fn a_plan_built_against_a_stale_status_conflicts() {
        let repository = MemoryContentRepository::new();
        let item = repository.create(new_item("launch-note")).await.unwrap();

        let stale = plan_from(&item, ContentStatus::Published, ContentStatus::Archived);
        let refused = repository.apply_transition(stale).await;

        assert!(matches!(
            refused,
            Err(RepositoryError::Conflict {
                expected: ContentStatus::Published,
                actual: ContentStatus::Draft,
            })
        ));
        assert!(repository.history(item.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn record_ids_grow_with_each_append() {
        let repository = MemoryContentRepository::new();
        let item = repository.create(new_item("launch-note")).await.unwrap();

        let first = repository
            .apply_transition(plan_from(
                &item,
                ContentStatus::Draft,
                ContentStatus::PendingApproval,
            ))
            .await
            .unwrap();
        let second = repository
            .apply_transition(plan_from(
                &first.item,
                ContentStatus::PendingApproval,
                ContentStatus::Published,
            ))
            .await
            .unwrap();

        assert!(second.record.id.0 > first.record.id.0);
    }
}
