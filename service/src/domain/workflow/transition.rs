use chrono::{DateTime, Utc};
use copydesk_common::{AuditAction, ContentItemId, ContentStatus, UserId};

use crate::domain::content::{AuditRecord, ContentItem, NewAuditRecord};

/// What the caller asks for: the target status plus the optional payload
/// some transitions require.
#[derive(Debug, Clone)]
pub struct TransitionRequest {
    pub to_status: ContentStatus,
    pub comment: Option<String>,

    /// The caller's view of the status being left. Required when deleting;
    /// it becomes the restore target and doubles as a staleness check.
    pub previous_status: Option<ContentStatus>,

    pub reviewer_id: Option<UserId>,
}

/// A fully authorized and validated transition, ready to be applied. The
/// store re-checks `from_status` under its write lock right before commit.
#[derive(Debug, Clone)]
pub struct TransitionPlan {
    pub item_id: ContentItemId,
    pub from_status: ContentStatus,
    pub to_status: ContentStatus,
    pub action: AuditAction,
    pub comment: Option<String>,
    pub acting_user_id: UserId,
    pub reviewer_id: Option<UserId>,
}

/// The result of one accepted transition: the updated item and the single
/// audit record appended for it.
#[derive(Debug, Clone)]
pub struct TransitionOutcome {
    pub item: ContentItem,
    pub record: AuditRecord,
}

/// Derives the audit action for a transition. Restoration is recognized
/// from the `from` side first, so it wins over the target rules; a
/// withdrawal back to draft falls back to the submission label.
pub fn derive_action(from: ContentStatus, to: ContentStatus) -> AuditAction {
    if from == ContentStatus::Deleted && to != ContentStatus::Deleted {
        return AuditAction::Restored;
    }

    match to {
        ContentStatus::PendingApproval => AuditAction::Submitted,
        ContentStatus::Published => AuditAction::Approved,
        ContentStatus::NeedsChanges => AuditAction::ChangesRequested,
        ContentStatus::Archived => AuditAction::Archived,
        ContentStatus::Deleted => AuditAction::Deleted,
        ContentStatus::Draft => AuditAction::Submitted,
    }
}

impl TransitionPlan {
    /// Applies the status and timestamp mutations to a snapshot of the item
    /// and produces the matching audit entry.
    ///
    /// Pure on purpose: both stores run this with a `now` taken while they
    /// hold the item's write lock, so the record timestamps follow the
    /// per-item commit order.
    pub fn apply_to(
        &self,
        item: &ContentItem,
        now: DateTime<Utc>,
    ) -> (ContentItem, NewAuditRecord) {
        let mut updated = item.clone();

        updated.status = self.to_status;
        updated.updated_at = now;

        if self.to_status == ContentStatus::Published {
            updated.published_at = Some(now);
        }
        if self.to_status == ContentStatus::Deleted {
            updated.deleted_at = Some(now);
            updated.previous_status = Some(self.from_status);
        }
        if self.from_status == ContentStatus::Deleted && self.to_status != ContentStatus::Deleted {
            updated.deleted_at = None;
            updated.previous_status = None;
        }
        if let Some(reviewer_id) = self.reviewer_id {
            updated.current_reviewer_id = Some(reviewer_id);
        }

        let record = NewAuditRecord {
            item_id: self.item_id,
            from_status: self.from_status,
            to_status: self.to_status,
            action: self.action,
            comment: self.comment.clone(),
            acting_user_id: self.acting_user_id,
            created_at: now,
        };

        (updated, record)
    }
}

#[cfg(test)]
mod tests {
    use copydesk_common::{ContentSlug, ContentTitle};
    use uuid::Uuid;

    use crate::domain::content::NewContentItem;

    use super::*;

    fn draft_item() -> ContentItem {
        ContentItem::new_draft(
            ContentItemId::generate(),
            NewContentItem {
                slug: ContentSlug::try_new("launch-note").unwrap(),
                title: ContentTitle::try_new("Launch note").unwrap(),
                owner_id: UserId(Uuid::new_v4()),
            },
            Utc::now(),
        )
    }

    fn plan(item: &ContentItem, to_status: ContentStatus) -> TransitionPlan {
        TransitionPlan {
            item_id: item.id,
            from_status: item.status,
            to_status,
            action: derive_action(item.status, to_status),
            comment: None,
            acting_user_id: UserId(Uuid::new_v4()),
            reviewer_id: None,
        }
    }

    #[test]
    fn every_target_status_maps_to_one_action() {
        use ContentStatus as S;

        assert_eq!(derive_action(S::Draft, S::PendingApproval), AuditAction::Submitted);
        assert_eq!(derive_action(S::PendingApproval, S::Published), AuditAction::Approved);
        assert_eq!(
            derive_action(S::PendingApproval, S::NeedsChanges),
            AuditAction::ChangesRequested
        );
        assert_eq!(derive_action(S::Published, S::Archived), AuditAction::Archived);
        assert_eq!(derive_action(S::Published, S::Deleted), AuditAction::Deleted);
        assert_eq!(derive_action(S::Deleted, S::Published), AuditAction::Restored);
        assert_eq!(derive_action(S::Deleted, S::Draft), AuditAction::Restored);
        // Withdrawing to draft is recorded with the submission label.
        assert_eq!(derive_action(S::Archived, S::Draft), AuditAction::Submitted);
        assert_eq!(derive_action(S::PendingApproval, S::Draft), AuditAction::Submitted);
    }

    #[test]
    fn publishing_stamps_the_publication_time() {
        let item = draft_item();
        let now = Utc::now();

        let (updated, record) = plan(&item, ContentStatus::Published).apply_to(&item, now);

        assert_eq!(updated.status, ContentStatus::Published);
        assert_eq!(updated.published_at, Some(now));
        assert_eq!(updated.updated_at, now);
        assert_eq!(record.action, AuditAction::Approved);
        assert_eq!(record.created_at, now);
    }

    #[test]
    fn deleting_records_where_the_item_came_from() {
        let mut item = draft_item();
        item.status = ContentStatus::Published;
        let now = Utc::now();

        let (updated, record) = plan(&item, ContentStatus::Deleted).apply_to(&item, now);

        assert_eq!(updated.status, ContentStatus::Deleted);
        assert_eq!(updated.previous_status, Some(ContentStatus::Published));
        assert_eq!(updated.deleted_at, Some(now));
        assert_eq!(record.action, AuditAction::Deleted);
    }

    #[test]
    fn restoring_clears_the_deletion_fields() {
        let mut item = draft_item();
        item.status = ContentStatus::Deleted;
        item.previous_status = Some(ContentStatus::Published);
        item.deleted_at = Some(Utc::now());
        item.published_at = Some(Utc::now());
        let now = Utc::now();

        let (updated, record) = plan(&item, ContentStatus::Published).apply_to(&item, now);

        assert_eq!(updated.status, ContentStatus::Published);
        assert!(updated.previous_status.is_none());
        assert!(updated.deleted_at.is_none());
        // Coming back to published counts as a fresh publication.
        assert_eq!(updated.published_at, Some(now));
        assert_eq!(record.action, AuditAction::Restored);
    }

    #[test]
    fn leaving_published_keeps_the_publication_time() {
        let mut item = draft_item();
        item.status = ContentStatus::Published;
        let published_at = Utc::now();
        item.published_at = Some(published_at);

        let (updated, _) = plan(&item, ContentStatus::Archived).apply_to(&item, Utc::now());

        assert_eq!(updated.status, ContentStatus::Archived);
        assert_eq!(updated.published_at, Some(published_at));
    }

    #[test]
    fn a_reviewer_in_the_plan_is_bound_to_the_item() {
        let item = draft_item();
        let reviewer = UserId(Uuid::new_v4());
        let mut with_reviewer = plan(&item, ContentStatus::PendingApproval);
        with_reviewer.reviewer_id = Some(reviewer);

        let (updated, _) = with_reviewer.apply_to(&item, Utc::now());
        assert_eq!(updated.current_reviewer_id, Some(reviewer));

        // Plans without one leave any existing binding untouched.
        let (unchanged, _) =
            plan(&updated, ContentStatus::Published).apply_to(&updated, Utc::now());
        assert_eq!(unchanged.current_reviewer_id, Some(reviewer));
    }
}
