use chrono::{DateTime, Utc};
use copydesk_common::{
    AuditAction, AuditRecordId, ContentItemId, ContentSlug, ContentStatus, ContentTitle, UserId,
};

/// One workflowed piece of editorial content.
///
/// The status fields move only through the workflow engine; everything else
/// is fixed at creation.
#[derive(Debug, Clone)]
pub struct ContentItem {
    pub id: ContentItemId,
    pub slug: ContentSlug,
    pub title: ContentTitle,
    pub status: ContentStatus,

    /// Status held immediately before the most recent move into `Deleted`;
    /// `None` whenever the item is not deleted.
    pub previous_status: Option<ContentStatus>,

    /// Set each time the item enters `Published`; never cleared by later
    /// transitions away from it.
    pub published_at: Option<DateTime<Utc>>,

    /// Set while the item sits in `Deleted`, cleared on restore.
    pub deleted_at: Option<DateTime<Utc>>,

    /// Reviewer bound to the item, set only through a transition that
    /// passed the reviewer assignment gate.
    pub current_reviewer_id: Option<UserId>,

    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a fresh content item.
#[derive(Debug, Clone)]
pub struct NewContentItem {
    pub slug: ContentSlug,
    pub title: ContentTitle,
    pub owner_id: UserId,
}

impl ContentItem {
    /// New items always start as a draft owned by their creator.
    pub fn new_draft(id: ContentItemId, new_item: NewContentItem, now: DateTime<Utc>) -> Self {
        Self {
            id,
            slug: new_item.slug,
            title: new_item.title,
            status: ContentStatus::Draft,
            previous_status: None,
            published_at: None,
            deleted_at: None,
            current_reviewer_id: None,
            owner_id: new_item.owner_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// One immutable entry in an item's transition history. Records are only
/// ever appended, never rewritten or removed.
#[derive(Debug, Clone)]
pub struct AuditRecord {
    pub id: AuditRecordId,
    pub item_id: ContentItemId,
    pub from_status: ContentStatus,
    pub to_status: ContentStatus,
    pub action: AuditAction,
    pub comment: Option<String>,
    pub acting_user_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Audit entry as produced by the engine, before the store assigns its id.
#[derive(Debug, Clone)]
pub struct NewAuditRecord {
    pub item_id: ContentItemId,
    pub from_status: ContentStatus,
    pub to_status: ContentStatus,
    pub action: AuditAction,
    pub comment: Option<String>,
    pub acting_user_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl NewAuditRecord {
    pub fn with_id(self, id: AuditRecordId) -> AuditRecord {
        AuditRecord {
            id,
            item_id: self.item_id,
            from_status: self.from_status,
            to_status: self.to_status,
            action: self.action,
            comment: self.comment,
            acting_user_id: self.acting_user_id,
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    #[test]
    fn new_items_start_as_unpublished_drafts() {
        let now = Utc::now();
        let owner = UserId(Uuid::new_v4());
        let item = ContentItem::new_draft(
            ContentItemId::generate(),
            NewContentItem {
                slug: ContentSlug::try_new("launch-note").unwrap(),
                title: ContentTitle::try_new("Launch note").unwrap(),
                owner_id: owner,
            },
            now,
        );

        assert_eq!(item.status, ContentStatus::Draft);
        assert_eq!(item.owner_id, owner);
        assert!(item.previous_status.is_none());
        assert!(item.published_at.is_none());
        assert!(item.deleted_at.is_none());
        assert!(item.current_reviewer_id.is_none());
        assert_eq!(item.created_at, item.updated_at);
    }
}
