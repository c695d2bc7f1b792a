use std::str::FromStr;

use chrono::{DateTime, Utc};
use copydesk_common::{ContentSlug, ContentStatus, ContentTitle, UserId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::content::{AuditRecord, ContentItem, NewContentItem};
use crate::domain::workflow::transition::{TransitionOutcome, TransitionRequest};
use crate::infrastructure::http::api::ApiError;

/// Request body for creating a draft content item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContentItemRequestBody {
    pub slug: String,
    pub title: String,
}

impl CreateContentItemRequestBody {
    pub fn try_into_domain(self, owner_id: UserId) -> Result<NewContentItem, ApiError> {
        let slug = ContentSlug::try_new(self.slug)
            .map_err(|err| ApiError::UnprocessableEntity(err.to_string()))?;
        let title = ContentTitle::try_new(self.title)
            .map_err(|err| ApiError::UnprocessableEntity(err.to_string()))?;

        Ok(NewContentItem {
            slug,
            title,
            owner_id,
        })
    }
}

/// Request body for one workflow transition.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionRequestBody {
    pub to_status: String,
    pub comment: Option<String>,
    pub previous_status: Option<String>,
    pub reviewer_id: Option<Uuid>,
}

impl TransitionRequestBody {
    pub fn try_into_domain(self) -> Result<TransitionRequest, ApiError> {
        let to_status = parse_status(&self.to_status)?;
        let previous_status = self
            .previous_status
            .as_deref()
            .map(parse_status)
            .transpose()?;

        Ok(TransitionRequest {
            to_status,
            comment: self.comment,
            previous_status,
            reviewer_id: self.reviewer_id.map(UserId::from),
        })
    }
}

fn parse_status(value: &str) -> Result<ContentStatus, ApiError> {
    ContentStatus::from_str(value).map_err(|err| ApiError::UnprocessableEntity(err.to_string()))
}

/// Response for one content item
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItemResponseData {
    id: Uuid,
    slug: String,
    title: String,
    status: String,
    previous_status: Option<String>,
    published_at: Option<DateTime<Utc>>,
    deleted_at: Option<DateTime<Utc>>,
    current_reviewer_id: Option<Uuid>,
    owner_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<&ContentItem> for ContentItemResponseData {
    fn from(value: &ContentItem) -> Self {
        Self {
            id: value.id.0,
            slug: value.slug.to_string(),
            title: value.title.to_string(),
            status: value.status.to_string(),
            previous_status: value.previous_status.map(|status| status.to_string()),
            published_at: value.published_at,
            deleted_at: value.deleted_at,
            current_reviewer_id: value.current_reviewer_id.map(|reviewer| reviewer.0),
            owner_id: value.owner_id.0,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// Response for one audit record
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRecordResponseData {
    id: i64,
    item_id: Uuid,
    from_status: String,
    to_status: String,
    action: String,
    comment: Option<String>,
    acting_user_id: Uuid,
    created_at: DateTime<Utc>,
}

impl From<&AuditRecord> for AuditRecordResponseData {
    fn from(value: &AuditRecord) -> Self {
        Self {
            id: value.id.0,
            item_id: value.item_id.0,
            from_status: value.from_status.to_string(),
            to_status: value.to_status.to_string(),
            action: value.action.to_string(),
            comment: value.comment.clone(),
            acting_user_id: value.acting_user_id.0,
            created_at: value.created_at,
        }
    }
}

/// Response for an accepted transition: the updated item plus the single
/// record appended for it.
#[derive(Debug, Clone, Serialize)]
pub struct TransitionResponseData {
    item: ContentItemResponseData,
    record: AuditRecordResponseData,
}

impl From<&TransitionOutcome> for TransitionResponseData {
    fn from(value: &TransitionOutcome) -> Self {
        Self {
            item: ContentItemResponseData::from(&value.item),
            record: AuditRecordResponseData::from(&value.record),
        }
    }
}
