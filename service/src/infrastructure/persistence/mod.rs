use std::str::FromStr;

use chrono::Utc;
use futures::TryStreamExt;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use copydesk_common::database::Database;
use copydesk_common::{
    ACTING_USER_FIELD_NAME, ACTION_FIELD_NAME, AUDIT_RECORDS_TABLE_NAME, AuditAction,
    AuditRecordId, COMMENT_FIELD_NAME, CONTENT_ITEMS_TABLE_NAME, CREATED_FIELD_NAME,
    ContentItemId, ContentSlug, ContentStatus, ContentTitle, DELETED_FIELD_NAME,
    FROM_STATUS_FIELD_NAME, ITEM_ID_FIELD_NAME, OWNER_FIELD_NAME, PREVIOUS_STATUS_FIELD_NAME,
    PUBLISHED_FIELD_NAME, RECORD_ID_FIELD_NAME, REVIEWER_FIELD_NAME, SLUG_FIELD_NAME,
    STATUS_FIELD_NAME, TITLE_FIELD_NAME, TO_STATUS_FIELD_NAME, UPDATED_FIELD_NAME, UserId,
};

use crate::domain::content::{AuditRecord, ContentItem, NewContentItem};
use crate::domain::repository::{ContentRepository, RepositoryError};
use crate::domain::workflow::transition::{TransitionOutcome, TransitionPlan};

/// Postgres-backed content repository.
///
/// Transitions run in one transaction that locks the item row with
/// `FOR UPDATE`, re-checks the status the plan was built against, and
/// appends the audit record before committing. The record timestamp is
/// taken while the lock is held, so per-item record order follows commit
/// order.
#[derive(Clone, Debug)]
pub struct PgContentRepository {
    database: &'static Database,
}

impl PgContentRepository {
    pub fn new(database: &'static Database) -> Self {
        Self { database }
    }

    fn items_table(&self) -> String {
        format!(
            "\"{}\".\"{}\"",
            self.database.database_schema(),
            CONTENT_ITEMS_TABLE_NAME
        )
    }

    fn records_table(&self) -> String {
        format!(
            "\"{}\".\"{}\"",
            self.database.database_schema(),
            AUDIT_RECORDS_TABLE_NAME
        )
    }
}

const ITEM_COLUMNS: &str = "item_id, slug, title, status, previous_status, published_at, \
     deleted_at, current_reviewer_id, owner_id, created_at, updated_at";

impl ContentRepository for PgContentRepository {
    async fn create(&self, new_item: NewContentItem) -> Result<ContentItem, RepositoryError> {
        let item = ContentItem::new_draft(ContentItemId::generate(), new_item, Utc::now());

        let sql = format!(
            "INSERT INTO {} ({ITEM_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
            self.items_table()
        );
        sqlx::query(&sql)
            .bind(item.id.0)
            .bind(item.slug.as_ref())
            .bind(item.title.as_ref())
            .bind(item.status.to_string())
            .bind(item.previous_status.map(|status| status.to_string()))
            .bind(item.published_at)
            .bind(item.deleted_at)
            .bind(item.current_reviewer_id.map(|reviewer| reviewer.0))
            .bind(item.owner_id.0)
            .bind(item.created_at)
            .bind(item.updated_at)
            .execute(self.database.database_pool())
            .await
            .map_err(|e| insert_item_error(&item.slug, e))?;

        Ok(item)
    }

    async fn find(&self, id: ContentItemId) -> Result<ContentItem, RepositoryError> {
        let sql = format!(
            "SELECT {ITEM_COLUMNS} FROM {} WHERE item_id = $1",
            self.items_table()
        );
        let row = sqlx::query(&sql)
            .bind(id.0)
            .fetch_optional(self.database.database_pool())
            .await
            .map_err(database_error)?;

        row.map(|row| content_item_from_row(&row))
            .transpose()?
            .ok_or(RepositoryError::NotFound)
    }

    async fn apply_transition(
        &self,
        plan: TransitionPlan,
    ) -> Result<TransitionOutcome, RepositoryError> {
        let mut transaction = self
            .database
            .database_pool()
            .begin()
            .await
            .map_err(database_error)?;

        let sql = format!(
            "SELECT {ITEM_COLUMNS} FROM {} WHERE item_id = $1 FOR UPDATE",
            self.items_table()
        );
        let row = sqlx::query(&sql)
            .bind(plan.item_id.0)
            .fetch_optional(&mut *transaction)
            .await
            .map_err(database_error)?;
        let item = row
            .map(|row| content_item_from_row(&row))
            .transpose()?
            .ok_or(RepositoryError::NotFound)?;

        // The row lock is held from here on; a racing transition either
        // committed before this read or waits behind it, so the check is
        // authoritative.
        if item.status != plan.from_status {
            return Err(RepositoryError::Conflict {
                expected: plan.from_status,
                actual: item.status,
            });
        }

        let (updated, record) = plan.apply_to(&item, Utc::now());

        let sql = format!(
            "UPDATE {} SET status = $2, previous_status = $3, published_at = $4, \
             deleted_at = $5, current_reviewer_id = $6, updated_at = $7 WHERE item_id = $1",
            self.items_table()
        );
        sqlx::query(&sql)
            .bind(updated.id.0)
            .bind(updated.status.to_string())
            .bind(updated.previous_status.map(|status| status.to_string()))
            .bind(updated.published_at)
            .bind(updated.deleted_at)
            .bind(updated.current_reviewer_id.map(|reviewer| reviewer.0))
            .bind(updated.updated_at)
            .execute(&mut *transaction)
            .await
            .map_err(database_error)?;

        let sql = format!(
            "INSERT INTO {} (item_id, from_status, to_status, action, comment, \
             acting_user_id, created_at) VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING record_id",
            self.records_table()
        );
        let record_id: i64 = sqlx::query_scalar(&sql)
            .bind(record.item_id.0)
            .bind(record.from_status.to_string())
            .bind(record.to_status.to_string())
            .bind(record.action.to_string())
            .bind(record.comment.clone())
            .bind(record.acting_user_id.0)
            .bind(record.created_at)
            .fetch_one(&mut *transaction)
            .await
            .map_err(database_error)?;

        transaction.commit().await.map_err(database_error)?;

        Ok(TransitionOutcome {
            item: updated,
            record: record.with_id(AuditRecordId(record_id)),
        })
    }

    async fn history(&self, id: ContentItemId) -> Result<Vec<AuditRecord>, RepositoryError> {
        let sql = format!(
            "SELECT record_id, item_id, from_status, to_status, action, comment, \
             acting_user_id, created_at FROM {} WHERE item_id = $1 \
             ORDER BY created_at ASC, record_id ASC",
            self.records_table()
        );
        let mut rows = sqlx::query(&sql)
            .bind(id.0)
            .fetch(self.database.database_pool());

        let mut records = Vec::new();
        while let Some(row) = rows.try_next().await.map_err(database_error)? {
            records.push(audit_record_from_row(&row)?);
        }

        Ok(records)
    }
}

fn content_item_from_row(row: &PgRow) -> Result<ContentItem, RepositoryError> {
    let slug: String = row.try_get(SLUG_FIELD_NAME).map_err(database_error)?;
    let slug = ContentSlug::try_new(slug)
        .map_err(|e| RepositoryError::DatabaseError(format!("Failed to parse slug: {}", e)))?;

    let title: String = row.try_get(TITLE_FIELD_NAME).map_err(database_error)?;
    let title = ContentTitle::try_new(title)
        .map_err(|e| RepositoryError::DatabaseError(format!("Failed to parse title: {}", e)))?;

    let reviewer: Option<Uuid> = row.try_get(REVIEWER_FIELD_NAME).map_err(database_error)?;

    Ok(ContentItem {
        id: ContentItemId(row.try_get(ITEM_ID_FIELD_NAME).map_err(database_error)?),
        slug,
        title,
        status: status_from_row(row, STATUS_FIELD_NAME)?,
        previous_status: optional_status_from_row(row, PREVIOUS_STATUS_FIELD_NAME)?,
        published_at: row.try_get(PUBLISHED_FIELD_NAME).map_err(database_error)?,
        deleted_at: row.try_get(DELETED_FIELD_NAME).map_err(database_error)?,
        current_reviewer_id: reviewer.map(UserId),
        owner_id: UserId(row.try_get(OWNER_FIELD_NAME).map_err(database_error)?),
        created_at: row.try_get(CREATED_FIELD_NAME).map_err(database_error)?,
        updated_at: row.try_get(UPDATED_FIELD_NAME).map_err(database_error)?,
    })
}

fn audit_record_from_row(row: &PgRow) -> Result<AuditRecord, RepositoryError> {
    let action: String = row.try_get(ACTION_FIELD_NAME).map_err(database_error)?;
    let action = AuditAction::from_str(&action)
        .map_err(|e| RepositoryError::DatabaseError(format!("Failed to parse action: {}", e)))?;

    Ok(AuditRecord {
        id: AuditRecordId(row.try_get(RECORD_ID_FIELD_NAME).map_err(database_error)?),
        item_id: ContentItemId(row.try_get(ITEM_ID_FIELD_NAME).map_err(database_error)?),
        from_status: status_from_row(row, FROM_STATUS_FIELD_NAME)?,
        to_status: status_from_row(row, TO_STATUS_FIELD_NAME)?,
        action,
        comment: row.try_get(COMMENT_FIELD_NAME).map_err(database_error)?,
        acting_user_id: UserId(row.try_get(ACTING_USER_FIELD_NAME).map_err(database_error)?),
        created_at: row.try_get(CREATED_FIELD_NAME).map_err(database_error)?,
    })
}

fn status_from_row(row: &PgRow, column: &str) -> Result<ContentStatus, RepositoryError> {
    let value: String = row.try_get(column).map_err(database_error)?;
    ContentStatus::from_str(&value).map_err(|e| {
        RepositoryError::DatabaseError(format!("Failed to parse {}: {}", column, e))
    })
}

fn optional_status_from_row(
    row: &PgRow,
    column: &str,
) -> Result<Option<ContentStatus>, RepositoryError> {
    let value: Option<String> = row.try_get(column).map_err(database_error)?;
    value
        .as_deref()
        .map(|value| {
            ContentStatus::from_str(value).map_err(|e| {
                RepositoryError::DatabaseError(format!("Failed to parse {}: {}", column, e))
            })
        })
        .transpose()
}

fn insert_item_error(slug: &ContentSlug, error: sqlx::Error) -> RepositoryError {
    match &error {
        sqlx::Error::Database(db_error) if db_error.is_unique_violation() => {
            RepositoryError::UniqueViolation(format!(
                "content item with slug {} already exists",
                slug
            ))
        }
        _ => database_error(error),
    }
}

fn database_error(error: sqlx::Error) -> RepositoryError {
    RepositoryError::DatabaseError(error.to_string())
}
