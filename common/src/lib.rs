mod domain;
mod infrastructure;

pub mod test_utils;

// Persisted workflow table names

pub const CONTENT_ITEMS_TABLE_NAME: &'static str = "content_items";
pub const AUDIT_RECORDS_TABLE_NAME: &'static str = "content_audit_records";

// Persisted content item column names

pub const ITEM_ID_FIELD_NAME: &'static str = "item_id";
pub const SLUG_FIELD_NAME: &'static str = "slug";
pub const TITLE_FIELD_NAME: &'static str = "title";
pub const STATUS_FIELD_NAME: &'static str = "status";
pub const PREVIOUS_STATUS_FIELD_NAME: &'static str = "previous_status";
pub const PUBLISHED_FIELD_NAME: &'static str = "published_at";
pub const DELETED_FIELD_NAME: &'static str = "deleted_at";
pub const REVIEWER_FIELD_NAME: &'static str = "current_reviewer_id";
pub const OWNER_FIELD_NAME: &'static str = "owner_id";

pub const CREATED_FIELD_NAME: &'static str = "created_at";
pub const UPDATED_FIELD_NAME: &'static str = "updated_at";

// Persisted audit record column names

pub const RECORD_ID_FIELD_NAME: &'static str = "record_id";
pub const FROM_STATUS_FIELD_NAME: &'static str = "from_status";
pub const TO_STATUS_FIELD_NAME: &'static str = "to_status";
pub const ACTION_FIELD_NAME: &'static str = "action";
pub const COMMENT_FIELD_NAME: &'static str = "comment";
pub const ACTING_USER_FIELD_NAME: &'static str = "acting_user_id";

// expose domain module

pub use domain::*;

// expose database module

pub use infrastructure::database;
