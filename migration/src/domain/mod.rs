use copydesk_common::{
    ACTING_USER_FIELD_NAME, ACTION_FIELD_NAME, AUDIT_RECORDS_TABLE_NAME, COMMENT_FIELD_NAME,
    CONTENT_ITEMS_TABLE_NAME, CREATED_FIELD_NAME, DELETED_FIELD_NAME, FROM_STATUS_FIELD_NAME,
    ITEM_ID_FIELD_NAME, OWNER_FIELD_NAME, PREVIOUS_STATUS_FIELD_NAME, PUBLISHED_FIELD_NAME,
    RECORD_ID_FIELD_NAME, REVIEWER_FIELD_NAME, SLUG_FIELD_NAME, STATUS_FIELD_NAME,
    TITLE_FIELD_NAME, TO_STATUS_FIELD_NAME, UPDATED_FIELD_NAME,
};

use crate::domain::tables::{Column, ForeignKeyConstraint, Index, Table};

pub mod migration;
pub mod persistence;
pub mod tables;

/// The tables the workflow service persists to: the content items and
/// their append-only audit records. Statuses, roles and actions are stored
/// as their snake_case names.
pub fn workflow_tables() -> Vec<Table> {
    vec![content_items_table(), audit_records_table()]
}

fn content_items_table() -> Table {
    let columns = vec![
        Column::primary_key(ITEM_ID_FIELD_NAME, "UUID"),
        Column::new(SLUG_FIELD_NAME, "VARCHAR(120)", true, true, None),
        Column::new(TITLE_FIELD_NAME, "VARCHAR(200)", true, false, None),
        Column::new(STATUS_FIELD_NAME, "VARCHAR(32)", true, false, None),
        Column::new(PREVIOUS_STATUS_FIELD_NAME, "VARCHAR(32)", false, false, None),
        Column::new(PUBLISHED_FIELD_NAME, "TIMESTAMPTZ", false, false, None),
        Column::new(DELETED_FIELD_NAME, "TIMESTAMPTZ", false, false, None),
        Column::new(REVIEWER_FIELD_NAME, "UUID", false, false, None),
        Column::new(OWNER_FIELD_NAME, "UUID", true, false, None),
        Column::new(CREATED_FIELD_NAME, "TIMESTAMPTZ", true, false, Some("now()")),
        Column::new(UPDATED_FIELD_NAME, "TIMESTAMPTZ", true, false, None),
    ];

    Table::new(
        CONTENT_ITEMS_TABLE_NAME.to_string(),
        columns,
        Vec::new(),
        Vec::new(),
    )
}

fn audit_records_table() -> Table {
    let columns = vec![
        // BIGSERIAL so that per-item record order follows insert order.
        Column::primary_key(RECORD_ID_FIELD_NAME, "BIGSERIAL"),
        Column::new(ITEM_ID_FIELD_NAME, "UUID", true, false, None),
        Column::new(FROM_STATUS_FIELD_NAME, "VARCHAR(32)", true, false, None),
        Column::new(TO_STATUS_FIELD_NAME, "VARCHAR(32)", true, false, None),
        Column::new(ACTION_FIELD_NAME, "VARCHAR(32)", true, false, None),
        Column::new(COMMENT_FIELD_NAME, "TEXT", false, false, None),
        Column::new(ACTING_USER_FIELD_NAME, "UUID", true, false, None),
        Column::new(CREATED_FIELD_NAME, "TIMESTAMPTZ", true, false, Some("now()")),
    ];

    let foreign_keys = vec![ForeignKeyConstraint::new(
        AUDIT_RECORDS_TABLE_NAME,
        ITEM_ID_FIELD_NAME,
        CONTENT_ITEMS_TABLE_NAME,
        ITEM_ID_FIELD_NAME,
    )];

    // History reads are always per item.
    let indexes = vec![Index::new(
        AUDIT_RECORDS_TABLE_NAME,
        vec![ITEM_ID_FIELD_NAME],
        false,
    )];

    Table::new(
        AUDIT_RECORDS_TABLE_NAME.to_string(),
        columns,
        foreign_keys,
        indexes,
    )
}
