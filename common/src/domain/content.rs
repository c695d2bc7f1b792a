use uuid::Uuid;

/// Lifecycle states of a content item. Finite set; `Draft` is the sole
/// initial state for new items and none of the states is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentStatus {
    Draft,
    PendingApproval,
    NeedsChanges,
    Published,
    Archived,
    Deleted,
}

impl ContentStatus {
    pub const ALL: [ContentStatus; 6] = [
        ContentStatus::Draft,
        ContentStatus::PendingApproval,
        ContentStatus::NeedsChanges,
        ContentStatus::Published,
        ContentStatus::Archived,
        ContentStatus::Deleted,
    ];
}

impl std::fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentStatus::Draft => write!(f, "draft"),
            ContentStatus::PendingApproval => write!(f, "pending_approval"),
            ContentStatus::NeedsChanges => write!(f, "needs_changes"),
            ContentStatus::Published => write!(f, "published"),
            ContentStatus::Archived => write!(f, "archived"),
            ContentStatus::Deleted => write!(f, "deleted"),
        }
    }
}

impl std::str::FromStr for ContentStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(ContentStatus::Draft),
            "pending_approval" => Ok(ContentStatus::PendingApproval),
            "needs_changes" => Ok(ContentStatus::NeedsChanges),
            "published" => Ok(ContentStatus::Published),
            "archived" => Ok(ContentStatus::Archived),
            "deleted" => Ok(ContentStatus::Deleted),
            _ => Err(anyhow::anyhow!("Invalid content status: {}", s)),
        }
    }
}

/// Action label derived from a transition and recorded in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuditAction {
    Submitted,
    Approved,
    ChangesRequested,
    Archived,
    Deleted,
    Restored,
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditAction::Submitted => write!(f, "submitted"),
            AuditAction::Approved => write!(f, "approved"),
            AuditAction::ChangesRequested => write!(f, "changes_requested"),
            AuditAction::Archived => write!(f, "archived"),
            AuditAction::Deleted => write!(f, "deleted"),
            AuditAction::Restored => write!(f, "restored"),
        }
    }
}

impl std::str::FromStr for AuditAction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "submitted" => Ok(AuditAction::Submitted),
            "approved" => Ok(AuditAction::Approved),
            "changes_requested" => Ok(AuditAction::ChangesRequested),
            "archived" => Ok(AuditAction::Archived),
            "deleted" => Ok(AuditAction::Deleted),
            "restored" => Ok(AuditAction::Restored),
            _ => Err(anyhow::anyhow!("Invalid audit action: {}", s)),
        }
    }
}

/// Wrapper to prevent ID confusion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentItemId(pub Uuid);

impl ContentItemId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for ContentItemId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for ContentItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Wrapper to prevent ID confusion; the value is assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AuditRecordId(pub i64);

impl From<i64> for AuditRecordId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}
