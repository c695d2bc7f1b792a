use std::fmt::{Display, Formatter};

use copydesk_common::{ContentItemId, ContentStatus, Role};

use crate::domain::workflow::preconditions::FieldViolation;

/// Why an otherwise well-formed transition was refused authorization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Denial {
    /// The role capability policy does not grant this move.
    Transition {
        role: Role,
        from: ContentStatus,
        to: ContentStatus,
    },
    /// The request tried to bind a reviewer without the rank for it.
    ReviewerAssignment { role: Role },
}

impl Display for Denial {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Denial::Transition { role, from, to } => {
                write!(f, "role {role} may not move content from {from} to {to}")
            }
            Denial::ReviewerAssignment { role } => {
                write!(f, "role {role} may not assign a reviewer")
            }
        }
    }
}

/// Typed outcome of a refused or failed workflow operation. Callers match
/// exhaustively; the HTTP layer maps each variant to its own status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    /// The capability policy or the reviewer gate said no.
    Unauthorized(Denial),
    /// Structural preconditions unmet; names every offending field.
    Validation(Vec<FieldViolation>),
    NotFound(ContentItemId),
    /// The transition was built against a status the item no longer holds.
    /// The caller should reread the item and retry.
    Conflict {
        expected: ContentStatus,
        actual: ContentStatus,
    },
    /// The store failed; the whole unit of work was rolled back.
    Storage(String),
}
