use copydesk_common::{Actor, ContentItemId, ContentStatus};

use crate::domain::content::AuditRecord;
use crate::domain::repository::{ContentRepository, RepositoryError};
use crate::domain::workflow::error::{Denial, WorkflowError};
use crate::domain::workflow::transition::{
    TransitionOutcome, TransitionPlan, TransitionRequest, derive_action,
};
use crate::domain::workflow::{policy, preconditions};

/// Runs one transition end to end: authorize, validate, plan, then hand
/// the plan to the store for its atomic apply-and-append.
///
/// Checks run policy first, so a caller whose role never qualifies for the
/// move learns nothing about the payload rules behind it.
#[derive(Clone)]
pub struct WorkflowEngine<R: ContentRepository> {
    repository: R,
}

impl<R: ContentRepository> WorkflowEngine<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn apply(
        &self,
        actor: Actor,
        item_id: ContentItemId,
        request: TransitionRequest,
    ) -> Result<TransitionOutcome, WorkflowError> {
        let item = self
            .repository
            .find(item_id)
            .await
            .map_err(|error| repository_failure(item_id, error))?;
        let from_status = item.status;
        let to_status = request.to_status;

        if !policy::allowed(actor.role, from_status, to_status) {
            return Err(WorkflowError::Unauthorized(Denial::Transition {
                role: actor.role,
                from: from_status,
                to: to_status,
            }));
        }

        preconditions::validate(from_status, item.previous_status, &request)
            .map_err(WorkflowError::Validation)?;

        if request.reviewer_id.is_some() && !policy::can_assign_reviewer(actor.role) {
            return Err(WorkflowError::Unauthorized(Denial::ReviewerAssignment {
                role: actor.role,
            }));
        }

        // The restore target carried by a delete is also the caller's view
        // of the current status; a mismatch means the caller read a stale
        // item and the delete must not proceed.
        if to_status == ContentStatus::Deleted {
            if let Some(supplied) = request.previous_status
                && supplied != from_status
            {
                return Err(WorkflowError::Conflict {
                    expected: supplied,
                    actual: from_status,
                });
            }
        }

        let plan = TransitionPlan {
            item_id,
            from_status,
            to_status,
            action: derive_action(from_status, to_status),
            comment: request.comment,
            acting_user_id: actor.user_id,
            reviewer_id: request.reviewer_id,
        };

        self.repository
            .apply_transition(plan)
            .await
            .map_err(|error| repository_failure(item_id, error))
    }

    /// Full transition history of one item, oldest record first.
    pub async fn history(&self, item_id: ContentItemId) -> Result<Vec<AuditRecord>, WorkflowError> {
        self.repository
            .find(item_id)
            .await
            .map_err(|error| repository_failure(item_id, error))?;

        self.repository
            .history(item_id)
            .await
            .map_err(|error| repository_failure(item_id, error))
    }
}

fn repository_failure(item_id: ContentItemId, error: RepositoryError) -> WorkflowError {
    match error {
        RepositoryError::NotFound => WorkflowError::NotFound(item_id),
        RepositoryError::Conflict { expected, actual } => {
            WorkflowError::Conflict { expected, actual }
        }
        RepositoryError::UniqueViolation(cause) => WorkflowError::Storage(cause),
        RepositoryError::DatabaseError(cause) => WorkflowError::Storage(cause),
    }
}
