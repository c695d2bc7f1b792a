use copydesk_common::ContentStatus;

use crate::domain::workflow::transition::TransitionRequest;

/// A structural requirement the transition payload failed to meet. `field`
/// names the offending request field as the caller spelled it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Transition preconditions, checked after the role policy admitted the
/// move and before anything is mutated. All violations are collected, not
/// just the first one.
///
/// `stored_previous_status` is the restore target recorded on the item
/// itself, consulted only when the item is leaving `Deleted`.
pub fn validate(
    from: ContentStatus,
    stored_previous_status: Option<ContentStatus>,
    request: &TransitionRequest,
) -> Result<(), Vec<FieldViolation>> {
    let mut violations = Vec::new();

    if request.to_status == ContentStatus::NeedsChanges && is_blank(request.comment.as_deref()) {
        violations.push(FieldViolation::new(
            "comment",
            "a transition to needs_changes must say what needs changing",
        ));
    }

    if request.to_status == ContentStatus::Deleted && request.previous_status.is_none() {
        violations.push(FieldViolation::new(
            "previousStatus",
            "a transition to deleted must carry the status the item is leaving",
        ));
    }

    if from == ContentStatus::Deleted && request.to_status != ContentStatus::Deleted {
        match stored_previous_status {
            Some(recorded) if recorded == request.to_status => {}
            Some(recorded) => violations.push(FieldViolation::new(
                "toStatus",
                format!("a deleted item can only be restored to {recorded}"),
            )),
            None => violations.push(FieldViolation::new(
                "toStatus",
                "item has no recorded status to restore to",
            )),
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn is_blank(comment: Option<&str>) -> bool {
    comment.is_none_or(|value| value.trim().is_empty())
}
