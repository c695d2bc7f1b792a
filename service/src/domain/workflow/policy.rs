use copydesk_common::{ContentStatus, Role};

/// Role capability policy: may `role` move an item from `from` to `to`?
///
/// Pure and total over the closed role and status sets. Anything not
/// granted here is denied, and this is always the first check a transition
/// faces, before any payload validation.
pub fn allowed(role: Role, from: ContentStatus, to: ContentStatus) -> bool {
    use ContentStatus::*;

    // A transition must actually move the item; `X -> X` is denied for
    // every role, re-publishing an already published item included.
    if from == to {
        return false;
    }

    match role {
        // Editors only hand work over for review, either a fresh draft or
        // a rework after changes were requested.
        Role::Editor => matches!(
            (from, to),
            (Draft, PendingApproval) | (NeedsChanges, PendingApproval)
        ),
        // Senior editors and above perform every real transition, direct
        // publication without a review round included.
        Role::SeniorEditor | Role::Admin | Role::SysAdmin => true,
    }
}

/// Reviewer assignment gate. Binding a reviewer to an item is reserved to
/// senior editors and above, independent of the transition being made.
pub fn can_assign_reviewer(role: Role) -> bool {
    role.at_least(Role::SeniorEditor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editors_submit_drafts_and_reworks_for_review() {
        assert!(allowed(
            Role::Editor,
            ContentStatus::Draft,
            ContentStatus::PendingApproval
        ));
        assert!(allowed(
            Role::Editor,
            ContentStatus::NeedsChanges,
            ContentStatus::PendingApproval
        ));
    }

    #[test]
    fn editors_cannot_publish_or_clear_the_review_queue() {
        assert!(!allowed(
            Role::Editor,
            ContentStatus::Draft,
            ContentStatus::Published
        ));
        assert!(!allowed(
            Role::Editor,
            ContentStatus::PendingApproval,
            ContentStatus::Published
        ));
        assert!(!allowed(
            Role::Editor,
            ContentStatus::PendingApproval,
            ContentStatus::NeedsChanges
        ));
        assert!(!allowed(
            Role::Editor,
            ContentStatus::Published,
            ContentStatus::Archived
        ));
        assert!(!allowed(
            Role::Editor,
            ContentStatus::Draft,
            ContentStatus::Deleted
        ));
    }

    #[test]
    fn senior_roles_perform_every_real_transition() {
        for role in [Role::SeniorEditor, Role::Admin, Role::SysAdmin] {
            assert!(allowed(
                role,
                ContentStatus::PendingApproval,
                ContentStatus::Published
            ));
            assert!(allowed(
                role,
                ContentStatus::PendingApproval,
                ContentStatus::NeedsChanges
            ));
            assert!(allowed(role, ContentStatus::Draft, ContentStatus::Published));
            assert!(allowed(role, ContentStatus::Published, ContentStatus::Archived));
            assert!(allowed(role, ContentStatus::Archived, ContentStatus::Draft));
            assert!(allowed(role, ContentStatus::Deleted, ContentStatus::Draft));
        }
    }

    #[test]
    fn self_transitions_are_denied_for_every_role() {
        for role in Role::ALL {
            for status in ContentStatus::ALL {
                assert!(
                    !allowed(role, status, status),
                    "{role} must not move {status} onto itself"
                );
            }
        }
    }

    #[test]
    fn reviewer_assignment_needs_a_senior_role() {
        assert!(!can_assign_reviewer(Role::Editor));
        assert!(can_assign_reviewer(Role::SeniorEditor));
        assert!(can_assign_reviewer(Role::Admin));
        assert!(can_assign_reviewer(Role::SysAdmin));
    }
}
