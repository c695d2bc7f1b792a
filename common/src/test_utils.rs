use uuid::Uuid;

use crate::domain::{Actor, Role, UserId};

// Actor builders for workflow tests.
//
// Public so that other crates can reuse them for their own tests.

/// Fresh actor with the given role and a random user id.
pub fn actor(role: Role) -> Actor {
    Actor {
        user_id: UserId(Uuid::new_v4()),
        role,
    }
}

pub fn editor() -> Actor {
    actor(Role::Editor)
}

pub fn senior_editor() -> Actor {
    actor(Role::SeniorEditor)
}

pub fn admin() -> Actor {
    actor(Role::Admin)
}

pub fn sys_admin() -> Actor {
    actor(Role::SysAdmin)
}
