use uuid::Uuid;

/// Closed set of editorial roles, least to most privileged.
/// Declaration order is the privilege order, so `Ord` comparisons
/// answer "is this role at least that privileged".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Editor,
    SeniorEditor,
    Admin,
    SysAdmin,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Editor, Role::SeniorEditor, Role::Admin, Role::SysAdmin];

    pub fn at_least(&self, other: Role) -> bool {
        *self >= other
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Editor => write!(f, "editor"),
            Role::SeniorEditor => write!(f, "senior_editor"),
            Role::Admin => write!(f, "admin"),
            Role::SysAdmin => write!(f, "sys_admin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "editor" => Ok(Role::Editor),
            "senior_editor" => Ok(Role::SeniorEditor),
            "admin" => Ok(Role::Admin),
            "sys_admin" => Ok(Role::SysAdmin),
            _ => Err(anyhow::anyhow!("Invalid role: {}", s)),
        }
    }
}

/// Wrapper to prevent ID confusion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The authenticated caller: identity plus role, established by the
/// authentication collaborator in front of this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: UserId,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn roles_are_ordered_by_privilege() {
        assert!(Role::Editor < Role::SeniorEditor);
        assert!(Role::SeniorEditor < Role::Admin);
        assert!(Role::Admin < Role::SysAdmin);
        assert!(Role::Admin.at_least(Role::SeniorEditor));
        assert!(!Role::Editor.at_least(Role::SeniorEditor));
    }

    #[test]
    fn role_names_round_trip() {
        for role in Role::ALL {
            let parsed = Role::from_str(&role.to_string()).unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(Role::from_str("intern").is_err());
        assert!(Role::from_str("").is_err());
    }
}
