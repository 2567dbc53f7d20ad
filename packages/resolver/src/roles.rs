//! Role priority lookup used as the base of screen ranking.

use std::collections::BTreeMap;

/// Total ordering weight for a role id (higher = more privileged)
pub trait RolePriority {
    fn priority(&self, role_id: &str) -> i32;
}

impl<F> RolePriority for F
where
    F: Fn(&str) -> i32,
{
    fn priority(&self, role_id: &str) -> i32 {
        self(role_id)
    }
}

pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_POWER: &str = "POWER";
pub const ROLE_BASIC: &str = "BASIC";
pub const ROLE_PUBLIC: &str = "PUBLIC";

/// Role table with the builtin roles preloaded. Unknown roles weigh 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleTable {
    priorities: BTreeMap<String, i32>,
}

impl RoleTable {
    pub fn builtin() -> Self {
        let priorities = [(ROLE_ADMIN, 4), (ROLE_POWER, 3), (ROLE_BASIC, 2), (ROLE_PUBLIC, 1)]
            .into_iter()
            .map(|(role, priority)| (role.to_string(), priority))
            .collect();
        Self { priorities }
    }

    /// Builtin table with `overrides` applied on top
    pub fn with_overrides(overrides: &BTreeMap<String, i32>) -> Self {
        let mut table = Self::builtin();
        for (role, priority) in overrides {
            table.set(role.clone(), *priority);
        }
        table
    }

    pub fn set(&mut self, role_id: impl Into<String>, priority: i32) {
        self.priorities.insert(role_id.into(), priority);
    }
}

impl Default for RoleTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RolePriority for RoleTable {
    fn priority(&self, role_id: &str) -> i32 {
        self.priorities.get(role_id).copied().unwrap_or(0)
    }
}
