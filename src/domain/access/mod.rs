//! Acting principal and role grants

pub mod policy;

use std::collections::HashSet;

/// Role granting team administration (team creation)
pub const ROLE_RH_ADMIN: &str = "ROLE_RH_ADMIN";
/// Role overriding every ownership check
pub const ROLE_RH_SUPERADMIN: &str = "ROLE_RH_SUPERADMIN";

/// Deduplicated set of role grants attached to a principal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSet(HashSet<String>);

impl RoleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw role strings, discarding duplicates
    pub fn from_strings<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(roles.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, role: &str) -> bool {
        self.0.contains(role)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Roles in a stable order, for persistence and API output
    pub fn to_sorted_vec(&self) -> Vec<String> {
        let mut roles: Vec<String> = self.0.iter().cloned().collect();
        roles.sort();
        roles
    }
}

/// The authenticated actor behind a request
#[derive(Debug, Clone)]
pub struct Principal {
    /// Account id of the acting user
    user_id: i32,
    /// Id of the profile attached to the account, if one exists
    user_data_id: Option<i32>,
    /// Role grants held by the account
    roles: RoleSet,
}

impl Principal {
    pub fn new(user_id: i32, user_data_id: Option<i32>, roles: RoleSet) -> Self {
        Self {
            user_id,
            user_data_id,
            roles,
        }
    }

    pub fn user_id(&self) -> i32 {
        self.user_id
    }

    pub fn user_data_id(&self) -> Option<i32> {
        self.user_data_id
    }

    pub fn roles(&self) -> &RoleSet {
        &self.roles
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    /// Whether this principal's profile is the given one
    pub fn owns_profile(&self, user_data_id: i32) -> bool {
        self.user_data_id == Some(user_data_id)
    }
}
