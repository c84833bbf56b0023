//! Authorization predicates for mutating operations
//!
//! Pure functions over (principal, target). Each mutating service evaluates
//! the relevant predicate strictly before any write; a false result aborts
//! the operation with no partial persistence.
//!
//! User account mutations carry no predicate beyond authentication, matching
//! the behavior this API replaces.

use super::{Principal, ROLE_RH_ADMIN, ROLE_RH_SUPERADMIN};
use crate::domain::team::Team;

/// Team creation requires the admin role
pub fn can_create_team(principal: &Principal) -> bool {
    principal.has_role(ROLE_RH_ADMIN)
}

/// Team edit is open to the team's leader, or any superadmin
pub fn can_edit_team(principal: &Principal, team: &Team) -> bool {
    manages_team(principal, team)
}

/// Team deletion follows the same leader-or-superadmin rule as edit
pub fn can_delete_team(principal: &Principal, team: &Team) -> bool {
    manages_team(principal, team)
}

/// Profile creation is restricted to superadmins
pub fn can_create_user_data(principal: &Principal) -> bool {
    principal.has_role(ROLE_RH_SUPERADMIN)
}

/// Profile edit is open to the profile's owner, or any superadmin
pub fn can_edit_user_data(principal: &Principal, target_id: i32) -> bool {
    principal.owns_profile(target_id) || principal.has_role(ROLE_RH_SUPERADMIN)
}

/// Profile deletion is restricted to superadmins
pub fn can_delete_user_data(principal: &Principal) -> bool {
    principal.has_role(ROLE_RH_SUPERADMIN)
}

fn manages_team(principal: &Principal, team: &Team) -> bool {
    principal.owns_profile(team.leader_id()) || principal.has_role(ROLE_RH_SUPERADMIN)
}
