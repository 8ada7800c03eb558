//! Role catalog
//!
//! Static reference data: the three roles a user can hold. The wire value
//! (and what tokens carry) is the `ROLE_`-prefixed name.

use auth_core::roles;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Admin,
    Moderator,
}

impl Role {
    pub fn name(&self) -> &'static str {
        match self {
            Role::User => roles::USER,
            Role::Admin => roles::ADMIN,
            Role::Moderator => roles::MODERATOR,
        }
    }

    pub fn from_name(name: &str) -> Option<Role> {
        match name {
            roles::USER => Some(Role::User),
            roles::ADMIN => Some(Role::Admin),
            roles::MODERATOR => Some(Role::Moderator),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for role in [Role::User, Role::Admin, Role::Moderator] {
            assert_eq!(Role::from_name(role.name()), Some(role));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(Role::from_name("ROLE_SUPERUSER"), None);
        assert_eq!(Role::from_name("admin"), None);
    }
}
