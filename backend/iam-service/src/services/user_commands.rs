//! Sign-up and sign-in command handling

use std::sync::Arc;

use auth_core::TokenIssuer;
use chrono::Utc;
use tracing::{info, warn};

use crate::db::UserStore;
use crate::error::{AppError, Result};
use crate::models::{Role, User};
use crate::security::PasswordHashing;
use crate::services::events::EventPublisher;

#[derive(Debug)]
pub struct SignUpCommand {
    pub username: String,
    pub password: String,
    pub email: String,
    /// Role names; empty or absent means the default `ROLE_USER`.
    pub roles: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct SignInCommand {
    pub username: String,
    pub password: String,
}

/// Result of a successful sign-in: the account plus its freshly issued
/// bearer token.
#[derive(Debug)]
pub struct AuthenticatedUser {
    pub user: User,
    pub token: String,
}

pub struct UserCommandService {
    store: Arc<UserStore>,
    hashing: Arc<dyn PasswordHashing>,
    issuer: Arc<TokenIssuer>,
    events: Arc<dyn EventPublisher>,
}

impl UserCommandService {
    pub fn new(
        store: Arc<UserStore>,
        hashing: Arc<dyn PasswordHashing>,
        issuer: Arc<TokenIssuer>,
        events: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            store,
            hashing,
            issuer,
            events,
        }
    }

    pub fn handle_sign_up(&self, command: SignUpCommand) -> Result<User> {
        if command.username.trim().is_empty() {
            return Err(AppError::Validation("username must not be empty".into()));
        }
        if command.password.is_empty() {
            return Err(AppError::Validation("password must not be empty".into()));
        }
        if self.store.exists_by_username(&command.username) {
            warn!(username = %command.username, "sign-up rejected, username taken");
            return Err(AppError::UsernameTaken);
        }

        let roles = resolve_roles(command.roles)?;
        let password_hash = self.hashing.hash(&command.password)?;

        let user = self
            .store
            .insert(command.username, password_hash, command.email, roles);

        info!(user_id = user.id, username = %user.username, "user created");
        self.events.user_registered(user.id, &user.username);

        Ok(user)
    }

    pub fn handle_sign_in(&self, command: SignInCommand) -> Result<AuthenticatedUser> {
        let mut user = self
            .store
            .find_by_username(&command.username)
            .ok_or(AppError::InvalidCredentials)?;

        if !user.is_active {
            warn!(username = %user.username, "sign-in rejected, account deactivated");
            return Err(AppError::AccountDeactivated);
        }

        if !self.hashing.matches(&command.password, &user.password_hash)? {
            warn!(username = %user.username, "sign-in rejected, bad password");
            return Err(AppError::InvalidCredentials);
        }

        user.record_login(Utc::now());
        self.store.update(user.clone());

        let token = self
            .issuer
            .issue_for_user(&user.username, user.role_names(), user.id)?;

        info!(user_id = user.id, username = %user.username, "user signed in");
        self.events.user_authenticated(user.id, &user.username);

        Ok(AuthenticatedUser { user, token })
    }
}

fn resolve_roles(requested: Option<Vec<String>>) -> Result<Vec<Role>> {
    let names = match requested {
        None => return Ok(vec![Role::User]),
        Some(names) if names.is_empty() => return Ok(vec![Role::User]),
        Some(names) => names,
    };

    let mut roles = Vec::with_capacity(names.len());
    for name in names {
        let role = Role::from_name(&name)
            .ok_or_else(|| AppError::Validation(format!("Role not found: {}", name)))?;
        if !roles.contains(&role) {
            roles.push(role);
        }
    }
    Ok(roles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::security::Argon2Hashing;
    use auth_core::{roles, SigningKey, TokenVerifier};

    const SECRET: &str = "test-secret-key-min-32-chars-long!!!";

    fn service() -> UserCommandService {
        UserCommandService::new(
            Arc::new(UserStore::new()),
            Arc::new(Argon2Hashing),
            Arc::new(TokenIssuer::new(SigningKey::from_secret(SECRET), 7)),
            Arc::new(crate::services::events::LogEventPublisher),
        )
    }

    fn sign_up(service: &UserCommandService, username: &str, roles: Option<Vec<String>>) -> User {
        service
            .handle_sign_up(SignUpCommand {
                username: username.into(),
                password: "s3cret-pa55word".into(),
                email: format!("{}@example.com", username),
                roles,
            })
            .expect("sign-up should succeed")
    }

    #[test]
    fn sign_up_defaults_to_user_role() {
        let service = service();
        let user = sign_up(&service, "alice", None);
        assert_eq!(user.roles, vec![Role::User]);
    }

    #[test]
    fn sign_up_rejects_duplicate_username() {
        let service = service();
        sign_up(&service, "alice", None);

        let err = service
            .handle_sign_up(SignUpCommand {
                username: "alice".into(),
                password: "another-pa55word".into(),
                email: "alice2@example.com".into(),
                roles: None,
            })
            .unwrap_err();
        assert!(matches!(err, AppError::UsernameTaken));
    }

    #[test]
    fn sign_up_rejects_unknown_role() {
        let err = service()
            .handle_sign_up(SignUpCommand {
                username: "alice".into(),
                password: "s3cret-pa55word".into(),
                email: "alice@example.com".into(),
                roles: Some(vec!["ROLE_SUPERUSER".into()]),
            })
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn sign_in_issues_verifiable_token_with_roles_and_user_id() {
        let service = service();
        let user = sign_up(&service, "alice", Some(vec![roles::USER.to_string()]));

        let authenticated = service
            .handle_sign_in(SignInCommand {
                username: "alice".into(),
                password: "s3cret-pa55word".into(),
            })
            .expect("sign-in should succeed");

        let verifier = TokenVerifier::new(SigningKey::from_secret(SECRET));
        assert!(verifier.verify(&authenticated.token));
        assert_eq!(verifier.subject_of(&authenticated.token).unwrap(), "alice");
        assert_eq!(
            verifier.roles_of(&authenticated.token).unwrap(),
            vec![roles::USER.to_string()]
        );
        assert_eq!(
            verifier.user_id_of(&authenticated.token).unwrap(),
            Some(user.id)
        );
    }

    #[test]
    fn sign_in_rejects_bad_password() {
        let service = service();
        sign_up(&service, "alice", None);

        let err = service
            .handle_sign_in(SignInCommand {
                username: "alice".into(),
                password: "wrong-password".into(),
            })
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[test]
    fn sign_in_rejects_unknown_user() {
        let err = service()
            .handle_sign_in(SignInCommand {
                username: "nobody".into(),
                password: "whatever".into(),
            })
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[test]
    fn sign_in_records_last_login() {
        let service = service();
        sign_up(&service, "alice", None);
        assert!(service.store.find_by_username("alice").unwrap().last_login.is_none());

        service
            .handle_sign_in(SignInCommand {
                username: "alice".into(),
                password: "s3cret-pa55word".into(),
            })
            .expect("sign-in should succeed");

        assert!(service.store.find_by_username("alice").unwrap().last_login.is_some());
    }
}
