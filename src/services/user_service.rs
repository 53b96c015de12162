use crate::data::models::roles::Role;
use crate::data::models::user::NewUser;
use crate::data::repos::implementors::user_repo::UserRepo;
use crate::data::repos::traits::repository::Repository;
use crate::security::auth::AuthService;
use crate::security::jwt::JwtService;
use crate::services::errors::{UserServiceError, is_unique_violation};
use diesel_async::AsyncMysqlConnection;

const MAX_USERNAME_LEN: usize = 80;

pub struct UserService;

impl UserService {
    pub fn new() -> Self {
        UserService
    }

    /// Creates a user and returns its id. Every field is required.
    pub async fn register(
        &self,
        conn: &mut AsyncMysqlConnection,
        username: Option<&str>,
        password: Option<&str>,
        role: Option<&str>,
    ) -> Result<i32, UserServiceError> {
        let username = required("username", username)?;
        let password = required("password", password)?;
        let role_name = required("role", role)?;
        let role = Role::try_from(role_name)
            .map_err(|_| UserServiceError::InvalidRole(role_name.to_string()))?;

        if username.chars().count() > MAX_USERNAME_LEN {
            return Err(UserServiceError::UsernameTooLong(MAX_USERNAME_LEN));
        }

        let repo = UserRepo::new();

        if repo.get_by_username(conn, username).await?.is_some() {
            return Err(UserServiceError::DuplicateUser);
        }

        let hashed_password = AuthService::new().hash_password(password).await?;

        let new_user = NewUser {
            username,
            password: &hashed_password,
            role,
        };

        // The unique index still guards against a concurrent registration.
        let user_id = repo.add(conn, new_user).await.map_err(|e| {
            if is_unique_violation(&e) {
                UserServiceError::DuplicateUser
            } else {
                UserServiceError::Database(e)
            }
        })?;

        tracing::info!(user_id, username, role = %role, "User registered");

        Ok(user_id)
    }

    /// Checks the credentials and issues an identity token.
    pub async fn login(
        &self,
        conn: &mut AsyncMysqlConnection,
        jwt: &JwtService,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<String, UserServiceError> {
        let (Some(username), Some(password)) = (username, password) else {
            return Err(UserServiceError::InvalidCredentials);
        };

        let user = UserRepo::new()
            .get_by_username(conn, username)
            .await?
            .ok_or(UserServiceError::InvalidCredentials)?;

        if !AuthService::new()
            .verify_password(password, &user.password)
            .await?
        {
            tracing::warn!(username, "Rejected login");
            return Err(UserServiceError::InvalidCredentials);
        }

        Ok(jwt.generate_token(&user)?)
    }
}

impl Default for UserService {
    fn default() -> Self {
        Self::new()
    }
}

fn required<'a>(name: &'static str, value: Option<&'a str>) -> Result<&'a str, UserServiceError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(UserServiceError::MissingField(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_absent_and_blank() {
        assert!(matches!(
            required("username", None),
            Err(UserServiceError::MissingField("username"))
        ));
        assert!(matches!(
            required("password", Some("   ")),
            Err(UserServiceError::MissingField("password"))
        ));
        assert_eq!(required("role", Some("admin")).unwrap(), "admin");
    }
}
