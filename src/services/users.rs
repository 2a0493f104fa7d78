//! User accounts and authentication

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;
use validator::Validate;

use crate::config::AuthConfig;
use crate::error::{AppError, AppResult};
use crate::models::user::{
    CreateUser, LoginRequest, LoginResponse, LoginUser, UpdateUser, User, UserClaims,
};
use crate::repository::Repository;
use crate::services::{normalize_optional, pagination};

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9+\-\s()]+$").expect("phone pattern compiles"));

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
    config: AuthConfig,
}

impl UsersService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    pub async fn get(&self, id: Uuid) -> AppResult<User> {
        self.repository.users.get_by_id(id).await
    }

    pub async fn list(
        &self,
        skip: Option<i64>,
        limit: Option<i64>,
        include_inactive: bool,
    ) -> AppResult<Vec<User>> {
        let (skip, limit) = pagination(skip, limit)?;
        self.repository.users.list(skip, limit, include_inactive).await
    }

    pub async fn create(&self, mut data: CreateUser) -> AppResult<User> {
        data.nombre = data.nombre.trim().to_string();
        if data.nombre.is_empty() {
            return Err(AppError::Validation("Name is required".to_string()));
        }

        data.nombre_usuario = data.nombre_usuario.trim().to_lowercase();
        if data.nombre_usuario.is_empty() {
            return Err(AppError::Validation("Username is required".to_string()));
        }

        data.email = data.email.trim().to_lowercase();
        if data.email.is_empty() {
            return Err(AppError::Validation("Email is required".to_string()));
        }

        data.telefono = normalize_optional(data.telefono);
        if let Some(telefono) = &data.telefono {
            check_phone(telefono)?;
        }

        data.validate()?;

        if self
            .repository
            .users
            .username_exists(&data.nombre_usuario, None)
            .await?
        {
            return Err(AppError::Duplicate(format!(
                "Username '{}' is already taken",
                data.nombre_usuario
            )));
        }

        if self.repository.users.email_exists(&data.email, None).await? {
            return Err(AppError::Duplicate(format!(
                "Email '{}' is already registered",
                data.email
            )));
        }

        let contrasena_hash = self.hash_password(&data.contrasena)?;

        self.repository.users.create(&data, &contrasena_hash).await
    }

    pub async fn update(&self, id: Uuid, mut data: UpdateUser) -> AppResult<User> {
        let current = self.repository.users.get_by_id(id).await?;

        let no_changes = data.nombre.is_none()
            && data.nombre_usuario.is_none()
            && data.email.is_none()
            && data.telefono.is_none()
            && data.es_admin.is_none()
            && data.activo.is_none()
            && data.id_usuario_edicion.is_none();
        if no_changes {
            return Ok(current);
        }

        if let Some(nombre) = data.nombre.take() {
            let nombre = nombre.trim().to_string();
            if nombre.is_empty() {
                return Err(AppError::Validation("Name is required".to_string()));
            }
            data.nombre = Some(nombre);
        }

        if let Some(nombre_usuario) = data.nombre_usuario.take() {
            let nombre_usuario = nombre_usuario.trim().to_lowercase();
            if nombre_usuario.is_empty() {
                return Err(AppError::Validation("Username is required".to_string()));
            }
            if self
                .repository
                .users
                .username_exists(&nombre_usuario, Some(id))
                .await?
            {
                return Err(AppError::Duplicate(format!(
                    "Username '{}' is already taken",
                    nombre_usuario
                )));
            }
            data.nombre_usuario = Some(nombre_usuario);
        }

        if let Some(email) = data.email.take() {
            let email = email.trim().to_lowercase();
            if email.is_empty() {
                return Err(AppError::Validation("Email is required".to_string()));
            }
            if self.repository.users.email_exists(&email, Some(id)).await? {
                return Err(AppError::Duplicate(format!(
                    "Email '{}' is already registered",
                    email
                )));
            }
            data.email = Some(email);
        }

        data.telefono = normalize_optional(data.telefono);
        if let Some(telefono) = &data.telefono {
            check_phone(telefono)?;
        }

        data.validate()?;

        self.repository.users.update(id, &data).await
    }

    /// Deactivate a user, keeping the row for audit references
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.users.delete(id).await
    }

    /// Authenticate by username or email and issue a JWT.
    ///
    /// Unknown account, inactive account and wrong password all produce
    /// the same error so a caller cannot probe which usernames exist.
    pub async fn authenticate(&self, login: LoginRequest) -> AppResult<LoginResponse> {
        let identifier = login.nombre_usuario.trim();

        let user = match self.repository.users.get_by_username(identifier).await? {
            Some(user) => Some(user),
            None => self.repository.users.get_by_email(identifier).await?,
        };

        let user = user.ok_or_else(invalid_credentials)?;

        if !user.activo {
            return Err(invalid_credentials());
        }

        if !self.verify_password(&user, &login.contrasena)? {
            return Err(invalid_credentials());
        }

        let claims = UserClaims::for_user(&user, self.config.jwt_expiration_hours);
        let access_token = claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))?;

        Ok(LoginResponse {
            access_token,
            token_type: "bearer".to_string(),
            user: LoginUser::from(&user),
        })
    }

    fn verify_password(&self, user: &User, password: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(&user.contrasena_hash)
            .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash a password using Argon2
    fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
        Ok(hash.to_string())
    }
}

fn invalid_credentials() -> AppError {
    AppError::Authentication("Invalid username or password".to_string())
}

fn check_phone(telefono: &str) -> AppResult<()> {
    if telefono.len() > 20 {
        return Err(AppError::Validation(
            "Phone must not exceed 20 characters".to_string(),
        ));
    }
    if !PHONE_PATTERN.is_match(telefono) {
        return Err(AppError::Validation(
            "Phone may only contain digits, spaces and + - ( )".to_string(),
        ));
    }
    Ok(())
}
