//! User model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::audit::ActorId;

/// Full user model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub nombre: String,
    /// Unique username, stored lowercase
    pub nombre_usuario: String,
    /// Unique email, stored lowercase
    pub email: String,
    /// Hashed password (argon2)
    #[serde(skip_serializing)]
    pub contrasena_hash: String,
    pub telefono: Option<String>,
    pub activo: bool,
    pub es_admin: bool,
    #[serde(skip_serializing)]
    pub id_usuario_creacion: Option<Uuid>,
    #[serde(skip_serializing)]
    pub id_usuario_edicion: Option<Uuid>,
    pub fecha_creacion: DateTime<Utc>,
    pub fecha_actualizacion: Option<DateTime<Utc>>,
}

/// Create user request
///
/// The creator reference is optional: self-registration has no acting user
/// and stores NULL audit columns.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(max = 100, message = "Name must not exceed 100 characters"))]
    pub nombre: String,
    #[validate(length(max = 50, message = "Username must not exceed 50 characters"))]
    pub nombre_usuario: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[serde(rename = "contraseña")]
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub contrasena: String,
    pub telefono: Option<String>,
    #[serde(default)]
    pub es_admin: bool,
    pub id_usuario_creacion: Option<ActorId>,
}

/// Update user request
///
/// An update that carries no fields at all is a no-op returning the
/// unmodified user.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[validate(length(max = 100, message = "Name must not exceed 100 characters"))]
    pub nombre: Option<String>,
    #[validate(length(max = 50, message = "Username must not exceed 50 characters"))]
    pub nombre_usuario: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub es_admin: Option<bool>,
    pub activo: Option<bool>,
    pub id_usuario_edicion: Option<ActorId>,
}

/// User list query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct UserQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub include_inactive: Option<bool>,
}

/// Login request
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Username or email
    pub nombre_usuario: String,
    #[serde(rename = "contraseña")]
    pub contrasena: String,
}

/// Public user data embedded in the login response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginUser {
    pub id: Uuid,
    pub email: String,
    pub nombre: String,
    pub nombre_usuario: String,
    pub es_admin: bool,
    pub activo: bool,
}

impl From<&User> for LoginUser {
    fn from(user: &User) -> Self {
        LoginUser {
            id: user.id,
            email: user.email.clone(),
            nombre: user.nombre.clone(),
            nombre_usuario: user.nombre_usuario.clone(),
            es_admin: user.es_admin,
            activo: user.activo,
        }
    }
}

/// Login response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: LoginUser,
}

/// JWT claims for authenticated users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClaims {
    /// User id
    pub sub: String,
    pub email: String,
    pub es_admin: bool,
    pub exp: i64,
}

impl UserClaims {
    pub fn for_user(user: &User, expiration_hours: u64) -> Self {
        let exp = Utc::now() + chrono::Duration::hours(expiration_hours as i64);
        UserClaims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            es_admin: user.es_admin,
            exp: exp.timestamp(),
        }
    }

    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }

    pub fn user_id(&self) -> Option<Uuid> {
        self.sub.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            nombre: "María García".to_string(),
            nombre_usuario: "mgarcia".to_string(),
            email: "maria@biblioteca.example".to_string(),
            contrasena_hash: "$argon2id$v=19$m=19456,t=2,p=1$abc$def".to_string(),
            telefono: None,
            activo: true,
            es_admin: false,
            id_usuario_creacion: None,
            id_usuario_edicion: None,
            fecha_creacion: Utc::now(),
            fecha_actualizacion: None,
        }
    }

    #[test]
    fn test_token_round_trip() {
        let user = sample_user();
        let claims = UserClaims::for_user(&user, 24);
        let token = claims.create_token("test-secret").unwrap();
        let parsed = UserClaims::from_token(&token, "test-secret").unwrap();
        assert_eq!(parsed.sub, user.id.to_string());
        assert_eq!(parsed.email, user.email);
        assert!(!parsed.es_admin);
        assert_eq!(parsed.user_id(), Some(user.id));
    }

    #[test]
    fn test_token_rejects_wrong_secret() {
        let claims = UserClaims::for_user(&sample_user(), 24);
        let token = claims.create_token("secret-a").unwrap();
        assert!(UserClaims::from_token(&token, "secret-b").is_err());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let json = serde_json::to_value(sample_user()).unwrap();
        assert!(json.get("contrasena_hash").is_none());
        assert!(json.get("nombre_usuario").is_some());
    }
}
