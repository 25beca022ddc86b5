//! User accounts and the authentication DTOs built on them.

use chrono::{DateTime, NaiveDate, Utc};
use jobboard_auth::{Principal, Role};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A registered account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip)]
    pub password: String,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[sqlx(try_from = "String")]
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn principal(&self) -> Principal {
        Principal::new(self.id, self.email.clone(), self.role)
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    pub birth_date: Option<NaiveDate>,
    #[validate(length(max = 50))]
    pub phone: Option<String>,
    pub address: Option<String>,
    /// Defaults to `Candidate`.
    pub role: Option<Role>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_request() -> RegisterRequest {
        RegisterRequest {
            first_name: "Ana".to_string(),
            last_name: "Ruiz".to_string(),
            email: "ana@example.com".to_string(),
            password: "password123".to_string(),
            birth_date: None,
            phone: None,
            address: None,
            role: None,
        }
    }

    #[test]
    fn test_register_request_validation() {
        assert!(register_request().validate().is_ok());

        let bad_email = RegisterRequest {
            email: "not-an-email".to_string(),
            ..register_request()
        };
        assert!(bad_email.validate().is_err());

        let short_password = RegisterRequest {
            password: "short".to_string(),
            ..register_request()
        };
        assert!(short_password.validate().is_err());

        let empty_name = RegisterRequest {
            first_name: String::new(),
            ..register_request()
        };
        assert!(empty_name.validate().is_err());
    }

    #[test]
    fn test_user_serialization_hides_password() {
        let user = User {
            id: 1,
            first_name: "Ana".to_string(),
            last_name: "Ruiz".to_string(),
            email: "ana@example.com".to_string(),
            password: "$2b$12$hash".to_string(),
            birth_date: None,
            phone: None,
            address: None,
            role: Role::Candidate,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["role"], "Candidate");
        assert_eq!(user.principal(), Principal::new(1, "ana@example.com", Role::Candidate));
    }

    #[test]
    fn test_register_request_accepts_role() {
        let json = r#"{"first_name":"R","last_name":"S","email":"r@example.com","password":"password123","role":"Recruiter"}"#;
        let req: RegisterRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.role, Some(Role::Recruiter));
    }
}
