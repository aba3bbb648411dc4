//! Authentication and profile records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role, also the login discriminator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Alumni,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alumni => "alumni",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User profile as returned by the API and cached in the session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub name: String,
    pub phone: String,
    pub role: Role,
    pub department: Option<String>,
    pub graduation_year: Option<i32>,
    pub current_company: Option<String>,
    pub current_position: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub bio: Option<String>,
    pub profile_picture: Option<String>,
    pub is_verified: bool,
    pub date_joined: Option<DateTime<Utc>>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Registration payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub password2: String,
    pub name: String,
    pub phone: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<i32>,
}

/// Login payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Access/refresh token pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Login and registration response.
///
/// Tokens may arrive either at the top level or nested under `tokens`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthResponse {
    pub user: Option<User>,
    pub tokens: Option<TokenPair>,
    pub access: Option<String>,
    pub refresh: Option<String>,
    pub message: Option<String>,
}

impl AuthResponse {
    /// Token pair carried by the response, if both halves are present
    pub fn token_pair(&self) -> Option<(&str, &str)> {
        if let Some(tokens) = &self.tokens {
            return Some((tokens.access.as_str(), tokens.refresh.as_str()));
        }
        match (&self.access, &self.refresh) {
            (Some(access), Some(refresh)) => Some((access.as_str(), refresh.as_str())),
            _ => None,
        }
    }
}

/// Partial profile update; only supplied fields are sent
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct RefreshRequest<'a> {
    pub refresh: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RefreshResponse {
    pub access: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct LogoutRequest<'a> {
    pub refresh_token: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ChangePasswordRequest<'a> {
    pub current_password: &'a str,
    pub new_password: &'a str,
    pub new_password2: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ForgotPasswordRequest<'a> {
    pub email: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ResetPasswordRequest<'a> {
    pub token: &'a str,
    pub new_password: &'a str,
    pub new_password2: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_tokens() {
        let response: AuthResponse = serde_json::from_str(
            r#"{
                "user": {"id": 1, "email": "a@b.test", "name": "A", "role": "admin"},
                "tokens": {"access": "acc", "refresh": "ref"},
                "message": "Login successful"
            }"#,
        )
        .unwrap();
        assert_eq!(response.token_pair(), Some(("acc", "ref")));
        assert!(response.user.unwrap().is_admin());
    }

    #[test]
    fn test_flat_tokens() {
        let response: AuthResponse =
            serde_json::from_str(r#"{"access": "acc", "refresh": "ref"}"#).unwrap();
        assert_eq!(response.token_pair(), Some(("acc", "ref")));
    }

    #[test]
    fn test_half_a_token_pair_is_none() {
        let response: AuthResponse = serde_json::from_str(r#"{"access": "acc"}"#).unwrap();
        assert_eq!(response.token_pair(), None);
    }

    #[test]
    fn test_register_request_skips_missing_optionals() {
        let request = RegisterRequest {
            email: "a@b.test".into(),
            password: "pw".into(),
            password2: "pw".into(),
            name: "A".into(),
            phone: "123".into(),
            role: Role::Alumni,
            department: None,
            graduation_year: Some(2015),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["role"], "alumni");
        assert_eq!(value["graduation_year"], 2015);
        assert!(value.get("department").is_none());
    }
}
