//! Auth and user wire models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User as returned by `/register`, `/login`, `/me` and `/admin/users`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserModel {
    pub id: String,
    pub name: String,
    pub email: String,
    pub user_type: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "super::datetime::option::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub total_deliveries: Option<u32>,
}

/// `{token, user}`
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponseModel {
    pub token: String,
    pub user: UserModel,
}

/// `POST /register` body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterBody<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub user_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<&'a str>,
}

/// `POST /login` body
#[derive(Debug, Serialize)]
pub struct LoginBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
}
