//! Authentication Calls
//!
//! Login and signup; the only endpoints that take no bearer token.

use serde::{Deserialize, Serialize};

use super::{decode, endpoint};
use crate::error::ApiError;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct LoginArgs<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct SignupArgs<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Successful login/signup response
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: AuthUser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    pub name: String,
}

// ========================
// Calls
// ========================

pub async fn login(args: &LoginArgs<'_>) -> Result<AuthResponse, ApiError> {
    let response = reqwest::Client::new()
        .post(endpoint("/api/users/login"))
        .json(args)
        .send()
        .await?;
    decode(response).await
}

pub async fn signup(args: &SignupArgs<'_>) -> Result<AuthResponse, ApiError> {
    let response = reqwest::Client::new()
        .post(endpoint("/api/users/signup"))
        .json(args)
        .send()
        .await?;
    decode(response).await
}
