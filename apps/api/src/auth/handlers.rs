use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::authenticate;
use crate::errors::AppError;
use crate::models::user::Role;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub username: String,
    pub role: Role,
    pub landing: &'static str,
    pub can_access_screener: bool,
}

/// POST /api/v1/login
pub async fn handle_login(Json(req): Json<LoginRequest>) -> Result<Json<LoginResponse>, AppError> {
    let role = authenticate(&req.username, &req.password).ok_or(AppError::Unauthorized)?;
    info!(username = %req.username, ?role, "Demo login");

    Ok(Json(LoginResponse {
        username: req.username,
        role,
        landing: role.landing(),
        can_access_screener: role.can_access_screener(),
    }))
}
