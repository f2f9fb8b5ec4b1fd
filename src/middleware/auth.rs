use std::time::Duration;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};
use reqwest::multipart::Form;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::AppError, state::AppState};

/// Caller identity as returned by the account service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AuthUser {
    pub id: i32,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub role: String,
}

pub fn ensure_role(user: &AuthUser, role: &str) -> Result<(), AppError> {
    if user.role != role {
        return Err(AppError::Forbidden(
            "user doesn't have authority to access this API".into(),
        ));
    }
    Ok(())
}

pub fn ensure_buyer(user: &AuthUser) -> Result<(), AppError> {
    ensure_role(user, "buyer")
}

/// Token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Client for the account service's token authorization endpoint.
#[derive(Debug, Clone)]
pub struct AccountClient {
    http: reqwest::Client,
    authorize_url: String,
}

impl AccountClient {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            authorize_url: format!("{}/api/authorize/", base_url.trim_end_matches('/')),
        })
    }

    /// Exchange a bearer token for the user it belongs to.
    pub async fn authorize(&self, token: &str) -> Result<AuthUser, AppError> {
        let form = Form::new().text("token", token.to_string());
        let resp = self.http.post(&self.authorize_url).multipart(form).send().await?;

        if resp.status() != reqwest::StatusCode::OK {
            tracing::debug!(status = %resp.status(), "token rejected by account service");
            return Err(AppError::Forbidden("Token authorization invalid".into()));
        }

        let user = resp.json::<AuthUser>().await?;
        Ok(user)
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or_else(|| {
            AppError::Forbidden("Token authorization empty/not found".into())
        })?;

        state.accounts.authorize(token).await
    }
}
