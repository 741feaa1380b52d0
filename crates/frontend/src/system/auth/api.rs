//! Session endpoints used while restoring a saved login.

use contracts::system::auth::{RefreshRequest, RefreshResponse, UserInfo};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::shared::api::{api_base, ApiError};

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_status(response.status(), &body));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn refresh_token(port: u16, refresh_token: String) -> Result<RefreshResponse, ApiError> {
    let response = Request::post(&format!("{}/api/auth/refresh", api_base(port)))
        .json(&RefreshRequest { refresh_token })
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

/// Profile behind `access_token`; `Unauthorized` when the token expired
pub async fn get_current_user(port: u16, access_token: &str) -> Result<UserInfo, ApiError> {
    let response = Request::get(&format!("{}/api/auth/me", api_base(port)))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}
