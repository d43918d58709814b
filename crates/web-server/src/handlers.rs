use crate::{error::AppError, AppState};
use axum::{
    extract::{Path, Query, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    Json,
};
use core_types::{Item, ItemDraft, ItemPatch};
use database::DEFAULT_PAGE_SIZE;
use profile_client::ProfileInfo;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    skip: i64,
    #[serde(default = "default_take")]
    take: i64,
}
fn default_take() -> i64 {
    DEFAULT_PAGE_SIZE
}

/// # GET /api/health
pub async fn health() -> &'static str {
    "OK"
}

/// # POST /api/items
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<ItemDraft>,
) -> Result<(StatusCode, Json<Item>), AppError> {
    let item = state.items.create(draft).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// # GET /api/items?skip=&take=
pub async fn list_items(
    State(state): State<Arc<AppState>>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<Item>>, AppError> {
    let items = state.items.find_all(pagination.skip, pagination.take).await?;
    Ok(Json(items))
}

/// # GET /api/items/count
pub async fn count_items(State(state): State<Arc<AppState>>) -> Result<Json<i64>, AppError> {
    let total = state.items.count().await?;
    Ok(Json(total))
}

/// # GET /api/items/:id
pub async fn get_item(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Item>, AppError> {
    let item = state.items.find_one(id).await?;
    Ok(Json(item))
}

/// # PUT /api/items/:id
pub async fn update_item(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
    Json(patch): Json<ItemPatch>,
) -> Result<Json<Item>, AppError> {
    let item = state.items.update(id, patch).await?;
    Ok(Json(item))
}

/// # DELETE /api/items/:id
/// Returns the record that was removed.
pub async fn delete_item(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Item>, AppError> {
    let item = state.items.remove(id).await?;
    Ok(Json(item))
}

/// # GET /api/github/user
/// Forwards the caller's credential to the external profile API and returns
/// the normalized profile. The credential is never persisted.
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<ProfileInfo>, AppError> {
    let token = extract_token(&headers).ok_or(AppError::MissingCredential)?;
    let info = state.profile.get_user_info(&token).await?;
    Ok(Json(info))
}

/// Pulls the credential out of the `Authorization` header. Three forms are
/// accepted: `Bearer <token>`, `token <token>`, and a bare token value.
fn extract_token(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = raw
        .strip_prefix("Bearer ")
        .or_else(|| raw.strip_prefix("token "))
        .unwrap_or(raw)
        .trim();

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn extract_token_accepts_all_three_header_forms() {
        assert_eq!(
            extract_token(&headers_with("Bearer abc123")).as_deref(),
            Some("abc123")
        );
        assert_eq!(
            extract_token(&headers_with("token abc123")).as_deref(),
            Some("abc123")
        );
        assert_eq!(
            extract_token(&headers_with("abc123")).as_deref(),
            Some("abc123")
        );
    }

    #[test]
    fn extract_token_rejects_absent_or_empty_credentials() {
        assert!(extract_token(&HeaderMap::new()).is_none());
        assert!(extract_token(&headers_with("Bearer ")).is_none());
        assert!(extract_token(&headers_with("Bearer    ")).is_none());
        assert!(extract_token(&headers_with("   ")).is_none());
    }

    #[test]
    fn pagination_defaults_match_the_contract() {
        let pagination: Pagination = serde_json::from_str("{}").unwrap();
        assert_eq!(pagination.skip, 0);
        assert_eq!(pagination.take, DEFAULT_PAGE_SIZE);
    }
}
