use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{de, Deserialize, Deserializer};
use tracing::debug;

use common::types::ApiResponse;
use models::restaurant::{Model, RestaurantCreate, RestaurantUpdate};
use service::errors::ServiceError;
use service::pagination::Pagination;

use crate::errors::ApiError;
use crate::metrics::track;
use crate::routes::AppState;

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// 1-based page number; absent, zero or negative means 1
    #[serde(default, deserialize_with = "blank_as_none")]
    pub page: Option<i64>,
    /// Page size; absent, zero or negative means 5
    #[serde(default, deserialize_with = "blank_as_none")]
    pub limit: Option<i64>,
}

impl From<ListQuery> for Pagination {
    fn from(q: ListQuery) -> Self {
        Pagination::new(q.page.unwrap_or(0), q.limit.unwrap_or(0))
    }
}

/// `?page=` is treated like a missing parameter; anything else must be an integer.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<i64>().map(Some).map_err(de::Error::custom),
    }
}

/// Parse the `{id}` path segment. Runs before any store access.
/// Any 64-bit integer is accepted; `None` means it is outside the key range, so no row can match.
fn parse_id(path: Result<Path<String>, PathRejection>) -> Result<Option<i32>, ApiError> {
    let Path(raw) = path?;
    let id = raw
        .parse::<i64>()
        .map_err(|e| ApiError::BadInput(format!("invalid id {raw:?}: {e}")))?;
    Ok(i32::try_from(id).ok())
}

#[utoipa::path(
    post, path = "/v1/restaurants", tag = "restaurants",
    request_body = crate::openapi::CreateRestaurantDoc,
    responses(
        (status = 200, description = "Created; data is the new id", body = crate::openapi::IdResponseDoc),
        (status = 400, description = "Undecodable body", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<RestaurantCreate>, JsonRejection>,
) -> Result<Json<ApiResponse<i32>>, ApiError> {
    track("create", async move {
        let Json(input) = body?;
        let id = state.restaurants.create(input).await?;
        debug!(id, "created restaurant");
        Ok::<_, ApiError>(Json(ApiResponse::new(id)))
    })
    .await
}

#[utoipa::path(
    get, path = "/v1/restaurants/{id}", tag = "restaurants",
    params(("id" = i32, Path, description = "Restaurant id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::RestaurantResponseDoc),
        (status = 400, description = "Non-numeric id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<ApiResponse<Model>>, ApiError> {
    track("get", async move {
        let Some(id) = parse_id(path)? else {
            return Err(ApiError::from(ServiceError::not_found("restaurant")));
        };
        let found = state.restaurants.get(id).await?;
        Ok::<_, ApiError>(Json(ApiResponse::new(found)))
    })
    .await
}

#[utoipa::path(
    get, path = "/v1/restaurants", tag = "restaurants",
    params(ListQuery),
    responses(
        (status = 200, description = "Page of restaurants, newest first", body = crate::openapi::RestaurantListDoc),
        (status = 400, description = "Non-numeric paging", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<Model>>>, ApiError> {
    track("list", async move {
        let Query(q) = query?;
        let rows = state.restaurants.list(q.into()).await?;
        debug!(count = rows.len(), "list restaurants");
        Ok::<_, ApiError>(Json(ApiResponse::new(rows)))
    })
    .await
}

#[utoipa::path(
    patch, path = "/v1/restaurants/{id}", tag = "restaurants",
    params(("id" = i32, Path, description = "Restaurant id")),
    request_body = crate::openapi::UpdateRestaurantDoc,
    responses(
        (status = 200, description = "Acknowledged", body = crate::openapi::AckDoc),
        (status = 400, description = "Non-numeric id or undecodable body", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<RestaurantUpdate>, JsonRejection>,
) -> Result<Json<ApiResponse<bool>>, ApiError> {
    track("update", async move {
        let id = parse_id(path)?;
        let Json(patch) = body?;
        match id {
            Some(id) => state.restaurants.update(id, patch).await?,
            None => debug!("id outside key range, nothing to update"),
        }
        debug!(?id, "updated restaurant");
        Ok::<_, ApiError>(Json(ApiResponse::new(true)))
    })
    .await
}

#[utoipa::path(
    delete, path = "/v1/restaurants/{id}", tag = "restaurants",
    params(("id" = i32, Path, description = "Restaurant id")),
    responses(
        (status = 200, description = "Acknowledged, also for ids that do not exist", body = crate::openapi::AckDoc),
        (status = 400, description = "Non-numeric id", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<ApiResponse<bool>>, ApiError> {
    track("delete", async move {
        let id = parse_id(path)?;
        match id {
            Some(id) => state.restaurants.delete(id).await?,
            None => debug!("id outside key range, nothing to delete"),
        }
        debug!(?id, "deleted restaurant");
        Ok::<_, ApiError>(Json(ApiResponse::new(true)))
    })
    .await
}
