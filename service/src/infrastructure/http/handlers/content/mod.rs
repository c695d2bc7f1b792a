use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use copydesk_common::ContentItemId;
use uuid::Uuid;

use crate::domain::AppState;
use crate::domain::repository::ContentRepository;
use crate::infrastructure::http::api::{ApiError, ApiSuccess};
use crate::infrastructure::http::auth::authenticate;
use crate::infrastructure::http::handlers::content::dto::{
    AuditRecordResponseData, ContentItemResponseData, CreateContentItemRequestBody,
    TransitionRequestBody, TransitionResponseData,
};

pub mod dto;

pub async fn create_content_item<S: AppState>(
    State(state): State<S>,
    headers: HeaderMap,
    Json(body): Json<CreateContentItemRequestBody>,
) -> Result<ApiSuccess<ContentItemResponseData>, ApiError> {
    let actor = authenticate(&headers)?;
    let new_item = body.try_into_domain(actor.user_id)?;

    state
        .content_repository()
        .create(new_item)
        .await
        .map_err(ApiError::from)
        .map(|item| ApiSuccess::new(StatusCode::CREATED, ContentItemResponseData::from(&item)))
}

pub async fn get_content_item<S: AppState>(
    Path(id): Path<Uuid>,
    State(state): State<S>,
    headers: HeaderMap,
) -> Result<ApiSuccess<ContentItemResponseData>, ApiError> {
    authenticate(&headers)?;

    state
        .content_repository()
        .find(ContentItemId::from(id))
        .await
        .map_err(ApiError::from)
        .map(|item| ApiSuccess::new(StatusCode::OK, ContentItemResponseData::from(&item)))
}

pub async fn apply_transition<S: AppState>(
    Path(id): Path<Uuid>,
    State(state): State<S>,
    headers: HeaderMap,
    Json(body): Json<TransitionRequestBody>,
) -> Result<ApiSuccess<TransitionResponseData>, ApiError> {
    let actor = authenticate(&headers)?;
    let request = body.try_into_domain()?;

    state
        .workflow()
        .apply(actor, ContentItemId::from(id), request)
        .await
        .map_err(ApiError::from)
        .map(|outcome| ApiSuccess::new(StatusCode::OK, TransitionResponseData::from(&outcome)))
}

pub async fn content_item_history<S: AppState>(
    Path(id): Path<Uuid>,
    State(state): State<S>,
    headers: HeaderMap,
) -> Result<ApiSuccess<Vec<AuditRecordResponseData>>, ApiError> {
    authenticate(&headers)?;

    state
        .workflow()
        .history(ContentItemId::from(id))
        .await
        .map_err(ApiError::from)
        .map(|records| {
            let data = records
                .iter()
                .map(AuditRecordResponseData::from)
                .collect::<Vec<_>>();
            ApiSuccess::new(StatusCode::OK, data)
        })
}
