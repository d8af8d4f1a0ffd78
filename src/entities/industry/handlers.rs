//! Industry HTTP handlers

use super::manager::IndustryManager;
use super::model::IndustryPayload;
use crate::core::{BizError, JsonBody};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::{Value, json};

pub async fn list_industries(
    State(manager): State<IndustryManager>,
) -> Result<Json<Value>, BizError> {
    let industries = manager.list().await?;
    Ok(Json(json!({ "industries": industries })))
}

pub async fn create_industry(
    State(manager): State<IndustryManager>,
    JsonBody(payload): JsonBody<IndustryPayload>,
) -> Result<impl IntoResponse, BizError> {
    let industry = manager.create(payload).await?;
    Ok((StatusCode::CREATED, Json(json!({ "industry": industry }))))
}
