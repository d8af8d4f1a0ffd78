//! Company HTTP handlers

use super::manager::CompanyManager;
use super::model::{AddIndustryPayload, CompanyPayload};
use crate::core::{BizError, JsonBody};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::{Value, json};

pub async fn list_companies(
    State(manager): State<CompanyManager>,
) -> Result<Json<Value>, BizError> {
    let companies = manager.list().await?;
    Ok(Json(json!({ "companies": companies })))
}

pub async fn create_company(
    State(manager): State<CompanyManager>,
    JsonBody(payload): JsonBody<CompanyPayload>,
) -> Result<impl IntoResponse, BizError> {
    let company = manager.create(payload).await?;
    Ok((StatusCode::CREATED, Json(json!({ "company": company }))))
}

pub async fn get_company(
    State(manager): State<CompanyManager>,
    Path(code): Path<String>,
) -> Result<Json<Value>, BizError> {
    let company = manager.get_by_code(&code).await?;
    Ok(Json(json!({ "company": company })))
}

pub async fn update_company(
    State(manager): State<CompanyManager>,
    Path(code): Path<String>,
    JsonBody(payload): JsonBody<CompanyPayload>,
) -> Result<Json<Value>, BizError> {
    let company = manager.update(&code, payload).await?;
    Ok(Json(json!({ "company": company })))
}

pub async fn delete_company(
    State(manager): State<CompanyManager>,
    Path(code): Path<String>,
) -> Result<Json<Value>, BizError> {
    manager.delete(&code).await?;
    Ok(Json(json!({ "status": "deleted" })))
}

pub async fn add_industry(
    State(manager): State<CompanyManager>,
    Path(code): Path<String>,
    JsonBody(payload): JsonBody<AddIndustryPayload>,
) -> Result<impl IntoResponse, BizError> {
    let link = manager.link_industry(&code, payload).await?;
    Ok((StatusCode::CREATED, Json(json!({ "industry": link }))))
}
