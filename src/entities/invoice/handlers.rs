//! Invoice HTTP handlers

use super::manager::InvoiceManager;
use super::model::{NewInvoicePayload, UpdateInvoicePayload};
use crate::core::{BizError, JsonBody};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::{Value, json};

pub async fn list_invoices(State(manager): State<InvoiceManager>) -> Result<Json<Value>, BizError> {
    let invoices = manager.list().await?;
    Ok(Json(json!({ "invoices": invoices })))
}

pub async fn get_invoice(
    State(manager): State<InvoiceManager>,
    Path(id): Path<String>,
) -> Result<Json<Value>, BizError> {
    let invoice = manager.get_by_id(&id).await?;
    Ok(Json(json!({ "invoice": invoice })))
}

pub async fn create_invoice(
    State(manager): State<InvoiceManager>,
    JsonBody(payload): JsonBody<NewInvoicePayload>,
) -> Result<impl IntoResponse, BizError> {
    let invoice = manager.create(payload).await?;
    Ok((StatusCode::CREATED, Json(json!({ "invoice": invoice }))))
}

pub async fn update_invoice(
    State(manager): State<InvoiceManager>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateInvoicePayload>,
) -> Result<Json<Value>, BizError> {
    let invoice = manager.update(&id, payload).await?;
    Ok(Json(json!({ "invoice": invoice })))
}

pub async fn delete_invoice(
    State(manager): State<InvoiceManager>,
    Path(id): Path<String>,
) -> Result<Json<Value>, BizError> {
    manager.delete(&id).await?;
    Ok(Json(json!({ "status": "deleted" })))
}
