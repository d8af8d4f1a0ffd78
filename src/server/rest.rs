//! REST exposure
//!
//! Assembles the final axum `Router` from the entity registry: health
//! routes, resource routes, custom routes, the JSON 404 fallback and the
//! request trace layer.

use super::entity_registry::EntityRegistry;
use crate::core::BizError;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router
    ///
    /// Unmatched routes and unsupported methods on known paths both answer
    /// 404 with the standard error body.
    pub fn build_router(registry: &EntityRegistry, custom_routes: Vec<Router>) -> Router {
        let mut app = Self::health_routes().merge(registry.build_routes());
        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        app.method_not_allowed_fallback(Self::not_found)
            .fallback(Self::not_found)
            .layer(TraceLayer::new_for_http())
    }

    fn health_routes() -> Router {
        Router::new().route("/health", get(Self::health_check))
    }

    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "biztime"
        }))
    }

    async fn not_found() -> BizError {
        BizError::not_found("Not Found")
    }
}
