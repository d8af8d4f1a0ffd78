//! Entity descriptor for Company

use super::handlers::{
    add_industry, create_company, delete_company, get_company, list_companies, update_company,
};
use super::manager::CompanyManager;
use crate::server::EntityDescriptor;
use axum::{
    Router,
    routing::{get, post},
};

/// Descriptor for the Company entity
pub struct CompanyDescriptor {
    pub manager: CompanyManager,
}

impl CompanyDescriptor {
    pub fn new(manager: CompanyManager) -> Self {
        Self { manager }
    }
}

impl EntityDescriptor for CompanyDescriptor {
    fn entity_type(&self) -> &str {
        "company"
    }

    fn plural(&self) -> &str {
        "companies"
    }

    fn build_routes(&self) -> Router {
        Router::new()
            .route("/companies", get(list_companies).post(create_company))
            .route(
                "/companies/{code}",
                get(get_company).put(update_company).delete(delete_company),
            )
            .route("/companies/{code}/add_industry", post(add_industry))
            .with_state(self.manager.clone())
    }
}
