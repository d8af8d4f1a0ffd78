//! Entity descriptor for Industry

use super::handlers::{create_industry, list_industries};
use super::manager::IndustryManager;
use crate::server::EntityDescriptor;
use axum::{Router, routing::get};

pub struct IndustryDescriptor {
    pub manager: IndustryManager,
}

impl IndustryDescriptor {
    pub fn new(manager: IndustryManager) -> Self {
        Self { manager }
    }
}

impl EntityDescriptor for IndustryDescriptor {
    fn entity_type(&self) -> &str {
        "industry"
    }

    fn plural(&self) -> &str {
        "industries"
    }

    fn build_routes(&self) -> Router {
        Router::new()
            .route("/industries", get(list_industries).post(create_industry))
            .with_state(self.manager.clone())
    }
}
