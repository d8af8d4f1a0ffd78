//! Industry resource manager

use super::model::{Industry, IndustryMembers, IndustryPayload};
use crate::core::{BizError, BizResult, BizStore, StoreError, group_ordered};
use crate::entities::required;
use std::sync::Arc;

#[derive(Clone)]
pub struct IndustryManager {
    store: Arc<dyn BizStore>,
}

impl IndustryManager {
    pub fn new(store: Arc<dyn BizStore>) -> Self {
        Self { store }
    }

    /// Every industry with the codes of its member companies
    ///
    /// Industries appear in first-seen join order. An industry without
    /// members lists `companies: []`.
    pub async fn list(&self) -> BizResult<Vec<IndustryMembers>> {
        let rows = self.store.industry_company_rows().await?;

        Ok(group_ordered(
            rows,
            |row| row.industry_code.clone(),
            |row| IndustryMembers {
                name: row.industry_name.clone(),
                code: row.industry_code.clone(),
                companies: Vec::new(),
            },
            |industry, row| industry.companies.extend(row.comp_code),
        ))
    }

    pub async fn create(&self, payload: IndustryPayload) -> BizResult<Industry> {
        let (Some(code), Some(name)) = (required(payload.code), required(payload.name)) else {
            return Err(BizError::validation("missing code or name"));
        };

        let industry = Industry { code, name };

        match self.store.insert_industry(industry.clone()).await {
            Ok(created) => {
                tracing::info!(code = %created.code, "industry created");
                Ok(created)
            }
            Err(StoreError::DuplicateKey { .. }) => Err(BizError::conflict(format!(
                "industry with code {} already exists",
                industry.code
            ))),
            Err(e) => Err(e.into()),
        }
    }
}
