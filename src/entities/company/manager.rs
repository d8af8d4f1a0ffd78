//! Company resource manager

use super::model::{AddIndustryPayload, Company, CompanyDetail, CompanyPayload, CompanySummary};
use crate::core::{BizError, BizResult, BizStore, Slugifier, StoreError, group_ordered};
use crate::entities::industry::CompanyIndustry;
use crate::entities::required;
use std::sync::Arc;

const COMPANY_NOT_FOUND: &str = "company not found";

/// CRUD and industry linking for companies
#[derive(Clone)]
pub struct CompanyManager {
    store: Arc<dyn BizStore>,
}

impl CompanyManager {
    pub fn new(store: Arc<dyn BizStore>) -> Self {
        Self { store }
    }

    /// All companies as `{code, name}`, in storage order
    pub async fn list(&self) -> BizResult<Vec<CompanySummary>> {
        Ok(self.store.list_companies().await?)
    }

    /// Create a company whose code is the slug of its name
    pub async fn create(&self, payload: CompanyPayload) -> BizResult<Company> {
        let (Some(name), Some(description)) =
            (required(payload.name), required(payload.description))
        else {
            return Err(BizError::validation("missing name or description"));
        };

        let code = Slugifier::slugify(&name);
        if code.is_empty() {
            return Err(BizError::validation(format!(
                "cannot derive a company code from name {}",
                name
            )));
        }

        let company = Company {
            code,
            name,
            description,
        };

        match self.store.insert_company(company.clone()).await {
            Ok(created) => {
                tracing::info!(code = %created.code, "company created");
                Ok(created)
            }
            Err(StoreError::DuplicateKey { .. }) => Err(BizError::conflict(format!(
                "company named {} already exists with code {}",
                company.name, company.code
            ))),
            Err(e) => Err(e.into()),
        }
    }

    /// The company with its industry names and invoice ids
    pub async fn get_by_code(&self, code: &str) -> BizResult<CompanyDetail> {
        let rows = self.store.company_industry_rows(code).await?;

        let company = group_ordered(
            rows,
            |row| row.code.clone(),
            |row| CompanyDetail {
                code: row.code.clone(),
                name: row.name.clone(),
                description: row.description.clone(),
                industries: Vec::new(),
                invoices: Vec::new(),
            },
            |company, row| company.industries.extend(row.industry),
        )
        .into_iter()
        .next();

        let Some(mut company) = company else {
            return Err(BizError::not_found(COMPANY_NOT_FOUND));
        };

        company.invoices = self.store.invoice_ids_for_company(code).await?;

        Ok(company)
    }

    /// Replace name and description; the code never changes
    pub async fn update(&self, code: &str, payload: CompanyPayload) -> BizResult<Company> {
        let (Some(name), Some(description)) =
            (required(payload.name), required(payload.description))
        else {
            return Err(BizError::validation("missing name or description"));
        };

        match self.store.update_company(code, &name, &description).await {
            Ok(Some(company)) => Ok(company),
            Ok(None) => Err(BizError::not_found(COMPANY_NOT_FOUND)),
            Err(StoreError::DuplicateKey { .. }) => Err(BizError::conflict(format!(
                "company named {} already exists",
                name
            ))),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete a company; the store cascades to its invoices
    pub async fn delete(&self, code: &str) -> BizResult<()> {
        if self.store.delete_company(code).await? == 0 {
            return Err(BizError::not_found(COMPANY_NOT_FOUND));
        }
        tracing::info!(code, "company deleted");
        Ok(())
    }

    /// Associate the company with an industry
    pub async fn link_industry(
        &self,
        code: &str,
        payload: AddIndustryPayload,
    ) -> BizResult<CompanyIndustry> {
        let Some(industry_code) = required(payload.industry_code) else {
            return Err(BizError::validation("missing industry_code"));
        };

        let link = CompanyIndustry {
            comp_code: code.to_string(),
            industry_code,
        };

        match self.store.insert_company_industry(link.clone()).await {
            Ok(created) => Ok(created),
            Err(StoreError::ForeignKeyViolation { .. }) => {
                Err(BizError::not_found("company or industry not found"))
            }
            Err(StoreError::DuplicateKey { .. }) => Err(BizError::conflict(format!(
                "company {} already belongs to industry {}",
                link.comp_code, link.industry_code
            ))),
            Err(e) => Err(e.into()),
        }
    }
}
