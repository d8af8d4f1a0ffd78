//! Persistence interface consumed by the resource managers
//!
//! Each method corresponds to one parameterized query. Join queries return
//! their raw rows; nesting them into API views is the managers' job.
//! Implementations report constraint failures through [`StoreError`](crate::core::error::StoreError) variants,
//! never through message text.

use crate::core::error::StoreResult;
use crate::entities::company::{Company, CompanyIndustryRow, CompanySummary};
use crate::entities::industry::{CompanyIndustry, Industry, IndustryCompanyRow};
use crate::entities::invoice::{Invoice, InvoiceChanges, InvoiceSummary, NewInvoice};
use async_trait::async_trait;

/// Storage backend for companies, industries and invoices
///
/// Backends must enforce the relational constraints the managers rely on:
/// - unique company code and name, unique industry code and association
///   (`StoreError::DuplicateKey`)
/// - invoice and association references (`StoreError::ForeignKeyViolation`)
/// - `amt > 0` (`StoreError::CheckViolation`)
/// - deleting a company cascades to its invoices and associations
#[async_trait]
pub trait BizStore: Send + Sync {
    // Companies

    /// `SELECT code, name FROM companies`
    async fn list_companies(&self) -> StoreResult<Vec<CompanySummary>>;

    /// Get a company by code
    async fn get_company(&self, code: &str) -> StoreResult<Option<Company>>;

    /// Insert a company and return the stored row
    async fn insert_company(&self, company: Company) -> StoreResult<Company>;

    /// Left-outer join of one company with its industries
    ///
    /// Empty when the company does not exist; a single row with
    /// `industry: None` when it exists without links.
    async fn company_industry_rows(&self, code: &str) -> StoreResult<Vec<CompanyIndustryRow>>;

    /// Ids of the invoices issued by a company
    async fn invoice_ids_for_company(&self, comp_code: &str) -> StoreResult<Vec<i32>>;

    /// Update name and description; `None` when no row matched
    async fn update_company(
        &self,
        code: &str,
        name: &str,
        description: &str,
    ) -> StoreResult<Option<Company>>;

    /// Delete a company, returning the number of rows removed
    async fn delete_company(&self, code: &str) -> StoreResult<u64>;

    // Industries

    /// Insert an industry and return the stored row
    async fn insert_industry(&self, industry: Industry) -> StoreResult<Industry>;

    /// Left-outer join of every industry with its member companies
    ///
    /// Industries without members contribute one row with `comp_code: None`.
    async fn industry_company_rows(&self) -> StoreResult<Vec<IndustryCompanyRow>>;

    /// Associate a company with an industry
    async fn insert_company_industry(&self, link: CompanyIndustry)
    -> StoreResult<CompanyIndustry>;

    // Invoices

    /// `SELECT id, comp_code, amt, paid FROM invoices`
    async fn list_invoices(&self) -> StoreResult<Vec<InvoiceSummary>>;

    /// Get an invoice by id
    async fn get_invoice(&self, id: i32) -> StoreResult<Option<Invoice>>;

    /// Insert an invoice; the store assigns id, `paid = false`,
    /// `add_date = current date` and `paid_date = NULL`
    async fn insert_invoice(&self, invoice: NewInvoice) -> StoreResult<Invoice>;

    /// Apply `changes` to an invoice; `None` when no row matched
    async fn update_invoice(&self, id: i32, changes: InvoiceChanges)
    -> StoreResult<Option<Invoice>>;

    /// Delete an invoice, returning the number of rows removed
    async fn delete_invoice(&self, id: i32) -> StoreResult<u64>;
}

