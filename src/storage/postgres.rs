//! PostgreSQL storage backend using sqlx.
//!
//! Provides `PostgresStore`, a [`BizStore`] backed by a `sqlx::PgPool`.
//!
//! # Feature flag
//!
//! This module is gated behind the `postgres` feature flag:
//! ```toml
//! [dependencies]
//! biztime = { version = "0.1", features = ["postgres"] }
//! ```
//!
//! # Schema
//!
//! The tables are created by `migrations/20240101000000_biztime.sql`.
//! Constraint failures are classified from their SQLSTATE code; this module
//! is the only place those codes are read.

use crate::core::{BizStore, StoreError, StoreResult};
use crate::entities::company::{Company, CompanyIndustryRow, CompanySummary};
use crate::entities::industry::{CompanyIndustry, Industry, IndustryCompanyRow};
use crate::entities::invoice::{Invoice, InvoiceChanges, InvoiceSummary, NewInvoice};
use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

// ---------------------------------------------------------------------------
// Error classification
// ---------------------------------------------------------------------------

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const CHECK_VIOLATION: &str = "23514";
const INVALID_TEXT_REPRESENTATION: &str = "22P02";
const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

fn classify(err: sqlx::Error) -> StoreError {
    let sqlx::Error::Database(db) = &err else {
        return StoreError::Other(err.to_string());
    };

    let message = db.message().to_string();
    match db.code().as_deref() {
        Some(UNIQUE_VIOLATION) => StoreError::DuplicateKey { message },
        Some(FOREIGN_KEY_VIOLATION) => StoreError::ForeignKeyViolation { message },
        Some(CHECK_VIOLATION) => StoreError::CheckViolation { message },
        Some(INVALID_TEXT_REPRESENTATION) | Some(NUMERIC_VALUE_OUT_OF_RANGE) => {
            StoreError::InvalidInput { message }
        }
        _ => StoreError::Other(err.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Connection
// ---------------------------------------------------------------------------

/// Open a connection pool
pub async fn connect(url: &str, max_connections: u32) -> StoreResult<PgPool> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
        .map_err(classify)
}

// ---------------------------------------------------------------------------
// PostgresStore
// ---------------------------------------------------------------------------

/// Store backed by PostgreSQL.
///
/// Every method issues exactly one parameterized statement.
#[derive(Clone, Debug)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new `PostgresStore` with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl BizStore for PostgresStore {
    async fn list_companies(&self) -> StoreResult<Vec<CompanySummary>> {
        tracing::debug!("listing companies");
        sqlx::query_as::<_, CompanySummary>("SELECT code, name FROM companies")
            .fetch_all(&self.pool)
            .await
            .map_err(classify)
    }

    async fn get_company(&self, code: &str) -> StoreResult<Option<Company>> {
        tracing::debug!(code, "fetching company");
        sqlx::query_as::<_, Company>(
            "SELECT code, name, description FROM companies WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(classify)
    }

    async fn insert_company(&self, company: Company) -> StoreResult<Company> {
        tracing::debug!(code = %company.code, "inserting company");
        sqlx::query_as::<_, Company>(
            "INSERT INTO companies (code, name, description) VALUES ($1, $2, $3) \
             RETURNING code, name, description",
        )
        .bind(&company.code)
        .bind(&company.name)
        .bind(&company.description)
        .fetch_one(&self.pool)
        .await
        .map_err(classify)
    }

    async fn company_industry_rows(&self, code: &str) -> StoreResult<Vec<CompanyIndustryRow>> {
        tracing::debug!(code, "joining company industries");
        sqlx::query_as::<_, CompanyIndustryRow>(
            "SELECT c.code, c.name, c.description, i.name AS industry \
             FROM companies AS c \
             LEFT JOIN companies_industries AS c_i ON c.code = c_i.comp_code \
             LEFT JOIN industries AS i ON i.code = c_i.industry_code \
             WHERE c.code = $1",
        )
        .bind(code)
        .fetch_all(&self.pool)
        .await
        .map_err(classify)
    }

    async fn invoice_ids_for_company(&self, comp_code: &str) -> StoreResult<Vec<i32>> {
        tracing::debug!(comp_code, "listing company invoice ids");
        sqlx::query_scalar::<_, i32>("SELECT id FROM invoices WHERE comp_code = $1")
            .bind(comp_code)
            .fetch_all(&self.pool)
            .await
            .map_err(classify)
    }

    async fn update_company(
        &self,
        code: &str,
        name: &str,
        description: &str,
    ) -> StoreResult<Option<Company>> {
        tracing::debug!(code, "updating company");
        sqlx::query_as::<_, Company>(
            "UPDATE companies SET name = $1, description = $2 WHERE code = $3 \
             RETURNING code, name, description",
        )
        .bind(name)
        .bind(description)
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(classify)
    }

    async fn delete_company(&self, code: &str) -> StoreResult<u64> {
        tracing::debug!(code, "deleting company");
        let result = sqlx::query("DELETE FROM companies WHERE code = $1")
            .bind(code)
            .execute(&self.pool)
            .await
            .map_err(classify)?;
        Ok(result.rows_affected())
    }

    async fn insert_industry(&self, industry: Industry) -> StoreResult<Industry> {
        tracing::debug!(code = %industry.code, "inserting industry");
        sqlx::query_as::<_, Industry>(
            "INSERT INTO industries (code, name) VALUES ($1, $2) RETURNING code, name",
        )
        .bind(&industry.code)
        .bind(&industry.name)
        .fetch_one(&self.pool)
        .await
        .map_err(classify)
    }

    async fn industry_company_rows(&self) -> StoreResult<Vec<IndustryCompanyRow>> {
        tracing::debug!("joining industry companies");
        sqlx::query_as::<_, IndustryCompanyRow>(
            "SELECT i.name AS industry_name, i.code AS industry_code, c.code AS comp_code \
             FROM industries AS i \
             LEFT JOIN companies_industries AS c_i ON i.code = c_i.industry_code \
             LEFT JOIN companies AS c ON c.code = c_i.comp_code",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(classify)
    }

    async fn insert_company_industry(
        &self,
        link: CompanyIndustry,
    ) -> StoreResult<CompanyIndustry> {
        tracing::debug!(comp_code = %link.comp_code, industry_code = %link.industry_code, "linking industry");
        sqlx::query_as::<_, CompanyIndustry>(
            "INSERT INTO companies_industries (comp_code, industry_code) VALUES ($1, $2) \
             RETURNING comp_code, industry_code",
        )
        .bind(&link.comp_code)
        .bind(&link.industry_code)
        .fetch_one(&self.pool)
        .await
        .map_err(classify)
    }

    async fn list_invoices(&self) -> StoreResult<Vec<InvoiceSummary>> {
        tracing::debug!("listing invoices");
        sqlx::query_as::<_, InvoiceSummary>("SELECT id, comp_code, amt, paid FROM invoices")
            .fetch_all(&self.pool)
            .await
            .map_err(classify)
    }

    async fn get_invoice(&self, id: i32) -> StoreResult<Option<Invoice>> {
        tracing::debug!(id, "fetching invoice");
        sqlx::query_as::<_, Invoice>(
            "SELECT id, comp_code, amt, paid, add_date, paid_date FROM invoices WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(classify)
    }

    async fn insert_invoice(&self, invoice: NewInvoice) -> StoreResult<Invoice> {
        tracing::debug!(comp_code = %invoice.comp_code, "inserting invoice");
        sqlx::query_as::<_, Invoice>(
            "INSERT INTO invoices (comp_code, amt) VALUES ($1, $2) \
             RETURNING id, comp_code, amt, paid, add_date, paid_date",
        )
        .bind(&invoice.comp_code)
        .bind(invoice.amt)
        .fetch_one(&self.pool)
        .await
        .map_err(classify)
    }

    async fn update_invoice(
        &self,
        id: i32,
        changes: InvoiceChanges,
    ) -> StoreResult<Option<Invoice>> {
        tracing::debug!(id, "updating invoice");
        // paid_date is stamped only on the unpaid -> paid transition
        sqlx::query_as::<_, Invoice>(
            "UPDATE invoices SET amt = $1, \
             paid = COALESCE($2::boolean, paid), \
             paid_date = CASE \
                 WHEN $2::boolean IS NULL THEN paid_date \
                 WHEN $2::boolean AND NOT paid THEN CURRENT_DATE \
                 WHEN $2::boolean THEN paid_date \
                 ELSE NULL END \
             WHERE id = $3 \
             RETURNING id, comp_code, amt, paid, add_date, paid_date",
        )
        .bind(changes.amt)
        .bind(changes.paid)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(classify)
    }

    async fn delete_invoice(&self, id: i32) -> StoreResult<u64> {
        tracing::debug!(id, "deleting invoice");
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(classify)?;
        Ok(result.rows_affected())
    }
}
