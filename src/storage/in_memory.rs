//! In-memory implementation of BizStore for testing and development
//!
//! Tables are `IndexMap`s keyed by primary key so listings come back in
//! insertion order. The relational constraints of the PostgreSQL schema are
//! enforced by hand: unique keys, foreign keys, `amt > 0` and the
//! `ON DELETE CASCADE` from companies to invoices and associations.

use crate::core::{BizStore, StoreError, StoreResult};
use crate::entities::company::{Company, CompanyIndustryRow, CompanySummary};
use crate::entities::industry::{CompanyIndustry, Industry, IndustryCompanyRow};
use crate::entities::invoice::{Invoice, InvoiceChanges, InvoiceSummary, NewInvoice};
use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use indexmap::IndexMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug)]
struct Tables {
    companies: IndexMap<String, Company>,
    industries: IndexMap<String, Industry>,
    invoices: IndexMap<i32, Invoice>,
    companies_industries: Vec<CompanyIndustry>,
    next_invoice_id: i32,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            companies: IndexMap::new(),
            industries: IndexMap::new(),
            invoices: IndexMap::new(),
            companies_industries: Vec::new(),
            next_invoice_id: 1,
        }
    }
}

/// In-memory store
///
/// Every method takes the single table lock once, so each call (cascade
/// included) is atomic. Cloning shares the underlying tables.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    /// Create a new, empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|e| StoreError::Other(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|e| StoreError::Other(format!("Failed to acquire write lock: {}", e)))
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn check_amt(amt: f64) -> StoreResult<()> {
    // NaN fails this too
    if !(amt > 0.0) {
        return Err(StoreError::CheckViolation {
            message: format!("invoices_amt_check: amt {} is not greater than zero", amt),
        });
    }
    Ok(())
}

#[async_trait]
impl BizStore for InMemoryStore {
    async fn list_companies(&self) -> StoreResult<Vec<CompanySummary>> {
        let tables = self.read()?;
        Ok(tables.companies.values().map(CompanySummary::from).collect())
    }

    async fn get_company(&self, code: &str) -> StoreResult<Option<Company>> {
        let tables = self.read()?;
        Ok(tables.companies.get(code).cloned())
    }

    async fn insert_company(&self, company: Company) -> StoreResult<Company> {
        let mut tables = self.write()?;

        if tables.companies.contains_key(&company.code) {
            return Err(StoreError::DuplicateKey {
                message: format!("companies_pkey: code {} exists", company.code),
            });
        }
        if tables.companies.values().any(|c| c.name == company.name) {
            return Err(StoreError::DuplicateKey {
                message: format!("companies_name_key: name {} exists", company.name),
            });
        }

        tables
            .companies
            .insert(company.code.clone(), company.clone());
        Ok(company)
    }

    async fn company_industry_rows(&self, code: &str) -> StoreResult<Vec<CompanyIndustryRow>> {
        let tables = self.read()?;

        let Some(company) = tables.companies.get(code) else {
            return Ok(Vec::new());
        };

        let row = |industry: Option<String>| CompanyIndustryRow {
            code: company.code.clone(),
            name: company.name.clone(),
            description: company.description.clone(),
            industry,
        };

        let rows: Vec<_> = tables
            .companies_industries
            .iter()
            .filter(|link| link.comp_code == code)
            .filter_map(|link| tables.industries.get(&link.industry_code))
            .map(|industry| row(Some(industry.name.clone())))
            .collect();

        if rows.is_empty() {
            return Ok(vec![row(None)]);
        }
        Ok(rows)
    }

    async fn invoice_ids_for_company(&self, comp_code: &str) -> StoreResult<Vec<i32>> {
        let tables = self.read()?;
        Ok(tables
            .invoices
            .values()
            .filter(|invoice| invoice.comp_code == comp_code)
            .map(|invoice| invoice.id)
            .collect())
    }

    async fn update_company(
        &self,
        code: &str,
        name: &str,
        description: &str,
    ) -> StoreResult<Option<Company>> {
        let mut tables = self.write()?;

        if !tables.companies.contains_key(code) {
            return Ok(None);
        }
        if tables
            .companies
            .values()
            .any(|c| c.code != code && c.name == name)
        {
            return Err(StoreError::DuplicateKey {
                message: format!("companies_name_key: name {} exists", name),
            });
        }

        Ok(tables.companies.get_mut(code).map(|company| {
            company.name = name.to_string();
            company.description = description.to_string();
            company.clone()
        }))
    }

    async fn delete_company(&self, code: &str) -> StoreResult<u64> {
        let mut tables = self.write()?;

        if tables.companies.shift_remove(code).is_none() {
            return Ok(0);
        }
        tables.invoices.retain(|_, invoice| invoice.comp_code != code);
        tables.companies_industries.retain(|link| link.comp_code != code);
        Ok(1)
    }

    async fn insert_industry(&self, industry: Industry) -> StoreResult<Industry> {
        let mut tables = self.write()?;

        if tables.industries.contains_key(&industry.code) {
            return Err(StoreError::DuplicateKey {
                message: format!("industries_pkey: code {} exists", industry.code),
            });
        }

        tables
            .industries
            .insert(industry.code.clone(), industry.clone());
        Ok(industry)
    }

    async fn industry_company_rows(&self) -> StoreResult<Vec<IndustryCompanyRow>> {
        let tables = self.read()?;

        let mut rows = Vec::new();
        for industry in tables.industries.values() {
            let row = |comp_code: Option<String>| IndustryCompanyRow {
                industry_code: industry.code.clone(),
                industry_name: industry.name.clone(),
                comp_code,
            };

            let before = rows.len();
            rows.extend(
                tables
                    .companies_industries
                    .iter()
                    .filter(|link| link.industry_code == industry.code)
                    .filter(|link| tables.companies.contains_key(&link.comp_code))
                    .map(|link| row(Some(link.comp_code.clone()))),
            );
            if rows.len() == before {
                rows.push(row(None));
            }
        }
        Ok(rows)
    }

    async fn insert_company_industry(
        &self,
        link: CompanyIndustry,
    ) -> StoreResult<CompanyIndustry> {
        let mut tables = self.write()?;

        if !tables.companies.contains_key(&link.comp_code) {
            return Err(StoreError::ForeignKeyViolation {
                message: format!("companies_industries_comp_code_fkey: {}", link.comp_code),
            });
        }
        if !tables.industries.contains_key(&link.industry_code) {
            return Err(StoreError::ForeignKeyViolation {
                message: format!(
                    "companies_industries_industry_code_fkey: {}",
                    link.industry_code
                ),
            });
        }
        if tables.companies_industries.contains(&link) {
            return Err(StoreError::DuplicateKey {
                message: format!(
                    "companies_industries_pkey: ({}, {}) exists",
                    link.comp_code, link.industry_code
                ),
            });
        }

        tables.companies_industries.push(link.clone());
        Ok(link)
    }

    async fn list_invoices(&self) -> StoreResult<Vec<InvoiceSummary>> {
        let tables = self.read()?;
        Ok(tables.invoices.values().map(InvoiceSummary::from).collect())
    }

    async fn get_invoice(&self, id: i32) -> StoreResult<Option<Invoice>> {
        let tables = self.read()?;
        Ok(tables.invoices.get(&id).cloned())
    }

    async fn insert_invoice(&self, invoice: NewInvoice) -> StoreResult<Invoice> {
        let mut tables = self.write()?;

        // Row checks run before the foreign key, as in PostgreSQL
        check_amt(invoice.amt)?;
        if !tables.companies.contains_key(&invoice.comp_code) {
            return Err(StoreError::ForeignKeyViolation {
                message: format!("invoices_comp_code_fkey: {}", invoice.comp_code),
            });
        }

        let id = tables.next_invoice_id;
        tables.next_invoice_id += 1;

        let invoice = Invoice {
            id,
            comp_code: invoice.comp_code,
            amt: invoice.amt,
            paid: false,
            add_date: today(),
            paid_date: None,
        };
        tables.invoices.insert(id, invoice.clone());
        Ok(invoice)
    }

    async fn update_invoice(
        &self,
        id: i32,
        changes: InvoiceChanges,
    ) -> StoreResult<Option<Invoice>> {
        let mut tables = self.write()?;

        let Some(invoice) = tables.invoices.get_mut(&id) else {
            return Ok(None);
        };
        check_amt(changes.amt)?;

        invoice.amt = changes.amt;
        match changes.paid {
            Some(true) if !invoice.paid => {
                invoice.paid = true;
                invoice.paid_date = Some(today());
            }
            Some(false) => {
                invoice.paid = false;
                invoice.paid_date = None;
            }
            _ => {}
        }
        Ok(Some(invoice.clone()))
    }

    async fn delete_invoice(&self, id: i32) -> StoreResult<u64> {
        let mut tables = self.write()?;
        Ok(tables.invoices.shift_remove(&id).map_or(0, |_| 1))
    }
}
