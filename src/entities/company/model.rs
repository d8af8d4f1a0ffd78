//! Company entity model

use serde::{Deserialize, Serialize};

/// A company row: `{code, name, description}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: String,
}

/// Projection used by the company listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct CompanySummary {
    pub code: String,
    pub name: String,
}

impl From<&Company> for CompanySummary {
    fn from(company: &Company) -> Self {
        Self {
            code: company.code.clone(),
            name: company.name.clone(),
        }
    }
}

/// One row of `companies LEFT JOIN companies_industries LEFT JOIN industries`
///
/// `industry` is `None` when the company has no industry links.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct CompanyIndustryRow {
    pub code: String,
    pub name: String,
    pub description: String,
    pub industry: Option<String>,
}

/// Nested company view: the row plus industry names and invoice ids
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyDetail {
    pub code: String,
    pub name: String,
    pub description: String,
    pub industries: Vec<String>,
    pub invoices: Vec<i32>,
}

/// Body of `POST /companies` and `PUT /companies/{code}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyPayload {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Body of `POST /companies/{code}/add_industry`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddIndustryPayload {
    pub industry_code: Option<String>,
}
