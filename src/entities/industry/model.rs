//! Industry entity model and the company/industry association

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Industry {
    pub code: String,
    pub name: String,
}

/// A row of the `companies_industries` join table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct CompanyIndustry {
    pub comp_code: String,
    pub industry_code: String,
}

/// One row of `industries LEFT JOIN companies_industries LEFT JOIN companies`
///
/// `comp_code` is `None` for an industry without member companies.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct IndustryCompanyRow {
    pub industry_code: String,
    pub industry_name: String,
    pub comp_code: Option<String>,
}

/// An industry with the codes of its member companies
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndustryMembers {
    pub name: String,
    pub code: String,
    pub companies: Vec<String>,
}

/// Body of `POST /industries`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndustryPayload {
    pub code: Option<String>,
    pub name: Option<String>,
}
