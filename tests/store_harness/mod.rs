//! Shared test harness for BizStore backends
//!
//! Provides fixture builders and two macro-generated suites:
//! - `biz_store_tests!`: the store contract (constraints, joins, cascade)
//! - `rest_integration_tests!`: HTTP round-trips through the full router
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod store_harness;
//! use store_harness::*;
//!
//! biz_store_tests!(InMemoryStore::new());
//! rest_integration_tests!(InMemoryStore::new());
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod rest_tests;

use biztime::entities::company::Company;
use biztime::entities::industry::{CompanyIndustry, Industry};
use biztime::entities::invoice::NewInvoice;

pub fn company(code: &str, name: &str, description: &str) -> Company {
    Company {
        code: code.to_string(),
        name: name.to_string(),
        description: description.to_string(),
    }
}

pub fn apple() -> Company {
    company("apple", "Apple Computer", "Maker of OSX.")
}

pub fn ibm() -> Company {
    company("ibm", "IBM", "Big blue.")
}

pub fn industry(code: &str, name: &str) -> Industry {
    Industry {
        code: code.to_string(),
        name: name.to_string(),
    }
}

pub fn link(comp_code: &str, industry_code: &str) -> CompanyIndustry {
    CompanyIndustry {
        comp_code: comp_code.to_string(),
        industry_code: industry_code.to_string(),
    }
}

pub fn new_invoice(comp_code: &str, amt: f64) -> NewInvoice {
    NewInvoice {
        comp_code: comp_code.to_string(),
        amt,
    }
}

/// The database clock may run in UTC while the test host does not
pub fn is_today(date: chrono::NaiveDate) -> bool {
    date == chrono::Local::now().date_naive() || date == chrono::Utc::now().date_naive()
}

/// Sort a vector so join results can be compared without relying on row order
pub fn sorted<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    values.sort();
    values
}
