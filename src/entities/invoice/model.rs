//! Invoice entity model

use super::super::company::Company;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A full invoice row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Invoice {
    pub id: i32,
    pub comp_code: String,
    #[serde(serialize_with = "amount::serialize")]
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

/// Projection used by the invoice listing (no dates)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct InvoiceSummary {
    pub id: i32,
    pub comp_code: String,
    #[serde(serialize_with = "amount::serialize")]
    pub amt: f64,
    pub paid: bool,
}

impl From<&Invoice> for InvoiceSummary {
    fn from(invoice: &Invoice) -> Self {
        Self {
            id: invoice.id,
            comp_code: invoice.comp_code.clone(),
            amt: invoice.amt,
            paid: invoice.paid,
        }
    }
}

/// Invoice view with `comp_code` replaced by the full company
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceDetail {
    pub id: i32,
    #[serde(serialize_with = "amount::serialize")]
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    pub company: Company,
}

impl InvoiceDetail {
    pub fn new(invoice: Invoice, company: Company) -> Self {
        Self {
            id: invoice.id,
            amt: invoice.amt,
            paid: invoice.paid,
            add_date: invoice.add_date,
            paid_date: invoice.paid_date,
            company,
        }
    }
}

/// Values for an invoice insert; the store fills id, paid and dates
#[derive(Debug, Clone, PartialEq)]
pub struct NewInvoice {
    pub comp_code: String,
    pub amt: f64,
}

/// Values for an invoice update
///
/// `paid: None` leaves `paid` and `paid_date` untouched. Paying an unpaid
/// invoice stamps `paid_date` with the current date, un-paying clears it.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceChanges {
    pub amt: f64,
    pub paid: Option<bool>,
}

/// Body of `POST /invoices`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewInvoicePayload {
    pub comp_code: Option<String>,
    #[serde(default, deserialize_with = "amount::deserialize")]
    pub amt: Option<f64>,
}

/// Body of `PUT /invoices/{id}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateInvoicePayload {
    #[serde(default, deserialize_with = "amount::deserialize")]
    pub amt: Option<f64>,
    pub paid: Option<bool>,
}

/// Wire format of `amt`
///
/// Bodies may carry the amount as a number or a numeric string. Whole amounts
/// are written back as integers.
mod amount {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(amt: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if amt.fract() == 0.0 && amt.abs() <= MAX_EXACT {
            serializer.serialize_i64(*amt as i64)
        } else {
            serializer.serialize_f64(*amt)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        match Option::<Raw>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Raw::Number(amt)) => Ok(Some(amt)),
            Some(Raw::Text(text)) => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|amt| amt.is_finite())
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid amt: {:?}", text))),
        }
    }
}
