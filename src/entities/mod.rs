//! Entities module - companies, industries and invoices
//!
//! Each entity lives in its own module with the same layout:
//! `model` (rows, views and request payloads), `manager` (business rules
//! over a [`BizStore`](crate::core::BizStore)), `handlers` (axum handlers)
//! and `descriptor` (route registration).

pub mod company;
pub mod industry;
pub mod invoice;

pub use company::{Company, CompanyDescriptor, CompanyManager};
pub use industry::{Industry, IndustryDescriptor, IndustryManager};
pub use invoice::{Invoice, InvoiceDescriptor, InvoiceManager};

/// A required text field: absent and empty both count as missing
pub(crate) fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
