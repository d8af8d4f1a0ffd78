//! Invoice entity module

pub mod descriptor;
pub mod handlers;
pub mod manager;
pub mod model;

pub use descriptor::InvoiceDescriptor;
pub use manager::InvoiceManager;
pub use model::{
    Invoice, InvoiceChanges, InvoiceDetail, InvoiceSummary, NewInvoice, NewInvoicePayload,
    UpdateInvoicePayload,
};
