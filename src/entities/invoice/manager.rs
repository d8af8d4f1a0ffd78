//! Invoice resource manager

use super::model::{
    Invoice, InvoiceChanges, InvoiceDetail, InvoiceSummary, NewInvoice, NewInvoicePayload,
    UpdateInvoicePayload,
};
use crate::core::{BizError, BizResult, BizStore, StoreError};
use crate::entities::required;
use std::sync::Arc;

const INVOICE_NOT_FOUND: &str = "invoice not found";
const AMT_NOT_POSITIVE: &str = "amt must be greater than zero";

/// CRUD for invoices
///
/// Invoice ids arrive as raw path segments. An id that does not parse as an
/// integer cannot name a row, so it is reported as a missing invoice.
#[derive(Clone)]
pub struct InvoiceManager {
    store: Arc<dyn BizStore>,
}

impl InvoiceManager {
    pub fn new(store: Arc<dyn BizStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> BizResult<Vec<InvoiceSummary>> {
        Ok(self.store.list_invoices().await?)
    }

    /// The invoice with its company nested in place of `comp_code`
    pub async fn get_by_id(&self, id: &str) -> BizResult<InvoiceDetail> {
        let id = parse_id(id)?;

        let invoice = self
            .store
            .get_invoice(id)
            .await
            .map_err(not_found_on_bad_input)?
            .ok_or_else(|| BizError::not_found(INVOICE_NOT_FOUND))?;

        // The company may have been deleted since the first read.
        let company = self
            .store
            .get_company(&invoice.comp_code)
            .await?
            .ok_or_else(|| BizError::not_found(INVOICE_NOT_FOUND))?;

        Ok(InvoiceDetail::new(invoice, company))
    }

    pub async fn create(&self, payload: NewInvoicePayload) -> BizResult<Invoice> {
        let (Some(comp_code), Some(amt)) = (required(payload.comp_code), present(payload.amt))
        else {
            return Err(BizError::validation("missing comp_code or amt"));
        };

        match self.store.insert_invoice(NewInvoice { comp_code, amt }).await {
            Ok(invoice) => {
                tracing::info!(id = invoice.id, comp_code = %invoice.comp_code, "invoice created");
                Ok(invoice)
            }
            Err(StoreError::ForeignKeyViolation { .. }) => {
                Err(BizError::not_found("company not found"))
            }
            Err(StoreError::CheckViolation { .. }) => Err(BizError::validation(AMT_NOT_POSITIVE)),
            Err(e) => Err(e.into()),
        }
    }

    /// Change the amount and, when `paid` is given, the payment state
    pub async fn update(&self, id: &str, payload: UpdateInvoicePayload) -> BizResult<Invoice> {
        let Some(amt) = present(payload.amt) else {
            return Err(BizError::validation("missing amt"));
        };
        let id = parse_id(id)?;

        let changes = InvoiceChanges {
            amt,
            paid: payload.paid,
        };

        match self.store.update_invoice(id, changes).await {
            Ok(Some(invoice)) => Ok(invoice),
            Ok(None) => Err(BizError::not_found(INVOICE_NOT_FOUND)),
            Err(StoreError::CheckViolation { .. }) => Err(BizError::validation(AMT_NOT_POSITIVE)),
            Err(e) => Err(not_found_on_bad_input(e)),
        }
    }

    pub async fn delete(&self, id: &str) -> BizResult<()> {
        let id = parse_id(id)?;

        if self
            .store
            .delete_invoice(id)
            .await
            .map_err(not_found_on_bad_input)?
            == 0
        {
            return Err(BizError::not_found(INVOICE_NOT_FOUND));
        }
        tracing::info!(id, "invoice deleted");
        Ok(())
    }
}

fn parse_id(id: &str) -> BizResult<i32> {
    id.parse()
        .map_err(|_| BizError::not_found(INVOICE_NOT_FOUND))
}

fn not_found_on_bad_input(err: StoreError) -> BizError {
    match err {
        StoreError::InvalidInput { .. } => BizError::not_found(INVOICE_NOT_FOUND),
        other => other.into(),
    }
}

/// A required amount: absent and zero both count as missing
fn present(amt: Option<f64>) -> Option<f64> {
    amt.filter(|amt| *amt != 0.0)
}
