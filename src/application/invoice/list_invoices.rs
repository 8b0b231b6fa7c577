use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::formatting;
use crate::domain::invoice::{Invoice, InvoiceError, InvoiceService};

#[derive(Debug, Serialize)]
pub struct InvoiceLineItemDto {
  pub description: String,
  pub price: i64,
  pub price_display: String,
}

#[derive(Debug, Serialize)]
pub struct InvoiceListItemDto {
  pub id: Uuid,
  pub invoice_number: String,
  pub client_name: String,
  pub invoice_date: NaiveDate,
  pub invoice_date_display: String,
  pub event_date: Option<NaiveDate>,
  pub event_date_display: Option<String>,
  pub line_items: Vec<InvoiceLineItemDto>,
  pub total: i64,
  pub total_display: String,
  pub receipt_url: Option<String>,
}

impl From<Invoice> for InvoiceListItemDto {
  fn from(invoice: Invoice) -> Self {
    let total = invoice.total();
    let line_items = invoice
      .line_items
      .iter()
      .map(|item| InvoiceLineItemDto {
        description: item.description.value().to_string(),
        price: item.price.amount(),
        price_display: item.price.to_string(),
      })
      .collect();

    Self {
      id: invoice.id,
      invoice_number: invoice.invoice_number.into_inner(),
      client_name: invoice.client_name.into_inner(),
      invoice_date: invoice.invoice_date,
      invoice_date_display: formatting::dmy(invoice.invoice_date),
      event_date: invoice.event_date,
      event_date_display: invoice.event_date.map(formatting::long_date),
      line_items,
      total: total.amount(),
      total_display: total.to_string(),
      receipt_url: invoice.receipt.map(|r| r.download_url),
    }
  }
}

#[derive(Debug, Serialize)]
pub struct ListInvoicesResponse {
  pub invoices: Vec<InvoiceListItemDto>,
}

pub struct ListInvoicesUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl ListInvoicesUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub async fn execute(&self) -> Result<ListInvoicesResponse, InvoiceError> {
    let invoices = self.invoice_service.list_invoices().await?;

    Ok(ListInvoicesResponse {
      invoices: invoices.into_iter().map(InvoiceListItemDto::from).collect(),
    })
  }
}
