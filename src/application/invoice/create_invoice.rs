use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::invoice::{
  ClientName, InvoiceDraft, InvoiceError, InvoiceNumber, InvoiceService, LineItem, Rupiah,
  ServiceDescription,
};

#[derive(Debug, Deserialize)]
pub struct CreateInvoiceLineItemDto {
  pub description: String,
  pub price: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateInvoiceCommand {
  pub invoice_number: String,
  pub client_name: String,
  pub invoice_date: NaiveDate,
  pub event_date: Option<NaiveDate>,
  pub line_items: Vec<CreateInvoiceLineItemDto>,
}

#[derive(Debug, Serialize)]
pub struct CreateInvoiceResponse {
  pub invoice_id: Uuid,
  pub invoice_number: String,
  pub created_at: DateTime<Utc>,
}

pub struct CreateInvoiceUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl CreateInvoiceUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub async fn execute(
    &self,
    command: CreateInvoiceCommand,
  ) -> Result<CreateInvoiceResponse, InvoiceError> {
    let invoice_number = InvoiceNumber::new(command.invoice_number)?;
    let client_name = ClientName::new(command.client_name)?;

    let line_items = command
      .line_items
      .into_iter()
      .map(|item| {
        let description = ServiceDescription::new(item.description)?;
        let price = Rupiah::new(item.price)?;
        Ok(LineItem::new(description, price))
      })
      .collect::<Result<Vec<_>, InvoiceError>>()?;

    let invoice = self
      .invoice_service
      .create_invoice(InvoiceDraft {
        invoice_number,
        client_name,
        invoice_date: command.invoice_date,
        event_date: command.event_date,
        line_items,
      })
      .await?;

    Ok(CreateInvoiceResponse {
      invoice_id: invoice.id,
      invoice_number: invoice.invoice_number.into_inner(),
      created_at: invoice.created_at,
    })
  }
}
