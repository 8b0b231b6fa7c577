use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use super::create_invoice::CreateInvoiceLineItemDto;
use crate::domain::invoice::{
  ClientName, InvoiceError, InvoiceService, InvoiceUpdate, LineItem, Rupiah, ServiceDescription,
};

#[derive(Debug, Deserialize)]
pub struct UpdateInvoiceCommand {
  pub invoice_id: Uuid,
  pub client_name: String,
  pub invoice_date: NaiveDate,
  pub event_date: Option<NaiveDate>,
  pub line_items: Vec<CreateInvoiceLineItemDto>,
}

#[derive(Debug, Serialize)]
pub struct UpdateInvoiceResponse {
  pub invoice_id: Uuid,
  pub updated_at: DateTime<Utc>,
}

pub struct UpdateInvoiceUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl UpdateInvoiceUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub async fn execute(
    &self,
    command: UpdateInvoiceCommand,
  ) -> Result<UpdateInvoiceResponse, InvoiceError> {
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
      .update_invoice(
        command.invoice_id,
        InvoiceUpdate {
          client_name,
          invoice_date: command.invoice_date,
          event_date: command.event_date,
          line_items,
        },
      )
      .await?;

    Ok(UpdateInvoiceResponse {
      invoice_id: invoice.id,
      updated_at: invoice.updated_at,
    })
  }
}
