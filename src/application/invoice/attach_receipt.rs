use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::invoice::{InvoiceError, InvoiceService};

#[derive(Debug)]
pub struct AttachReceiptCommand {
  pub invoice_id: Uuid,
  pub file_name: String,
  pub content_type: String,
  pub bytes: Vec<u8>,
}

#[derive(Debug, Serialize)]
pub struct AttachReceiptResponse {
  pub invoice_id: Uuid,
  pub receipt_url: String,
}

pub struct AttachReceiptUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl AttachReceiptUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub async fn execute(
    &self,
    command: AttachReceiptCommand,
  ) -> Result<AttachReceiptResponse, InvoiceError> {
    if command.bytes.is_empty() {
      return Err(InvoiceError::Storage("Empty upload".to_string()));
    }

    let invoice = self
      .invoice_service
      .attach_receipt(
        command.invoice_id,
        &command.file_name,
        command.bytes,
        &command.content_type,
      )
      .await?;

    let receipt_url = invoice
      .receipt
      .map(|r| r.download_url)
      .ok_or_else(|| InvoiceError::Internal("Receipt missing after upload".to_string()))?;

    Ok(AttachReceiptResponse {
      invoice_id: command.invoice_id,
      receipt_url,
    })
  }
}
