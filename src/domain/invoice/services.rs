use chrono::NaiveDate;
use std::sync::Arc;
use uuid::Uuid;

use super::entities::{Invoice, LineItem};
use super::errors::InvoiceError;
use super::ports::{InvoiceRepository, ReceiptStorage};
use super::value_objects::{ClientName, InvoiceNumber};

/// Invoice creation data, already validated into value objects.
pub struct InvoiceDraft {
  pub invoice_number: InvoiceNumber,
  pub client_name: ClientName,
  pub invoice_date: NaiveDate,
  pub event_date: Option<NaiveDate>,
  pub line_items: Vec<LineItem>,
}

/// Invoice update data (the number is fixed once issued).
pub struct InvoiceUpdate {
  pub client_name: ClientName,
  pub invoice_date: NaiveDate,
  pub event_date: Option<NaiveDate>,
  pub line_items: Vec<LineItem>,
}

pub struct InvoiceService {
  invoice_repo: Arc<dyn InvoiceRepository>,
  receipt_storage: Arc<dyn ReceiptStorage>,
}

impl InvoiceService {
  pub fn new(
    invoice_repo: Arc<dyn InvoiceRepository>,
    receipt_storage: Arc<dyn ReceiptStorage>,
  ) -> Self {
    Self {
      invoice_repo,
      receipt_storage,
    }
  }

  pub async fn create_invoice(&self, draft: InvoiceDraft) -> Result<Invoice, InvoiceError> {
    if draft.line_items.is_empty() {
      return Err(InvoiceError::NoLineItems);
    }

    let invoice = Invoice::new(
      draft.invoice_number,
      draft.client_name,
      draft.invoice_date,
      draft.event_date,
      draft.line_items,
    );
    self.invoice_repo.create(invoice).await
  }

  pub async fn update_invoice(
    &self,
    invoice_id: Uuid,
    update: InvoiceUpdate,
  ) -> Result<Invoice, InvoiceError> {
    if update.line_items.is_empty() {
      return Err(InvoiceError::NoLineItems);
    }

    let mut invoice = self.get_invoice(invoice_id).await?;
    invoice.update(
      update.client_name,
      update.invoice_date,
      update.event_date,
      update.line_items,
    );
    self.invoice_repo.update(invoice).await
  }

  pub async fn get_invoice(&self, invoice_id: Uuid) -> Result<Invoice, InvoiceError> {
    self
      .invoice_repo
      .find_by_id(invoice_id)
      .await?
      .ok_or(InvoiceError::NotFound(invoice_id))
  }

  pub async fn list_invoices(&self) -> Result<Vec<Invoice>, InvoiceError> {
    self.invoice_repo.list().await
  }

  /// Delete an invoice together with its stored receipt, if any.
  pub async fn delete_invoice(&self, invoice_id: Uuid) -> Result<(), InvoiceError> {
    let invoice = self.get_invoice(invoice_id).await?;

    if let Some(receipt) = &invoice.receipt {
      self.receipt_storage.delete(&receipt.object_path).await?;
    }

    self.invoice_repo.delete(invoice_id).await
  }

  /// Upload a receipt image and record it on the invoice.
  ///
  /// A previously attached receipt is removed from storage first so the
  /// bucket never accumulates orphaned objects.
  pub async fn attach_receipt(
    &self,
    invoice_id: Uuid,
    file_name: &str,
    bytes: Vec<u8>,
    content_type: &str,
  ) -> Result<Invoice, InvoiceError> {
    let mut invoice = self.get_invoice(invoice_id).await?;

    if let Some(previous) = &invoice.receipt {
      self.receipt_storage.delete(&previous.object_path).await?;
    }

    let object_path = format!("receipts/{}/{}", invoice_id, file_name);
    let receipt = self
      .receipt_storage
      .upload(&object_path, bytes, content_type)
      .await?;

    invoice.attach_receipt(receipt);
    self.invoice_repo.update(invoice).await
  }
}
