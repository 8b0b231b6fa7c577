use async_trait::async_trait;
use uuid::Uuid;

use super::entities::{Invoice, Receipt};
use super::errors::InvoiceError;

#[async_trait]
pub trait InvoiceRepository: Send + Sync {
  async fn create(&self, invoice: Invoice) -> Result<Invoice, InvoiceError>;
  async fn update(&self, invoice: Invoice) -> Result<Invoice, InvoiceError>;
  async fn find_by_id(&self, id: Uuid) -> Result<Option<Invoice>, InvoiceError>;
  /// All invoices, newest invoice date first.
  async fn list(&self) -> Result<Vec<Invoice>, InvoiceError>;
  async fn delete(&self, id: Uuid) -> Result<(), InvoiceError>;
}

/// Hosted file store for receipt images.
#[async_trait]
pub trait ReceiptStorage: Send + Sync {
  /// Upload bytes under `object_path` and resolve the public download URL.
  async fn upload(
    &self,
    object_path: &str,
    bytes: Vec<u8>,
    content_type: &str,
  ) -> Result<Receipt, InvoiceError>;
  async fn delete(&self, object_path: &str) -> Result<(), InvoiceError>;
}
