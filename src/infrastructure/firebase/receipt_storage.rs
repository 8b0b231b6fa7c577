use async_trait::async_trait;

use super::storage::FirebaseStorageClient;
use crate::domain::invoice::{InvoiceError, Receipt, ReceiptStorage};

/// Receipt storage backed by the hosted file store.
pub struct FirebaseReceiptStorage {
  storage: FirebaseStorageClient,
}

impl FirebaseReceiptStorage {
  pub fn new(storage: FirebaseStorageClient) -> Self {
    Self { storage }
  }
}

#[async_trait]
impl ReceiptStorage for FirebaseReceiptStorage {
  async fn upload(
    &self,
    object_path: &str,
    bytes: Vec<u8>,
    content_type: &str,
  ) -> Result<Receipt, InvoiceError> {
    let object = self
      .storage
      .upload(object_path, bytes, content_type)
      .await
      .map_err(|e| InvoiceError::Storage(e.to_string()))?;

    Ok(Receipt {
      object_path: object.object_path,
      download_url: object.download_url,
    })
  }

  async fn delete(&self, object_path: &str) -> Result<(), InvoiceError> {
    self
      .storage
      .delete(object_path)
      .await
      .map_err(|e| InvoiceError::Storage(e.to_string()))
  }
}
