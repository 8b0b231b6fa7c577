use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::client::{Document, FirestoreClient, OrderDirection};
use crate::domain::invoice::{
  ClientName, Invoice, InvoiceError, InvoiceNumber, InvoiceRepository, LineItem, Receipt, Rupiah,
  ServiceDescription,
};

const COLLECTION: &str = "invoices";

#[derive(Debug, Serialize, Deserialize)]
struct LineItemDoc {
  description: String,
  price: i64,
}

#[derive(Debug, Serialize, Deserialize)]
struct ReceiptDoc {
  object_path: String,
  download_url: String,
}

/// Plain-JSON shape of an invoice document. Ids live in the document name,
/// not in the fields.
#[derive(Debug, Serialize, Deserialize)]
struct InvoiceDoc {
  invoice_number: String,
  client_name: String,
  invoice_date: NaiveDate,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  event_date: Option<NaiveDate>,
  line_items: Vec<LineItemDoc>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  receipt: Option<ReceiptDoc>,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl From<&Invoice> for InvoiceDoc {
  fn from(invoice: &Invoice) -> Self {
    Self {
      invoice_number: invoice.invoice_number.value().to_string(),
      client_name: invoice.client_name.value().to_string(),
      invoice_date: invoice.invoice_date,
      event_date: invoice.event_date,
      line_items: invoice
        .line_items
        .iter()
        .map(|item| LineItemDoc {
          description: item.description.value().to_string(),
          price: item.price.amount(),
        })
        .collect(),
      receipt: invoice.receipt.as_ref().map(|receipt| ReceiptDoc {
        object_path: receipt.object_path.clone(),
        download_url: receipt.download_url.clone(),
      }),
      created_at: invoice.created_at,
      updated_at: invoice.updated_at,
    }
  }
}

impl InvoiceDoc {
  /// Rebuild the entity, re-validating through the value objects.
  fn into_invoice(self, id: Uuid) -> Result<Invoice, InvoiceError> {
    let invoice_number = InvoiceNumber::new(self.invoice_number)?;
    let client_name = ClientName::new(self.client_name)?;

    let line_items = self
      .line_items
      .into_iter()
      .map(|item| {
        let description = ServiceDescription::new(item.description)?;
        let price = Rupiah::new(item.price)?;
        Ok(LineItem::new(description, price))
      })
      .collect::<Result<Vec<_>, InvoiceError>>()?;

    Ok(Invoice {
      id,
      invoice_number,
      client_name,
      invoice_date: self.invoice_date,
      event_date: self.event_date,
      line_items,
      receipt: self.receipt.map(|receipt| Receipt {
        object_path: receipt.object_path,
        download_url: receipt.download_url,
      }),
      created_at: self.created_at,
      updated_at: self.updated_at,
    })
  }
}

pub struct FirestoreInvoiceRepository {
  client: FirestoreClient,
}

impl FirestoreInvoiceRepository {
  pub fn new(client: FirestoreClient) -> Self {
    Self { client }
  }

  fn to_fields(invoice: &Invoice) -> Result<Map<String, Value>, InvoiceError> {
    match serde_json::to_value(InvoiceDoc::from(invoice)) {
      Ok(Value::Object(map)) => Ok(map),
      Ok(other) => Err(InvoiceError::Internal(format!(
        "Invoice serialized to non-object: {}",
        other
      ))),
      Err(e) => Err(InvoiceError::Internal(format!(
        "Failed to serialize invoice: {}",
        e
      ))),
    }
  }

  fn from_document(document: Document) -> Result<Invoice, InvoiceError> {
    let id = Uuid::parse_str(document.doc_id()).map_err(|e| {
      InvoiceError::Repository(format!("Invalid document id '{}': {}", document.doc_id(), e))
    })?;

    let doc: InvoiceDoc = serde_json::from_value(Value::Object(document.fields))
      .map_err(|e| InvoiceError::Repository(format!("Malformed invoice document: {}", e)))?;

    doc.into_invoice(id)
  }
}

#[async_trait]
impl InvoiceRepository for FirestoreInvoiceRepository {
  async fn create(&self, invoice: Invoice) -> Result<Invoice, InvoiceError> {
    let fields = Self::to_fields(&invoice)?;
    let document = self
      .client
      .create_document(COLLECTION, &invoice.id.to_string(), &fields)
      .await
      .map_err(|e| InvoiceError::Repository(e.to_string()))?;

    Self::from_document(document)
  }

  async fn update(&self, invoice: Invoice) -> Result<Invoice, InvoiceError> {
    let fields = Self::to_fields(&invoice)?;
    let document = self
      .client
      .patch_document(COLLECTION, &invoice.id.to_string(), &fields)
      .await
      .map_err(|e| InvoiceError::Repository(e.to_string()))?;

    Self::from_document(document)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Invoice>, InvoiceError> {
    let document = self
      .client
      .get_document(COLLECTION, &id.to_string())
      .await
      .map_err(|e| InvoiceError::Repository(e.to_string()))?;

    document.map(Self::from_document).transpose()
  }

  async fn list(&self) -> Result<Vec<Invoice>, InvoiceError> {
    let documents = self
      .client
      .run_query(COLLECTION, "invoice_date", OrderDirection::Descending)
      .await
      .map_err(|e| InvoiceError::Repository(e.to_string()))?;

    documents.into_iter().map(Self::from_document).collect()
  }

  async fn delete(&self, id: Uuid) -> Result<(), InvoiceError> {
    self
      .client
      .delete_document(COLLECTION, &id.to_string())
      .await
      .map_err(|e| InvoiceError::Repository(e.to_string()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_doc_round_trip_preserves_invoice() {
    let invoice = Invoice::new(
      InvoiceNumber::new("INV-010".to_string()).unwrap(),
      ClientName::new("Sinta".to_string()).unwrap(),
      NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
      Some(NaiveDate::from_ymd_opt(2024, 4, 20).unwrap()),
      vec![LineItem::new(
        ServiceDescription::new("Makeup Prewedding".to_string()).unwrap(),
        Rupiah::new(1_500_000).unwrap(),
      )],
    );

    let fields = FirestoreInvoiceRepository::to_fields(&invoice).unwrap();
    let document = Document {
      name: format!(
        "projects/p/databases/(default)/documents/invoices/{}",
        invoice.id
      ),
      fields,
    };

    let decoded = FirestoreInvoiceRepository::from_document(document).unwrap();
    assert_eq!(decoded, invoice);
  }

  #[test]
  fn test_bad_document_id_is_a_repository_error() {
    let document = Document {
      name: "projects/p/databases/(default)/documents/invoices/not-a-uuid".to_string(),
      fields: Map::new(),
    };
    assert!(matches!(
      FirestoreInvoiceRepository::from_document(document),
      Err(InvoiceError::Repository(_))
    ));
  }
}
