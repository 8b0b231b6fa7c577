use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::{ClientName, InvoiceNumber, Rupiah, ServiceDescription};

// Invoice Line Item - one service on an invoice, priced in whole Rupiah
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
  pub description: ServiceDescription,
  pub price: Rupiah,
}

impl LineItem {
  pub fn new(description: ServiceDescription, price: Rupiah) -> Self {
    Self { description, price }
  }
}

// Receipt - payment proof stored in the hosted file store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
  /// Object path inside the storage bucket.
  pub object_path: String,
  /// Resolved public download URL.
  pub download_url: String,
}

// Invoice - one issued invoice, backed by a single document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
  pub id: Uuid,
  pub invoice_number: InvoiceNumber,
  pub client_name: ClientName,
  pub invoice_date: NaiveDate,
  /// Date of the event the invoice covers, when known.
  pub event_date: Option<NaiveDate>,
  pub line_items: Vec<LineItem>,
  pub receipt: Option<Receipt>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Invoice {
  pub fn new(
    invoice_number: InvoiceNumber,
    client_name: ClientName,
    invoice_date: NaiveDate,
    event_date: Option<NaiveDate>,
    line_items: Vec<LineItem>,
  ) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      invoice_number,
      client_name,
      invoice_date,
      event_date,
      line_items,
      receipt: None,
      created_at: now,
      updated_at: now,
    }
  }

  pub fn update(
    &mut self,
    client_name: ClientName,
    invoice_date: NaiveDate,
    event_date: Option<NaiveDate>,
    line_items: Vec<LineItem>,
  ) {
    self.client_name = client_name;
    self.invoice_date = invoice_date;
    self.event_date = event_date;
    self.line_items = line_items;
    self.updated_at = Utc::now();
  }

  pub fn attach_receipt(&mut self, receipt: Receipt) {
    self.receipt = Some(receipt);
    self.updated_at = Utc::now();
  }

  /// Sum of all line prices.
  pub fn total(&self) -> Rupiah {
    self
      .line_items
      .iter()
      .fold(Rupiah::zero(), |acc, item| acc.add(item.price))
  }
}
