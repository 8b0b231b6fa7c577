use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::client::{Document, FirestoreClient, OrderDirection};
use crate::domain::invoice::value_objects::{ClientName, ServiceDescription};
use crate::domain::schedule::{Booking, BookingRepository, ScheduleError};

const COLLECTION: &str = "bookings";

/// Plain-JSON shape of a booking document.
#[derive(Debug, Serialize, Deserialize)]
struct BookingDoc {
  client_name: String,
  service: String,
  event_date: NaiveDate,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  notes: Option<String>,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl From<&Booking> for BookingDoc {
  fn from(booking: &Booking) -> Self {
    Self {
      client_name: booking.client_name.value().to_string(),
      service: booking.service.value().to_string(),
      event_date: booking.event_date,
      notes: booking.notes.clone(),
      created_at: booking.created_at,
      updated_at: booking.updated_at,
    }
  }
}

impl BookingDoc {
  fn into_booking(self, id: Uuid) -> Result<Booking, ScheduleError> {
    Ok(Booking {
      id,
      client_name: ClientName::new(self.client_name)?,
      service: ServiceDescription::new(self.service)?,
      event_date: self.event_date,
      notes: self.notes,
      created_at: self.created_at,
      updated_at: self.updated_at,
    })
  }
}

pub struct FirestoreBookingRepository {
  client: FirestoreClient,
}

impl FirestoreBookingRepository {
  pub fn new(client: FirestoreClient) -> Self {
    Self { client }
  }

  fn to_fields(booking: &Booking) -> Result<Map<String, Value>, ScheduleError> {
    match serde_json::to_value(BookingDoc::from(booking)) {
      Ok(Value::Object(map)) => Ok(map),
      Ok(other) => Err(ScheduleError::Internal(format!(
        "Booking serialized to non-object: {}",
        other
      ))),
      Err(e) => Err(ScheduleError::Internal(format!(
        "Failed to serialize booking: {}",
        e
      ))),
    }
  }

  fn from_document(document: Document) -> Result<Booking, ScheduleError> {
    let id = Uuid::parse_str(document.doc_id()).map_err(|e| {
      ScheduleError::Repository(format!("Invalid document id '{}': {}", document.doc_id(), e))
    })?;

    let doc: BookingDoc = serde_json::from_value(Value::Object(document.fields))
      .map_err(|e| ScheduleError::Repository(format!("Malformed booking document: {}", e)))?;

    doc.into_booking(id)
  }
}

#[async_trait]
impl BookingRepository for FirestoreBookingRepository {
  async fn create(&self, booking: Booking) -> Result<Booking, ScheduleError> {
    let fields = Self::to_fields(&booking)?;
    let document = self
      .client
      .create_document(COLLECTION, &booking.id.to_string(), &fields)
      .await
      .map_err(|e| ScheduleError::Repository(e.to_string()))?;

    Self::from_document(document)
  }

  async fn update(&self, booking: Booking) -> Result<Booking, ScheduleError> {
    let fields = Self::to_fields(&booking)?;
    let document = self
      .client
      .patch_document(COLLECTION, &booking.id.to_string(), &fields)
      .await
      .map_err(|e| ScheduleError::Repository(e.to_string()))?;

    Self::from_document(document)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, ScheduleError> {
    let document = self
      .client
      .get_document(COLLECTION, &id.to_string())
      .await
      .map_err(|e| ScheduleError::Repository(e.to_string()))?;

    document.map(Self::from_document).transpose()
  }

  async fn list(&self) -> Result<Vec<Booking>, ScheduleError> {
    let documents = self
      .client
      .run_query(COLLECTION, "event_date", OrderDirection::Ascending)
      .await
      .map_err(|e| ScheduleError::Repository(e.to_string()))?;

    documents.into_iter().map(Self::from_document).collect()
  }

  async fn delete(&self, id: Uuid) -> Result<(), ScheduleError> {
    self
      .client
      .delete_document(COLLECTION, &id.to_string())
      .await
      .map_err(|e| ScheduleError::Repository(e.to_string()))
  }
}
