use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::invoice::value_objects::{ClientName, ServiceDescription};

// Booking - one calendar entry for a booked client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
  pub id: Uuid,
  pub client_name: ClientName,
  pub service: ServiceDescription,
  pub event_date: NaiveDate,
  pub notes: Option<String>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Booking {
  pub fn new(
    client_name: ClientName,
    service: ServiceDescription,
    event_date: NaiveDate,
    notes: Option<String>,
  ) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      client_name,
      service,
      event_date,
      notes,
      created_at: now,
      updated_at: now,
    }
  }

  pub fn update(
    &mut self,
    client_name: ClientName,
    service: ServiceDescription,
    event_date: NaiveDate,
    notes: Option<String>,
  ) {
    self.client_name = client_name;
    self.service = service;
    self.event_date = event_date;
    self.notes = notes;
    self.updated_at = Utc::now();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_booking() -> Booking {
    Booking::new(
      ClientName::new("Sinta".to_string()).unwrap(),
      ServiceDescription::new("Makeup Wedding Full Day".to_string()).unwrap(),
      NaiveDate::from_ymd_opt(2024, 4, 20).unwrap(),
      Some("Venue in Kemang, call ahead".to_string()),
    )
  }

  #[test]
  fn test_booking_creation() {
    let booking = sample_booking();
    assert_eq!(booking.client_name.value(), "Sinta");
    assert_eq!(booking.created_at, booking.updated_at);
  }

  #[test]
  fn test_booking_update() {
    let mut booking = sample_booking();
    booking.update(
      ClientName::new("Sinta".to_string()).unwrap(),
      ServiceDescription::new("Makeup Wedding Half Day".to_string()).unwrap(),
      NaiveDate::from_ymd_opt(2024, 4, 21).unwrap(),
      None,
    );
    assert_eq!(booking.service.value(), "Makeup Wedding Half Day");
    assert_eq!(
      booking.event_date,
      NaiveDate::from_ymd_opt(2024, 4, 21).unwrap()
    );
    assert!(booking.notes.is_none());
  }
}
