use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::invoice::value_objects::{ClientName, ServiceDescription};
use crate::domain::schedule::{BookingData, ScheduleError, ScheduleService};

#[derive(Debug, Deserialize)]
pub struct CreateBookingCommand {
  pub client_name: String,
  pub service: String,
  pub event_date: NaiveDate,
  pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateBookingResponse {
  pub booking_id: Uuid,
  pub created_at: DateTime<Utc>,
}

pub struct CreateBookingUseCase {
  schedule_service: Arc<ScheduleService>,
}

impl CreateBookingUseCase {
  pub fn new(schedule_service: Arc<ScheduleService>) -> Self {
    Self { schedule_service }
  }

  pub async fn execute(
    &self,
    command: CreateBookingCommand,
  ) -> Result<CreateBookingResponse, ScheduleError> {
    let client_name = ClientName::new(command.client_name)?;
    let service = ServiceDescription::new(command.service)?;
    let notes = command.notes.filter(|n| !n.trim().is_empty());

    let booking = self
      .schedule_service
      .create_booking(BookingData {
        client_name,
        service,
        event_date: command.event_date,
        notes,
      })
      .await?;

    Ok(CreateBookingResponse {
      booking_id: booking.id,
      created_at: booking.created_at,
    })
  }
}
