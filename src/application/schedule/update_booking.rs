use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::invoice::value_objects::{ClientName, ServiceDescription};
use crate::domain::schedule::{BookingData, ScheduleError, ScheduleService};

#[derive(Debug, Deserialize)]
pub struct UpdateBookingCommand {
  pub booking_id: Uuid,
  pub client_name: String,
  pub service: String,
  pub event_date: NaiveDate,
  pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UpdateBookingResponse {
  pub booking_id: Uuid,
  pub updated_at: DateTime<Utc>,
}

pub struct UpdateBookingUseCase {
  schedule_service: Arc<ScheduleService>,
}

impl UpdateBookingUseCase {
  pub fn new(schedule_service: Arc<ScheduleService>) -> Self {
    Self { schedule_service }
  }

  pub async fn execute(
    &self,
    command: UpdateBookingCommand,
  ) -> Result<UpdateBookingResponse, ScheduleError> {
    let client_name = ClientName::new(command.client_name)?;
    let service = ServiceDescription::new(command.service)?;
    let notes = command.notes.filter(|n| !n.trim().is_empty());

    let booking = self
      .schedule_service
      .update_booking(
        command.booking_id,
        BookingData {
          client_name,
          service,
          event_date: command.event_date,
          notes,
        },
      )
      .await?;

    Ok(UpdateBookingResponse {
      booking_id: booking.id,
      updated_at: booking.updated_at,
    })
  }
}
