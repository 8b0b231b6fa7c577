use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::formatting;
use crate::domain::schedule::{Booking, ScheduleError, ScheduleService};

#[derive(Debug, Serialize)]
pub struct BookingDto {
  pub id: Uuid,
  pub client_name: String,
  pub service: String,
  pub event_date: NaiveDate,
  pub event_date_display: String,
  pub notes: Option<String>,
}

impl From<Booking> for BookingDto {
  fn from(booking: Booking) -> Self {
    Self {
      id: booking.id,
      client_name: booking.client_name.into_inner(),
      service: booking.service.value().to_string(),
      event_date: booking.event_date,
      event_date_display: formatting::long_date(booking.event_date),
      notes: booking.notes,
    }
  }
}

#[derive(Debug, Serialize)]
pub struct ListBookingsResponse {
  pub bookings: Vec<BookingDto>,
}

pub struct ListBookingsUseCase {
  schedule_service: Arc<ScheduleService>,
}

impl ListBookingsUseCase {
  pub fn new(schedule_service: Arc<ScheduleService>) -> Self {
    Self { schedule_service }
  }

  pub async fn execute(&self) -> Result<ListBookingsResponse, ScheduleError> {
    let bookings = self.schedule_service.list_bookings().await?;

    Ok(ListBookingsResponse {
      bookings: bookings.into_iter().map(BookingDto::from).collect(),
    })
  }
}
