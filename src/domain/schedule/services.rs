use chrono::NaiveDate;
use std::sync::Arc;
use uuid::Uuid;

use super::entities::Booking;
use super::errors::ScheduleError;
use super::ports::BookingRepository;
use crate::domain::invoice::value_objects::{ClientName, ServiceDescription};

/// Booking data, already validated into value objects.
pub struct BookingData {
  pub client_name: ClientName,
  pub service: ServiceDescription,
  pub event_date: NaiveDate,
  pub notes: Option<String>,
}

pub struct ScheduleService {
  booking_repo: Arc<dyn BookingRepository>,
}

impl ScheduleService {
  pub fn new(booking_repo: Arc<dyn BookingRepository>) -> Self {
    Self { booking_repo }
  }

  pub async fn create_booking(&self, data: BookingData) -> Result<Booking, ScheduleError> {
    let booking = Booking::new(data.client_name, data.service, data.event_date, data.notes);
    self.booking_repo.create(booking).await
  }

  pub async fn update_booking(
    &self,
    booking_id: Uuid,
    data: BookingData,
  ) -> Result<Booking, ScheduleError> {
    let mut booking = self.get_booking(booking_id).await?;
    booking.update(data.client_name, data.service, data.event_date, data.notes);
    self.booking_repo.update(booking).await
  }

  pub async fn get_booking(&self, booking_id: Uuid) -> Result<Booking, ScheduleError> {
    self
      .booking_repo
      .find_by_id(booking_id)
      .await?
      .ok_or(ScheduleError::NotFound(booking_id))
  }

  pub async fn list_bookings(&self) -> Result<Vec<Booking>, ScheduleError> {
    self.booking_repo.list().await
  }

  pub async fn delete_booking(&self, booking_id: Uuid) -> Result<(), ScheduleError> {
    // Verify it exists so callers get a clean not-found.
    self.get_booking(booking_id).await?;
    self.booking_repo.delete(booking_id).await
  }
}
