use async_trait::async_trait;
use uuid::Uuid;

use super::entities::Booking;
use super::errors::ScheduleError;

#[async_trait]
pub trait BookingRepository: Send + Sync {
  async fn create(&self, booking: Booking) -> Result<Booking, ScheduleError>;
  async fn update(&self, booking: Booking) -> Result<Booking, ScheduleError>;
  async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, ScheduleError>;
  /// All bookings, soonest event date first.
  async fn list(&self) -> Result<Vec<Booking>, ScheduleError>;
  async fn delete(&self, id: Uuid) -> Result<(), ScheduleError>;
}
