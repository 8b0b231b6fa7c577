use std::sync::Arc;
use uuid::Uuid;

use crate::domain::schedule::{ScheduleError, ScheduleService};

#[derive(Debug)]
pub struct DeleteBookingCommand {
  pub booking_id: Uuid,
}

pub struct DeleteBookingUseCase {
  schedule_service: Arc<ScheduleService>,
}

impl DeleteBookingUseCase {
  pub fn new(schedule_service: Arc<ScheduleService>) -> Self {
    Self { schedule_service }
  }

  pub async fn execute(&self, command: DeleteBookingCommand) -> Result<(), ScheduleError> {
    self.schedule_service.delete_booking(command.booking_id).await
  }
}
