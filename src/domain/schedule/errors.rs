use thiserror::Error;
use uuid::Uuid;

use crate::domain::invoice::value_objects::ValueObjectError;

#[derive(Debug, Error)]
pub enum ScheduleError {
  #[error("Validation error: {0}")]
  Validation(#[from] ValueObjectError),

  #[error("Booking not found: {0}")]
  NotFound(Uuid),

  #[error("Repository error: {0}")]
  Repository(String),

  #[error("Internal error: {0}")]
  Internal(String),
}
