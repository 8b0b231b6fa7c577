pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;

pub use entities::Booking;
pub use errors::ScheduleError;
pub use ports::BookingRepository;
pub use services::{BookingData, ScheduleService};
