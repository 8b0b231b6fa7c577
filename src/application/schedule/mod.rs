pub mod create_booking;
pub mod delete_booking;
pub mod list_bookings;
pub mod update_booking;

pub use create_booking::{CreateBookingCommand, CreateBookingResponse, CreateBookingUseCase};
pub use delete_booking::{DeleteBookingCommand, DeleteBookingUseCase};
pub use list_bookings::{BookingDto, ListBookingsResponse, ListBookingsUseCase};
pub use update_booking::{UpdateBookingCommand, UpdateBookingResponse, UpdateBookingUseCase};
