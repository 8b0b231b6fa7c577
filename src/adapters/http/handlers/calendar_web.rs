use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::adapters::http::errors::ApiError;
use crate::adapters::http::routes::BasePath;
use crate::adapters::http::templates::TemplateEngine;
use crate::application::schedule::{
  CreateBookingCommand, CreateBookingUseCase, DeleteBookingCommand, DeleteBookingUseCase,
  ListBookingsUseCase, UpdateBookingCommand, UpdateBookingUseCase,
};
use crate::domain::catalog;

// GET /calendar - Calendar view
pub async fn calendar_page(
  templates: web::Data<TemplateEngine>,
  base_path: web::Data<BasePath>,
  list_bookings_use_case: web::Data<Arc<ListBookingsUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let response = list_bookings_use_case.execute().await?;

  let mut context = tera::Context::new();
  context.insert("title", "Calendar");
  context.insert("base_path", base_path.as_str());
  context.insert("bookings", &response.bookings);
  context.insert("price_list", &catalog::PRICE_LIST);

  let html = templates
    .render("pages/calendar.html.tera", &context)
    .map_err(|e| ApiError::Internal(format!("Template error: {}", e)))?;

  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

#[derive(Debug, Deserialize, Validate)]
pub struct BookingForm {
  #[validate(length(min = 1, max = 255, message = "Client name must be 1-255 characters"))]
  client_name: String,
  #[validate(length(min = 1, max = 500, message = "Service must be 1-500 characters"))]
  service: String,
  event_date: NaiveDate,
  notes: Option<String>,
}

fn see_calendar(base_path: &BasePath) -> HttpResponse {
  HttpResponse::SeeOther()
    .insert_header(("Location", base_path.join("/calendar")))
    .finish()
}

// POST /calendar - Create a booking
pub async fn create_booking_submit(
  form: web::Form<BookingForm>,
  base_path: web::Data<BasePath>,
  create_booking_use_case: web::Data<Arc<CreateBookingUseCase>>,
) -> Result<HttpResponse, ApiError> {
  form.validate()?;
  let form = form.into_inner();

  create_booking_use_case
    .execute(CreateBookingCommand {
      client_name: form.client_name,
      service: form.service,
      event_date: form.event_date,
      notes: form.notes,
    })
    .await?;

  Ok(see_calendar(&base_path))
}

// POST /calendar/{booking_id} - Update a booking
pub async fn update_booking_submit(
  path: web::Path<Uuid>,
  form: web::Form<BookingForm>,
  base_path: web::Data<BasePath>,
  update_booking_use_case: web::Data<Arc<UpdateBookingUseCase>>,
) -> Result<HttpResponse, ApiError> {
  form.validate()?;
  let form = form.into_inner();

  update_booking_use_case
    .execute(UpdateBookingCommand {
      booking_id: path.into_inner(),
      client_name: form.client_name,
      service: form.service,
      event_date: form.event_date,
      notes: form.notes,
    })
    .await?;

  Ok(see_calendar(&base_path))
}

// POST /calendar/{booking_id}/delete - Delete a booking
pub async fn delete_booking_submit(
  path: web::Path<Uuid>,
  base_path: web::Data<BasePath>,
  delete_booking_use_case: web::Data<Arc<DeleteBookingUseCase>>,
) -> Result<HttpResponse, ApiError> {
  delete_booking_use_case
    .execute(DeleteBookingCommand {
      booking_id: path.into_inner(),
    })
    .await?;

  Ok(see_calendar(&base_path))
}
