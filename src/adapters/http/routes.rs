use actix_web::web;
use std::sync::Arc;

use crate::application::invoice::{
  AttachReceiptUseCase, CreateInvoiceUseCase, DeleteInvoiceUseCase, GetInvoiceUseCase,
  ListInvoicesUseCase, UpdateInvoiceUseCase,
};
use crate::application::schedule::{
  CreateBookingUseCase, DeleteBookingUseCase, ListBookingsUseCase, UpdateBookingUseCase,
};

use super::handlers::{calendar_web, invoices_web};
use super::templates::TemplateEngine;

/// Deploy-time URL prefix pages prepend to links and redirects.
///
/// Empty for root deployment; "/glambill" when served from a sub-directory.
#[derive(Debug, Clone)]
pub struct BasePath(String);

impl BasePath {
  pub fn new(raw: &str) -> Self {
    Self(raw.trim_end_matches('/').to_string())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn join(&self, path: &str) -> String {
    format!("{}{}", self.0, path)
  }
}

/// Everything the page handlers need, wired once in main.
pub struct WebRouteDependencies {
  pub templates: TemplateEngine,
  pub base_path: BasePath,
  pub list_invoices_use_case: Arc<ListInvoicesUseCase>,
  pub create_invoice_use_case: Arc<CreateInvoiceUseCase>,
  pub update_invoice_use_case: Arc<UpdateInvoiceUseCase>,
  pub delete_invoice_use_case: Arc<DeleteInvoiceUseCase>,
  pub get_invoice_use_case: Arc<GetInvoiceUseCase>,
  pub attach_receipt_use_case: Arc<AttachReceiptUseCase>,
  pub list_bookings_use_case: Arc<ListBookingsUseCase>,
  pub create_booking_use_case: Arc<CreateBookingUseCase>,
  pub update_booking_use_case: Arc<UpdateBookingUseCase>,
  pub delete_booking_use_case: Arc<DeleteBookingUseCase>,
}

/// Configure the two page views and their mutation endpoints
///
/// # Routes
///
/// - GET  /                              - Invoice view
/// - POST /invoices                      - Create invoice
/// - POST /invoices/{id}                 - Update invoice
/// - POST /invoices/{id}/delete          - Delete invoice (and receipt)
/// - POST /invoices/{id}/receipt         - Upload receipt image
/// - GET  /invoices/{id}/print           - Printable invoice document
/// - GET  /calendar                      - Calendar view
/// - POST /calendar                      - Create booking
/// - POST /calendar/{id}                 - Update booking
/// - POST /calendar/{id}/delete          - Delete booking
pub fn configure_web_routes(cfg: &mut web::ServiceConfig, deps: WebRouteDependencies) {
  cfg
    .app_data(web::Data::new(deps.templates))
    .app_data(web::Data::new(deps.base_path))
    .app_data(web::Data::new(deps.list_invoices_use_case))
    .app_data(web::Data::new(deps.create_invoice_use_case))
    .app_data(web::Data::new(deps.update_invoice_use_case))
    .app_data(web::Data::new(deps.delete_invoice_use_case))
    .app_data(web::Data::new(deps.get_invoice_use_case))
    .app_data(web::Data::new(deps.attach_receipt_use_case))
    .app_data(web::Data::new(deps.list_bookings_use_case))
    .app_data(web::Data::new(deps.create_booking_use_case))
    .app_data(web::Data::new(deps.update_booking_use_case))
    .app_data(web::Data::new(deps.delete_booking_use_case))
    .route("/", web::get().to(invoices_web::invoices_page))
    .service(
      web::scope("/invoices")
        .route("", web::post().to(invoices_web::create_invoice_submit))
        .route("/{invoice_id}", web::post().to(invoices_web::update_invoice_submit))
        .route(
          "/{invoice_id}/delete",
          web::post().to(invoices_web::delete_invoice_submit),
        )
        .route(
          "/{invoice_id}/receipt",
          web::post().to(invoices_web::upload_receipt),
        )
        .route(
          "/{invoice_id}/print",
          web::get().to(invoices_web::invoice_print_page),
        ),
    )
    .service(
      web::scope("/calendar")
        .route("", web::get().to(calendar_web::calendar_page))
        .route("", web::post().to(calendar_web::create_booking_submit))
        .route("/{booking_id}", web::post().to(calendar_web::update_booking_submit))
        .route(
          "/{booking_id}/delete",
          web::post().to(calendar_web::delete_booking_submit),
        ),
    );
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_base_path_normalization() {
    assert_eq!(BasePath::new("").as_str(), "");
    assert_eq!(BasePath::new("/").as_str(), "");
    assert_eq!(BasePath::new("/glambill/").as_str(), "/glambill");
    assert_eq!(BasePath::new("/glambill").join("/calendar"), "/glambill/calendar");
    assert_eq!(BasePath::new("").join("/calendar"), "/calendar");
  }
}
