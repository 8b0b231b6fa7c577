use actix_web::{App, test};
use async_trait::async_trait;
use serde_json::json;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use glambill::adapters::http::{
  BasePath, TemplateEngine, WebRouteDependencies, configure_web_routes,
};
use glambill::application::invoice::{
  AttachReceiptUseCase, CreateInvoiceUseCase, DeleteInvoiceUseCase, GetInvoiceUseCase,
  ListInvoicesUseCase, UpdateInvoiceUseCase,
};
use glambill::application::schedule::{
  CreateBookingUseCase, DeleteBookingUseCase, ListBookingsUseCase, UpdateBookingUseCase,
};
use glambill::domain::invoice::{
  Invoice, InvoiceError, InvoiceRepository, InvoiceService, Receipt, ReceiptStorage,
};
use glambill::domain::schedule::{Booking, BookingRepository, ScheduleError, ScheduleService};

#[derive(Default)]
struct InMemoryInvoiceRepository {
  invoices: Mutex<Vec<Invoice>>,
}

#[async_trait]
impl InvoiceRepository for InMemoryInvoiceRepository {
  async fn create(&self, invoice: Invoice) -> Result<Invoice, InvoiceError> {
    self.invoices.lock().unwrap().push(invoice.clone());
    Ok(invoice)
  }

  async fn update(&self, invoice: Invoice) -> Result<Invoice, InvoiceError> {
    let mut invoices = self.invoices.lock().unwrap();
    let existing = invoices
      .iter_mut()
      .find(|i| i.id == invoice.id)
      .ok_or(InvoiceError::NotFound(invoice.id))?;
    *existing = invoice.clone();
    Ok(invoice)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Invoice>, InvoiceError> {
    Ok(self.invoices.lock().unwrap().iter().find(|i| i.id == id).cloned())
  }

  async fn list(&self) -> Result<Vec<Invoice>, InvoiceError> {
    let mut invoices = self.invoices.lock().unwrap().clone();
    invoices.sort_by(|a, b| b.invoice_date.cmp(&a.invoice_date));
    Ok(invoices)
  }

  async fn delete(&self, id: Uuid) -> Result<(), InvoiceError> {
    self.invoices.lock().unwrap().retain(|i| i.id != id);
    Ok(())
  }
}

#[derive(Default)]
struct InMemoryReceiptStorage {
  deleted: Mutex<Vec<String>>,
}

#[async_trait]
impl ReceiptStorage for InMemoryReceiptStorage {
  async fn upload(
    &self,
    object_path: &str,
    _bytes: Vec<u8>,
    _content_type: &str,
  ) -> Result<Receipt, InvoiceError> {
    Ok(Receipt {
      object_path: object_path.to_string(),
      download_url: format!("mem://{}", object_path),
    })
  }

  async fn delete(&self, object_path: &str) -> Result<(), InvoiceError> {
    self.deleted.lock().unwrap().push(object_path.to_string());
    Ok(())
  }
}

#[derive(Default)]
struct InMemoryBookingRepository {
  bookings: Mutex<Vec<Booking>>,
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
  async fn create(&self, booking: Booking) -> Result<Booking, ScheduleError> {
    self.bookings.lock().unwrap().push(booking.clone());
    Ok(booking)
  }

  async fn update(&self, booking: Booking) -> Result<Booking, ScheduleError> {
    let mut bookings = self.bookings.lock().unwrap();
    let existing = bookings
      .iter_mut()
      .find(|b| b.id == booking.id)
      .ok_or(ScheduleError::NotFound(booking.id))?;
    *existing = booking.clone();
    Ok(booking)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, ScheduleError> {
    Ok(self.bookings.lock().unwrap().iter().find(|b| b.id == id).cloned())
  }

  async fn list(&self) -> Result<Vec<Booking>, ScheduleError> {
    let mut bookings = self.bookings.lock().unwrap().clone();
    bookings.sort_by(|a, b| a.event_date.cmp(&b.event_date));
    Ok(bookings)
  }

  async fn delete(&self, id: Uuid) -> Result<(), ScheduleError> {
    self.bookings.lock().unwrap().retain(|b| b.id != id);
    Ok(())
  }
}

fn dependencies() -> WebRouteDependencies {
  let invoice_repo = Arc::new(InMemoryInvoiceRepository::default());
  let receipt_storage = Arc::new(InMemoryReceiptStorage::default());
  let booking_repo = Arc::new(InMemoryBookingRepository::default());

  let invoice_service = Arc::new(InvoiceService::new(invoice_repo, receipt_storage));
  let schedule_service = Arc::new(ScheduleService::new(booking_repo));

  WebRouteDependencies {
    templates: TemplateEngine::new().expect("templates load from the crate root"),
    base_path: BasePath::new(""),
    list_invoices_use_case: Arc::new(ListInvoicesUseCase::new(invoice_service.clone())),
    create_invoice_use_case: Arc::new(CreateInvoiceUseCase::new(invoice_service.clone())),
    update_invoice_use_case: Arc::new(UpdateInvoiceUseCase::new(invoice_service.clone())),
    delete_invoice_use_case: Arc::new(DeleteInvoiceUseCase::new(invoice_service.clone())),
    get_invoice_use_case: Arc::new(GetInvoiceUseCase::new(invoice_service.clone())),
    attach_receipt_use_case: Arc::new(AttachReceiptUseCase::new(invoice_service)),
    list_bookings_use_case: Arc::new(ListBookingsUseCase::new(schedule_service.clone())),
    create_booking_use_case: Arc::new(CreateBookingUseCase::new(schedule_service.clone())),
    update_booking_use_case: Arc::new(UpdateBookingUseCase::new(schedule_service.clone())),
    delete_booking_use_case: Arc::new(DeleteBookingUseCase::new(schedule_service)),
  }
}

macro_rules! test_app {
  () => {
    test::init_service(
      App::new().configure(|cfg| configure_web_routes(cfg, dependencies())),
    )
    .await
  };
}

#[actix_web::test]
async fn test_root_resolves_to_invoice_view() {
  let app = test_app!();

  let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
  assert!(resp.status().is_success());

  let body = test::read_body(resp).await;
  let html = String::from_utf8(body.to_vec()).unwrap();
  assert!(html.contains("<h1>Invoices</h1>"));
}

#[actix_web::test]
async fn test_calendar_resolves_to_calendar_view() {
  let app = test_app!();

  let resp = test::call_service(
    &app,
    test::TestRequest::get().uri("/calendar").to_request(),
  )
  .await;
  assert!(resp.status().is_success());

  let body = test::read_body(resp).await;
  let html = String::from_utf8(body.to_vec()).unwrap();
  assert!(html.contains("<h1>Calendar</h1>"));
}

#[actix_web::test]
async fn test_no_other_page_is_defined() {
  let app = test_app!();

  let resp = test::call_service(
    &app,
    test::TestRequest::get().uri("/reports").to_request(),
  )
  .await;
  assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_create_invoice_and_render_listing() {
  let app = test_app!();

  let resp = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/invoices")
      .set_json(json!({
        "invoice_number": "INV-001",
        "client_name": "Sinta",
        "invoice_date": "2024-03-05",
        "event_date": "2024-04-20",
        "line_items": [
          { "description": "Makeup Party / Graduation", "price": 1_000_000 },
          { "description": "Makeup Trial", "price": 0 },
        ],
      }))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);

  let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
  let body = test::read_body(resp).await;
  let html = String::from_utf8(body.to_vec()).unwrap();

  assert!(html.contains("INV-001"));
  assert!(html.contains("05/03/2024"));
  assert!(html.contains("20 April 2024"));
  assert!(html.contains("Rp 1.000.000,-"));
}

#[actix_web::test]
async fn test_create_invoice_without_lines_is_rejected() {
  let app = test_app!();

  let resp = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/invoices")
      .set_json(json!({
        "invoice_number": "INV-002",
        "client_name": "Sinta",
        "invoice_date": "2024-03-05",
        "event_date": null,
        "line_items": [],
      }))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_booking_form_roundtrip() {
  let app = test_app!();

  let resp = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/calendar")
      .set_form([
        ("client_name", "Dewi"),
        ("service", "Makeup Engagement"),
        ("event_date", "2024-05-11"),
        ("notes", "Morning slot"),
      ])
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), actix_web::http::StatusCode::SEE_OTHER);
  assert_eq!(
    resp.headers().get("location").unwrap().to_str().unwrap(),
    "/calendar"
  );

  let resp = test::call_service(
    &app,
    test::TestRequest::get().uri("/calendar").to_request(),
  )
  .await;
  let body = test::read_body(resp).await;
  let html = String::from_utf8(body.to_vec()).unwrap();

  assert!(html.contains("Dewi"));
  assert!(html.contains("11 May 2024"));
  assert!(html.contains("Morning slot"));
}

#[actix_web::test]
async fn test_booking_with_empty_client_is_rejected() {
  let app = test_app!();

  let resp = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/calendar")
      .set_form([
        ("client_name", ""),
        ("service", "Makeup Engagement"),
        ("event_date", "2024-05-11"),
      ])
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_print_view_escapes_client_name() {
  let app = test_app!();

  let resp = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/invoices")
      .set_json(json!({
        "invoice_number": "INV-003",
        "client_name": "Ana & Co",
        "invoice_date": "2024-03-05",
        "event_date": null,
        "line_items": [{ "description": "Makeup Prewedding", "price": 1_500_000 }],
      }))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);

  let created: serde_json::Value = test::read_body_json(resp).await;
  let invoice_id = created["invoice_id"].as_str().unwrap();

  let resp = test::call_service(
    &app,
    test::TestRequest::get()
      .uri(&format!("/invoices/{}/print", invoice_id))
      .to_request(),
  )
  .await;
  assert!(resp.status().is_success());

  let body = test::read_body(resp).await;
  let html = String::from_utf8(body.to_vec()).unwrap();
  assert!(html.contains("Ana &amp; Co"));
  assert!(html.contains("Rp 1.500.000,-"));
}
