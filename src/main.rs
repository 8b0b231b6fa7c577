use actix_files as fs;
use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use glambill::{
  adapters::http::{
    BasePath, RequestIdMiddleware, TemplateEngine, WebRouteDependencies, configure_web_routes,
  },
  application::invoice::{
    AttachReceiptUseCase, CreateInvoiceUseCase, DeleteInvoiceUseCase, GetInvoiceUseCase,
    ListInvoicesUseCase, UpdateInvoiceUseCase,
  },
  application::schedule::{
    CreateBookingUseCase, DeleteBookingUseCase, ListBookingsUseCase, UpdateBookingUseCase,
  },
  domain::invoice::InvoiceService,
  domain::schedule::ScheduleService,
  infrastructure::{
    config::Config,
    firebase::{
      FirebaseReceiptStorage, FirebaseStorageClient, FirestoreBookingRepository, FirestoreClient,
      FirestoreInvoiceRepository,
    },
  },
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Initialize tracing subscriber for logging
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "glambill=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting glambill");

  // Load configuration
  let config = Config::load().context("Failed to load configuration")?;
  tracing::info!(
    "Configuration loaded for Firebase project {}",
    config.firebase.project_id
  );

  // Hosted backend handles live for the whole process; no teardown.
  let firestore = FirestoreClient::new(&config.firebase);
  let storage = FirebaseStorageClient::new(&config.firebase);
  if let Some(emulator) = &config.firebase.emulator_host {
    tracing::warn!("Using Firebase emulator at {}", emulator);
  }

  // Initialize repositories and storage adapters
  let invoice_repo = Arc::new(FirestoreInvoiceRepository::new(firestore.clone()));
  let booking_repo = Arc::new(FirestoreBookingRepository::new(firestore));
  let receipt_storage = Arc::new(FirebaseReceiptStorage::new(storage));

  // Initialize domain services
  let invoice_service = Arc::new(InvoiceService::new(invoice_repo, receipt_storage));
  let schedule_service = Arc::new(ScheduleService::new(booking_repo));

  // Initialize invoice use cases
  let list_invoices_use_case = Arc::new(ListInvoicesUseCase::new(invoice_service.clone()));
  let create_invoice_use_case = Arc::new(CreateInvoiceUseCase::new(invoice_service.clone()));
  let update_invoice_use_case = Arc::new(UpdateInvoiceUseCase::new(invoice_service.clone()));
  let delete_invoice_use_case = Arc::new(DeleteInvoiceUseCase::new(invoice_service.clone()));
  let get_invoice_use_case = Arc::new(GetInvoiceUseCase::new(invoice_service.clone()));
  let attach_receipt_use_case = Arc::new(AttachReceiptUseCase::new(invoice_service.clone()));

  // Initialize booking use cases
  let list_bookings_use_case = Arc::new(ListBookingsUseCase::new(schedule_service.clone()));
  let create_booking_use_case = Arc::new(CreateBookingUseCase::new(schedule_service.clone()));
  let update_booking_use_case = Arc::new(UpdateBookingUseCase::new(schedule_service.clone()));
  let delete_booking_use_case = Arc::new(DeleteBookingUseCase::new(schedule_service.clone()));

  // Initialize template engine
  let templates = TemplateEngine::new().context("Failed to initialize template engine")?;
  tracing::info!("Template engine initialized");

  let base_path = BasePath::new(config.server.scope_path());
  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!(
    "Starting HTTP server on {}:{}{}",
    server_host,
    server_port,
    base_path.as_str()
  );

  // Create and start the HTTP server
  HttpServer::new(move || {
    App::new()
      // Add request ID middleware
      .wrap(RequestIdMiddleware::new())
      // Add logging middleware
      .wrap(Logger::default())
      // Page views and mutation endpoints under the deploy base path
      .service(
        web::scope(base_path.as_str())
          .configure(|cfg| {
            configure_web_routes(
              cfg,
              WebRouteDependencies {
                templates: templates.clone(),
                base_path: base_path.clone(),
                list_invoices_use_case: list_invoices_use_case.clone(),
                create_invoice_use_case: create_invoice_use_case.clone(),
                update_invoice_use_case: update_invoice_use_case.clone(),
                delete_invoice_use_case: delete_invoice_use_case.clone(),
                get_invoice_use_case: get_invoice_use_case.clone(),
                attach_receipt_use_case: attach_receipt_use_case.clone(),
                list_bookings_use_case: list_bookings_use_case.clone(),
                create_booking_use_case: create_booking_use_case.clone(),
                update_booking_use_case: update_booking_use_case.clone(),
                delete_booking_use_case: delete_booking_use_case.clone(),
              },
            )
          })
          // Static files
          .service(fs::Files::new("/static", "./static")),
      )
      // Health check endpoint
      .route("/health", web::get().to(health_check))
  })
  .bind((server_host.as_str(), server_port))?
  .run()
  .await?;

  Ok(())
}

/// Health check endpoint
async fn health_check() -> &'static str {
  "OK"
}
