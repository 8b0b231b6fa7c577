use actix_multipart::Multipart;
use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use futures_util::TryStreamExt;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::adapters::http::errors::ApiError;
use crate::adapters::http::print;
use crate::adapters::http::routes::BasePath;
use crate::adapters::http::templates::TemplateEngine;
use crate::application::invoice::{
  AttachReceiptCommand, AttachReceiptUseCase, CreateInvoiceCommand, CreateInvoiceLineItemDto,
  CreateInvoiceUseCase, DeleteInvoiceCommand, DeleteInvoiceUseCase, GetInvoiceCommand,
  GetInvoiceUseCase, ListInvoicesUseCase, UpdateInvoiceCommand, UpdateInvoiceUseCase,
};
use crate::domain::catalog;

// GET / - Invoice view
pub async fn invoices_page(
  templates: web::Data<TemplateEngine>,
  base_path: web::Data<BasePath>,
  list_invoices_use_case: web::Data<Arc<ListInvoicesUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let response = list_invoices_use_case.execute().await?;

  let mut context = tera::Context::new();
  context.insert("title", "Invoices");
  context.insert("base_path", base_path.as_str());
  context.insert("invoices", &response.invoices);
  context.insert("price_list", &catalog::PRICE_LIST);

  let html = templates
    .render("pages/invoices.html.tera", &context)
    .map_err(|e| ApiError::Internal(format!("Template error: {}", e)))?;

  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

#[derive(Debug, Deserialize)]
pub struct InvoiceLineItemForm {
  description: String,
  price: i64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateInvoiceForm {
  #[validate(length(min = 1, max = 100, message = "Invoice number must be 1-100 characters"))]
  invoice_number: String,
  #[validate(length(min = 1, max = 255, message = "Client name must be 1-255 characters"))]
  client_name: String,
  invoice_date: NaiveDate,
  event_date: Option<NaiveDate>,
  line_items: Vec<InvoiceLineItemForm>,
}

// POST /invoices - Create a new invoice
pub async fn create_invoice_submit(
  form: web::Json<CreateInvoiceForm>,
  create_invoice_use_case: web::Data<Arc<CreateInvoiceUseCase>>,
) -> Result<HttpResponse, ApiError> {
  form.validate()?;
  let form = form.into_inner();

  let line_items = form
    .line_items
    .into_iter()
    .map(|item| CreateInvoiceLineItemDto {
      description: item.description,
      price: item.price,
    })
    .collect();

  let response = create_invoice_use_case
    .execute(CreateInvoiceCommand {
      invoice_number: form.invoice_number,
      client_name: form.client_name,
      invoice_date: form.invoice_date,
      event_date: form.event_date,
      line_items,
    })
    .await?;

  Ok(HttpResponse::Created().json(response))
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateInvoiceForm {
  #[validate(length(min = 1, max = 255, message = "Client name must be 1-255 characters"))]
  client_name: String,
  invoice_date: NaiveDate,
  event_date: Option<NaiveDate>,
  line_items: Vec<InvoiceLineItemForm>,
}

// POST /invoices/{invoice_id} - Update an invoice
pub async fn update_invoice_submit(
  path: web::Path<Uuid>,
  form: web::Json<UpdateInvoiceForm>,
  update_invoice_use_case: web::Data<Arc<UpdateInvoiceUseCase>>,
) -> Result<HttpResponse, ApiError> {
  form.validate()?;
  let form = form.into_inner();

  let line_items = form
    .line_items
    .into_iter()
    .map(|item| CreateInvoiceLineItemDto {
      description: item.description,
      price: item.price,
    })
    .collect();

  let response = update_invoice_use_case
    .execute(UpdateInvoiceCommand {
      invoice_id: path.into_inner(),
      client_name: form.client_name,
      invoice_date: form.invoice_date,
      event_date: form.event_date,
      line_items,
    })
    .await?;

  Ok(HttpResponse::Ok().json(response))
}

// POST /invoices/{invoice_id}/delete - Delete an invoice (and its receipt)
pub async fn delete_invoice_submit(
  path: web::Path<Uuid>,
  base_path: web::Data<BasePath>,
  delete_invoice_use_case: web::Data<Arc<DeleteInvoiceUseCase>>,
) -> Result<HttpResponse, ApiError> {
  delete_invoice_use_case
    .execute(DeleteInvoiceCommand {
      invoice_id: path.into_inner(),
    })
    .await?;

  Ok(
    HttpResponse::SeeOther()
      .insert_header(("Location", base_path.join("/")))
      .finish(),
  )
}

// POST /invoices/{invoice_id}/receipt - Upload a payment receipt image
pub async fn upload_receipt(
  path: web::Path<Uuid>,
  mut payload: Multipart,
  attach_receipt_use_case: web::Data<Arc<AttachReceiptUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let invoice_id = path.into_inner();

  while let Some(mut field) = payload
    .try_next()
    .await
    .map_err(|e| ApiError::Validation(format!("Malformed upload: {}", e)))?
  {
    let Some(disposition) = field.content_disposition() else {
      continue;
    };
    if disposition.get_name() != Some("receipt") {
      continue;
    }

    let file_name = disposition
      .get_filename()
      .unwrap_or("receipt")
      .to_string();
    let content_type = field
      .content_type()
      .map(|mime| mime.to_string())
      .unwrap_or_else(|| "application/octet-stream".to_string());

    let mut bytes = Vec::new();
    while let Some(chunk) = field
      .try_next()
      .await
      .map_err(|e| ApiError::Validation(format!("Malformed upload: {}", e)))?
    {
      bytes.extend_from_slice(&chunk);
    }

    let response = attach_receipt_use_case
      .execute(AttachReceiptCommand {
        invoice_id,
        file_name,
        content_type,
        bytes,
      })
      .await?;

    return Ok(HttpResponse::Ok().json(response));
  }

  Err(ApiError::Validation("Missing receipt file field".to_string()))
}

// GET /invoices/{invoice_id}/print - Printable invoice document
pub async fn invoice_print_page(
  path: web::Path<Uuid>,
  get_invoice_use_case: web::Data<Arc<GetInvoiceUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let invoice = get_invoice_use_case
    .execute(GetInvoiceCommand {
      invoice_id: path.into_inner(),
    })
    .await?;

  Ok(
    HttpResponse::Ok()
      .content_type("text/html")
      .body(print::build_invoice_document(&invoice)),
  )
}
