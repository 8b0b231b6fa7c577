use std::sync::Arc;
use uuid::Uuid;

use crate::domain::invoice::{Invoice, InvoiceError, InvoiceService};

#[derive(Debug)]
pub struct GetInvoiceCommand {
  pub invoice_id: Uuid,
}

pub struct GetInvoiceUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl GetInvoiceUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub async fn execute(&self, command: GetInvoiceCommand) -> Result<Invoice, InvoiceError> {
    self.invoice_service.get_invoice(command.invoice_id).await
  }
}
