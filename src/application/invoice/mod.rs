pub mod attach_receipt;
pub mod create_invoice;
pub mod delete_invoice;
pub mod get_invoice;
pub mod list_invoices;
pub mod update_invoice;

pub use attach_receipt::{AttachReceiptCommand, AttachReceiptResponse, AttachReceiptUseCase};
pub use create_invoice::{
  CreateInvoiceCommand, CreateInvoiceLineItemDto, CreateInvoiceResponse, CreateInvoiceUseCase,
};
pub use delete_invoice::{DeleteInvoiceCommand, DeleteInvoiceUseCase};
pub use get_invoice::{GetInvoiceCommand, GetInvoiceUseCase};
pub use list_invoices::{InvoiceLineItemDto, InvoiceListItemDto, ListInvoicesResponse, ListInvoicesUseCase};
pub use update_invoice::{UpdateInvoiceCommand, UpdateInvoiceResponse, UpdateInvoiceUseCase};
