pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{Invoice, LineItem, Receipt};
pub use errors::InvoiceError;
pub use ports::{InvoiceRepository, ReceiptStorage};
pub use services::{InvoiceDraft, InvoiceService, InvoiceUpdate};
pub use value_objects::{
  ClientName, InvoiceNumber, Rupiah, ServiceDescription, ValueObjectError,
};
