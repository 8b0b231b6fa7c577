mod booking_repository;
mod client;
mod document;
mod invoice_repository;
mod receipt_storage;
mod storage;

pub use booking_repository::FirestoreBookingRepository;
pub use client::{Document, FirebaseError, FirestoreClient, OrderDirection};
pub use invoice_repository::FirestoreInvoiceRepository;
pub use receipt_storage::FirebaseReceiptStorage;
pub use storage::{FirebaseStorageClient, StorageObject};
