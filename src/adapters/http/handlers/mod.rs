pub mod calendar_web;
pub mod invoices_web;
