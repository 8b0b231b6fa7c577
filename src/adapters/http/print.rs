use crate::domain::formatting::{dmy, escape_html, long_date, rupiah};
use crate::domain::invoice::Invoice;

/// Build the standalone printable document for an invoice.
///
/// Assembled by hand rather than through the template engine so the result
/// is a complete, self-contained page the browser can print or save as-is.
/// All user-entered text goes through the fixed entity table.
pub fn build_invoice_document(invoice: &Invoice) -> String {
  let mut rows = String::new();
  for item in &invoice.line_items {
    rows.push_str(&format!(
      "      <tr><td>{}</td><td class=\"amount\">{}</td></tr>\n",
      escape_html(item.description.value()),
      rupiah(Some(item.price.amount())),
    ));
  }

  let event_line = match invoice.event_date {
    Some(date) => format!(
      "    <p class=\"event\">Event date: {}</p>\n",
      long_date(date)
    ),
    None => String::new(),
  };

  format!(
    "<!DOCTYPE html>\n\
     <html lang=\"en\">\n\
     <head>\n\
     <meta charset=\"utf-8\">\n\
     <title>Invoice {number}</title>\n\
     <style>\n\
     body {{ font-family: Georgia, serif; margin: 2rem auto; max-width: 640px; }}\n\
     table {{ width: 100%; border-collapse: collapse; }}\n\
     td, th {{ padding: .4rem 0; border-bottom: 1px solid #ddd; }}\n\
     .amount {{ text-align: right; white-space: nowrap; }}\n\
     .total td {{ font-weight: bold; border-bottom: none; }}\n\
     </style>\n\
     </head>\n\
     <body>\n\
     <h1>Invoice {number}</h1>\n\
     <p>Billed to: {client}</p>\n\
     <p>Invoice date: {date}</p>\n\
     {event}\
     <table>\n\
     <thead><tr><th>Service</th><th class=\"amount\">Price</th></tr></thead>\n\
     <tbody>\n\
     {rows}\
     <tr class=\"total\"><td>Total</td><td class=\"amount\">{total}</td></tr>\n\
     </tbody>\n\
     </table>\n\
     </body>\n\
     </html>\n",
    number = escape_html(invoice.invoice_number.value()),
    client = escape_html(invoice.client_name.value()),
    date = dmy(invoice.invoice_date),
    event = event_line,
    rows = rows,
    total = rupiah(Some(invoice.total().amount())),
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::invoice::{ClientName, InvoiceNumber, LineItem, Rupiah, ServiceDescription};
  use chrono::NaiveDate;

  #[test]
  fn test_document_escapes_and_formats() {
    let invoice = Invoice::new(
      InvoiceNumber::new("INV-001".to_string()).unwrap(),
      ClientName::new("Tante <Ana> & Co".to_string()).unwrap(),
      NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
      Some(NaiveDate::from_ymd_opt(2024, 4, 20).unwrap()),
      vec![
        LineItem::new(
          ServiceDescription::new("Makeup Wedding Half Day".to_string()).unwrap(),
          Rupiah::new(3_800_000).unwrap(),
        ),
        LineItem::new(
          ServiceDescription::new("Makeup Trial".to_string()).unwrap(),
          Rupiah::zero(),
        ),
      ],
    );

    let html = build_invoice_document(&invoice);
    assert!(html.contains("Tante &lt;Ana&gt; &amp; Co"));
    assert!(!html.contains("<Ana>"));
    assert!(html.contains("Invoice date: 05/03/2024"));
    assert!(html.contains("Event date: 20 April 2024"));
    assert!(html.contains("Rp 3.800.000,-"));
    // The free trial line shows the placeholder, not zero.
    assert!(html.contains("<tr><td>Makeup Trial</td><td class=\"amount\">-</td></tr>"));
  }
}
