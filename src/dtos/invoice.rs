use chrono::SecondsFormat;
use serde::Serialize;
use uuid::Uuid;

use crate::models::invoice::{Invoice, InvoiceWithCustomer};
use crate::pagination::PageLabel;
use crate::utils::format_currency;

/// Row shape of `GET /api/invoices`: invoice columns plus the embedded
/// customer name/email/image.
#[derive(Debug, Serialize)]
pub struct InvoiceListItem {
    pub id: Uuid,
    pub amount: i64,
    pub date: String,
    pub status: String,
    pub customer_id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

impl From<InvoiceWithCustomer> for InvoiceListItem {
    fn from(row: InvoiceWithCustomer) -> Self {
        InvoiceListItem {
            id: row.id,
            amount: row.amount,
            date: row.date.to_rfc3339_opts(SecondsFormat::Millis, true),
            status: row.status,
            customer_id: row.customer_id,
            name: row.name,
            email: row.email,
            image_url: row.image_url,
        }
    }
}

/// `GET /api/invoices/pages`: the page count under the listing predicate
/// plus the rendered pagination window for the requested page.
#[derive(Serialize)]
pub struct InvoicePagesResponse {
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
    pub pages: Vec<PageLabel>,
}

/// Row shape of `GET /api/invoices/latest`; the amount is preformatted.
#[derive(Debug, Serialize)]
pub struct LatestInvoice {
    pub id: Uuid,
    pub amount: String,
    pub name: String,
    pub image_url: String,
    pub email: String,
}

impl From<InvoiceWithCustomer> for LatestInvoice {
    fn from(row: InvoiceWithCustomer) -> Self {
        LatestInvoice {
            id: row.id,
            amount: format_currency(row.amount),
            name: row.name,
            image_url: row.image_url,
            email: row.email,
        }
    }
}

/// `GET /api/invoices/{id}`; the amount is converted to major units.
#[derive(Debug, Serialize)]
pub struct InvoiceDetail {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount: f64,
    pub status: String,
    pub date: String,
}

impl From<Invoice> for InvoiceDetail {
    fn from(invoice: Invoice) -> Self {
        InvoiceDetail {
            id: invoice.id,
            customer_id: invoice.customer_id,
            amount: invoice.amount as f64 / 100.0,
            status: invoice.status,
            date: invoice.date.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
