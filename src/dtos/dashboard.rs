use serde::Serialize;

use crate::listing::dashboard::CardTotals;
use crate::utils::format_currency;

/// `GET /api/dashboard/cards`: counts plus preformatted paid/pending sums.
#[derive(Debug, Serialize)]
pub struct CardData {
    #[serde(rename = "numberOfCustomers")]
    pub number_of_customers: i64,
    #[serde(rename = "numberOfInvoices")]
    pub number_of_invoices: i64,
    #[serde(rename = "totalPaidInvoices")]
    pub total_paid_invoices: String,
    #[serde(rename = "totalPendingInvoices")]
    pub total_pending_invoices: String,
}

impl From<CardTotals> for CardData {
    fn from(totals: CardTotals) -> Self {
        CardData {
            number_of_customers: totals.customer_count,
            number_of_invoices: totals.invoice_count,
            total_paid_invoices: format_currency(totals.paid_total),
            total_pending_invoices: format_currency(totals.pending_total),
        }
    }
}
