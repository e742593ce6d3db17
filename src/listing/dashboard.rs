//! Dashboard aggregates: revenue rows and the summary card counts/sums.

use sqlx::PgPool;

use crate::models::revenue::Revenue;

pub struct CardTotals {
    pub invoice_count: i64,
    pub customer_count: i64,
    pub paid_total: i64,
    pub pending_total: i64,
}

pub async fn fetch_revenue(pool: &PgPool) -> Result<Vec<Revenue>, sqlx::Error> {
    sqlx::query_as::<_, Revenue>("SELECT month, revenue FROM revenue")
        .fetch_all(pool)
        .await
}

/// The four card aggregates have no ordering dependency on each other, so
/// they are issued concurrently and joined before responding.
pub async fn fetch_card_totals(pool: &PgPool) -> Result<CardTotals, sqlx::Error> {
    let invoices = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM invoices").fetch_one(pool);
    let customers = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM customers").fetch_one(pool);
    let paid = sqlx::query_scalar::<_, i64>(
        "SELECT COALESCE(SUM(amount), 0)::BIGINT FROM invoices WHERE status = 'paid'",
    )
    .fetch_one(pool);
    let pending = sqlx::query_scalar::<_, i64>(
        "SELECT COALESCE(SUM(amount), 0)::BIGINT FROM invoices WHERE status = 'pending'",
    )
    .fetch_one(pool);

    let (invoice_count, customer_count, paid_total, pending_total) =
        tokio::try_join!(invoices, customers, paid, pending)?;

    Ok(CardTotals {
        invoice_count,
        customer_count,
        paid_total,
        pending_total,
    })
}
