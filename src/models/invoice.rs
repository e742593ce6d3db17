use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Amounts are integer minor currency units.
#[derive(Debug, sqlx::FromRow)]
pub struct Invoice {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount: i64,
    pub status: String,
    pub date: DateTime<Utc>,
}

/// Invoice row joined with its owning customer, as the listings return it.
#[derive(Debug, sqlx::FromRow)]
pub struct InvoiceWithCustomer {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount: i64,
    pub status: String,
    pub date: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub image_url: String,
}
