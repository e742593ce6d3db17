use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Customer row as stored. The nullable columns carry display defaults that
/// are applied in the response DTO, not here.
#[derive(Debug, sqlx::FromRow)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub company: Option<String>,
    pub status: Option<String>,
    pub total_orders: Option<i32>,
    pub total_spent: Option<i64>,
    pub last_order_date: Option<DateTime<Utc>>,
}
