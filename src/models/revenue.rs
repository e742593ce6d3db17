use serde::Serialize;

/// Precomputed monthly revenue summary, keyed by month label.
#[derive(Debug, sqlx::FromRow, Serialize)]
pub struct Revenue {
    pub month: String,
    pub revenue: i64,
}
