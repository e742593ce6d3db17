//! Database seeding with the dashboard's placeholder data set. Users,
//! customers and revenue are upserted so reseeding is repeatable; invoices
//! are plain inserts.

mod data;

use bcrypt::{hash, DEFAULT_COST};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::PgPool;

use crate::error::AppError;

pub async fn seed_database(pool: &PgPool) -> Result<(), AppError> {
    seed_users(pool).await?;
    seed_customers(pool).await?;
    seed_invoices(pool).await?;
    seed_revenue(pool).await?;
    tracing::info!("Database seeded");
    Ok(())
}

async fn seed_users(pool: &PgPool) -> Result<(), AppError> {
    for user in data::USERS {
        // stored hashed, exactly like a real signup would
        let password_hash = hash(user.password, DEFAULT_COST)
            .map_err(|e| AppError::internal(format!("Password hash failed: {e}")))?;

        sqlx::query(
            "INSERT INTO users (id, name, email, password) VALUES ($1, $2, $3, $4) \
             ON CONFLICT (id) DO UPDATE \
             SET name = EXCLUDED.name, email = EXCLUDED.email, password = EXCLUDED.password",
        )
        .bind(user.id)
        .bind(user.name)
        .bind(user.email)
        .bind(password_hash)
        .execute(pool)
        .await?;
    }
    Ok(())
}

async fn seed_customers(pool: &PgPool) -> Result<(), AppError> {
    for customer in data::CUSTOMERS {
        sqlx::query(
            "INSERT INTO customers \
             (id, name, email, image_url, company, status, total_orders, total_spent, last_order_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             ON CONFLICT (id) DO UPDATE SET \
             name = EXCLUDED.name, email = EXCLUDED.email, image_url = EXCLUDED.image_url, \
             company = EXCLUDED.company, status = EXCLUDED.status, \
             total_orders = EXCLUDED.total_orders, total_spent = EXCLUDED.total_spent, \
             last_order_date = EXCLUDED.last_order_date",
        )
        .bind(customer.id)
        .bind(customer.name)
        .bind(customer.email)
        .bind(customer.image_url)
        .bind(customer.company)
        .bind(customer.status)
        .bind(customer.total_orders)
        .bind(customer.total_spent)
        .bind(parse_day(customer.last_order_date)?)
        .execute(pool)
        .await?;
    }
    Ok(())
}

async fn seed_invoices(pool: &PgPool) -> Result<(), AppError> {
    for invoice in data::INVOICES {
        sqlx::query("INSERT INTO invoices (customer_id, amount, status, date) VALUES ($1, $2, $3, $4)")
            .bind(invoice.customer_id)
            .bind(invoice.amount)
            .bind(invoice.status)
            .bind(parse_day(Some(invoice.date))?)
            .execute(pool)
            .await?;
    }
    Ok(())
}

async fn seed_revenue(pool: &PgPool) -> Result<(), AppError> {
    for rev in data::REVENUE {
        sqlx::query(
            "INSERT INTO revenue (month, revenue) VALUES ($1, $2) \
             ON CONFLICT (month) DO UPDATE SET revenue = EXCLUDED.revenue",
        )
        .bind(rev.month)
        .bind(rev.revenue)
        .execute(pool)
        .await?;
    }
    Ok(())
}

/// Seed dates are `YYYY-MM-DD` day labels, stored at UTC midnight.
fn parse_day(day: Option<&str>) -> Result<Option<DateTime<Utc>>, AppError> {
    day.map(|s| {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(|d| d.and_time(NaiveTime::MIN).and_utc())
            .map_err(|e| AppError::internal(format!("Bad seed date {s}: {e}")))
    })
    .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn seed_days_parse_at_utc_midnight() {
        let parsed = parse_day(Some("2024-03-01")).unwrap();
        assert_eq!(
            parsed,
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(parse_day(None).unwrap(), None);
    }

    #[test]
    fn every_invoice_references_a_seeded_customer() {
        for invoice in data::INVOICES {
            assert!(
                data::CUSTOMERS.iter().any(|c| c.id == invoice.customer_id),
                "invoice for unknown customer {}",
                invoice.customer_id
            );
        }
    }

    #[test]
    fn every_seed_date_is_well_formed() {
        for customer in data::CUSTOMERS {
            parse_day(customer.last_order_date).unwrap();
        }
        for invoice in data::INVOICES {
            parse_day(Some(invoice.date)).unwrap();
        }
    }

    #[test]
    fn statuses_are_the_known_enums() {
        for customer in data::CUSTOMERS {
            if let Some(status) = customer.status {
                assert!(matches!(status, "active" | "inactive"));
            }
        }
        for invoice in data::INVOICES {
            assert!(matches!(invoice.status, "pending" | "paid"));
        }
    }
}
