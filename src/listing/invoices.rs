//! Invoice listing: invoices joined with their owning customer, filtered by
//! the disjunctive search predicate, sorted and paginated.

use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::listing::{
    contains_pattern, page_offset, total_pages, SearchTerm, SortDirection, ITEMS_PER_PAGE,
};
use crate::models::invoice::{Invoice, InvoiceWithCustomer};

/// Permitted sort keys for the invoice listing. Unknown values fall back to
/// the date column; raw request strings never reach the SQL layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvoiceSortKey {
    #[default]
    Date,
    Amount,
    Status,
    CustomerName,
}

impl InvoiceSortKey {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("date") => InvoiceSortKey::Date,
            Some("amount") => InvoiceSortKey::Amount,
            Some("status") => InvoiceSortKey::Status,
            Some("name") | Some("customer_name") => InvoiceSortKey::CustomerName,
            _ => InvoiceSortKey::Date,
        }
    }

    fn column(self) -> &'static str {
        match self {
            InvoiceSortKey::Date => "i.date",
            InvoiceSortKey::Amount => "i.amount",
            InvoiceSortKey::Status => "i.status",
            InvoiceSortKey::CustomerName => "c.name",
        }
    }
}

pub struct InvoiceListParams {
    pub term: SearchTerm,
    pub page: i64,
    pub sort: InvoiceSortKey,
    pub direction: SortDirection,
}

const SELECT_INVOICES: &str = "SELECT i.id, i.customer_id, i.amount, i.status, i.date, \
     c.name, c.email, c.image_url \
     FROM invoices i JOIN customers c ON c.id = i.customer_id";

const COUNT_INVOICES: &str =
    "SELECT COUNT(*) FROM invoices i JOIN customers c ON c.id = i.customer_id";

/// Appends the WHERE clause for the invoice listing.
///
/// Both the count and the slice query go through here, which is what keeps
/// the reported page count consistent with the returned rows.
fn push_predicate(qb: &mut QueryBuilder<'static, Postgres>, term: &SearchTerm) {
    let Some(text) = &term.text else {
        return;
    };
    let pattern = contains_pattern(text);

    qb.push(" WHERE (c.name ILIKE ");
    qb.push_bind(pattern.clone());
    qb.push(" OR c.email ILIKE ");
    qb.push_bind(pattern.clone());
    qb.push(" OR i.status ILIKE ");
    qb.push_bind(pattern);
    if let Some(amount) = term.amount {
        qb.push(" OR (i.amount)::FLOAT8 = ");
        qb.push_bind(amount);
    }
    if let Some(date) = term.date {
        qb.push(" OR i.date = ");
        qb.push_bind(date);
    }
    qb.push(")");
}

fn slice_query(params: &InvoiceListParams) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(SELECT_INVOICES);
    push_predicate(&mut qb, &params.term);
    qb.push(" ORDER BY ");
    qb.push(params.sort.column());
    qb.push(" ");
    qb.push(params.direction.as_sql());
    qb.push(" LIMIT ");
    qb.push_bind(ITEMS_PER_PAGE);
    qb.push(" OFFSET ");
    qb.push_bind(page_offset(params.page));
    qb
}

fn count_query(term: &SearchTerm) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(COUNT_INVOICES);
    push_predicate(&mut qb, term);
    qb
}

/// One page of invoices (with embedded customer columns) matching the term.
pub async fn fetch_filtered_invoices(
    pool: &PgPool,
    params: &InvoiceListParams,
) -> Result<Vec<InvoiceWithCustomer>, sqlx::Error> {
    slice_query(params)
        .build_query_as::<InvoiceWithCustomer>()
        .fetch_all(pool)
        .await
}

/// Page count for the invoice listing, under the identical predicate.
pub async fn fetch_invoice_pages(pool: &PgPool, term: &SearchTerm) -> Result<i64, sqlx::Error> {
    let count: i64 = count_query(term)
        .build_query_scalar()
        .fetch_one(pool)
        .await?;
    Ok(total_pages(count))
}

/// The five most recent invoices, for the dashboard card list.
pub async fn fetch_latest_invoices(
    pool: &PgPool,
) -> Result<Vec<InvoiceWithCustomer>, sqlx::Error> {
    sqlx::query_as::<_, InvoiceWithCustomer>(
        "SELECT i.id, i.customer_id, i.amount, i.status, i.date, \
         c.name, c.email, c.image_url \
         FROM invoices i JOIN customers c ON c.id = i.customer_id \
         ORDER BY i.date DESC LIMIT 5",
    )
    .fetch_all(pool)
    .await
}

pub async fn fetch_invoice_by_id(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<Invoice>, sqlx::Error> {
    sqlx::query_as::<_, Invoice>(
        "SELECT id, customer_id, amount, status, date FROM invoices WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(term: SearchTerm) -> InvoiceListParams {
        InvoiceListParams {
            term,
            page: 1,
            sort: InvoiceSortKey::Date,
            direction: SortDirection::Desc,
        }
    }

    fn where_clause(sql: &str) -> Option<&str> {
        let start = sql.find(" WHERE ")?;
        let end = sql.find(" ORDER BY ").unwrap_or(sql.len());
        Some(&sql[start..end])
    }

    #[test]
    fn empty_query_applies_no_predicate() {
        let term = SearchTerm::parse("");
        assert!(!count_query(&term).sql().contains("WHERE"));
        let slice = slice_query(&params(term));
        assert!(!slice.sql().contains("WHERE"));
    }

    #[test]
    fn text_query_matches_customer_name_email_and_status() {
        let term = SearchTerm::parse("rabbit");
        let qb = count_query(&term);
        assert_eq!(
            where_clause(qb.sql()),
            Some(" WHERE (c.name ILIKE $1 OR c.email ILIKE $2 OR i.status ILIKE $3)")
        );
    }

    #[test]
    fn numeric_query_adds_an_amount_branch() {
        let term = SearchTerm::parse("666");
        let qb = count_query(&term);
        let clause = where_clause(qb.sql()).unwrap();
        assert!(clause.contains("(i.amount)::FLOAT8 = $4"));
        assert!(!clause.contains("i.date"));
    }

    #[test]
    fn date_query_adds_a_date_branch() {
        let term = SearchTerm::parse("2024-03-01");
        let qb = count_query(&term);
        let clause = where_clause(qb.sql()).unwrap();
        assert!(clause.contains("i.status ILIKE $3"));
        assert!(clause.contains("i.date = $4"));
        assert!(!clause.contains("amount"));
    }

    #[test]
    fn count_and_slice_share_the_predicate() {
        for raw in ["", "rabbit", "666", "2024-03-01"] {
            let term = SearchTerm::parse(raw);
            let count = count_query(&term);
            let slice = slice_query(&params(term));
            assert_eq!(where_clause(count.sql()), where_clause(slice.sql()));
        }
    }

    #[test]
    fn slice_orders_limits_and_offsets() {
        let mut p = params(SearchTerm::parse(""));
        p.page = 3;
        let qb = slice_query(&p);
        assert!(qb.sql().ends_with("ORDER BY i.date DESC LIMIT $1 OFFSET $2"));
    }

    #[test]
    fn sort_keys_are_a_closed_set() {
        assert_eq!(InvoiceSortKey::parse(None), InvoiceSortKey::Date);
        assert_eq!(InvoiceSortKey::parse(Some("amount")), InvoiceSortKey::Amount);
        assert_eq!(InvoiceSortKey::parse(Some("name")), InvoiceSortKey::CustomerName);
        assert_eq!(
            InvoiceSortKey::parse(Some("date; DROP TABLE invoices")),
            InvoiceSortKey::Date
        );
    }

    #[test]
    fn sort_direction_is_rendered_not_interpolated() {
        let mut p = params(SearchTerm::parse(""));
        p.sort = InvoiceSortKey::Amount;
        p.direction = SortDirection::Asc;
        let qb = slice_query(&p);
        assert!(qb.sql().contains("ORDER BY i.amount ASC"));
    }
}
