//! Customer listing: free-text search over name/email/company, optional
//! status filter, sorting over a closed key set, pagination.

use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::listing::{
    contains_pattern, page_offset, total_pages, Page, SearchTerm, SortDirection, ITEMS_PER_PAGE,
};
use crate::models::customer::Customer;

/// Permitted sort keys for the customer listing. The request layer sends
/// camelCase field names; the snake_case spellings are accepted as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CustomerSortKey {
    #[default]
    Name,
    Email,
    Company,
    Status,
    TotalOrders,
    TotalSpent,
    LastOrderDate,
}

impl CustomerSortKey {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("name") => CustomerSortKey::Name,
            Some("email") => CustomerSortKey::Email,
            Some("company") => CustomerSortKey::Company,
            Some("status") => CustomerSortKey::Status,
            Some("totalOrders") | Some("total_orders") => CustomerSortKey::TotalOrders,
            Some("totalSpent") | Some("total_spent") => CustomerSortKey::TotalSpent,
            Some("lastOrderDate") | Some("last_order_date") => CustomerSortKey::LastOrderDate,
            _ => CustomerSortKey::Name,
        }
    }

    fn column(self) -> &'static str {
        match self {
            CustomerSortKey::Name => "c.name",
            CustomerSortKey::Email => "c.email",
            CustomerSortKey::Company => "c.company",
            CustomerSortKey::Status => "c.status",
            CustomerSortKey::TotalOrders => "c.total_orders",
            CustomerSortKey::TotalSpent => "c.total_spent",
            CustomerSortKey::LastOrderDate => "c.last_order_date",
        }
    }
}

/// `all` (or an absent/empty parameter) applies no constraint; any other
/// value is matched case-insensitively against the status column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Status(String),
}

impl StatusFilter {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => StatusFilter::All,
            Some(s) if s.is_empty() || s.eq_ignore_ascii_case("all") => StatusFilter::All,
            Some(s) => StatusFilter::Status(s.to_lowercase()),
        }
    }
}

pub struct CustomerListParams {
    pub term: SearchTerm,
    pub page: i64,
    pub status: StatusFilter,
    pub sort: CustomerSortKey,
    pub direction: SortDirection,
}

const SELECT_CUSTOMERS: &str = "SELECT c.id, c.name, c.email, c.image_url, c.company, \
     c.status, c.total_orders, c.total_spent, c.last_order_date \
     FROM customers c";

const COUNT_CUSTOMERS: &str = "SELECT COUNT(*) FROM customers c";

/// Appends the WHERE clause: the disjunctive text branches, conjoined with
/// the status constraint when one applies. Shared by count and slice.
fn push_predicate(
    qb: &mut QueryBuilder<'static, Postgres>,
    term: &SearchTerm,
    status: &StatusFilter,
) {
    let mut prefix = " WHERE ";

    if let Some(text) = &term.text {
        let pattern = contains_pattern(text);
        qb.push(" WHERE (c.name ILIKE ");
        qb.push_bind(pattern.clone());
        qb.push(" OR c.email ILIKE ");
        qb.push_bind(pattern.clone());
        qb.push(" OR c.company ILIKE ");
        qb.push_bind(pattern);
        qb.push(")");
        prefix = " AND ";
    }

    if let StatusFilter::Status(value) = status {
        qb.push(prefix);
        qb.push("LOWER(c.status) = ");
        qb.push_bind(value.clone());
    }
}

fn slice_query(params: &CustomerListParams) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(SELECT_CUSTOMERS);
    push_predicate(&mut qb, &params.term, &params.status);
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

fn count_query(term: &SearchTerm, status: &StatusFilter) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(COUNT_CUSTOMERS);
    push_predicate(&mut qb, term, status);
    qb
}

/// One page of customers matching the term and status filter, plus the page
/// count computed from an independent count under the identical predicate.
pub async fn fetch_filtered_customers(
    pool: &PgPool,
    params: &CustomerListParams,
) -> Result<Page<Customer>, sqlx::Error> {
    let count: i64 = count_query(&params.term, &params.status)
        .build_query_scalar()
        .fetch_one(pool)
        .await?;

    let rows = slice_query(params)
        .build_query_as::<Customer>()
        .fetch_all(pool)
        .await?;

    Ok(Page {
        rows,
        total_pages: total_pages(count),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(raw: &str, status: StatusFilter) -> CustomerListParams {
        CustomerListParams {
            term: SearchTerm::parse(raw),
            page: 1,
            status,
            sort: CustomerSortKey::Name,
            direction: SortDirection::Asc,
        }
    }

    fn where_clause(sql: &str) -> Option<&str> {
        let start = sql.find(" WHERE ")?;
        let end = sql.find(" ORDER BY ").unwrap_or(sql.len());
        Some(&sql[start..end])
    }

    #[test]
    fn no_query_and_status_all_applies_no_predicate() {
        let qb = count_query(&SearchTerm::parse(""), &StatusFilter::All);
        assert!(!qb.sql().contains("WHERE"));
    }

    #[test]
    fn text_query_matches_name_email_and_company() {
        let qb = count_query(&SearchTerm::parse("acme"), &StatusFilter::All);
        assert_eq!(
            where_clause(qb.sql()),
            Some(" WHERE (c.name ILIKE $1 OR c.email ILIKE $2 OR c.company ILIKE $3)")
        );
    }

    #[test]
    fn status_filter_is_conjoined_with_the_text_branches() {
        let status = StatusFilter::parse(Some("Active"));
        let qb = count_query(&SearchTerm::parse("acme"), &status);
        assert_eq!(
            where_clause(qb.sql()),
            Some(
                " WHERE (c.name ILIKE $1 OR c.email ILIKE $2 OR c.company ILIKE $3) \
                 AND LOWER(c.status) = $4"
            )
        );
    }

    #[test]
    fn status_filter_alone_still_filters() {
        let qb = count_query(&SearchTerm::parse(""), &StatusFilter::parse(Some("inactive")));
        assert_eq!(where_clause(qb.sql()), Some(" WHERE LOWER(c.status) = $1"));
    }

    #[test]
    fn status_all_is_case_insensitive_and_empty_means_all() {
        assert_eq!(StatusFilter::parse(Some("all")), StatusFilter::All);
        assert_eq!(StatusFilter::parse(Some("All")), StatusFilter::All);
        assert_eq!(StatusFilter::parse(Some("")), StatusFilter::All);
        assert_eq!(StatusFilter::parse(None), StatusFilter::All);
        assert_eq!(
            StatusFilter::parse(Some("ACTIVE")),
            StatusFilter::Status("active".to_string())
        );
    }

    #[test]
    fn count_and_slice_share_the_predicate() {
        for (raw, status) in [
            ("", StatusFilter::All),
            ("acme", StatusFilter::All),
            ("acme", StatusFilter::parse(Some("active"))),
            ("", StatusFilter::parse(Some("inactive"))),
        ] {
            let count = count_query(&SearchTerm::parse(raw), &status);
            let slice = slice_query(&params(raw, status.clone()));
            assert_eq!(where_clause(count.sql()), where_clause(slice.sql()));
        }
    }

    #[test]
    fn sort_keys_accept_both_spellings_and_close_over_unknowns() {
        assert_eq!(
            CustomerSortKey::parse(Some("totalOrders")),
            CustomerSortKey::TotalOrders
        );
        assert_eq!(
            CustomerSortKey::parse(Some("total_spent")),
            CustomerSortKey::TotalSpent
        );
        assert_eq!(
            CustomerSortKey::parse(Some("lastOrderDate")),
            CustomerSortKey::LastOrderDate
        );
        assert_eq!(CustomerSortKey::parse(Some("image_url")), CustomerSortKey::Name);
        assert_eq!(CustomerSortKey::parse(None), CustomerSortKey::Name);
    }

    #[test]
    fn slice_renders_the_requested_order() {
        let mut p = params("", StatusFilter::All);
        p.sort = CustomerSortKey::TotalSpent;
        p.direction = SortDirection::Desc;
        let qb = slice_query(&p);
        assert!(qb
            .sql()
            .contains("ORDER BY c.total_spent DESC LIMIT $1 OFFSET $2"));
    }
}
