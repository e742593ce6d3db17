use chrono::SecondsFormat;
use serde::Serialize;
use uuid::Uuid;

use crate::models::customer::Customer;

/// Customer row as the dashboard tables consume it. Field casing follows
/// the existing frontend contract: camelCase apart from `image_url`.
#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub company: String,
    pub status: String,
    #[serde(rename = "totalOrders")]
    pub total_orders: i32,
    #[serde(rename = "totalSpent")]
    pub total_spent: i64,
    #[serde(rename = "lastOrderDate")]
    pub last_order_date: String,
    pub image_url: String,
}

impl From<Customer> for CustomerResponse {
    fn from(c: Customer) -> Self {
        CustomerResponse {
            id: c.id,
            name: c.name,
            email: c.email,
            company: c.company.unwrap_or_default(),
            status: c.status.unwrap_or_else(|| "inactive".to_string()),
            total_orders: c.total_orders.unwrap_or(0),
            total_spent: c.total_spent.unwrap_or(0),
            last_order_date: c
                .last_order_date
                .map(|d| d.to_rfc3339_opts(SecondsFormat::Millis, true))
                .unwrap_or_default(),
            image_url: c.image_url,
        }
    }
}

#[derive(Serialize)]
pub struct CustomersPageResponse {
    pub customers: Vec<CustomerResponse>,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_customer() -> Customer {
        Customer {
            id: Uuid::nil(),
            name: "Evil Rabbit".to_string(),
            email: "evil@rabbit.com".to_string(),
            image_url: "/customers/evil-rabbit.png".to_string(),
            company: None,
            status: None,
            total_orders: None,
            total_spent: None,
            last_order_date: None,
        }
    }

    #[test]
    fn absent_columns_get_display_defaults() {
        let resp = CustomerResponse::from(bare_customer());
        assert_eq!(resp.company, "");
        assert_eq!(resp.status, "inactive");
        assert_eq!(resp.total_orders, 0);
        assert_eq!(resp.total_spent, 0);
        assert_eq!(resp.last_order_date, "");
    }

    #[test]
    fn json_field_names_match_the_frontend_contract() {
        let page = CustomersPageResponse {
            customers: vec![CustomerResponse::from(bare_customer())],
            total_pages: 2,
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["totalPages"], 2);
        let row = &json["customers"][0];
        assert!(row.get("totalOrders").is_some());
        assert!(row.get("totalSpent").is_some());
        assert!(row.get("lastOrderDate").is_some());
        assert!(row.get("image_url").is_some());
    }
}
