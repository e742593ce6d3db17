//! Placeholder data for the seed route. Dates are `YYYY-MM-DD` day labels;
//! monetary values are integer cents.

use uuid::{uuid, Uuid};

pub struct SeedUser {
    pub id: Uuid,
    pub name: &'static str,
    pub email: &'static str,
    pub password: &'static str,
}

pub struct SeedCustomer {
    pub id: Uuid,
    pub name: &'static str,
    pub email: &'static str,
    pub image_url: &'static str,
    pub company: Option<&'static str>,
    pub status: Option<&'static str>,
    pub total_orders: Option<i32>,
    pub total_spent: Option<i64>,
    pub last_order_date: Option<&'static str>,
}

pub struct SeedInvoice {
    pub customer_id: Uuid,
    pub amount: i64,
    pub status: &'static str,
    pub date: &'static str,
}

pub struct SeedRevenue {
    pub month: &'static str,
    pub revenue: i64,
}

pub const USERS: &[SeedUser] = &[SeedUser {
    id: uuid!("410544b2-4001-4271-9855-fec4b6a6442a"),
    name: "User",
    email: "user@nextmail.com",
    password: "123456",
}];

const EVIL_RABBIT: Uuid = uuid!("d6e15727-9fe1-4961-8c5b-ea44a9bd81aa");
const DELBA: Uuid = uuid!("3958dc9e-712f-4377-85e9-fec4b6a6442a");
const LEE: Uuid = uuid!("3958dc9e-742f-4377-85e9-fec4b6a6442a");
const MICHAEL: Uuid = uuid!("76d65c26-f784-44a2-ac19-586678f7c2f2");
const AMY: Uuid = uuid!("cc27c14a-0acf-4f4a-a6c9-d45682c144b9");
const BALAZS: Uuid = uuid!("13d07535-c59e-4157-a011-f8d2ef4e0cbb");
const STEPH: Uuid = uuid!("126eed9c-c90c-4ef6-a4a8-fcf7408d3c66");
const WILLIAM: Uuid = uuid!("9d6e15d4-4abc-4f3a-96fd-50e525a0d8a3");
const HECTOR: Uuid = uuid!("ed98eb1b-175f-4091-81a4-1a91a5b236c2");
const STEVEN: Uuid = uuid!("a9471e02-2a36-4a91-b9b0-4b0b1a0d5c3e");

pub const CUSTOMERS: &[SeedCustomer] = &[
    SeedCustomer {
        id: EVIL_RABBIT,
        name: "Evil Rabbit",
        email: "evil@rabbit.com",
        image_url: "/customers/evil-rabbit.png",
        company: Some("Rabbit Holdings"),
        status: Some("active"),
        total_orders: Some(12),
        total_spent: Some(1_250_00),
        last_order_date: Some("2024-03-01"),
    },
    SeedCustomer {
        id: DELBA,
        name: "Delba de Oliveira",
        email: "delba@oliveira.com",
        image_url: "/customers/delba-de-oliveira.png",
        company: Some("Oliveira Studio"),
        status: Some("active"),
        total_orders: Some(8),
        total_spent: Some(890_50),
        last_order_date: Some("2024-02-18"),
    },
    SeedCustomer {
        id: LEE,
        name: "Lee Robinson",
        email: "lee@robinson.com",
        image_url: "/customers/lee-robinson.png",
        company: Some("Robinson Labs"),
        status: Some("active"),
        total_orders: Some(21),
        total_spent: Some(3_042_17),
        last_order_date: Some("2024-03-05"),
    },
    SeedCustomer {
        id: MICHAEL,
        name: "Michael Novotny",
        email: "michael@novotny.com",
        image_url: "/customers/michael-novotny.png",
        company: None,
        status: Some("inactive"),
        total_orders: Some(2),
        total_spent: Some(448_00),
        last_order_date: Some("2023-11-30"),
    },
    SeedCustomer {
        id: AMY,
        name: "Amy Burns",
        email: "amy@burns.com",
        image_url: "/customers/amy-burns.png",
        company: Some("Burns & Co"),
        status: Some("active"),
        total_orders: Some(5),
        total_spent: Some(542_46),
        last_order_date: Some("2024-01-22"),
    },
    SeedCustomer {
        id: BALAZS,
        name: "Balazs Orban",
        email: "balazs@orban.com",
        image_url: "/customers/balazs-orban.png",
        company: None,
        status: Some("inactive"),
        total_orders: Some(1),
        total_spent: Some(666),
        last_order_date: Some("2023-09-14"),
    },
    SeedCustomer {
        id: STEPH,
        name: "Steph Dietz",
        email: "steph@dietz.com",
        image_url: "/customers/steph-dietz.png",
        company: Some("Dietz Design"),
        status: Some("active"),
        total_orders: Some(9),
        total_spent: Some(1_114_25),
        last_order_date: Some("2024-02-29"),
    },
    SeedCustomer {
        id: WILLIAM,
        name: "William Howard",
        email: "william@howard.com",
        image_url: "/customers/william-howard.png",
        company: Some("Howard Imports"),
        status: Some("active"),
        total_orders: Some(14),
        total_spent: Some(2_087_90),
        last_order_date: Some("2024-03-03"),
    },
    SeedCustomer {
        id: HECTOR,
        name: "Hector Simpson",
        email: "hector@simpson.com",
        image_url: "/customers/hector-simpson.png",
        company: None,
        status: None,
        total_orders: None,
        total_spent: None,
        last_order_date: None,
    },
    SeedCustomer {
        id: STEVEN,
        name: "Steven Tey",
        email: "steven@tey.com",
        image_url: "/customers/steven-tey.png",
        company: Some("Tey Ventures"),
        status: Some("inactive"),
        total_orders: Some(3),
        total_spent: Some(125_00),
        last_order_date: Some("2023-12-08"),
    },
];

pub const INVOICES: &[SeedInvoice] = &[
    SeedInvoice { customer_id: EVIL_RABBIT, amount: 15795, status: "pending", date: "2022-12-06" },
    SeedInvoice { customer_id: DELBA, amount: 20348, status: "pending", date: "2022-11-14" },
    SeedInvoice { customer_id: AMY, amount: 3040, status: "paid", date: "2022-10-29" },
    SeedInvoice { customer_id: MICHAEL, amount: 44800, status: "paid", date: "2023-09-10" },
    SeedInvoice { customer_id: BALAZS, amount: 34577, status: "pending", date: "2023-08-05" },
    SeedInvoice { customer_id: LEE, amount: 54246, status: "pending", date: "2023-07-16" },
    SeedInvoice { customer_id: EVIL_RABBIT, amount: 666, status: "pending", date: "2023-06-27" },
    SeedInvoice { customer_id: MICHAEL, amount: 32545, status: "paid", date: "2023-06-09" },
    SeedInvoice { customer_id: AMY, amount: 1250, status: "paid", date: "2023-06-17" },
    SeedInvoice { customer_id: BALAZS, amount: 8546, status: "paid", date: "2024-02-14" },
    SeedInvoice { customer_id: DELBA, amount: 500, status: "paid", date: "2024-03-01" },
    SeedInvoice { customer_id: LEE, amount: 8945, status: "paid", date: "2024-03-01" },
    SeedInvoice { customer_id: WILLIAM, amount: 1000, status: "paid", date: "2024-03-04" },
];

pub const REVENUE: &[SeedRevenue] = &[
    SeedRevenue { month: "Jan", revenue: 2000 },
    SeedRevenue { month: "Feb", revenue: 1800 },
    SeedRevenue { month: "Mar", revenue: 2200 },
    SeedRevenue { month: "Apr", revenue: 2500 },
    SeedRevenue { month: "May", revenue: 2700 },
    SeedRevenue { month: "Jun", revenue: 3000 },
    SeedRevenue { month: "Jul", revenue: 3700 },
    SeedRevenue { month: "Aug", revenue: 2500 },
    SeedRevenue { month: "Sep", revenue: 2800 },
    SeedRevenue { month: "Oct", revenue: 2300 },
    SeedRevenue { month: "Nov", revenue: 3200 },
    SeedRevenue { month: "Dec", revenue: 3100 },
];
