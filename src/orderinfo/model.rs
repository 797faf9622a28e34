use crate::error::{OrderError, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Header row of the backing file, in column order.
pub const COLUMN_HEADER: [&str; 7] = [
    "Order_ID",
    "Customer_Name",
    "Item_Purchased",
    "Qty",
    "Order_Date",
    "Total($)",
    "Status",
];

pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Alternative date spelling accepted from user input only.
pub const INPUT_DATE_FORMAT_DASHED: &str = "%d-%m-%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("expected one of Shipped/Delivered/Cancelled, got '{}'", s))
    }
}

/// The typed fields of an order that has not been given an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub customer_name: String,
    pub item_purchased: String,
    pub quantity: u32,
    pub order_date: NaiveDate,
    pub total_price: Decimal,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    pub order_id: u32,
    pub customer_name: String,
    pub item_purchased: String,
    pub quantity: u32,
    pub order_date: NaiveDate,
    pub total_price: Decimal,
    pub status: OrderStatus,
}

impl OrderRecord {
    pub fn new(order_id: u32, order: NewOrder) -> Self {
        Self {
            order_id,
            customer_name: order.customer_name,
            item_purchased: order.item_purchased,
            quantity: order.quantity,
            order_date: order.order_date,
            total_price: order.total_price,
            status: order.status,
        }
    }

    /// Parses one data row. `row_number` is 1-based and only used for error context.
    pub fn from_row(row_number: usize, row: &[String]) -> Result<Self> {
        if row.len() != COLUMN_HEADER.len() {
            return Err(OrderError::malformed(
                row_number,
                "column count",
                row.len().to_string(),
            ));
        }

        let field = move |idx: usize| row[idx].trim();

        let order_id = field(0)
            .parse::<u32>()
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| OrderError::malformed(row_number, COLUMN_HEADER[0], field(0)))?;
        let quantity = field(3)
            .parse::<u32>()
            .ok()
            .filter(|qty| *qty > 0)
            .ok_or_else(|| OrderError::malformed(row_number, COLUMN_HEADER[3], field(3)))?;
        let order_date = NaiveDate::parse_from_str(field(4), DATE_FORMAT)
            .map_err(|_| OrderError::malformed(row_number, COLUMN_HEADER[4], field(4)))?;
        let total_price = Decimal::from_str(field(5))
            .ok()
            .filter(|total| !total.is_sign_negative() && total.normalize().scale() <= 2)
            .ok_or_else(|| OrderError::malformed(row_number, COLUMN_HEADER[5], field(5)))?;
        let status = OrderStatus::from_str(field(6))
            .map_err(|_| OrderError::malformed(row_number, COLUMN_HEADER[6], field(6)))?;

        Ok(Self {
            order_id,
            customer_name: row[1].clone(),
            item_purchased: row[2].clone(),
            quantity,
            order_date,
            total_price,
            status,
        })
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.order_id.to_string(),
            self.customer_name.clone(),
            self.item_purchased.clone(),
            self.quantity.to_string(),
            self.formatted_date(),
            self.formatted_total(),
            self.status.to_string(),
        ]
    }

    pub fn formatted_date(&self) -> String {
        self.order_date.format(DATE_FORMAT).to_string()
    }

    /// Total with exactly two fractional digits.
    pub fn formatted_total(&self) -> String {
        let mut total = self.total_price.round_dp(2);
        total.rescale(2);
        total.to_string()
    }
}

pub fn header_row() -> Vec<String> {
    COLUMN_HEADER.iter().map(|c| c.to_string()).collect()
}
