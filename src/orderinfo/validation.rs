//! Field validation for new orders.
//!
//! Each field has its own validator so an interactive caller can re-prompt for
//! just the field that failed. [`OrderDraft::validate`] runs all of them in
//! column order and stops at the first failure.
//!
//! Rules:
//! - Customer name and item must be non-empty after trimming
//! - Quantity must be a positive integer
//! - Order date must be `DD/MM/YYYY` (`DD-MM-YYYY` is accepted too)
//! - Total price must be a non-negative decimal with at most two decimal places
//! - Status must be one of Shipped, Delivered, Cancelled (any case)

use crate::error::{OrderError, Result};
use crate::model::{NewOrder, OrderStatus, DATE_FORMAT, INPUT_DATE_FORMAT_DASHED};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

pub fn customer_name(input: &str) -> Result<String> {
    non_empty("customer name", input)
}

pub fn item_purchased(input: &str) -> Result<String> {
    non_empty("item purchased", input)
}

pub fn quantity(input: &str) -> Result<u32> {
    let qty: u32 = input
        .trim()
        .parse()
        .map_err(|_| OrderError::validation("quantity", "please enter a valid integer"))?;
    if qty == 0 {
        return Err(OrderError::validation(
            "quantity",
            "must be greater than zero",
        ));
    }
    Ok(qty)
}

pub fn order_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(input, INPUT_DATE_FORMAT_DASHED))
        .map_err(|_| OrderError::validation("order date", "expected DD/MM/YYYY"))
}

pub fn total_price(input: &str) -> Result<Decimal> {
    let total = Decimal::from_str(input.trim())
        .map_err(|_| OrderError::validation("total price", "please enter a valid number"))?;
    if total.is_sign_negative() {
        return Err(OrderError::validation("total price", "cannot be negative"));
    }
    if total.normalize().scale() > 2 {
        return Err(OrderError::validation(
            "total price",
            "at most two decimal places",
        ));
    }
    Ok(total)
}

pub fn status(input: &str) -> Result<OrderStatus> {
    OrderStatus::from_str(input).map_err(|reason| OrderError::validation("status", reason))
}

fn non_empty(field: &'static str, input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(OrderError::validation(field, "cannot be empty"));
    }
    Ok(trimmed.to_string())
}

/// Raw, unvalidated order fields as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct OrderDraft {
    pub customer_name: String,
    pub item_purchased: String,
    pub quantity: String,
    pub order_date: String,
    pub total_price: String,
    pub status: String,
}

impl OrderDraft {
    pub fn validate(&self) -> Result<NewOrder> {
        Ok(NewOrder {
            customer_name: customer_name(&self.customer_name)?,
            item_purchased: item_purchased(&self.item_purchased)?,
            quantity: quantity(&self.quantity)?,
            order_date: order_date(&self.order_date)?,
            total_price: total_price(&self.total_price)?,
            status: status(&self.status)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> OrderDraft {
        OrderDraft {
            customer_name: "Jane Doe".into(),
            item_purchased: "Laptop".into(),
            quantity: "1".into(),
            order_date: "01/05/2025".into(),
            total_price: "999.99".into(),
            status: "Shipped".into(),
        }
    }

    fn failing_field(err: OrderError) -> &'static str {
        match err {
            OrderError::Validation { field, .. } => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn valid_draft_produces_typed_order() {
        let order = draft().validate().unwrap();
        assert_eq!(order.customer_name, "Jane Doe");
        assert_eq!(order.quantity, 1);
        assert_eq!(order.total_price, Decimal::new(99999, 2));
        assert_eq!(order.status, OrderStatus::Shipped);
    }

    #[test]
    fn names_are_trimmed_and_required() {
        assert_eq!(customer_name("  Bob  ").unwrap(), "Bob");
        assert_eq!(failing_field(customer_name("   ").unwrap_err()), "customer name");
        assert_eq!(failing_field(item_purchased("").unwrap_err()), "item purchased");
    }

    #[test]
    fn quantity_must_be_positive_integer() {
        assert_eq!(quantity(" 3 ").unwrap(), 3);
        assert!(quantity("0").is_err());
        assert!(quantity("-2").is_err());
        assert!(quantity("two").is_err());
        assert!(quantity("1.5").is_err());
    }

    #[test]
    fn dates_accept_slashes_and_dashes() {
        let expected = NaiveDate::from_ymd_opt(2025, 4, 28).unwrap();
        assert_eq!(order_date("28/04/2025").unwrap(), expected);
        assert_eq!(order_date("28-04-2025").unwrap(), expected);
        assert!(order_date("2025-04-28").is_err());
        assert!(order_date("31/02/2025").is_err());
    }

    #[test]
    fn total_price_rejects_negatives_and_text() {
        assert_eq!(total_price("0").unwrap(), Decimal::ZERO);
        assert!(total_price("-1.00").is_err());
        assert!(total_price("cheap").is_err());
    }

    #[test]
    fn draft_reports_first_bad_field() {
        let mut bad = draft();
        bad.total_price = "abc".into();
        bad.status = "Lost".into();
        assert_eq!(failing_field(bad.validate().unwrap_err()), "total price");

        let mut bad_status = draft();
        bad_status.status = "Lost".into();
        assert_eq!(failing_field(bad_status.validate().unwrap_err()), "status");
    }

    #[test]
    fn total_price_allows_at_most_two_decimals() {
        assert_eq!(total_price("12.5").unwrap(), Decimal::new(125, 1));
        assert_eq!(total_price("10.500").unwrap(), Decimal::new(105, 1));
        assert_eq!(failing_field(total_price("999.995").unwrap_err()), "total price");
    }
}
