//! Terminal rendering: the order table and command messages.
//!
//! Everything here builds `String`s so it can be tested without a terminal;
//! the `print_*` wrappers are the only functions that touch stdout.

use colored::{ColoredString, Colorize};
use orderinfo::api::{CmdMessage, MessageLevel};
use orderinfo::model::{OrderRecord, OrderStatus, COLUMN_HEADER};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TITLE: &str = "Online Order Details";
const TITLE_WIDTH: usize = 100;
const LINE_WIDTH: usize = 110;

const ID_WIDTH: usize = 8;
const NAME_WIDTH: usize = 25;
const QTY_WIDTH: usize = 5;
const DATE_WIDTH: usize = 12;
const TOTAL_WIDTH: usize = 10;
const STATUS_WIDTH: usize = 15;

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

pub fn render_table(orders: &[OrderRecord]) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("{:^width$}\n", TITLE, width = TITLE_WIDTH));
    out.push_str(&"=".repeat(LINE_WIDTH));
    out.push('\n');
    out.push_str(&format!(
        "{:>8}  {:<25} {:<25} {:>5}  {:<12} {:>10}  {:<12}\n",
        COLUMN_HEADER[0],
        COLUMN_HEADER[1],
        COLUMN_HEADER[2],
        COLUMN_HEADER[3],
        COLUMN_HEADER[4],
        COLUMN_HEADER[5],
        COLUMN_HEADER[6],
    ));
    out.push_str(&"-".repeat(LINE_WIDTH));
    out.push('\n');

    for order in orders {
        let status = pad_to_width(
            &truncate_to_width(order.status.as_str(), STATUS_WIDTH - 1),
            STATUS_WIDTH,
        );
        out.push_str(&format!(
            "{:>idw$}  {} {} {:>qw$}  {:<dw$} {:>tw$}  {}\n",
            order.order_id,
            pad_to_width(&truncate_to_width(&order.customer_name, NAME_WIDTH - 1), NAME_WIDTH),
            pad_to_width(&truncate_to_width(&order.item_purchased, NAME_WIDTH - 1), NAME_WIDTH),
            order.quantity,
            order.formatted_date(),
            order.formatted_total(),
            colorize_status(order.status, status),
            idw = ID_WIDTH,
            qw = QTY_WIDTH,
            dw = DATE_WIDTH,
            tw = TOTAL_WIDTH,
        ));
    }
    out
}

pub fn print_table(orders: &[OrderRecord]) {
    print!("{}", render_table(orders));
}

/// Multi-line detail view shown before a delete is confirmed.
pub fn render_order_details(order: &OrderRecord) -> String {
    let mut out = String::new();
    out.push_str("\nRecord to be deleted:\n");
    out.push_str(&"-".repeat(80));
    out.push('\n');
    out.push_str(&format!("Order ID   : {}\n", order.order_id));
    out.push_str(&format!("Customer   : {}\n", order.customer_name));
    out.push_str(&format!("Item       : {}\n", order.item_purchased));
    out.push_str(&format!("Quantity   : {}\n", order.quantity));
    out.push_str(&format!("Date       : {}\n", order.formatted_date()));
    out.push_str(&format!("Total Price: {}\n", order.formatted_total()));
    out.push_str(&format!("Status     : {}\n", order.status));
    out.push_str(&"-".repeat(50));
    out.push('\n');
    out
}

fn colorize_status(status: OrderStatus, padded: String) -> ColoredString {
    match status {
        OrderStatus::Shipped => padded.yellow(),
        OrderStatus::Delivered => padded.green(),
        OrderStatus::Cancelled => padded.red(),
    }
}

/// Cuts `s` so it occupies at most `max_width` terminal columns.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
