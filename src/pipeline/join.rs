// src/pipeline/join.rs
use crate::pipeline::line_items::LineItem;
use crate::pipeline::orders::Order;
use std::collections::HashMap;

/// Polish VAT rate, applied uniformly to every ledger line.
pub const TAX_RATE: f64 = 0.23;

/// One ledger line: an eligible order joined with the names of its line
/// items. Invariant: `price > 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub date: String,
    pub name: String,
    pub company: String,
    pub tax: f64,
    pub product_name: String,
    pub price: f64,
}

/// Join result plus the count of orders dropped for non-positive or
/// non-numeric totals, so data-quality problems stay auditable.
#[derive(Debug, Default)]
pub struct JoinOutcome {
    pub rows: Vec<ReportRow>,
    pub excluded: usize,
}

/// For each order, concatenate the names of its line items (source order,
/// `", "` separated) and coerce the order total to a number. Orders whose
/// total does not parse or is not positive are dropped and counted.
pub fn join_orders(orders: &[Order], items: &[LineItem]) -> JoinOutcome {
    // Index once instead of rescanning the item list per order. Items keep
    // their relative order inside each bucket.
    let mut items_by_order: HashMap<&str, Vec<&str>> = HashMap::new();
    for item in items {
        items_by_order
            .entry(item.order_id.as_str())
            .or_default()
            .push(item.name.as_str());
    }

    let mut outcome = JoinOutcome::default();
    for order in orders {
        let price = match order.total_to_pay.trim().parse::<f64>() {
            Ok(total) if total > 0.0 => total,
            _ => {
                outcome.excluded += 1;
                continue;
            }
        };

        let product_name = items_by_order
            .get(order.order_id.as_str())
            .map(|names| names.join(", "))
            .unwrap_or_default();

        outcome.rows.push(ReportRow {
            date: order.order_date.clone(),
            name: order.buyer_name.clone(),
            company: order.invoice_company_name.clone(),
            tax: TAX_RATE,
            product_name,
            price,
        });
    }
    outcome
}
