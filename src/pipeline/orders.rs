// src/pipeline/orders.rs
use crate::error::LedgerError;
use crate::ingest::RawRow;

pub const ORDER_MARKER: &str = "order";
const PAYMENT_IN_PROGRESS: &str = "IN_PROGRESS";
const SELLER_CANCELLED: &str = "CANCELLED";

/// One purchase transaction row from the export.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub order_id: String,
    pub order_date: String,
    pub buyer_name: String,
    pub invoice_company_name: String,
    /// Untyped here; the join stage coerces it to a number.
    pub total_to_pay: String,
    pub payment_status: String,
    pub seller_status: String,
}

pub(crate) fn field<'a>(row: &'a RawRow, name: &'static str) -> Result<&'a str, LedgerError> {
    row.get(name)
        .map(String::as_str)
        .ok_or(LedgerError::MissingColumn(name))
}

/// Keep rows marked as orders that are neither mid-payment nor
/// seller-cancelled, in source order.
pub fn eligible_orders(rows: &[RawRow]) -> Result<Vec<Order>, LedgerError> {
    let mut orders = Vec::new();
    for row in rows {
        if row.get("Type").map(String::as_str) != Some(ORDER_MARKER) {
            continue;
        }
        let payment_status = field(row, "PaymentStatus")?;
        let seller_status = field(row, "SellerStatus")?;
        if payment_status == PAYMENT_IN_PROGRESS || seller_status == SELLER_CANCELLED {
            continue;
        }
        orders.push(Order {
            order_id: field(row, "OrderId")?.to_string(),
            order_date: field(row, "OrderDate")?.to_string(),
            buyer_name: field(row, "BuyerName")?.to_string(),
            invoice_company_name: field(row, "InvoiceCompanyName")?.to_string(),
            total_to_pay: field(row, "TotalToPayAmount")?.to_string(),
            payment_status: payment_status.to_string(),
            seller_status: seller_status.to_string(),
        });
    }
    Ok(orders)
}
