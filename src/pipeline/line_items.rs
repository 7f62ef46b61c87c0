// src/pipeline/line_items.rs
use crate::error::LedgerError;
use crate::ingest::RawRow;
use crate::pipeline::orders::field;

pub const LINE_ITEM_MARKER: &str = "lineItem";

/// One product entry within an order.
///
/// The export reuses the generic buyer/seller columns to carry line-item
/// fields, so construction is an explicit rename table rather than shared
/// field names: `SellerId` carries the line-item id, `SellerLogin` the
/// offer id, `SellerStatus` the product name, `BuyerId` the quantity,
/// `BuyerLogin` the price and `BuyerEmail` the currency.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub order_id: String,
    pub line_item_id: String,
    pub offer_id: String,
    pub name: String,
    pub quantity: String,
    pub price: String,
    pub currency: String,
}

/// Re-map every line-item row into its own shape. No filtering beyond the
/// discriminant check; one output item per matching input row.
pub fn project_line_items(rows: &[RawRow]) -> Result<Vec<LineItem>, LedgerError> {
    let mut items = Vec::new();
    for row in rows {
        if row.get("Type").map(String::as_str) != Some(LINE_ITEM_MARKER) {
            continue;
        }
        items.push(LineItem {
            order_id: field(row, "OrderId")?.to_string(),
            line_item_id: field(row, "SellerId")?.to_string(),
            offer_id: field(row, "SellerLogin")?.to_string(),
            name: field(row, "SellerStatus")?.to_string(),
            quantity: field(row, "BuyerId")?.to_string(),
            price: field(row, "BuyerLogin")?.to_string(),
            currency: field(row, "BuyerEmail")?.to_string(),
        });
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::tests::{line_item_row, order_row};

    #[test]
    fn remaps_generic_columns_into_line_item_fields() -> Result<(), LedgerError> {
        let rows = vec![
            order_row("ORD-1", "PAID", "SENT"),
            line_item_row("ORD-1", "LI-1", "Blue Mug"),
        ];

        let items = project_line_items(&rows)?;
        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.order_id, "ORD-1");
        assert_eq!(item.line_item_id, "LI-1");
        assert_eq!(item.offer_id, "OFF-9");
        assert_eq!(item.name, "Blue Mug");
        assert_eq!(item.quantity, "1");
        assert_eq!(item.price, "19.99");
        assert_eq!(item.currency, "PLN");
        Ok(())
    }

    #[test]
    fn keeps_every_line_item_row_one_to_one() -> Result<(), LedgerError> {
        let rows = vec![
            line_item_row("ORD-1", "LI-1", "Blue Mug"),
            line_item_row("ORD-1", "LI-2", "Red Mug"),
            line_item_row("ORD-2", "LI-3", "Green Mug"),
        ];

        let items = project_line_items(&rows)?;
        let ids: Vec<&str> = items.iter().map(|i| i.line_item_id.as_str()).collect();
        assert_eq!(ids, vec!["LI-1", "LI-2", "LI-3"]);
        Ok(())
    }
}
