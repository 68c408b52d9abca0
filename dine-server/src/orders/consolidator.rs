//! Order consolidation
//!
//! 每张桌台最多一个活动订单：新下单时若存在活动订单则追加行并重算总额，
//! 否则新建订单。查找与写入之间不加锁 (并发下单可能产生两个活动订单)。

use chrono::{DateTime, Utc};
use shared::order::{Order, OrderLine, OrderStatus, PlaceOrderRequest};
use uuid::Uuid;

use super::error::{OrderError, OrderResult};
use super::money::compute_totals;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text, validate_price, validate_quantity,
    validate_required_text,
};

/// Field-level checks on an incoming placement
pub fn validate_request(req: &PlaceOrderRequest) -> OrderResult<()> {
    validate_optional_text(&req.guest_name, "guestName", MAX_NAME_LEN)
        .map_err(|e| OrderError::Validation(e.message))?;
    if let Some(total) = req.total_amount {
        validate_price(total, "totalAmount").map_err(|e| OrderError::Validation(e.message))?;
    }
    for (index, line) in req.items.iter().enumerate() {
        validate_line(line).map_err(|message| OrderError::InvalidLine { index, message })?;
    }
    Ok(())
}

fn validate_line(line: &OrderLine) -> Result<(), String> {
    validate_required_text(&line.name, "name", MAX_NAME_LEN).map_err(|e| e.message)?;
    validate_price(line.price, "price").map_err(|e| e.message)?;
    validate_quantity(line.quantity, "quantity").map_err(|e| e.message)?;
    if line.notes.len() > MAX_NOTE_LEN {
        return Err(format!(
            "notes is too long ({} chars, max {MAX_NOTE_LEN})",
            line.notes.len()
        ));
    }
    Ok(())
}

/// Fresh order for a table with no active order
///
/// The declared total is trusted as-is (0 when absent).
pub fn new_order(req: PlaceOrderRequest, now: DateTime<Utc>) -> Order {
    Order {
        id: Uuid::new_v4(),
        table_id: req.table_id,
        items: req.items,
        guest_name: req.guest_name,
        status: OrderStatus::Placed,
        total_amount: req.total_amount.unwrap_or(0.0),
        created_at: now,
        order_type: req.order_type.unwrap_or_default(),
    }
}

/// Append the new lines to the active order
///
/// Total is recomputed over every line, any declared total is ignored.
/// Status goes back to `placed` since the kitchen has new work. The guest
/// name follows the latest placement, even when it is absent. The order
/// keeps its original type.
pub fn merge_into(mut existing: Order, req: PlaceOrderRequest) -> Order {
    existing.items.extend(req.items);
    existing.total_amount = compute_totals(&existing.items).total_f64();
    existing.status = OrderStatus::Placed;
    existing.guest_name = req.guest_name;
    existing
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::order::{LineStatus, OrderType};

    fn request(items: Vec<OrderLine>) -> PlaceOrderRequest {
        PlaceOrderRequest {
            table_id: 4,
            guest_name: Some("Meera".to_string()),
            items,
            total_amount: Some(500.0),
            order_type: None,
        }
    }

    #[test]
    fn test_new_order_trusts_declared_total() {
        let order = new_order(request(vec![OrderLine::new("Beef Fry", 380.0, 1)]), Utc::now());
        assert_eq!(order.status, OrderStatus::Placed);
        assert_eq!(order.total_amount, 500.0);
        assert_eq!(order.order_type, OrderType::Food);

        let mut req = request(vec![]);
        req.total_amount = None;
        req.order_type = Some(OrderType::Request);
        let order = new_order(req, Utc::now());
        assert_eq!(order.total_amount, 0.0);
        assert_eq!(order.order_type, OrderType::Request);
    }

    #[test]
    fn test_merge_appends_and_recomputes() {
        let first = new_order(
            request(vec![OrderLine::new("Thali", 100.0, 2).with_status(LineStatus::Served)]),
            Utc::now(),
        );
        let first_id = first.id;
        let mut second = request(vec![OrderLine::new("Lassi", 50.0, 1)]);
        second.guest_name = None;
        second.order_type = Some(OrderType::Request);

        let merged = merge_into(first, second);
        assert_eq!(merged.id, first_id);
        assert_eq!(merged.items.len(), 2);
        assert_eq!(merged.items[0].name, "Thali");
        assert_eq!(merged.items[0].status, LineStatus::Served);
        assert_eq!(merged.items[1].name, "Lassi");
        assert_eq!(merged.total_amount, 268.75);
        assert_eq!(merged.status, OrderStatus::Placed);
        assert_eq!(merged.guest_name, None);
        assert_eq!(merged.order_type, OrderType::Food);
    }

    #[test]
    fn test_merge_keeps_duplicates() {
        let first = new_order(request(vec![OrderLine::new("Chai", 30.0, 1)]), Utc::now());
        let merged = merge_into(first, request(vec![OrderLine::new("Chai", 30.0, 1)]));
        assert_eq!(merged.items.len(), 2);
    }

    #[test]
    fn test_validate_rejects_bad_lines() {
        assert!(validate_request(&request(vec![OrderLine::new("Tea", 20.0, 1)])).is_ok());

        let err = validate_request(&request(vec![
            OrderLine::new("Tea", 20.0, 1),
            OrderLine::new("Coffee", 30.0, 0),
        ]))
        .unwrap_err();
        assert!(matches!(err, OrderError::InvalidLine { index: 1, .. }));

        assert!(validate_request(&request(vec![OrderLine::new("Tea", -1.0, 1)])).is_err());
        assert!(validate_request(&request(vec![OrderLine::new("Tea", f64::NAN, 1)])).is_err());
        assert!(validate_request(&request(vec![OrderLine::new("  ", 20.0, 1)])).is_err());

        let mut noisy = OrderLine::new("Tea", 20.0, 1);
        noisy.notes = "x".repeat(MAX_NOTE_LEN + 1);
        assert!(validate_request(&request(vec![noisy])).is_err());
    }

    #[test]
    fn test_validate_rejects_long_guest_name() {
        let mut req = request(vec![]);
        req.guest_name = Some("g".repeat(MAX_NAME_LEN + 1));
        assert!(matches!(validate_request(&req), Err(OrderError::Validation(_))));
    }
}
