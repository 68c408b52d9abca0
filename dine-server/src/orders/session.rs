//! Table session resolution

use shared::order::{Order, TableSession};

/// Session view of a table's most recent active order
pub fn session_for(active: Option<&Order>) -> TableSession {
    match active {
        Some(order) => TableSession {
            active: true,
            guest_name: order.guest_name.clone(),
            table_id: Some(order.table_id),
            order_id: Some(order.id.to_string()),
            status: Some(order.status),
        },
        None => TableSession::inactive(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::order::{OrderStatus, OrderType};
    use uuid::Uuid;

    #[test]
    fn test_active_session_echoes_table() {
        let order = Order {
            id: Uuid::new_v4(),
            table_id: 9,
            items: vec![],
            guest_name: Some("Ravi".to_string()),
            status: OrderStatus::Ready,
            total_amount: 0.0,
            created_at: Utc::now(),
            order_type: OrderType::Food,
        };
        let session = session_for(Some(&order));
        assert!(session.active);
        assert_eq!(session.table_id, Some(9));
        assert_eq!(session.guest_name.as_deref(), Some("Ravi"));
        assert_eq!(session.order_id, Some(order.id.to_string()));
        assert_eq!(session.status, Some(OrderStatus::Ready));
    }

    #[test]
    fn test_no_order_is_inactive() {
        assert_eq!(session_for(None), TableSession::inactive());
    }
}
