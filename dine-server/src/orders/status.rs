//! Order status state machine
//!
//! Line status: pending → ready → served (单调)。
//! Aggregate status 由行状态推导: 任一 pending → placed；否则任一 ready → ready；
//! 否则 served (零行订单也是 served)。paid 只由结账设置；cancelled 仅来自历史数据。

use shared::order::{LineStatus, OrderLine, OrderStatus, StatusTarget};

/// Priority function from line statuses to the aggregate status
pub fn derive_aggregate(lines: &[OrderLine]) -> OrderStatus {
    if lines.iter().any(|l| l.status == LineStatus::Pending) {
        OrderStatus::Placed
    } else if lines.iter().any(|l| l.status == LineStatus::Ready) {
        OrderStatus::Ready
    } else {
        OrderStatus::Served
    }
}

/// Apply a staff target to the lines, returns how many lines changed
///
/// `served` only moves `ready` lines; `pending` lines stay pending.
/// Unknown targets change nothing.
pub fn apply_target(lines: &mut [OrderLine], target: &StatusTarget) -> usize {
    let (from, to) = match target {
        StatusTarget::Ready => (LineStatus::Pending, LineStatus::Ready),
        StatusTarget::Served => (LineStatus::Ready, LineStatus::Served),
        StatusTarget::Other(_) => return 0,
    };
    let mut changed = 0;
    for line in lines.iter_mut().filter(|l| l.status == from) {
        line.status = to;
        changed += 1;
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(statuses: &[LineStatus]) -> Vec<OrderLine> {
        statuses
            .iter()
            .enumerate()
            .map(|(i, s)| OrderLine::new(format!("dish-{i}"), 10.0, 1).with_status(*s))
            .collect()
    }

    #[test]
    fn test_derive_aggregate_priority() {
        use LineStatus::*;
        assert_eq!(derive_aggregate(&lines(&[Served, Ready, Pending])), OrderStatus::Placed);
        assert_eq!(derive_aggregate(&lines(&[Served, Ready])), OrderStatus::Ready);
        assert_eq!(derive_aggregate(&lines(&[Served, Served])), OrderStatus::Served);
        assert_eq!(derive_aggregate(&[]), OrderStatus::Served);
    }

    #[test]
    fn test_ready_moves_only_pending() {
        use LineStatus::*;
        let mut ls = lines(&[Pending, Ready, Served, Pending]);
        assert_eq!(apply_target(&mut ls, &StatusTarget::Ready), 2);
        let got: Vec<_> = ls.iter().map(|l| l.status).collect();
        assert_eq!(got, vec![Ready, Ready, Served, Ready]);
        assert_eq!(derive_aggregate(&ls), OrderStatus::Ready);
    }

    #[test]
    fn test_served_leaves_pending_untouched() {
        use LineStatus::*;
        let mut ls = lines(&[Pending, Ready]);
        assert_eq!(apply_target(&mut ls, &StatusTarget::Served), 1);
        assert_eq!(ls[0].status, Pending);
        assert_eq!(ls[1].status, Served);
        assert_eq!(derive_aggregate(&ls), OrderStatus::Placed);
    }

    #[test]
    fn test_unknown_target_is_noop() {
        use LineStatus::*;
        let mut ls = lines(&[Pending, Ready, Served]);
        let before = ls.clone();
        assert_eq!(apply_target(&mut ls, &StatusTarget::parse("foo")), 0);
        assert_eq!(ls, before);
    }
}
