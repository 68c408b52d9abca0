//! Order status and classification types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregate order status
///
/// `Placed`, `Ready` and `Served` are derived from line statuses.
/// `Paid` is only ever set by settlement. Nothing here produces `Cancelled`:
/// it is only read back from legacy or externally written data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Placed,
    Ready,
    Served,
    Paid,
    Cancelled,
}

impl OrderStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Placed => "placed",
            Self::Ready => "ready",
            Self::Served => "served",
            Self::Paid => "paid",
            Self::Cancelled => "cancelled",
        }
    }

    /// Active = still occupying the table (not paid, not cancelled)
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::Paid | Self::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-line preparation status (monotonic: pending → ready → served)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStatus {
    #[default]
    Pending,
    Ready,
    Served,
}

impl LineStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Ready => "ready",
            Self::Served => "served",
        }
    }
}

impl fmt::Display for LineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kitchen order vs. service request (call waiter, water, bill...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    #[default]
    Food,
    Request,
}

/// Target passed by staff when advancing an order
///
/// Anything other than `ready`/`served` is accepted and leaves lines as
/// they are; the aggregate status is still recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusTarget {
    Ready,
    Served,
    Other(String),
}

impl StatusTarget {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "ready" => Self::Ready,
            "served" => Self::Served,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for StatusTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => f.write_str("ready"),
            Self::Served => f.write_str("served"),
            Self::Other(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
        let s: LineStatus = serde_json::from_str("\"served\"").unwrap();
        assert_eq!(s, LineStatus::Served);
        let t: OrderType = serde_json::from_str("\"request\"").unwrap();
        assert_eq!(t, OrderType::Request);
    }

    #[test]
    fn test_is_active() {
        assert!(OrderStatus::Placed.is_active());
        assert!(OrderStatus::Ready.is_active());
        assert!(OrderStatus::Served.is_active());
        assert!(!OrderStatus::Paid.is_active());
        assert!(!OrderStatus::Cancelled.is_active());
    }

    #[test]
    fn test_status_target_parse() {
        assert_eq!(StatusTarget::parse("ready"), StatusTarget::Ready);
        assert_eq!(StatusTarget::parse("served"), StatusTarget::Served);
        assert_eq!(
            StatusTarget::parse("foo"),
            StatusTarget::Other("foo".to_string())
        );
        // Case-sensitive, like the kitchen clients send it
        assert_eq!(
            StatusTarget::parse("READY"),
            StatusTarget::Other("READY".to_string())
        );
    }
}
