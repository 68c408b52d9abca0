//! Order totals using rust_decimal for precision
//!
//! 计算全部在 `Decimal` 中完成，最后转换为 `f64` 存储/序列化。不做舍入。

use rust_decimal::prelude::*;
use shared::order::OrderLine;

/// GST rate (5%)
pub const GST_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Service charge rate (2.5%)
pub const SERVICE_CHARGE_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 3);

/// Bill breakdown for a set of lines
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub gst: Decimal,
    pub service_charge: Decimal,
    pub total: Decimal,
}

impl OrderTotals {
    /// Grand total as stored on the order
    pub fn total_f64(&self) -> f64 {
        to_f64(self.total)
    }
}

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// Line amount: unit price * quantity
pub fn line_amount(line: &OrderLine) -> Decimal {
    to_decimal(line.price) * Decimal::from(line.quantity)
}

/// subtotal = Σ price*qty, gst = 5%, service = 2.5%, total = sum of the three
pub fn compute_totals(lines: &[OrderLine]) -> OrderTotals {
    let subtotal: Decimal = lines.iter().map(line_amount).sum();
    let gst = subtotal * GST_RATE;
    let service_charge = subtotal * SERVICE_CHARGE_RATE;
    OrderTotals {
        subtotal,
        gst,
        service_charge,
        total: subtotal + gst + service_charge,
    }
}
