use chrono::{DateTime, Duration, Utc};

use crate::models::{Order, OrderStatus};

/// Minutes a pending order stays payable before it is cancelled.
pub const ORDER_TIMEOUT_MINUTES: i64 = 30;

/// Instant at which an order created at `created_at` stops being payable.
pub fn payment_deadline(created_at: DateTime<Utc>) -> DateTime<Utc> {
    created_at + Duration::minutes(ORDER_TIMEOUT_MINUTES)
}

/// Whole seconds left to pay, for the countdown display. Zero for
/// anything other than a pending order with a live deadline.
pub fn remaining_payment_seconds_at(order: &Order, now: DateTime<Utc>) -> i64 {
    if order.status != OrderStatus::Pending {
        return 0;
    }
    let expires_at = match order.expires_at {
        Some(expires_at) => expires_at,
        None => return 0,
    };
    (expires_at - now).num_seconds().max(0)
}

pub fn remaining_payment_seconds(order: &Order) -> i64 {
    remaining_payment_seconds_at(order, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadline_is_thirty_minutes_out() {
        let created_at = Utc::now();
        assert_eq!(
            payment_deadline(created_at) - created_at,
            Duration::minutes(30)
        );
    }

    #[test]
    fn test_pending_order_counts_down() {
        let order = Order::new(50_000);
        let now = order.created_at + Duration::minutes(10);
        assert_eq!(remaining_payment_seconds_at(&order, now), 20 * 60);
    }

    #[test]
    fn test_expired_order_reads_zero() {
        let order = Order::new(50_000);
        let now = order.created_at + Duration::minutes(31);
        assert_eq!(remaining_payment_seconds_at(&order, now), 0);
    }

    #[test]
    fn test_non_pending_order_reads_zero() {
        let mut order = Order::new(50_000);
        let now = order.created_at;
        order.update_status(OrderStatus::Paid);
        assert_eq!(remaining_payment_seconds_at(&order, now), 0);
    }

    #[test]
    fn test_missing_deadline_reads_zero() {
        let mut order = Order::new(50_000);
        order.expires_at = None;
        assert_eq!(remaining_payment_seconds_at(&order, order.created_at), 0);
    }
}
