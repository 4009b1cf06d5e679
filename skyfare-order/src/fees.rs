use serde::{Deserialize, Serialize};

use crate::models::{CabinClass, Ticket};

/// House reschedule fee as a percentage of the original fare.
pub const RESCHEDULE_FEE_PERCENT: i64 = 5;

/// Cost breakdown shown before a passenger confirms a rebooking. All
/// amounts are integer minor units; only `price_difference` can be
/// negative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeePreview {
    pub original_price: i32,
    pub new_price: i32,
    pub price_difference: i32,
    pub reschedule_fee: i32,
    pub total_to_pay: i32,
    pub refund_amount: i32,
}

/// Which way the fare difference points on screen
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DisplayType {
    Pay,
    Refund,
    None,
}

/// Fee preview for rebooking at the given new fare.
///
/// A fare increase is paid on top of the fee. A fare drop refunds
/// whatever is left of the difference after the fee; the fee itself is
/// always owed.
pub fn calculate_fee_preview(original_price: i32, new_price: i32, reschedule_fee: i32) -> FeePreview {
    let price_difference = new_price - original_price;

    let (total_to_pay, refund_amount) = if price_difference > 0 {
        (price_difference + reschedule_fee, 0)
    } else if price_difference < 0 {
        (reschedule_fee, (price_difference.abs() - reschedule_fee).max(0))
    } else {
        (reschedule_fee, 0)
    };

    FeePreview {
        original_price,
        new_price,
        price_difference,
        reschedule_fee,
        total_to_pay,
        refund_amount,
    }
}

/// Keyed purely on the sign of the fare difference.
pub fn difference_display_type(price_difference: i32) -> DisplayType {
    if price_difference > 0 {
        DisplayType::Pay
    } else if price_difference < 0 {
        DisplayType::Refund
    } else {
        DisplayType::None
    }
}

/// The single amount the difference banner shows: what is owed on a fare
/// increase, what comes back on a fare drop, zero otherwise.
pub fn difference_display_amount(preview: &FeePreview) -> i32 {
    match difference_display_type(preview.price_difference) {
        DisplayType::Pay => preview.total_to_pay,
        DisplayType::Refund => preview.refund_amount,
        DisplayType::None => 0,
    }
}

/// The house fee: 5% of the original fare, rounded half-up.
pub fn default_reschedule_fee(original_price: i32) -> i32 {
    ((original_price as i64 * RESCHEDULE_FEE_PERCENT + 50) / 100) as i32
}

/// Fare for a cabin at the flight's base price and current discount
/// (a fraction, 1.0 = no discount).
pub fn cabin_price(base_price: i32, cabin: CabinClass, discount: f64) -> i32 {
    (base_price as f64 * cabin.price_multiplier() * discount).round() as i32
}

/// Full preview for moving a ticket onto a new flight, pricing the
/// target cabin and applying the house fee.
pub fn preview_for_rebooking(
    ticket: &Ticket,
    target_base_price: i32,
    target_cabin: CabinClass,
    discount: f64,
) -> FeePreview {
    let new_price = cabin_price(target_base_price, target_cabin, discount);
    calculate_fee_preview(ticket.price, new_price, default_reschedule_fee(ticket.price))
}
