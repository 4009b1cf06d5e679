pub mod countdown;
pub mod fees;
pub mod loyalty;
pub mod models;
pub mod reschedule;
pub mod timeout;

pub use countdown::{format_countdown, parse_countdown};
pub use fees::{
    calculate_fee_preview, difference_display_amount, difference_display_type, DisplayType,
    FeePreview,
};
pub use loyalty::{level_progress, member_level_for, LevelProgress, MemberLevel};
pub use models::{CabinClass, Order, OrderStatus, Ticket, TicketStatus};
pub use reschedule::{can_reschedule, can_reschedule_at, check_reschedule_at, RescheduleError};
pub use timeout::{payment_deadline, remaining_payment_seconds, remaining_payment_seconds_at};
