use chrono::{DateTime, Duration, Utc};

use crate::models::{Order, OrderStatus, Ticket, TicketStatus};

/// Hours before departure after which a ticket can no longer be changed.
pub const MIN_HOURS_BEFORE_DEPARTURE: i64 = 2;

/// Why a reschedule request was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RescheduleError {
    #[error("ticket status does not allow rescheduling")]
    InvalidTicketStatus,

    #[error("order is not paid or ticketed")]
    OrderNotPayable,

    #[error("flight has already departed")]
    FlightDeparted,

    #[error("within {MIN_HOURS_BEFORE_DEPARTURE} hours of departure")]
    TooCloseToDeparture,
}

/// Check a ticket/order pair against the rebooking rules, reporting the
/// first rule that fails.
///
/// Eligible means: a valid ticket on a paid or ticketed order, with the
/// flight strictly more than 2 hours from departure. Exactly 2 hours out
/// is already too late.
pub fn check_reschedule_at(
    ticket: &Ticket,
    order: &Order,
    now: DateTime<Utc>,
) -> Result<(), RescheduleError> {
    if ticket.status != TicketStatus::Valid {
        return Err(RescheduleError::InvalidTicketStatus);
    }
    if !matches!(order.status, OrderStatus::Paid | OrderStatus::Ticketed) {
        return Err(RescheduleError::OrderNotPayable);
    }
    if ticket.flight_departure_time <= now {
        return Err(RescheduleError::FlightDeparted);
    }
    if ticket.flight_departure_time - now <= Duration::hours(MIN_HOURS_BEFORE_DEPARTURE) {
        return Err(RescheduleError::TooCloseToDeparture);
    }
    Ok(())
}

/// Whether the reschedule action is offered at all. A missing ticket or
/// order is simply not eligible.
pub fn can_reschedule_at(
    ticket: Option<&Ticket>,
    order: Option<&Order>,
    now: DateTime<Utc>,
) -> bool {
    let (ticket, order) = match (ticket, order) {
        (Some(ticket), Some(order)) => (ticket, order),
        _ => return false,
    };
    match check_reschedule_at(ticket, order, now) {
        Ok(()) => true,
        Err(reason) => {
            tracing::debug!(ticket = %ticket.ticket_number, %reason, "reschedule refused");
            false
        }
    }
}

pub fn can_reschedule(ticket: Option<&Ticket>, order: Option<&Order>) -> bool {
    can_reschedule_at(ticket, order, Utc::now())
}
