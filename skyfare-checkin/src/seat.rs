use serde::{Deserialize, Serialize};

/// Display category of a seat on the online check-in seat map
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Occupied,
    Selected,
    Current,
    Available,
}

/// A seat counts as occupied when another passenger holds it. The
/// passenger's own current seat is never occupied, so they can keep it.
pub fn is_seat_occupied(seat_number: &str, occupied_seats: &[String], current_seat: &str) -> bool {
    if seat_number == current_seat {
        return false;
    }
    occupied_seats.iter().any(|s| s == seat_number)
}

pub fn is_seat_selected(seat_number: &str, selected_seat: Option<&str>) -> bool {
    selected_seat == Some(seat_number)
}

/// The passenger's original seat, shown as such only while they have not
/// selected it again.
pub fn is_current_seat(seat_number: &str, current_seat: &str, selected_seat: Option<&str>) -> bool {
    seat_number == current_seat && selected_seat != Some(seat_number)
}

/// Classify a seat for rendering.
///
/// Precedence, first match wins: occupied, selected, current, available.
pub fn classify_seat(
    seat_number: &str,
    occupied_seats: &[String],
    current_seat: &str,
    selected_seat: Option<&str>,
) -> SeatStatus {
    if is_seat_occupied(seat_number, occupied_seats, current_seat) {
        return SeatStatus::Occupied;
    }
    if is_seat_selected(seat_number, selected_seat) {
        return SeatStatus::Selected;
    }
    if is_current_seat(seat_number, current_seat, selected_seat) {
        return SeatStatus::Current;
    }
    SeatStatus::Available
}
