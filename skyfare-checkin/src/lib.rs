pub mod boarding;
pub mod cabin;
pub mod flight;
pub mod seat;

pub use boarding::{calculate_boarding_time, format_boarding_time, DepartureTime};
pub use cabin::{get_aisle_index, is_aisle_position};
pub use flight::{derive_flight_status, derive_flight_status_at, FlightStatus};
pub use seat::{classify_seat, SeatStatus};
