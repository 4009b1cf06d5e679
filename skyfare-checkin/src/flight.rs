use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Flight lifecycle as shown in search and seat-map views
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FlightStatus {
    Scheduled,
    Full,
    Departed,
    Canceled,
}

/// Recompute a flight's status from its seat inventory and departure
/// time. Canceled and departed flights never come back; a sold-out
/// flight reads full and reverts to scheduled once seats free up again.
pub fn derive_flight_status_at(
    current: FlightStatus,
    available_seats: i32,
    departure_time: DateTime<Utc>,
    now: DateTime<Utc>,
) -> FlightStatus {
    match current {
        FlightStatus::Canceled => FlightStatus::Canceled,
        FlightStatus::Departed => FlightStatus::Departed,
        _ if departure_time <= now => FlightStatus::Departed,
        FlightStatus::Scheduled if available_seats <= 0 => FlightStatus::Full,
        FlightStatus::Full if available_seats > 0 => FlightStatus::Scheduled,
        other => other,
    }
}

pub fn derive_flight_status(
    current: FlightStatus,
    available_seats: i32,
    departure_time: DateTime<Utc>,
) -> FlightStatus {
    derive_flight_status_at(current, available_seats, departure_time, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_departure_time_passed() {
        let now = base();
        let departed_at = now - chrono::Duration::minutes(1);
        assert_eq!(
            derive_flight_status_at(FlightStatus::Scheduled, 10, departed_at, now),
            FlightStatus::Departed
        );
        // A sold-out flight departs too once its time has passed.
        assert_eq!(
            derive_flight_status_at(FlightStatus::Full, 0, departed_at, now),
            FlightStatus::Departed
        );
    }

    #[test]
    fn test_sells_out_and_reopens() {
        let now = base();
        let departure = now + chrono::Duration::hours(5);
        assert_eq!(
            derive_flight_status_at(FlightStatus::Scheduled, 0, departure, now),
            FlightStatus::Full
        );
        assert_eq!(
            derive_flight_status_at(FlightStatus::Full, 2, departure, now),
            FlightStatus::Scheduled
        );
    }

    #[test]
    fn test_terminal_states_stay_put() {
        let now = base();
        let departure = now + chrono::Duration::hours(5);
        assert_eq!(
            derive_flight_status_at(FlightStatus::Canceled, 100, departure, now),
            FlightStatus::Canceled
        );
        assert_eq!(
            derive_flight_status_at(FlightStatus::Departed, 100, departure, now),
            FlightStatus::Departed
        );
    }

    #[test]
    fn test_steady_state() {
        let now = base();
        let departure = now + chrono::Duration::hours(5);
        assert_eq!(
            derive_flight_status_at(FlightStatus::Scheduled, 20, departure, now),
            FlightStatus::Scheduled
        );
        assert_eq!(
            derive_flight_status_at(FlightStatus::Full, 0, departure, now),
            FlightStatus::Full
        );
    }
}
