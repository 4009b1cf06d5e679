use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minutes before departure that passengers must be at the gate.
pub const BOARDING_OFFSET_MINUTES: i64 = 30;

/// A departure instant as delivered by the flight API: either already
/// structured, or a textual timestamp still to be parsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DepartureTime {
    At(DateTime<Utc>),
    Text(String),
}

impl From<DateTime<Utc>> for DepartureTime {
    fn from(instant: DateTime<Utc>) -> Self {
        DepartureTime::At(instant)
    }
}

impl From<&str> for DepartureTime {
    fn from(text: &str) -> Self {
        DepartureTime::Text(text.to_string())
    }
}

impl From<String> for DepartureTime {
    fn from(text: String) -> Self {
        DepartureTime::Text(text)
    }
}

// The flight API emits RFC 3339; older endpoints still send naive
// "YYYY-MM-DD HH:MM:SS" strings, which are UTC by convention.
fn parse_departure(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Boarding time for a departure: 30 minutes before takeoff, with
/// calendar-correct rollover across day and year boundaries. None when a
/// textual departure does not parse.
pub fn calculate_boarding_time(departure: &DepartureTime) -> Option<DateTime<Utc>> {
    let departure = match departure {
        DepartureTime::At(instant) => *instant,
        DepartureTime::Text(text) => parse_departure(text)?,
    };
    Some(departure - Duration::minutes(BOARDING_OFFSET_MINUTES))
}

/// Render the boarding time as zero-padded 24-hour "HH:MM" in the
/// viewer's UTC offset, or an empty string when the departure is
/// unusable.
pub fn format_boarding_time(departure: &DepartureTime, offset: FixedOffset) -> String {
    match calculate_boarding_time(departure) {
        Some(boarding) => boarding.with_timezone(&offset).format("%H:%M").to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn test_boarding_is_thirty_minutes_before_departure() {
        let departure = DepartureTime::At(utc(2026, 1, 15, 8, 30));
        assert_eq!(
            calculate_boarding_time(&departure),
            Some(utc(2026, 1, 15, 8, 0))
        );
    }

    #[test]
    fn test_rolls_over_previous_day() {
        let departure = DepartureTime::At(utc(2026, 3, 10, 0, 15));
        assert_eq!(
            calculate_boarding_time(&departure),
            Some(utc(2026, 3, 9, 23, 45))
        );
    }

    #[test]
    fn test_rolls_over_previous_year() {
        let departure = DepartureTime::At(utc(2026, 1, 1, 0, 15));
        assert_eq!(
            calculate_boarding_time(&departure),
            Some(utc(2025, 12, 31, 23, 45))
        );
    }

    #[test]
    fn test_parses_rfc3339_text() {
        let departure = DepartureTime::from("2026-01-15T08:30:00Z");
        assert_eq!(
            calculate_boarding_time(&departure),
            Some(utc(2026, 1, 15, 8, 0))
        );
    }

    #[test]
    fn test_parses_naive_text() {
        let departure = DepartureTime::from("2026-01-15 08:30:00");
        assert_eq!(
            calculate_boarding_time(&departure),
            Some(utc(2026, 1, 15, 8, 0))
        );
    }

    #[test]
    fn test_unparseable_text_is_none() {
        for text in ["", "not a time", "2026-13-40T00:00:00Z"] {
            assert_eq!(calculate_boarding_time(&DepartureTime::from(text)), None);
        }
    }

    #[test]
    fn test_format_in_display_offset() {
        let departure = DepartureTime::At(utc(2026, 1, 15, 8, 30));
        let cst = FixedOffset::east_opt(8 * 3600).unwrap();
        assert_eq!(format_boarding_time(&departure, cst), "16:00");

        let utc_offset = FixedOffset::east_opt(0).unwrap();
        assert_eq!(format_boarding_time(&departure, utc_offset), "08:00");
    }

    #[test]
    fn test_format_invalid_is_empty() {
        let utc_offset = FixedOffset::east_opt(0).unwrap();
        assert_eq!(
            format_boarding_time(&DepartureTime::from("garbage"), utc_offset),
            ""
        );
    }
}
