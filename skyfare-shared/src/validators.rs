use regex::Regex;

// Patterns shared with the booking forms. Kept as plain strings so the
// API layer can ship them to clients that validate locally.
pub const MOBILE_PATTERN: &str = r"^1[3-9]\d{9}$";
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";
pub const ID_CARD_PATTERN: &str =
    r"^[1-9]\d{5}(18|19|20)\d{2}(0[1-9]|1[0-2])(0[1-9]|[12]\d|3[01])\d{3}[\dXx]$";
pub const PASSPORT_PATTERN: &str = r"^[a-zA-Z0-9]{5,17}$";
pub const FLIGHT_NUMBER_PATTERN: &str = r"^[A-Z]{2}\d{3,4}$";

fn matches(pattern: &str, value: &str) -> bool {
    Regex::new(pattern).map(|re| re.is_match(value)).unwrap_or(false)
}

pub fn is_valid_mobile(value: &str) -> bool {
    matches(MOBILE_PATTERN, value)
}

pub fn is_valid_email(value: &str) -> bool {
    matches(EMAIL_PATTERN, value)
}

/// 18-digit national ID number with an embedded birth date.
pub fn is_valid_id_card(value: &str) -> bool {
    matches(ID_CARD_PATTERN, value)
}

pub fn is_valid_passport(value: &str) -> bool {
    matches(PASSPORT_PATTERN, value)
}

/// Two-letter carrier code followed by a 3 or 4 digit flight number.
pub fn is_valid_flight_number(value: &str) -> bool {
    matches(FLIGHT_NUMBER_PATTERN, value)
}

/// At least 8 characters from the allowed set, with at least one letter
/// and one digit. Checked by scanning: the regex crate has no lookahead.
pub fn is_valid_password(value: &str) -> bool {
    value.chars().count() >= 8
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "@$!%*#?&".contains(c))
        && value.chars().any(|c| c.is_ascii_alphabetic())
        && value.chars().any(|c| c.is_ascii_digit())
}

pub fn is_non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}
