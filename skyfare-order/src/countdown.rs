/// Shown when the remaining time is not a representable duration.
pub const INVALID_COUNTDOWN: &str = "--:--";

/// Format remaining seconds as "MM:SS". Fractional seconds truncate
/// toward zero; the minute field widens past 99 instead of wrapping.
/// Negative or non-finite input renders the invalid sentinel.
pub fn format_countdown(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return INVALID_COUNTDOWN.to_string();
    }
    let total = seconds.floor() as u64;
    let minutes = total / 60;
    let secs = total % 60;
    format!("{:02}:{:02}", minutes, secs)
}

/// Parse a "MM:SS" countdown back to seconds. Strict: one or more minute
/// digits, exactly two second digits, seconds below 60. Anything else is
/// None.
pub fn parse_countdown(text: &str) -> Option<u32> {
    let (minutes, seconds) = text.split_once(':')?;
    if minutes.is_empty()
        || seconds.len() != 2
        || !minutes.bytes().all(|b| b.is_ascii_digit())
        || !seconds.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let minutes: u32 = minutes.parse().ok()?;
    let seconds: u32 = seconds.parse().ok()?;
    if seconds >= 60 {
        return None;
    }
    minutes.checked_mul(60)?.checked_add(seconds)
}
