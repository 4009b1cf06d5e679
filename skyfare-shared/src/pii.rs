use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Mask the middle of an identifier for display, keeping the first and
/// last 4 characters. Identifiers of 8 characters or fewer are starred
/// out entirely. Output length always equals input length.
pub fn mask_id_number(id_number: &str) -> String {
    let chars: Vec<char> = id_number.chars().collect();
    let len = chars.len();

    if len == 0 {
        return String::new();
    }
    if len <= 8 {
        return "*".repeat(len);
    }

    let prefix: String = chars[..4].iter().collect();
    let suffix: String = chars[len - 4..].iter().collect();
    format!("{}{}{}", prefix, "*".repeat(len - 8), suffix)
}

/// A wrapper for sensitive passenger data (ID numbers, contact details)
/// that redacts its value in Debug and Display output so log macros never
/// leak it. Serialization passes the real value through for API responses.
#[derive(Clone, Deserialize)]
pub struct Masked<T>(pub T);

impl<T: fmt::Display> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T: fmt::Display> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<T> Masked<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl Masked<String> {
    /// Partially masked rendering for customer-facing views, where full
    /// redaction would make the identifier unrecognizable.
    pub fn partial(&self) -> String {
        mask_id_number(&self.0)
    }
}
