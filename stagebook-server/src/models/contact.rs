//! Phone and link format checks

use once_cell::sync::Lazy;
use regex::Regex;

use super::ValidationError;

/// Digits plus the usual separators, at least one digit.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9+\-.() ]*[0-9][0-9+\-.() ]*$").expect("invalid phone regex")
});

/// Validate an optional phone number.
pub fn check_phone(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(phone) if !PHONE_RE.is_match(phone) => Err(ValidationError::InvalidFormat {
            field,
            reason: "must contain digits and only + - . ( ) or spaces",
        }),
        _ => Ok(()),
    }
}

/// Validate an optional absolute http(s) link.
pub fn check_link(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(link) => {
            let lower = link.to_ascii_lowercase();
            let rest = lower
                .strip_prefix("https://")
                .or_else(|| lower.strip_prefix("http://"));
            match rest {
                Some(host) if !host.is_empty() && !host.contains(char::is_whitespace) => Ok(()),
                _ => Err(ValidationError::InvalidFormat {
                    field,
                    reason: "must be an http:// or https:// link",
                }),
            }
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phones() {
        assert!(check_phone("phone", Some("326-123-5000")).is_ok());
        assert!(check_phone("phone", Some("+1 (415) 555.0100")).is_ok());
        assert!(check_phone("phone", None).is_ok());
        assert!(check_phone("phone", Some("call me")).is_err());
        assert!(check_phone("phone", Some("---")).is_err());
    }

    #[test]
    fn links() {
        assert!(check_link("website", Some("https://www.themusicalhop.com")).is_ok());
        assert!(check_link("facebook_link", Some("HTTP://facebook.com/x")).is_ok());
        assert!(check_link("website", None).is_ok());
        assert!(check_link("website", Some("www.example.com")).is_err());
        assert!(check_link("website", Some("https://")).is_err());
        assert!(check_link("website", Some("https://bad host")).is_err());
    }
}
