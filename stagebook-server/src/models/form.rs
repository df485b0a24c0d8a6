//! Submitted form bodies
//!
//! Bodies are kept as ordered key/value pairs so repeated keys (`genres`)
//! survive decoding. Typed inputs pull their fields out of [`FormFields`]
//! through the helpers below, which all trim values and treat blank input
//! as absent.

use super::ValidationError;

/// Decoded `application/x-www-form-urlencoded` body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    /// `genres` and `genres[]` address the same field.
    fn key_matches(key: &str, name: &str) -> bool {
        key == name || key.strip_suffix("[]") == Some(name)
    }

    /// All raw values submitted under `name`, in submission order.
    pub fn all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |(k, _)| Self::key_matches(k, name))
            .map(|(_, v)| v.as_str())
    }

    /// First raw value submitted under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| Self::key_matches(k, name))
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Trimmed value, `None` when absent or blank.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Required text field with a length limit.
    pub fn required(&self, field: &'static str, max: usize) -> Result<String, ValidationError> {
        let value = self.text(field).ok_or(ValidationError::Missing { field })?;
        check_len(field, value, max)?;
        Ok(value.to_owned())
    }

    /// Optional text field with a length limit.
    pub fn optional(
        &self,
        field: &'static str,
        max: usize,
    ) -> Result<Option<String>, ValidationError> {
        match self.text(field) {
            Some(value) => {
                check_len(field, value, max)?;
                Ok(Some(value.to_owned()))
            }
            None => Ok(None),
        }
    }

    /// Ordered tag list; blank entries are dropped, duplicates kept.
    pub fn list(&self, field: &'static str, max: usize) -> Result<Vec<String>, ValidationError> {
        self.all(field)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| check_len(field, v, max).map(|_| v.to_owned()))
            .collect()
    }

    /// Checkbox-style boolean, see [`parse_flag`].
    pub fn flag(&self, field: &'static str) -> Result<bool, ValidationError> {
        parse_flag(field, self.get(field))
    }

    /// Positive integer id.
    pub fn id(&self, field: &'static str) -> Result<i64, ValidationError> {
        let raw = self.text(field).ok_or(ValidationError::Missing { field })?;
        match raw.parse::<i64>() {
            Ok(id) if id > 0 => Ok(id),
            _ => Err(ValidationError::InvalidFormat {
                field,
                reason: "must be a positive integer id",
            }),
        }
    }
}

impl From<Vec<(String, String)>> for FormFields {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self::new(pairs)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Parse an optional boolean form field.
///
/// Browsers omit unchecked checkboxes entirely, so an absent field is
/// `false`. A present field is `true` when its value is empty or one of
/// `y`, `yes`, `on`, `true`, `1`, and `false` for `n`, `no`, `off`,
/// `false`, `0` (case-insensitive). Any other value is rejected.
pub fn parse_flag(field: &'static str, value: Option<&str>) -> Result<bool, ValidationError> {
    let Some(raw) = value else {
        return Ok(false);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "y" | "yes" | "on" | "true" | "1" => Ok(true),
        "n" | "no" | "off" | "false" | "0" => Ok(false),
        _ => Err(ValidationError::InvalidValue {
            field,
            value: raw.to_owned(),
        }),
    }
}

pub(crate) fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> FormFields {
        pairs.iter().copied().collect()
    }

    #[test]
    fn required_trims_and_rejects_blank() {
        let f = form(&[("name", "  Blue Note  "), ("city", "   ")]);
        assert_eq!(f.required("name", 10).unwrap(), "Blue Note");
        assert_eq!(
            f.required("city", 10).unwrap_err(),
            ValidationError::Missing { field: "city" }
        );
        assert_eq!(
            f.required("state", 10).unwrap_err(),
            ValidationError::Missing { field: "state" }
        );
    }

    #[test]
    fn optional_blank_is_none() {
        let f = form(&[("website", ""), ("phone", "555-1234")]);
        assert_eq!(f.optional("website", 200).unwrap(), None);
        assert_eq!(f.optional("phone", 120).unwrap().as_deref(), Some("555-1234"));
        assert_eq!(f.optional("image_link", 500).unwrap(), None);
    }

    #[test]
    fn length_counts_characters() {
        let f = form(&[("name", "ééé")]);
        assert!(f.required("name", 3).is_ok());
        assert_eq!(
            f.required("name", 2).unwrap_err(),
            ValidationError::TooLong { field: "name", max: 2 }
        );
    }

    #[test]
    fn list_keeps_order_and_duplicates() {
        let f = form(&[
            ("genres", "Jazz"),
            ("genres[]", "Blues"),
            ("genres", " "),
            ("genres", "Jazz"),
        ]);
        assert_eq!(f.list("genres", 120).unwrap(), vec!["Jazz", "Blues", "Jazz"]);
    }

    #[test]
    fn flag_absent_is_false() {
        let f = form(&[("name", "x")]);
        assert!(!f.flag("seeking_talent").unwrap());
    }

    #[test]
    fn flag_spellings() {
        for on in ["", "y", "YES", "on", "true", "1"] {
            assert!(parse_flag("f", Some(on)).unwrap(), "{on:?} should be true");
        }
        for off in ["n", "No", "off", "FALSE", "0"] {
            assert!(!parse_flag("f", Some(off)).unwrap(), "{off:?} should be false");
        }
        assert!(matches!(
            parse_flag("f", Some("maybe")),
            Err(ValidationError::InvalidValue { field: "f", .. })
        ));
    }

    #[test]
    fn id_must_be_positive() {
        assert_eq!(form(&[("artist_id", " 42 ")]).id("artist_id").unwrap(), 42);
        assert!(matches!(
            form(&[("artist_id", "0")]).id("artist_id"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            form(&[("artist_id", "abc")]).id("artist_id"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert_eq!(
            form(&[]).id("venue_id").unwrap_err(),
            ValidationError::Missing { field: "venue_id" }
        );
    }
}
