//! Venue form input

use serde::Serialize;

use super::contact::{check_link, check_phone};
use super::form::FormFields;
use super::{ValidationError, LONG_TEXT_MAX, NAME_MAX, SHORT_TEXT_MAX, WEBSITE_MAX};

/// Validated venue fields, shared by create and edit.
///
/// An edit overwrites every one of these columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VenueInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl VenueInput {
    /// Validate a submitted venue form.
    ///
    /// # Rules
    /// - name, city, state and address are required
    /// - lengths follow the column widths
    /// - phone and links must be well formed when present
    /// - `seeking_talent` is false when absent
    pub fn from_form(form: &FormFields) -> Result<Self, ValidationError> {
        let input = Self {
            name: form.required("name", NAME_MAX)?,
            city: form.required("city", SHORT_TEXT_MAX)?,
            state: form.required("state", SHORT_TEXT_MAX)?,
            address: form.required("address", SHORT_TEXT_MAX)?,
            phone: form.optional("phone", SHORT_TEXT_MAX)?,
            genres: form.list("genres", SHORT_TEXT_MAX)?,
            image_link: form.optional("image_link", LONG_TEXT_MAX)?,
            facebook_link: form.optional("facebook_link", SHORT_TEXT_MAX)?,
            website: form.optional("website", WEBSITE_MAX)?,
            seeking_talent: form.flag("seeking_talent")?,
            seeking_description: form.optional("seeking_description", LONG_TEXT_MAX)?,
        };

        check_phone("phone", input.phone.as_deref())?;
        check_link("image_link", input.image_link.as_deref())?;
        check_link("facebook_link", input.facebook_link.as_deref())?;
        check_link("website", input.website.as_deref())?;

        Ok(input)
    }

    /// Best-effort copy of a rejected form, used to re-render it.
    pub fn draft(form: &FormFields) -> Self {
        let owned = |name: &str| form.text(name).map(str::to_owned);
        Self {
            name: owned("name").unwrap_or_default(),
            city: owned("city").unwrap_or_default(),
            state: owned("state").unwrap_or_default(),
            address: owned("address").unwrap_or_default(),
            phone: owned("phone"),
            genres: form
                .all("genres")
                .map(str::trim)
                .filter(|g| !g.is_empty())
                .map(str::to_owned)
                .collect(),
            image_link: owned("image_link"),
            facebook_link: owned("facebook_link"),
            website: owned("website"),
            seeking_talent: form.flag("seeking_talent").unwrap_or(false),
            seeking_description: owned("seeking_description"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> Vec<(&'static str, &'static str)> {
        vec![
            ("name", "The Musical Hop"),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("address", "1015 Folsom Street"),
            ("phone", "123-123-1234"),
            ("genres", "Jazz"),
            ("genres", "Reggae"),
            ("facebook_link", "https://www.facebook.com/TheMusicalHop"),
        ]
    }

    #[test]
    fn accepts_create_form() {
        let form: FormFields = complete().into_iter().collect();
        let input = VenueInput::from_form(&form).unwrap();
        assert_eq!(input.name, "The Musical Hop");
        assert_eq!(input.genres, vec!["Jazz", "Reggae"]);
        assert_eq!(input.website, None);
        assert!(!input.seeking_talent);
    }

    #[test]
    fn missing_required_field() {
        let form: FormFields = complete().into_iter().filter(|(k, _)| *k != "address").collect();
        assert_eq!(
            VenueInput::from_form(&form).unwrap_err(),
            ValidationError::Missing { field: "address" }
        );
    }

    #[test]
    fn omitted_checkbox_clears_seeking_talent() {
        let mut pairs = complete();
        pairs.push(("seeking_talent", "y"));
        let checked: FormFields = pairs.into_iter().collect();
        assert!(VenueInput::from_form(&checked).unwrap().seeking_talent);

        let unchecked: FormFields = complete().into_iter().collect();
        assert!(!VenueInput::from_form(&unchecked).unwrap().seeking_talent);
    }

    #[test]
    fn rejects_bad_link() {
        let mut pairs = complete();
        pairs.push(("website", "themusicalhop.com"));
        let form: FormFields = pairs.into_iter().collect();
        assert_eq!(VenueInput::from_form(&form).unwrap_err().field(), "website");
    }

    #[test]
    fn draft_keeps_submitted_values() {
        let form: FormFields = [("name", " Hall "), ("seeking_talent", "bogus")]
            .into_iter()
            .collect();
        let draft = VenueInput::draft(&form);
        assert_eq!(draft.name, "Hall");
        assert_eq!(draft.city, "");
        assert!(!draft.seeking_talent);
    }
}
