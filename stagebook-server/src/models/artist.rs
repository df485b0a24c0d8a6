//! Artist form input

use serde::Serialize;

use super::contact::{check_link, check_phone};
use super::form::FormFields;
use super::{ValidationError, LONG_TEXT_MAX, NAME_MAX, SHORT_TEXT_MAX, WEBSITE_MAX};

/// Validated artist fields, shared by create and edit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArtistInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl ArtistInput {
    /// Validate a submitted artist form. name, city and state are required.
    pub fn from_form(form: &FormFields) -> Result<Self, ValidationError> {
        let input = Self {
            name: form.required("name", NAME_MAX)?,
            city: form.required("city", SHORT_TEXT_MAX)?,
            state: form.required("state", SHORT_TEXT_MAX)?,
            phone: form.optional("phone", SHORT_TEXT_MAX)?,
            genres: form.list("genres", SHORT_TEXT_MAX)?,
            image_link: form.optional("image_link", LONG_TEXT_MAX)?,
            facebook_link: form.optional("facebook_link", SHORT_TEXT_MAX)?,
            website: form.optional("website", WEBSITE_MAX)?,
            seeking_venue: form.flag("seeking_venue")?,
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
            seeking_venue: form.flag("seeking_venue").unwrap_or(false),
            seeking_description: owned("seeking_description"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_form() {
        let form: FormFields = [
            ("name", "Guns N Petals"),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("phone", "326-123-5000"),
            ("genres", "Rock n Roll"),
            ("website", "https://www.gunsnpetalsband.com"),
            ("seeking_venue", "y"),
            ("seeking_description", "Looking for shows in the Bay Area"),
        ]
        .into_iter()
        .collect();

        let input = ArtistInput::from_form(&form).unwrap();
        assert!(input.seeking_venue);
        assert_eq!(input.genres, vec!["Rock n Roll"]);
        assert_eq!(input.image_link, None);
    }

    #[test]
    fn name_is_required() {
        let form: FormFields = [("name", ""), ("city", "x"), ("state", "NY")]
            .into_iter()
            .collect();
        assert_eq!(
            ArtistInput::from_form(&form).unwrap_err(),
            ValidationError::Missing { field: "name" }
        );
    }

    #[test]
    fn rejects_bad_phone() {
        let form: FormFields = [("name", "A"), ("city", "B"), ("state", "C"), ("phone", "n/a")]
            .into_iter()
            .collect();
        assert_eq!(ArtistInput::from_form(&form).unwrap_err().field(), "phone");
    }
}
