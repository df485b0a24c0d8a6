//! Show pages

use serde::Serialize;

use crate::db::Choice;
use crate::models::ShowDraft;

/// New-show form: submitted (or blank) values and the selectable ends
#[derive(Debug, Clone, Serialize)]
pub struct ShowFormOptions {
    pub form: ShowDraft,
    pub artists: Vec<Choice>,
    pub venues: Vec<Choice>,
}
