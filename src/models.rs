//! Domain Models
//!
//! Data structures matching the `/foods` backend resource.

use serde::{Deserialize, Serialize};

use crate::form::{FormError, FormHandle};

/// Food record (matches backend)
///
/// `id` is assigned by the backend and never changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: u64,
    pub name: String,
    pub image: String,
    pub description: String,
    pub price: f64,
    pub available: bool,
}

impl Food {
    /// Merge a submitted draft over this record. Draft fields win;
    /// `id` and `available` always come from the existing record.
    pub fn apply_draft(&self, draft: &FoodDraft) -> Food {
        Food {
            id: self.id,
            name: draft.name.clone(),
            image: draft.image.clone(),
            description: draft.description.clone(),
            price: draft.price,
            available: self.available,
        }
    }

    /// Keyed-list identity for the dashboard's `<For>`.
    ///
    /// Use a tuple of all mutable fields so a reconciled update produces a
    /// new key and the row re-renders; keying on `id` alone would keep the
    /// stale view. `f64` is not `Eq + Hash`, hence `to_bits`.
    pub fn list_key(&self) -> (u64, String, String, String, u64, bool) {
        (
            self.id,
            self.name.clone(),
            self.image.clone(),
            self.description.clone(),
            self.price.to_bits(),
            self.available,
        )
    }

    /// Same record with the availability flag flipped.
    pub fn toggled(&self) -> Food {
        Food {
            available: !self.available,
            ..self.clone()
        }
    }
}

/// Validated form payload for a food record (no `id`, no `available`)
#[derive(Debug, Clone, PartialEq)]
pub struct FoodDraft {
    pub name: String,
    pub image: String,
    pub description: String,
    pub price: f64,
}

impl FoodDraft {
    /// Gather and validate the dialog's field values at submit time.
    pub fn from_form(form: &FormHandle) -> Result<FoodDraft, FormError> {
        let name = form.text("name")?;
        if name.is_empty() {
            return Err(FormError::Required("name"));
        }
        Ok(FoodDraft {
            name,
            image: form.url("image")?,
            description: form.text("description")?,
            price: form.numeric("price")?,
        })
    }
}

/// POST body for creating a food; `available` is forced `true`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewFood {
    pub name: String,
    pub image: String,
    pub description: String,
    pub price: f64,
    pub available: bool,
}

impl NewFood {
    pub fn from_draft(draft: &FoodDraft) -> NewFood {
        NewFood {
            name: draft.name.clone(),
            image: draft.image.clone(),
            description: draft.description.clone(),
            price: draft.price,
            available: true,
        }
    }
}
