//! Storefront profile editing modal.
//!
//! Saving is simulated: after [`crate::state::PROFILE_SAVE_DELAY`] the save succeeds with
//! probability [`SAVE_SUCCESS_RATE`], and a successful save closes the modal after
//! [`crate::state::PROFILE_CLOSE_DELAY`].

use chrono::NaiveDate;
use rand::Rng;

use crate::{
    model::member::MemberProfile,
    state::{
        registration::{check_documents, Field, FieldErrors},
        StatusMessage,
    },
};

pub const SAVE_SUCCESS_RATE: f64 = 0.9;
pub const PROFILE_SAVED: &str = "¡Perfil actualizado con éxito!";
pub const PROFILE_SAVE_ERROR: &str = "Error al guardar el perfil. Inténtalo de nuevo.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileEditor {
    pub draft: MemberProfile,
    /// RUC input, stored in the draft once the documents validate
    pub ruc: String,
    pub company_name: String,
    errors: FieldErrors,
    saving: bool,
    status: Option<StatusMessage>,
}

impl ProfileEditor {
    pub fn open(profile: &MemberProfile) -> Self {
        Self {
            draft: profile.clone(),
            ruc: profile.ruc.clone().unwrap_or_default(),
            company_name: profile.company_name.clone().unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Value for the `<input type="date">`
    pub fn birth_date_input(&self) -> String {
        self.draft
            .birth_date
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    /// Clears the birth date when `value` is not a date
    pub fn set_birth_date(&mut self, value: &str) {
        self.draft.birth_date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok();
    }

    /// Writes a document input and clears that field's error
    pub fn set_document(&mut self, field: Field, value: String) {
        match field {
            Field::Dni => self.draft.dni = value,
            Field::Ruc => self.ruc = value,
            Field::CompanyName => self.company_name = value,
            _ => return,
        }
        self.errors.clear(field);
    }

    /// Validates the documents and enters the saving state
    pub fn start(&mut self) -> bool {
        self.status = None;

        let mut errors = FieldErrors::default();
        let (dni, ruc, company_name) =
            check_documents(&self.draft.dni, &self.ruc, &self.company_name, &mut errors);
        if !errors.is_empty() {
            self.status = Some(StatusMessage::error(errors.to_string()));
            self.errors = errors;
            return false;
        }

        self.draft.dni = dni;
        self.draft.ruc = ruc;
        self.draft.company_name = company_name;
        self.errors = errors;
        self.saving = true;
        true
    }

    /// Resolves the simulated save, returning the profile to store on success
    pub fn finish_save<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<MemberProfile> {
        self.saving = false;

        if rng.random_bool(SAVE_SUCCESS_RATE) {
            self.status = Some(StatusMessage::success(PROFILE_SAVED));
            Some(self.draft.clone())
        } else {
            self.status = Some(StatusMessage::error(PROFILE_SAVE_ERROR));
            None
        }
    }
}
