//! Storefront member registration form.
//!
//! Registration is simulated: a valid form yields a [`MemberProfile`] after
//! [`crate::state::REGISTRATION_DELAY`] without contacting any service.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use thiserror::Error;

use crate::{
    model::member::MemberProfile,
    state::{
        validation::{is_digits, is_valid_email, non_empty},
        StatusMessage,
    },
};

pub const FORM_HAS_ERRORS: &str = "Por favor, corrige los errores del formulario.";
pub const REGISTRATION_SUCCESS: &str = "¡Registro exitoso! Redirigiendo...";

const MIN_PASSWORD_LEN: usize = 6;
const DNI_LEN: usize = 8;
const RUC_LEN: usize = 11;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
    Phone,
    Address,
    BirthDate,
    Dni,
    Ruc,
    CompanyName,
}

/// Inline message per invalid field
#[derive(Error, Clone, Debug, Default, PartialEq, Eq)]
#[error("Por favor, corrige los errores del formulario.")]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn set(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }

    pub(crate) fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
    pub address: String,
    /// `<input type="date">` value
    pub birth_date: String,
    pub dni: String,
    pub ruc: String,
    pub company_name: String,
    errors: FieldErrors,
    status: Option<StatusMessage>,
    loading: bool,
}

impl RegistrationForm {
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Writes an input value and clears that field's error
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
            Field::Phone => &mut self.phone,
            Field::Address => &mut self.address,
            Field::BirthDate => &mut self.birth_date,
            Field::Dni => &mut self.dni,
            Field::Ruc => &mut self.ruc,
            Field::CompanyName => &mut self.company_name,
        };
        *slot = value;

        self.errors.clear(field);
    }

    pub fn validate(&self) -> Result<MemberProfile, FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.first_name.trim().is_empty() {
            errors.set(Field::FirstName, "El nombre es obligatorio.");
        }
        if self.last_name.trim().is_empty() {
            errors.set(Field::LastName, "El apellido es obligatorio.");
        }

        if self.email.trim().is_empty() {
            errors.set(Field::Email, "El email es obligatorio.");
        } else if !is_valid_email(&self.email) {
            errors.set(Field::Email, "El email no es válido.");
        }

        if self.password.is_empty() {
            errors.set(Field::Password, "La contraseña es obligatoria.");
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.set(
                Field::Password,
                "La contraseña debe tener al menos 6 caracteres.",
            );
        }
        if self.password != self.confirm_password {
            errors.set(Field::ConfirmPassword, "Las contraseñas no coinciden.");
        }

        if self.phone.trim().is_empty() {
            errors.set(Field::Phone, "El teléfono es obligatorio.");
        }
        if self.address.trim().is_empty() {
            errors.set(Field::Address, "La dirección es obligatoria.");
        }

        let birth_date = if self.birth_date.trim().is_empty() {
            errors.set(Field::BirthDate, "La fecha de nacimiento es obligatoria.");
            None
        } else {
            let parsed = NaiveDate::parse_from_str(self.birth_date.trim(), "%Y-%m-%d").ok();
            if parsed.is_none() {
                errors.set(Field::BirthDate, "La fecha de nacimiento no es válida.");
            }
            parsed
        };

        let (dni, ruc, company_name) =
            check_documents(&self.dni, &self.ruc, &self.company_name, &mut errors);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(MemberProfile {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            birth_date,
            dni,
            ruc,
            company_name,
        })
    }

    /// Validates and enters the loading state, returning the profile to hand over after the delay
    pub fn start(&mut self) -> Option<MemberProfile> {
        self.status = None;

        match self.validate() {
            Ok(profile) => {
                self.errors = FieldErrors::default();
                self.loading = true;
                Some(profile)
            }
            Err(errors) => {
                self.status = Some(StatusMessage::error(errors.to_string()));
                self.errors = errors;
                None
            }
        }
    }

    pub fn finish(&mut self) {
        self.loading = false;
        self.status = Some(StatusMessage::success(REGISTRATION_SUCCESS));
    }
}

/// Checks the DNI and the RUC/Razón Social pair, returning their trimmed values
pub(crate) fn check_documents(
    dni: &str,
    ruc: &str,
    company_name: &str,
    errors: &mut FieldErrors,
) -> (String, Option<String>, Option<String>) {
    let dni = dni.trim();
    if dni.is_empty() {
        errors.set(Field::Dni, "El DNI es obligatorio.");
    } else if !is_digits(dni, DNI_LEN) {
        errors.set(Field::Dni, "El DNI debe tener 8 dígitos numéricos.");
    }

    let ruc = non_empty(ruc);
    let company_name = non_empty(company_name);
    match (&ruc, &company_name) {
        (Some(ruc), company) => {
            if !is_digits(ruc, RUC_LEN) {
                errors.set(Field::Ruc, "El RUC debe tener 11 dígitos numéricos.");
            }
            if company.is_none() {
                errors.set(
                    Field::CompanyName,
                    "La Razón Social es obligatoria si se ingresa RUC.",
                );
            }
        }
        (None, Some(_)) => {
            errors.set(Field::Ruc, "El RUC es obligatorio si se ingresa Razón Social.");
        }
        (None, None) => {}
    }

    (dni.to_string(), ruc, company_name)
}
