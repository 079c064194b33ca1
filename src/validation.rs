//! Client-side form checks, run before anything is submitted.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::remote::{AdminRegisterRequest, RegisterRequest};

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("valid regex"));
static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z]+$").expect("valid regex"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));
static UPPER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").expect("valid regex"));
static LOWER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]").expect("valid regex"));
static DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").expect("valid regex"));
static SPECIAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9]").expect("valid regex"));

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Username,
    Firstname,
    Lastname,
    Email,
    Password,
    AgreeToTerms,
    AdminSecret,
    CurrentPassword,
    NewPassword,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Firstname => "firstname",
            Field::Lastname => "lastname",
            Field::Email => "email",
            Field::Password => "password",
            Field::AgreeToTerms => "agreeToTerms",
            Field::AdminSecret => "adminSecret",
            Field::CurrentPassword => "currentPassword",
            Field::NewPassword => "newPassword",
        }
    }
}

/// Per-field error messages. A field without an entry is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, &'static str>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Record the outcome of one field's check; `None` clears the field.
    pub fn set(&mut self, field: Field, error: Option<&'static str>) {
        match error {
            Some(e) => {
                self.errors.insert(field, e);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.errors.iter().map(|(f, e)| (*f, *e))
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

fn char_len(v: &str) -> usize {
    v.chars().count()
}

pub fn username_error(v: &str) -> Option<&'static str> {
    if v.trim().is_empty() {
        Some("Username is required")
    } else if !(3..=20).contains(&char_len(v)) {
        Some("Username must be between 3-20 characters")
    } else if !USERNAME_RE.is_match(v) {
        Some("Only letters, numbers and underscores allowed")
    } else {
        None
    }
}

pub fn firstname_error(v: &str) -> Option<&'static str> {
    if v.trim().is_empty() {
        Some("First name is required")
    } else if !(2..=50).contains(&char_len(v)) {
        Some("First name must be between 2-50 characters")
    } else if !NAME_RE.is_match(v) {
        Some("First name can only contain letters")
    } else {
        None
    }
}

pub fn lastname_error(v: &str) -> Option<&'static str> {
    if v.trim().is_empty() {
        Some("Last name is required")
    } else if !(2..=50).contains(&char_len(v)) {
        Some("Last name must be between 2-50 characters")
    } else if !NAME_RE.is_match(v) {
        Some("Last name can only contain letters")
    } else {
        None
    }
}

pub fn email_error(v: &str) -> Option<&'static str> {
    if v.trim().is_empty() {
        Some("Email is required")
    } else if !EMAIL_RE.is_match(v) {
        Some("Please provide a valid email")
    } else {
        None
    }
}

pub fn password_error(v: &str) -> Option<&'static str> {
    if v.is_empty() {
        Some("Password is required")
    } else if char_len(v) < MIN_PASSWORD_LEN {
        Some("Password must be at least 8 characters")
    } else if !UPPER_RE.is_match(v) {
        Some("At least one uppercase letter required")
    } else if !LOWER_RE.is_match(v) {
        Some("At least one lowercase letter required")
    } else if !DIGIT_RE.is_match(v) {
        Some("At least one number required")
    } else if !SPECIAL_RE.is_match(v) {
        Some("At least one special character required")
    } else {
        None
    }
}

pub fn terms_error(agreed: bool) -> Option<&'static str> {
    (!agreed).then_some("You must agree to the terms")
}

pub fn admin_secret_error(is_admin_registration: bool, secret: &str) -> Option<&'static str> {
    (is_admin_registration && secret.trim().is_empty()).then_some("Admin secret is required")
}

pub fn current_password_error(v: &str) -> Option<&'static str> {
    v.is_empty().then_some("Current password is required")
}

pub fn new_password_error(v: &str) -> Option<&'static str> {
    if v.is_empty() {
        Some("New password is required")
    } else if char_len(v) < MIN_PASSWORD_LEN {
        Some("Password must be at least 8 characters")
    } else {
        None
    }
}

/// Check one field of a self-service registration form.
pub fn registration_field_error(form: &RegisterRequest, field: Field) -> Option<&'static str> {
    match field {
        Field::Username => username_error(&form.username),
        Field::Firstname => firstname_error(&form.firstname),
        Field::Lastname => lastname_error(&form.lastname),
        Field::Email => email_error(&form.email),
        Field::Password => password_error(&form.password),
        Field::AgreeToTerms => terms_error(form.agree_to_terms),
        Field::AdminSecret => admin_secret_error(
            form.is_admin_registration,
            form.admin_secret.as_deref().unwrap_or_default(),
        ),
        Field::CurrentPassword | Field::NewPassword => None,
    }
}

pub fn validate_registration(form: &RegisterRequest) -> FieldErrors {
    let mut fields = vec![
        Field::Username,
        Field::Firstname,
        Field::Lastname,
        Field::Email,
        Field::Password,
        Field::AgreeToTerms,
    ];
    if form.is_admin_registration {
        fields.push(Field::AdminSecret);
    }
    let mut errors = FieldErrors::default();
    for f in fields {
        errors.set(f, registration_field_error(form, f));
    }
    errors
}

pub fn admin_registration_field_error(
    form: &AdminRegisterRequest,
    field: Field,
) -> Option<&'static str> {
    match field {
        Field::Username => username_error(&form.username),
        Field::Firstname => firstname_error(&form.firstname),
        Field::Lastname => lastname_error(&form.lastname),
        Field::Email => email_error(&form.email),
        Field::Password => password_error(&form.password),
        _ => None,
    }
}

pub fn validate_admin_registration(form: &AdminRegisterRequest) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for f in [
        Field::Username,
        Field::Firstname,
        Field::Lastname,
        Field::Email,
        Field::Password,
    ] {
        errors.set(f, admin_registration_field_error(form, f));
    }
    errors
}

pub fn validate_password_change(current: &str, new: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.set(Field::CurrentPassword, current_password_error(current));
    errors.set(Field::NewPassword, new_password_error(new));
    errors
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;
