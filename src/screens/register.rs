use std::collections::BTreeSet;

use crate::AppContext;
use crate::model::SessionUser;
use crate::remote::RegisterRequest;
use crate::routes::Route;
use crate::validation::{self, Field, FieldErrors};

use super::{Notice, Submit};

const ALL_FIELDS: [Field; 7] = [
    Field::Username,
    Field::Firstname,
    Field::Lastname,
    Field::Email,
    Field::Password,
    Field::AgreeToTerms,
    Field::AdminSecret,
];

/// Self-service sign-up, optionally as an admin with the shared secret.
///
/// Errors are tracked for every field but only reported for fields the
/// user has touched; submitting touches all of them.
#[derive(Debug)]
pub struct RegisterScreen {
    ctx: AppContext,
    form: RegisterRequest,
    errors: FieldErrors,
    touched: BTreeSet<Field>,
    notice: Option<Notice>,
}

impl RegisterScreen {
    pub fn mount(ctx: AppContext) -> Self {
        Self {
            ctx,
            form: RegisterRequest::default(),
            errors: FieldErrors::default(),
            touched: BTreeSet::new(),
            notice: None,
        }
    }

    pub fn form(&self) -> &RegisterRequest {
        &self.form
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Error for `field`, once it has been touched.
    pub fn error(&self, field: Field) -> Option<&'static str> {
        if self.touched.contains(&field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    pub fn set_text(&mut self, field: Field, value: &str) {
        let value = value.to_string();
        match field {
            Field::Username => self.form.username = value,
            Field::Firstname => self.form.firstname = value,
            Field::Lastname => self.form.lastname = value,
            Field::Email => self.form.email = value,
            Field::Password => self.form.password = value,
            Field::AdminSecret if self.form.is_admin_registration => {
                self.form.admin_secret = Some(value)
            }
            _ => return,
        }
        self.revalidate(field);
    }

    pub fn set_agree_to_terms(&mut self, agreed: bool) {
        self.form.agree_to_terms = agreed;
        self.revalidate(Field::AgreeToTerms);
    }

    pub fn set_admin_registration(&mut self, on: bool) {
        self.form.is_admin_registration = on;
        if !on {
            self.form.admin_secret = None;
        }
        self.revalidate(Field::AdminSecret);
    }

    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
        self.revalidate(field);
    }

    fn revalidate(&mut self, field: Field) {
        self.errors
            .set(field, validation::registration_field_error(&self.form, field));
        self.notice = None;
    }

    pub fn submit(&mut self) -> Submit {
        self.touched.extend(ALL_FIELDS);
        self.errors = validation::validate_registration(&self.form);
        if !self.errors.is_empty() {
            return Submit::Invalid;
        }

        match self.ctx.client().register(&self.form) {
            Ok(resp) => {
                if let Some(token) = resp.token.as_deref().filter(|t| !t.is_empty()) {
                    let user = SessionUser {
                        username: resp.username.clone().unwrap_or_else(|| self.form.username.clone()),
                        user_id: resp.user_id.clone(),
                        is_admin: resp.is_admin,
                    };
                    if let Err(err) = self.ctx.store().set_session(token, user) {
                        tracing::warn!(error = %format!("{:#}", err), "failed to store session");
                    }
                }
                self.notice = Some(Notice::success(if self.form.is_admin_registration {
                    "Admin registration successful!"
                } else {
                    "User registration successful!"
                }));
                self.ctx.open(&Route::Login);
                Submit::Done
            }
            Err(err) => {
                self.notice = Some(Notice::from_error(
                    &err,
                    "Registration failed. Please try again.",
                ));
                Submit::Failed
            }
        }
    }
}
