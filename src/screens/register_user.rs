use std::collections::BTreeSet;

use crate::AppContext;
use crate::remote::AdminRegisterRequest;
use crate::routes::Route;
use crate::validation::{self, Field, FieldErrors};

use super::{Notice, Submit};

const FIELDS: [Field; 5] = [
    Field::Username,
    Field::Firstname,
    Field::Lastname,
    Field::Email,
    Field::Password,
];

/// Admin-side account creation. Same field rules as sign-up, without terms
/// or the admin secret.
#[derive(Debug)]
pub struct AdminUserRegistrationScreen {
    ctx: AppContext,
    form: AdminRegisterRequest,
    errors: FieldErrors,
    touched: BTreeSet<Field>,
    notice: Option<Notice>,
}

impl AdminUserRegistrationScreen {
    pub fn mount(ctx: AppContext) -> Self {
        Self {
            ctx,
            form: AdminRegisterRequest::default(),
            errors: FieldErrors::default(),
            touched: BTreeSet::new(),
            notice: None,
        }
    }

    pub fn form(&self) -> &AdminRegisterRequest {
        &self.form
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

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
            _ => return,
        }
        self.touched.insert(field);
        self.errors
            .set(field, validation::admin_registration_field_error(&self.form, field));
    }

    pub fn submit(&mut self) -> Submit {
        self.touched.extend(FIELDS);
        self.errors = validation::validate_admin_registration(&self.form);
        if !self.errors.is_empty() {
            return Submit::Invalid;
        }
        match self.ctx.client().register_user(&self.form) {
            Ok(_) => {
                self.notice = Some(Notice::success("User registered successfully!"));
                self.ctx.open(&Route::AdminUsers);
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
