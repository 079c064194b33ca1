use crate::AppContext;
use crate::model::SessionUser;
use crate::remote::ApiError;
use crate::routes::Route;

use super::Submit;

const INVALID_CREDENTIALS: &str = "Invalid credentials";
const MISSING_FIELDS: &str = "Please provide all required information.";
const GENERIC_FAILURE: &str = "An error occurred. Please try again.";
const WRONG_EMAIL_AND_PASSWORD: &str = "Please enter correct email and password";
const WRONG_PASSWORD: &str = "Please enter correct password";

/// Fields the backend rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InvalidFields {
    pub email: bool,
    pub password: bool,
}

/// Which fields to flag after "Invalid credentials", given what
/// `POST /users/check-email` said about the email (`None` when that call
/// itself failed).
pub fn credential_failure(email_known: Option<bool>) -> (InvalidFields, &'static str) {
    match email_known {
        Some(true) => (
            InvalidFields {
                email: false,
                password: true,
            },
            WRONG_PASSWORD,
        ),
        Some(false) | None => (
            InvalidFields {
                email: true,
                password: true,
            },
            WRONG_EMAIL_AND_PASSWORD,
        ),
    }
}

#[derive(Debug)]
pub struct LoginScreen {
    ctx: AppContext,
    email: String,
    password: String,
    invalid: InvalidFields,
    message: Option<String>,
}

impl LoginScreen {
    /// Mount the login view. With a token already stored, navigate
    /// straight to the home route instead.
    pub fn mount(ctx: AppContext) -> Self {
        let session = ctx.session();
        if session.is_authenticated() {
            ctx.open(&Route::home_for(session.cached_is_admin()));
        }
        Self {
            ctx,
            email: String::new(),
            password: String::new(),
            invalid: InvalidFields::default(),
            message: None,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn invalid(&self) -> InvalidFields {
        self.invalid
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn set_email(&mut self, value: &str) {
        self.email = value.to_string();
        self.invalid.email = false;
        self.message = None;
    }

    pub fn set_password(&mut self, value: &str) {
        self.password = value.to_string();
        self.invalid.password = false;
        self.message = None;
    }

    pub fn submit(&mut self) -> Submit {
        self.invalid = InvalidFields::default();
        self.message = None;

        let email = self.email.trim().to_string();
        if email.is_empty() || self.password.trim().is_empty() {
            self.message = Some(MISSING_FIELDS.to_string());
            return Submit::Invalid;
        }

        let resp = match self.ctx.client().login(&email, &self.password) {
            Ok(resp) => resp,
            Err(err) => {
                self.on_login_error(&email, &err);
                return Submit::Failed;
            }
        };

        let user = SessionUser {
            username: resp.username,
            user_id: resp.user_id,
            is_admin: resp.is_admin,
        };
        if let Err(err) = self.ctx.store().set_session(&resp.token, user) {
            tracing::warn!(error = %format!("{:#}", err), "failed to store session");
            self.message = Some(GENERIC_FAILURE.to_string());
            return Submit::Failed;
        }
        self.password.clear();
        self.ctx.open(&Route::home_for(resp.is_admin));
        Submit::Done
    }

    fn on_login_error(&mut self, email: &str, err: &ApiError) {
        if err.server_message() != Some(INVALID_CREDENTIALS) {
            self.message = Some(err.message_or(GENERIC_FAILURE).to_string());
            return;
        }
        let known = match self.ctx.client().check_email(email) {
            Ok(resp) => Some(resp.exists),
            Err(check_err) => {
                tracing::debug!(error = %check_err, "email check failed");
                None
            }
        };
        let (invalid, message) = credential_failure(known);
        self.invalid = invalid;
        self.message = Some(message.to_string());
    }
}
