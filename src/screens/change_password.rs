use crate::AppContext;
use crate::routes::Route;
use crate::validation::{self, Field, FieldErrors};

use super::{Notice, Submit};

#[derive(Debug)]
pub struct ChangePasswordScreen {
    ctx: AppContext,
    current_password: String,
    new_password: String,
    errors: FieldErrors,
    notice: Option<Notice>,
}

impl ChangePasswordScreen {
    pub fn mount(ctx: AppContext) -> Self {
        Self {
            ctx,
            current_password: String::new(),
            new_password: String::new(),
            errors: FieldErrors::default(),
            notice: None,
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn set_current_password(&mut self, value: &str) {
        self.current_password = value.to_string();
        self.errors.set(Field::CurrentPassword, None);
    }

    pub fn set_new_password(&mut self, value: &str) {
        self.new_password = value.to_string();
        self.errors.set(Field::NewPassword, None);
    }

    pub fn submit(&mut self) -> Submit {
        self.notice = None;
        self.errors = validation::validate_password_change(&self.current_password, &self.new_password);
        if !self.errors.is_empty() {
            return Submit::Invalid;
        }
        match self
            .ctx
            .client()
            .change_password(&self.current_password, &self.new_password)
        {
            Ok(resp) => {
                self.notice = Some(Notice::success(
                    resp.msg.unwrap_or_else(|| "Password changed successfully".to_string()),
                ));
                self.current_password.clear();
                self.new_password.clear();
                self.ctx.open(&Route::Profile);
                Submit::Done
            }
            Err(err) => {
                self.notice = Some(Notice::from_error(&err, "Password change failed"));
                Submit::Failed
            }
        }
    }
}
