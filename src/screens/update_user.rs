use crate::AppContext;
use crate::remote::AdminUserUpdate;
use crate::routes::Route;

use super::{Notice, Submit};

const UPDATED: &str = "User updated successfully";

/// Edit form for one user, loaded from `GET /admin/users/{id}`.
#[derive(Debug)]
pub struct UpdateUserScreen {
    ctx: AppContext,
    user_id: String,
    form: AdminUserUpdate,
    loaded: bool,
    notice: Option<Notice>,
}

impl UpdateUserScreen {
    pub fn mount(ctx: AppContext, user_id: &str) -> Self {
        let mut screen = Self {
            ctx,
            user_id: user_id.to_string(),
            form: AdminUserUpdate::default(),
            loaded: false,
            notice: None,
        };
        screen.load();
        screen
    }

    fn load(&mut self) {
        match self.ctx.client().get_user(&self.user_id) {
            Ok(Some(user)) => {
                self.form = AdminUserUpdate {
                    user_name: user.user_name,
                    first_name: user.first_name,
                    last_name: user.last_name,
                    email: user.email,
                };
                self.loaded = true;
            }
            Ok(None) => {
                self.notice = Some(Notice::Error("User data not found in response".to_string()))
            }
            Err(err) => self.notice = Some(Notice::from_error(&err, "Failed to fetch user data")),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn form(&self) -> &AdminUserUpdate {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut AdminUserUpdate {
        &mut self.form
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Only the backend's exact confirmation message counts as success.
    pub fn submit(&mut self) -> Submit {
        match self.ctx.client().update_user(&self.user_id, &self.form) {
            Ok(resp) if resp.msg.as_deref() == Some(UPDATED) => {
                self.notice = Some(Notice::success(UPDATED));
                self.ctx.open(&Route::AdminUsers);
                Submit::Done
            }
            Ok(resp) => {
                tracing::debug!(msg = ?resp.msg, "unexpected update response");
                self.notice = Some(Notice::Error("Unexpected response from server".to_string()));
                Submit::Failed
            }
            Err(err) => {
                self.notice = Some(Notice::from_error(&err, "Failed to update user"));
                Submit::Failed
            }
        }
    }
}
