use crate::AppContext;
use crate::remote::{Profile, ProfileUpdate};

use super::{Notice, Submit};

#[derive(Debug)]
pub struct ProfileScreen {
    ctx: AppContext,
    profile: Option<Profile>,
    notice: Option<Notice>,
}

impl ProfileScreen {
    pub fn mount(ctx: AppContext) -> Self {
        let mut screen = Self {
            ctx,
            profile: None,
            notice: None,
        };
        screen.reload();
        screen
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn reload(&mut self) {
        match self.ctx.client().profile() {
            Ok(p) => self.profile = Some(p),
            Err(err) => self.notice = Some(Notice::from_error(&err, "Failed to fetch profile")),
        }
    }

    pub fn update(&mut self, update: &ProfileUpdate) -> Submit {
        if update.is_empty() {
            self.notice = Some(Notice::Error("Nothing to update".to_string()));
            return Submit::Invalid;
        }
        match self.ctx.client().update_profile(update) {
            Ok(resp) => {
                self.notice = Some(Notice::success(
                    resp.msg.unwrap_or_else(|| "Profile updated successfully".to_string()),
                ));
                self.reload();
                Submit::Done
            }
            Err(err) => {
                self.notice = Some(Notice::from_error(&err, "Failed to update profile"));
                Submit::Failed
            }
        }
    }
}
