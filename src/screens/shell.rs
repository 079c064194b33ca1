use anyhow::Result;

use crate::AppContext;
use crate::navigation::ENTRY_PATH;
use crate::remote::CurrentUser;
use crate::routes::Route;

const RESET_PASSWORD_PREFIX: &str = "/reset-password";

/// Application frame: startup identity check plus the header's actions.
#[derive(Debug)]
pub struct AppShell {
    ctx: AppContext,
    current_user: Option<CurrentUser>,
}

impl AppShell {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            current_user: None,
        }
    }

    pub fn current_user(&self) -> Option<&CurrentUser> {
        self.current_user.as_ref()
    }

    /// Ask the backend who the stored token belongs to.
    ///
    /// Does nothing without a token or on a password-reset route. Any failure
    /// sends the user back to the entry route.
    pub fn check_user(&mut self) {
        if self.ctx.location().starts_with(RESET_PASSWORD_PREFIX) {
            return;
        }
        if !self.ctx.session().is_authenticated() {
            return;
        }
        match self.ctx.client().check_user() {
            Ok(resp) => self.current_user = resp.current_user(),
            Err(err) => {
                tracing::debug!(error = %err, "startup user check failed");
                self.current_user = None;
                if !self.ctx.navigator().is_at_entry() {
                    self.ctx.navigator().navigate(ENTRY_PATH);
                }
            }
        }
    }

    /// Where the header's home link points for the current session.
    pub fn home_target(&self) -> Route {
        Route::home_for(self.ctx.session().cached_is_admin())
    }

    pub fn logout(&mut self) -> Result<()> {
        self.ctx.store().clear_session()?;
        self.current_user = None;
        self.ctx.navigator().navigate(ENTRY_PATH);
        Ok(())
    }
}
