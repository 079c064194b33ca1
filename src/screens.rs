//! Screen view-models.
//!
//! A screen owns the form and list state of one view and talks to the
//! backend only through [`crate::remote::ForumClient`]. Access control is
//! not repeated here: screens are mounted after [`crate::guard::Router`]
//! has let the route through.

use crate::remote::ApiError;

mod answers;
mod change_password;
mod dashboard;
mod login;
mod profile;
mod questions;
mod register;
mod register_user;
mod shell;
mod update_user;
mod users;

pub use self::answers::QuestionAnswerListScreen;
pub use self::change_password::ChangePasswordScreen;
pub use self::dashboard::{DashboardScreen, DashboardTab, stat_label};
pub use self::login::{InvalidFields, LoginScreen, credential_failure};
pub use self::profile::ProfileScreen;
pub use self::questions::QuestionManagementScreen;
pub use self::register::RegisterScreen;
pub use self::register_user::AdminUserRegistrationScreen;
pub use self::shell::AppShell;
pub use self::update_user::UpdateUserScreen;
pub use self::users::{UsersManagementScreen, UsersPanel, UsersTable, user_matches};

/// Banner shown above a view after an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn success(msg: impl Into<String>) -> Self {
        Notice::Success(msg.into())
    }

    /// Server message verbatim, or `fallback`.
    pub fn from_error(err: &ApiError, fallback: &str) -> Self {
        tracing::debug!(error = %err, "action failed");
        Notice::Error(err.message_or(fallback).to_string())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }

    pub fn text(&self) -> &str {
        match self {
            Notice::Success(m) | Notice::Error(m) => m,
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

/// Outcome of submitting a form or running a row action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submit {
    /// Rejected locally; nothing was sent.
    Invalid,
    /// Sent, and the backend (or the network) refused it.
    Failed,
    Done,
}

impl Submit {
    pub fn is_done(&self) -> bool {
        *self == Submit::Done
    }
}

#[cfg(test)]
#[path = "tests/screens_tests.rs"]
mod tests;
