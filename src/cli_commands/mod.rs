use clap::Subcommand;

use crate::{AdminCommands, ConfigCommands};

pub(crate) mod account;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Log in and store the session
    Login(account::LoginArgs),

    /// Create an account
    Register(account::RegisterArgs),

    /// Clear the stored session
    Logout,

    /// Show the stored session
    Whoami(account::WhoamiArgs),

    /// Show or update your profile
    Profile(account::ProfileArgs),

    /// Change your password
    Password(account::PasswordArgs),

    /// Check whether the current session may open a route
    Route(account::RouteArgs),

    /// Administration (admin accounts only)
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },

    /// Show or change client settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}
