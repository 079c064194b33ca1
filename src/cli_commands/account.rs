use clap::Args;

#[derive(Args)]
pub(crate) struct LoginArgs {
    #[arg(long)]
    pub(crate) email: String,
    #[arg(long, env = "QABOARD_PASSWORD", hide_env_values = true)]
    pub(crate) password: String,
}

#[derive(Args)]
pub(crate) struct RegisterArgs {
    #[arg(long)]
    pub(crate) username: String,
    #[arg(long)]
    pub(crate) firstname: String,
    #[arg(long)]
    pub(crate) lastname: String,
    #[arg(long)]
    pub(crate) email: String,
    #[arg(long, env = "QABOARD_PASSWORD", hide_env_values = true)]
    pub(crate) password: String,
    /// Accept the terms of service
    #[arg(long)]
    pub(crate) agree_to_terms: bool,
    /// Register as an admin (requires the shared admin secret)
    #[arg(long)]
    pub(crate) admin_secret: Option<String>,
}

#[derive(Args)]
pub(crate) struct WhoamiArgs {
    /// Ask the backend who the token belongs to
    #[arg(long)]
    pub(crate) remote: bool,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct ProfileArgs {
    #[arg(long)]
    pub(crate) username: Option<String>,
    #[arg(long)]
    pub(crate) first_name: Option<String>,
    #[arg(long)]
    pub(crate) last_name: Option<String>,
    #[arg(long)]
    pub(crate) email: Option<String>,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct PasswordArgs {
    #[arg(long)]
    pub(crate) current: String,
    #[arg(long)]
    pub(crate) new: String,
}

#[derive(Args)]
pub(crate) struct RouteArgs {
    /// Route path, e.g. /admin/users
    pub(crate) path: String,
}
