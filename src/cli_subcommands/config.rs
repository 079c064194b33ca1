use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum ConfigCommands {
    /// Show the effective settings
    Show {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Save the backend base URL
    SetUrl { url: String },

    /// Save the per-request timeout (omit to disable)
    SetTimeout { secs: Option<u64> },
}
