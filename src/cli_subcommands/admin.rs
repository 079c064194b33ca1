use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum AdminCommands {
    /// Show system stats and recent questions
    Dashboard {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// List users
    Users {
        /// Filter by username, email or full name
        #[arg(long)]
        search: Option<String>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect or change one user
    User {
        #[command(subcommand)]
        command: UserCommands,
    },

    /// Create a user account
    RegisterUser {
        #[arg(long)]
        username: String,
        #[arg(long)]
        firstname: String,
        #[arg(long)]
        lastname: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "QABOARD_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Manage questions
    Questions {
        #[command(subcommand)]
        command: QuestionCommands,
    },

    /// Manage answers
    Answers {
        #[command(subcommand)]
        command: AnswerCommands,
    },
}

#[derive(Subcommand)]
pub(crate) enum UserCommands {
    /// Show a user
    Show {
        id: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit a user's name or email
    Update {
        id: String,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },

    /// Grant admin rights
    Promote { id: String },

    /// Revoke admin rights
    Demote { id: String },

    /// Delete a user
    Delete {
        id: String,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub(crate) enum QuestionCommands {
    /// List questions
    List {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit a question's title or description
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a question and its answers
    Delete {
        id: String,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub(crate) enum AnswerCommands {
    /// List questions with their answers
    List {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Replace an answer's text
    Update {
        id: String,
        #[arg(long)]
        text: String,
    },

    /// Delete an answer
    Delete {
        id: String,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}
