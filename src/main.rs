mod cli_commands;
mod cli_exec;
mod cli_runtime;
mod cli_subcommands;

pub(crate) use self::cli_commands::Commands;
pub(crate) use self::cli_runtime::Runtime;
pub(crate) use self::cli_subcommands::{
    AdminCommands, AnswerCommands, ConfigCommands, QuestionCommands, UserCommands,
};

fn main() {
    if let Err(err) = cli_runtime::run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
