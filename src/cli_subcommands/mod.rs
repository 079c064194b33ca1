mod admin;
mod config;

pub(crate) use self::admin::{AdminCommands, AnswerCommands, QuestionCommands, UserCommands};
pub(crate) use self::config::ConfigCommands;
