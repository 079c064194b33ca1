use anyhow::{Context, Result};

use qaboard::AppContext;
use qaboard::guard::GuardState;
use qaboard::routes::Route;
use qaboard::screens::{Notice, Submit};
use qaboard::validation::FieldErrors;

use crate::{
    AdminCommands, AnswerCommands, Commands, ConfigCommands, QuestionCommands, Runtime,
    UserCommands,
};

mod account;
mod admin;
mod config;
mod dispatch;

pub(super) fn handle_command(runtime: &Runtime, command: Commands) -> Result<()> {
    dispatch::handle_command(runtime, command)
}

/// Run `route`'s guard; the command only proceeds when it authorizes.
fn mount(ctx: &AppContext, route: &Route) -> Result<()> {
    let guard = ctx.open(route);
    if guard.state() != GuardState::Authorized {
        let reason = guard.reason().map(|r| r.as_str()).unwrap_or("access denied");
        anyhow::bail!("cannot open {}: {} (run `qaboard login`)", route, reason);
    }
    Ok(())
}

/// Print the notice of a successful action, or turn a failed one into an
/// error.
fn finish(outcome: Submit, notice: Option<&Notice>) -> Result<()> {
    match outcome {
        Submit::Done => {
            if let Some(n) = notice {
                println!("{}", n);
            }
            Ok(())
        }
        Submit::Invalid | Submit::Failed => {
            let msg = notice.map(|n| n.text().to_string()).unwrap_or_default();
            if msg.is_empty() {
                anyhow::bail!("request was not completed");
            }
            anyhow::bail!(msg)
        }
    }
}

fn field_errors(errors: &FieldErrors) -> Result<()> {
    let lines: Vec<String> = errors
        .iter()
        .map(|(field, msg)| format!("  {}: {}", field.as_str(), msg))
        .collect();
    anyhow::bail!("invalid input:\n{}", lines.join("\n"))
}

fn require_yes(yes: bool, what: &str) -> Result<()> {
    if !yes {
        anyhow::bail!("refusing to delete {} without --yes", what);
    }
    Ok(())
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T, what: &str) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).with_context(|| format!("serialize {} json", what))?
    );
    Ok(())
}
