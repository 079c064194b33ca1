use super::account::{
    handle_login_command, handle_logout_command, handle_password_command,
    handle_profile_command, handle_register_command, handle_route_command,
    handle_whoami_command,
};
use super::admin::handle_admin_command;
use super::config::handle_config_command;
use super::*;

fn with_context<T>(runtime: &Runtime, f: impl FnOnce(&AppContext) -> Result<T>) -> Result<T> {
    let ctx = runtime.context()?;
    f(&ctx)
}

pub(super) fn handle_command(runtime: &Runtime, command: Commands) -> Result<()> {
    match command {
        Commands::Login(args) => {
            with_context(runtime, |ctx| handle_login_command(ctx, &args.email, &args.password))?
        }
        Commands::Register(args) => with_context(runtime, |ctx| handle_register_command(ctx, args))?,
        Commands::Logout => with_context(runtime, handle_logout_command)?,
        Commands::Whoami(args) => {
            with_context(runtime, |ctx| handle_whoami_command(ctx, args.remote, args.json))?
        }
        Commands::Profile(args) => with_context(runtime, |ctx| handle_profile_command(ctx, args))?,
        Commands::Password(args) => with_context(runtime, |ctx| {
            handle_password_command(ctx, &args.current, &args.new)
        })?,
        Commands::Route(args) => with_context(runtime, |ctx| handle_route_command(ctx, &args.path))?,
        Commands::Admin { command } => {
            with_context(runtime, |ctx| handle_admin_command(ctx, command))?
        }
        Commands::Config { command } => handle_config_command(runtime, command)?,
    }
    Ok(())
}
