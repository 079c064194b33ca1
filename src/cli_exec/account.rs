use serde::Serialize;
use time::format_description::well_known::Rfc3339;

use qaboard::remote::ProfileUpdate;
use qaboard::screens::{
    AppShell, ChangePasswordScreen, LoginScreen, ProfileScreen, RegisterScreen,
};
use qaboard::validation::Field;

use crate::cli_commands::account::{ProfileArgs, RegisterArgs};

use super::*;

pub(super) fn handle_login_command(ctx: &AppContext, email: &str, password: &str) -> Result<()> {
    let mut screen = LoginScreen::mount(ctx.clone());
    let session = ctx.session();
    if session.is_authenticated() && !ctx.navigator().is_at_entry() {
        let name = session.user.map(|u| u.username).unwrap_or_default();
        println!(
            "already logged in as {} (run `qaboard logout` first); home: {}",
            name,
            ctx.location()
        );
        return Ok(());
    }

    screen.set_email(email);
    screen.set_password(password);
    match screen.submit() {
        Submit::Done => {
            let session = ctx.session();
            let name = session.user.map(|u| u.username).unwrap_or_default();
            println!("logged in as {}", name);
            println!("home: {}", ctx.location());
            Ok(())
        }
        Submit::Invalid | Submit::Failed => {
            let invalid = screen.invalid();
            let mut fields = Vec::new();
            if invalid.email {
                fields.push("email");
            }
            if invalid.password {
                fields.push("password");
            }
            let msg = screen.message().unwrap_or("login failed");
            if fields.is_empty() {
                anyhow::bail!("{}", msg);
            }
            anyhow::bail!("{} (check: {})", msg, fields.join(", "))
        }
    }
}

pub(super) fn handle_register_command(ctx: &AppContext, args: RegisterArgs) -> Result<()> {
    mount(ctx, &Route::Register)?;
    let mut screen = RegisterScreen::mount(ctx.clone());
    screen.set_text(Field::Username, &args.username);
    screen.set_text(Field::Firstname, &args.firstname);
    screen.set_text(Field::Lastname, &args.lastname);
    screen.set_text(Field::Email, &args.email);
    screen.set_text(Field::Password, &args.password);
    screen.set_agree_to_terms(args.agree_to_terms);
    if let Some(secret) = args.admin_secret.as_deref() {
        screen.set_admin_registration(true);
        screen.set_text(Field::AdminSecret, secret);
    }

    let outcome = screen.submit();
    if outcome == Submit::Invalid {
        return field_errors(screen.errors());
    }
    finish(outcome, screen.notice())
}

pub(super) fn handle_logout_command(ctx: &AppContext) -> Result<()> {
    AppShell::new(ctx.clone()).logout()?;
    println!("logged out");
    Ok(())
}

#[derive(Serialize)]
struct WhoamiOutput {
    logged_in: bool,
    username: Option<String>,
    user_id: Option<String>,
    cached_admin: bool,
    token_admin: Option<bool>,
    expires_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    remote_username: Option<String>,
}

pub(super) fn handle_whoami_command(ctx: &AppContext, remote: bool, json: bool) -> Result<()> {
    let session = ctx.session();
    let claims = match session.claims() {
        Some(Ok(c)) => Some(c),
        Some(Err(err)) => {
            tracing::debug!(error = %err, "stored token does not decode");
            None
        }
        None => None,
    };
    let expires_at = match claims.as_ref().and_then(|c| c.expires_at()) {
        Some(at) => Some(at.format(&Rfc3339).context("format token expiry")?),
        None => None,
    };

    let mut remote_username = None;
    if remote && session.is_authenticated() {
        let mut shell = AppShell::new(ctx.clone());
        shell.check_user();
        match shell.current_user() {
            Some(u) => remote_username = u.username.clone(),
            None => anyhow::bail!("backend did not recognize the stored session"),
        }
    }

    let out = WhoamiOutput {
        logged_in: session.is_authenticated(),
        username: session.user.as_ref().map(|u| u.username.clone()),
        user_id: session.user.as_ref().and_then(|u| u.user_id.clone()),
        cached_admin: session.cached_is_admin(),
        token_admin: claims.as_ref().map(|c| c.is_admin),
        expires_at,
        remote_username,
    };
    if json {
        return print_json(&out, "whoami");
    }
    if !out.logged_in {
        println!("not logged in");
        return Ok(());
    }
    println!("user: {}", out.username.as_deref().unwrap_or("(unknown)"));
    if let Some(id) = &out.user_id {
        println!("user_id: {}", id);
    }
    match out.token_admin {
        Some(admin) => println!("admin: {}", admin),
        None => println!("admin: unknown (token does not decode)"),
    }
    if let Some(at) = &out.expires_at {
        println!("expires_at: {}", at);
    }
    if let Some(name) = &out.remote_username {
        println!("backend user: {}", name);
    }
    Ok(())
}

pub(super) fn handle_profile_command(ctx: &AppContext, args: ProfileArgs) -> Result<()> {
    mount(ctx, &Route::Profile)?;
    let mut screen = ProfileScreen::mount(ctx.clone());
    let update = ProfileUpdate {
        user_name: args.username,
        first_name: args.first_name,
        last_name: args.last_name,
        email: args.email,
    };
    if !update.is_empty() {
        let outcome = screen.update(&update);
        finish(outcome, screen.notice())?;
    } else if let Some(n) = screen.notice().filter(|n| n.is_error()) {
        anyhow::bail!("{}", n);
    }

    let Some(profile) = screen.profile() else {
        anyhow::bail!("profile unavailable");
    };
    if args.json {
        return print_json(profile, "profile");
    }
    let show = |v: &Option<String>| v.clone().unwrap_or_default();
    println!("username: {}", show(&profile.user_name));
    println!("name: {} {}", show(&profile.first_name), show(&profile.last_name));
    println!("email: {}", show(&profile.email));
    Ok(())
}

pub(super) fn handle_password_command(ctx: &AppContext, current: &str, new: &str) -> Result<()> {
    mount(ctx, &Route::ChangePassword)?;
    let mut screen = ChangePasswordScreen::mount(ctx.clone());
    screen.set_current_password(current);
    screen.set_new_password(new);
    let outcome = screen.submit();
    if outcome == Submit::Invalid {
        return field_errors(screen.errors());
    }
    finish(outcome, screen.notice())
}

pub(super) fn handle_route_command(ctx: &AppContext, path: &str) -> Result<()> {
    let route: Route = path.parse()?;
    let guard = ctx.open(&route);
    match guard.state() {
        GuardState::Authorized => println!("authorized: {}", ctx.location()),
        _ => println!(
            "denied: {} ({}); redirected to {}",
            route,
            guard.reason().map(|r| r.as_str()).unwrap_or("unknown"),
            ctx.location()
        ),
    }
    Ok(())
}
