use qaboard::remote::{AdminRegisterRequest, AdminUser};
use qaboard::screens::{
    AdminUserRegistrationScreen, DashboardScreen, QuestionAnswerListScreen,
    QuestionManagementScreen, UpdateUserScreen, UsersManagementScreen, stat_label,
};
use qaboard::validation::Field;

use super::*;

pub(super) fn handle_admin_command(ctx: &AppContext, command: AdminCommands) -> Result<()> {
    match command {
        AdminCommands::Dashboard { json } => handle_dashboard(ctx, json),
        AdminCommands::Users { search, json } => handle_users(ctx, search.as_deref(), json),
        AdminCommands::User { command } => handle_user_command(ctx, command),
        AdminCommands::RegisterUser {
            username,
            firstname,
            lastname,
            email,
            password,
        } => handle_register_user(
            ctx,
            AdminRegisterRequest {
                username,
                firstname,
                lastname,
                email,
                password,
            },
        ),
        AdminCommands::Questions { command } => handle_question_command(ctx, command),
        AdminCommands::Answers { command } => handle_answer_command(ctx, command),
    }
}

fn handle_dashboard(ctx: &AppContext, json: bool) -> Result<()> {
    mount(ctx, &Route::AdminDashboard)?;
    let screen = DashboardScreen::mount(ctx.clone());
    if json {
        return print_json(
            &serde_json::json!({
                "stats": screen.stats(),
                "recent_questions": screen.recent_questions(),
            }),
            "dashboard",
        );
    }

    let stats = screen.stats();
    println!("Total Users: {}", stat_label(stats.total_users));
    println!("Total Questions: {}", stat_label(stats.total_questions));
    println!("Total Answers: {}", stat_label(stats.total_answers));
    println!("Answer Ratings: {}", stat_label(stats.total_ratings));
    println!("Active Reports: {}", stat_label(stats.active_reports));
    println!();
    if screen.recent_questions().is_empty() {
        println!("No recent questions");
    }
    for q in screen.recent_questions() {
        println!(
            "{} {} (asked by {}{})",
            q.id,
            q.title,
            q.user_name.as_deref().unwrap_or("unknown"),
            q.created_at
                .as_deref()
                .map(|at| format!(", {}", at))
                .unwrap_or_default()
        );
    }
    Ok(())
}

fn print_user_row(u: &AdminUser) {
    println!(
        "{} {} {} <{}>{}",
        u.user_id,
        u.user_name,
        u.full_name(),
        u.email,
        if u.is_admin { " [admin]" } else { "" }
    );
}

fn handle_users(ctx: &AppContext, search: Option<&str>, json: bool) -> Result<()> {
    mount(ctx, &Route::AdminUsers)?;
    let mut screen = UsersManagementScreen::mount(ctx.clone());
    if let Some(n) = screen.panel().notice().filter(|n| n.is_error()) {
        anyhow::bail!("{}", n);
    }
    if let Some(q) = search {
        screen.panel_mut().search(q);
    }
    let rows = screen.panel().table().visible();
    if json {
        return print_json(&rows, "users");
    }
    println!("User Management ({})", rows.len());
    if rows.is_empty() && search.is_some() {
        println!("No users match your search");
    }
    for u in rows {
        print_user_row(u);
    }
    Ok(())
}

fn handle_user_command(ctx: &AppContext, command: UserCommands) -> Result<()> {
    match command {
        UserCommands::Show { id, json } => {
            mount(ctx, &Route::AdminUser(id.clone()))?;
            let screen = UpdateUserScreen::mount(ctx.clone(), &id);
            if !screen.is_loaded() {
                let msg = screen.notice().map(|n| n.to_string()).unwrap_or_default();
                anyhow::bail!("{}", msg);
            }
            if json {
                return print_json(screen.form(), "user");
            }
            let f = screen.form();
            println!("username: {}", f.user_name);
            println!("name: {} {}", f.first_name, f.last_name);
            println!("email: {}", f.email);
            Ok(())
        }
        UserCommands::Update {
            id,
            username,
            first_name,
            last_name,
            email,
        } => {
            mount(ctx, &Route::AdminUser(id.clone()))?;
            let mut screen = UpdateUserScreen::mount(ctx.clone(), &id);
            if !screen.is_loaded() {
                let msg = screen.notice().map(|n| n.to_string()).unwrap_or_default();
                anyhow::bail!("{}", msg);
            }
            let form = screen.form_mut();
            if let Some(v) = username {
                form.user_name = v;
            }
            if let Some(v) = first_name {
                form.first_name = v;
            }
            if let Some(v) = last_name {
                form.last_name = v;
            }
            if let Some(v) = email {
                form.email = v;
            }
            let outcome = screen.submit();
            finish(outcome, screen.notice())
        }
        UserCommands::Promote { id } => set_admin(ctx, &id, true),
        UserCommands::Demote { id } => set_admin(ctx, &id, false),
        UserCommands::Delete { id, yes } => {
            require_yes(yes, &format!("user {}", id))?;
            mount(ctx, &Route::AdminUsers)?;
            let mut screen = UsersManagementScreen::mount(ctx.clone());
            let outcome = screen.panel_mut().delete(&id);
            finish(outcome, screen.panel().notice())
        }
    }
}

fn set_admin(ctx: &AppContext, id: &str, is_admin: bool) -> Result<()> {
    mount(ctx, &Route::AdminUsers)?;
    let mut screen = UsersManagementScreen::mount(ctx.clone());
    let current = screen
        .panel()
        .table()
        .get(id)
        .map(|u| u.is_admin)
        .with_context(|| format!("unknown user id: {}", id))?;
    if current == is_admin {
        println!("user {} already {}", id, if is_admin { "admin" } else { "non-admin" });
        return Ok(());
    }
    let outcome = screen.panel_mut().toggle_admin(id);
    finish(outcome, screen.panel().notice())?;
    println!("user {} is now {}", id, if is_admin { "admin" } else { "non-admin" });
    Ok(())
}

fn handle_register_user(ctx: &AppContext, req: AdminRegisterRequest) -> Result<()> {
    mount(ctx, &Route::AdminRegisterUser)?;
    let mut screen = AdminUserRegistrationScreen::mount(ctx.clone());
    screen.set_text(Field::Username, &req.username);
    screen.set_text(Field::Firstname, &req.firstname);
    screen.set_text(Field::Lastname, &req.lastname);
    screen.set_text(Field::Email, &req.email);
    screen.set_text(Field::Password, &req.password);
    let outcome = screen.submit();
    if outcome == Submit::Invalid {
        return field_errors(screen.errors());
    }
    finish(outcome, screen.notice())
}

fn handle_question_command(ctx: &AppContext, command: QuestionCommands) -> Result<()> {
    mount(ctx, &Route::AdminQuestions)?;
    let mut screen = QuestionManagementScreen::mount(ctx.clone());
    match command {
        QuestionCommands::List { json } => {
            if let Some(n) = screen.notice().filter(|n| n.is_error()) {
                anyhow::bail!("{}", n);
            }
            if json {
                return print_json(screen.questions(), "questions");
            }
            if screen.questions().is_empty() {
                println!("No questions found");
            }
            for q in screen.questions() {
                println!(
                    "{} {} (by {})",
                    q.question_id,
                    q.title,
                    q.user_name.as_deref().unwrap_or("unknown")
                );
            }
            Ok(())
        }
        QuestionCommands::Update {
            id,
            title,
            description,
        } => {
            if !screen.start_editing(&id) {
                anyhow::bail!("unknown question id: {}", id);
            }
            if let Some(form) = screen.edit_form_mut() {
                if let Some(t) = title {
                    form.title = t;
                }
                if let Some(d) = description {
                    form.description = d;
                }
            }
            let outcome = screen.save_edit();
            finish(outcome, screen.notice())
        }
        QuestionCommands::Delete { id, yes } => {
            require_yes(yes, &format!("question {}", id))?;
            let outcome = screen.delete(&id);
            finish(outcome, screen.notice())
        }
    }
}

fn handle_answer_command(ctx: &AppContext, command: AnswerCommands) -> Result<()> {
    mount(ctx, &Route::AdminQuestionFull)?;
    let mut screen = QuestionAnswerListScreen::mount(ctx.clone());
    if let Some(err) = screen.load_error() {
        anyhow::bail!("Error: {}", err);
    }
    match command {
        AnswerCommands::List { json } => {
            if json {
                return print_json(screen.questions(), "questions with answers");
            }
            if screen.questions().is_empty() {
                println!("No questions found.");
            }
            for q in screen.questions() {
                let by = q.posted_by.as_ref().map(|a| a.to_string()).unwrap_or_default();
                println!("{} {} - {}", q.question_id, q.title, by);
                if q.answers.is_empty() {
                    println!("  No answers yet.");
                }
                for a in &q.answers {
                    let by = a.posted_by.as_ref().map(|a| a.to_string()).unwrap_or_default();
                    let mark = if screen.can_modify(a) { "*" } else { " " };
                    println!(" {}{} {} - {}", mark, a.answer_id, a.answer, by);
                }
            }
            Ok(())
        }
        AnswerCommands::Update { id, text } => {
            let outcome = screen.update_answer(&id, &text);
            finish(outcome, screen.notice())?;
            println!("answer {} updated", id);
            Ok(())
        }
        AnswerCommands::Delete { id, yes } => {
            require_yes(yes, &format!("answer {}", id))?;
            let outcome = screen.delete_answer(&id);
            finish(outcome, screen.notice())
        }
    }
}
