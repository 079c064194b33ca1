mod common;

use anyhow::Result;

use qaboard::remote::QuestionUpdate;
use qaboard::screens::{Notice, QuestionAnswerListScreen, QuestionManagementScreen, Submit};

#[test]
fn question_edit_refetches_the_list() -> Result<()> {
    let backend = common::spawn_backend()?;
    let (ctx, _store) = backend.logged_in(1)?;

    let mut screen = QuestionManagementScreen::mount(ctx);
    assert_eq!(screen.questions().len(), 2);

    assert!(screen.start_editing("12"));
    if let Some(form) = screen.edit_form_mut() {
        form.title = "Async fn in traits".to_string();
    }
    assert_eq!(screen.save_edit(), Submit::Done);
    assert!(screen.editing().is_none());
    assert_eq!(
        screen.notice(),
        Some(&Notice::success("Question updated successfully"))
    );
    let title = screen
        .questions()
        .iter()
        .find(|q| q.question_id == "12")
        .map(|q| q.title.clone());
    assert_eq!(title.as_deref(), Some("Async fn in traits"));
    assert_eq!(
        backend.state.question(12).map(|q| q.description),
        Some("Are they stable yet?".to_string())
    );
    Ok(())
}

#[test]
fn question_delete_with_empty_body_succeeds() -> Result<()> {
    let backend = common::spawn_backend()?;
    let (ctx, _store) = backend.logged_in(1)?;

    let mut screen = QuestionManagementScreen::mount(ctx);
    assert_eq!(screen.delete("11"), Submit::Done);
    assert_eq!(screen.questions().len(), 1);
    assert!(backend.state.question(11).is_none());
    Ok(())
}

#[test]
fn question_errors_fall_back_to_the_error_field() -> Result<()> {
    let backend = common::spawn_backend()?;
    let (ctx, _store) = backend.logged_in(1)?;

    let mut screen = QuestionManagementScreen::mount(ctx);
    let update = QuestionUpdate {
        title: "x".to_string(),
        description: "y".to_string(),
    };
    assert_eq!(screen.update("404", &update), Submit::Failed);
    assert_eq!(
        screen.notice(),
        Some(&Notice::Error("Question not found".to_string()))
    );
    Ok(())
}

#[test]
fn answers_load_with_the_current_user() -> Result<()> {
    let backend = common::spawn_backend()?;
    let (ctx, _store) = backend.logged_in(1)?;

    let screen = QuestionAnswerListScreen::mount(ctx);
    assert_eq!(screen.load_error(), None);
    assert!(screen.is_admin());
    assert_eq!(screen.questions().len(), 2);
    let answer = screen.find_answer("22").expect("answer listed");
    assert!(screen.can_modify(answer));

    let paths: Vec<String> = backend.state.requests().into_iter().map(|r| r.path).collect();
    assert!(paths.contains(&"/api/admin/question-full".to_string()));
    assert!(paths.contains(&"/api/users/checkUser".to_string()));
    Ok(())
}

#[test]
fn answer_edits_apply_in_place() -> Result<()> {
    let backend = common::spawn_backend()?;
    let (ctx, _store) = backend.logged_in(1)?;

    let mut screen = QuestionAnswerListScreen::mount(ctx);
    assert_eq!(screen.update_answer("21", "Use explicit lifetimes."), Submit::Done);
    assert_eq!(
        screen.find_answer("21").map(|a| a.answer.as_str()),
        Some("Use explicit lifetimes.")
    );
    assert_eq!(
        backend.state.answer(21).map(|a| a.text),
        Some("Use explicit lifetimes.".to_string())
    );

    assert_eq!(screen.delete_answer("22"), Submit::Done);
    assert!(screen.find_answer("22").is_none());
    assert_eq!(
        screen.notice(),
        Some(&Notice::success("Answer deleted successfully!"))
    );

    let before = backend.state.request_count();
    assert_eq!(screen.delete_answer("22"), Submit::Invalid);
    assert_eq!(
        screen.notice(),
        Some(&Notice::Error("Answer not found".to_string()))
    );
    assert_eq!(backend.state.request_count(), before);
    Ok(())
}

#[test]
fn answers_of_other_users_cannot_be_changed() -> Result<()> {
    let backend = common::spawn_backend()?;
    let (ctx, _store) = backend.logged_in(2)?;

    let mut screen = QuestionAnswerListScreen::mount(ctx);
    assert_eq!(screen.load_error(), None);
    assert!(!screen.is_admin());
    let before = backend.state.request_count();

    let refused = Notice::Error("You can only modify your own answers".to_string());
    assert_eq!(screen.update_answer("21", "Hijacked."), Submit::Invalid);
    assert_eq!(screen.notice(), Some(&refused));
    assert_eq!(screen.delete_answer("21"), Submit::Invalid);
    assert_eq!(screen.notice(), Some(&refused));
    assert_eq!(backend.state.request_count(), before);
    assert!(backend.state.answer(21).is_some());

    assert_eq!(screen.delete_answer("22"), Submit::Done);
    assert!(backend.state.answer(22).is_none());
    Ok(())
}
