use crate::AppContext;
use crate::remote::{Question, QuestionUpdate};

use super::{Notice, Submit};

/// Admin question list with edit and delete; every mutation refetches.
#[derive(Debug)]
pub struct QuestionManagementScreen {
    ctx: AppContext,
    questions: Vec<Question>,
    editing: Option<(String, QuestionUpdate)>,
    notice: Option<Notice>,
}

impl QuestionManagementScreen {
    pub fn mount(ctx: AppContext) -> Self {
        let mut screen = Self {
            ctx,
            questions: Vec::new(),
            editing: None,
            notice: None,
        };
        screen.refresh();
        screen
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn editing(&self) -> Option<&(String, QuestionUpdate)> {
        self.editing.as_ref()
    }

    pub fn refresh(&mut self) {
        match self.ctx.client().list_questions() {
            Ok(questions) => self.questions = questions,
            Err(err) => self.notice = Some(Notice::from_error(&err, "Failed to fetch questions")),
        }
    }

    /// Open the edit form prefilled from the listed question.
    pub fn start_editing(&mut self, question_id: &str) -> bool {
        let Some(q) = self.questions.iter().find(|q| q.question_id == question_id) else {
            return false;
        };
        self.editing = Some((
            q.question_id.clone(),
            QuestionUpdate {
                title: q.title.clone(),
                description: q.description.clone(),
            },
        ));
        true
    }

    pub fn edit_form_mut(&mut self) -> Option<&mut QuestionUpdate> {
        self.editing.as_mut().map(|(_, form)| form)
    }

    pub fn cancel_editing(&mut self) {
        self.editing = None;
    }

    pub fn save_edit(&mut self) -> Submit {
        let Some((id, form)) = self.editing.clone() else {
            return Submit::Invalid;
        };
        let outcome = self.update(&id, &form);
        if outcome.is_done() {
            self.editing = None;
        }
        outcome
    }

    pub fn update(&mut self, question_id: &str, update: &QuestionUpdate) -> Submit {
        match self.ctx.client().update_question(question_id, update) {
            Ok(_) => {
                self.notice = Some(Notice::success("Question updated successfully"));
                self.refresh();
                Submit::Done
            }
            Err(err) => {
                self.notice = Some(Notice::from_error(&err, "Failed to update question"));
                Submit::Failed
            }
        }
    }

    pub fn delete(&mut self, question_id: &str) -> Submit {
        match self.ctx.client().delete_question(question_id) {
            Ok(_) => {
                self.notice = Some(Notice::success("Question deleted successfully"));
                self.refresh();
                Submit::Done
            }
            Err(err) => {
                self.notice = Some(Notice::from_error(&err, "Failed to delete question"));
                Submit::Failed
            }
        }
    }
}
