use crate::AppContext;
use crate::remote::{Answer, ApiError, CurrentUser, QuestionWithAnswers};
use crate::scope::ViewLifetime;

use super::{Notice, Submit};

fn failure_detail(err: &ApiError) -> String {
    err.server_message()
        .map(str::to_string)
        .unwrap_or_else(|| err.to_string())
}

/// Every question with its answers, plus who is looking at them.
#[derive(Debug)]
pub struct QuestionAnswerListScreen {
    ctx: AppContext,
    lifetime: ViewLifetime,
    questions: Vec<QuestionWithAnswers>,
    current_user: Option<CurrentUser>,
    load_error: Option<String>,
    notice: Option<Notice>,
}

impl QuestionAnswerListScreen {
    /// Fetch the questions and the current user concurrently.
    pub fn mount(ctx: AppContext) -> Self {
        let mut screen = Self {
            ctx,
            lifetime: ViewLifetime::new(),
            questions: Vec::new(),
            current_user: None,
            load_error: None,
            notice: None,
        };
        screen.load();
        screen
    }

    fn load(&mut self) {
        let scope = self.lifetime.scope();
        let client = self.ctx.client().clone();
        let questions = scope.spawn(move || client.questions_with_answers());
        let client = self.ctx.client().clone();
        let user = scope.spawn(move || client.check_user());

        let (Some(questions), Some(user)) = (questions.wait(), user.wait()) else {
            return;
        };
        match (questions, user) {
            (Ok(questions), Ok(user)) => {
                self.questions = questions;
                self.current_user = user.current_user();
                self.load_error = None;
            }
            (Err(err), _) | (_, Err(err)) => self.load_error = Some(failure_detail(&err)),
        }
    }

    pub fn questions(&self) -> &[QuestionWithAnswers] {
        &self.questions
    }

    pub fn current_user(&self) -> Option<&CurrentUser> {
        self.current_user.as_ref()
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_admin(&self) -> bool {
        self.current_user.as_ref().is_some_and(|u| u.is_admin)
    }

    /// Admins may act on any answer, others only on their own.
    pub fn can_modify(&self, answer: &Answer) -> bool {
        if self.is_admin() {
            return true;
        }
        let me = self.current_user.as_ref().and_then(|u| u.user_id.as_deref());
        let owner = answer.posted_by.as_ref().and_then(|a| a.user_id.as_deref());
        matches!((me, owner), (Some(me), Some(owner)) if me == owner)
    }

    pub fn find_answer(&self, answer_id: &str) -> Option<&Answer> {
        self.questions
            .iter()
            .flat_map(|q| q.answers.iter())
            .find(|a| a.answer_id == answer_id)
    }

    /// Notice for an answer the current user may not touch, if any.
    fn refuse(&self, answer_id: &str) -> Option<Notice> {
        match self.find_answer(answer_id) {
            None => Some(Notice::Error("Answer not found".to_string())),
            Some(answer) if !self.can_modify(answer) => Some(Notice::Error(
                "You can only modify your own answers".to_string(),
            )),
            Some(_) => None,
        }
    }

    pub fn update_answer(&mut self, answer_id: &str, text: &str) -> Submit {
        if let Some(notice) = self.refuse(answer_id) {
            self.notice = Some(notice);
            return Submit::Invalid;
        }
        match self.ctx.client().update_answer(answer_id, text) {
            Ok(_) => {
                for answer in self.questions.iter_mut().flat_map(|q| q.answers.iter_mut()) {
                    if answer.answer_id == answer_id {
                        answer.answer = text.to_string();
                    }
                }
                self.notice = None;
                Submit::Done
            }
            Err(err) => {
                self.notice = Some(Notice::Error(format!(
                    "Failed to update answer: {}",
                    failure_detail(&err)
                )));
                Submit::Failed
            }
        }
    }

    pub fn delete_answer(&mut self, answer_id: &str) -> Submit {
        if let Some(notice) = self.refuse(answer_id) {
            self.notice = Some(notice);
            return Submit::Invalid;
        }
        match self.ctx.client().delete_answer(answer_id) {
            Ok(_) => {
                for q in &mut self.questions {
                    q.answers.retain(|a| a.answer_id != answer_id);
                }
                self.notice = Some(Notice::success("Answer deleted successfully!"));
                Submit::Done
            }
            Err(err) => {
                self.notice = Some(Notice::Error(format!(
                    "Failed to delete answer: {}",
                    failure_detail(&err)
                )));
                Submit::Failed
            }
        }
    }
}
