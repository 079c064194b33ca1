//! Admin endpoints under `/admin`.

use super::*;

impl ForumClient {
    pub fn stats(&self) -> Result<DashboardStats, ApiError> {
        self.get_json("/admin/stats", "admin stats")
    }

    pub fn recent_questions(&self) -> Result<Vec<RecentQuestion>, ApiError> {
        self.get_json("/admin/recent-questions", "recent questions")
    }

    pub fn list_users(&self) -> Result<Vec<AdminUser>, ApiError> {
        let out: AdminUserList = self.get_json("/admin/users", "list users")?;
        Ok(out.users.unwrap_or_default())
    }

    /// `None` when the backend answers without a `user` object.
    pub fn get_user(&self, user_id: &str) -> Result<Option<AdminUser>, ApiError> {
        let out: AdminUserEnvelope =
            self.get_json(&format!("/admin/users/{}", user_id), "get user")?;
        Ok(out.user)
    }

    pub fn update_user(
        &self,
        user_id: &str,
        update: &AdminUserUpdate,
    ) -> Result<MessageResponse, ApiError> {
        self.send_message(
            Method::PUT,
            &format!("/admin/users/{}", user_id),
            update,
            "update user",
        )
    }

    pub fn set_user_admin(&self, user_id: &str, is_admin: bool) -> Result<MessageResponse, ApiError> {
        self.send_message(
            Method::PUT,
            &format!("/admin/users/{}", user_id),
            &AdminRoleUpdate { is_admin },
            "update user role",
        )
    }

    pub fn delete_user(&self, user_id: &str) -> Result<MessageResponse, ApiError> {
        self.delete(&format!("/admin/users/{}", user_id), "delete user")
    }

    pub fn register_user(&self, req: &AdminRegisterRequest) -> Result<MessageResponse, ApiError> {
        self.send_message(Method::POST, "/admin/register-user", req, "register user")
    }

    pub fn list_questions(&self) -> Result<Vec<Question>, ApiError> {
        self.get_json("/admin/questions", "list questions")
    }

    pub fn update_question(
        &self,
        question_id: &str,
        update: &QuestionUpdate,
    ) -> Result<MessageResponse, ApiError> {
        self.send_message(
            Method::PUT,
            &format!("/admin/questions/{}", question_id),
            update,
            "update question",
        )
    }

    pub fn delete_question(&self, question_id: &str) -> Result<MessageResponse, ApiError> {
        self.delete(
            &format!("/admin/questions/{}", question_id),
            "delete question",
        )
    }

    pub fn questions_with_answers(&self) -> Result<Vec<QuestionWithAnswers>, ApiError> {
        self.get_json("/admin/question-full", "questions with answers")
    }

    pub fn update_answer(&self, answer_id: &str, text: &str) -> Result<MessageResponse, ApiError> {
        self.send_message(
            Method::PUT,
            &format!("/admin/answers/{}", answer_id),
            &AnswerUpdate {
                updated_answer: text,
            },
            "update answer",
        )
    }

    pub fn delete_answer(&self, answer_id: &str) -> Result<MessageResponse, ApiError> {
        self.delete(&format!("/admin/answers/{}", answer_id), "delete answer")
    }
}
