//! DTOs and payload types for forum API requests/responses.

use serde::{Deserialize, Serialize};

use crate::model::lenient;

fn is_false(v: &bool) -> bool {
    !*v
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct LoginRequest<'a> {
    pub(super) email: &'a str,
    pub(super) password: &'a str,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,

    #[serde(default)]
    pub username: String,

    #[serde(default, deserialize_with = "lenient::opt_id")]
    pub user_id: Option<String>,

    #[serde(default, deserialize_with = "lenient::truthy")]
    pub is_admin: bool,

    #[serde(default)]
    pub msg: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct CheckEmailRequest<'a> {
    pub(super) email: &'a str,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CheckEmailResponse {
    #[serde(default, deserialize_with = "lenient::truthy")]
    pub exists: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(default, deserialize_with = "lenient::opt_id")]
    pub user_id: Option<String>,

    #[serde(default, alias = "user_name")]
    pub username: Option<String>,

    #[serde(default, deserialize_with = "lenient::truthy")]
    pub is_admin: bool,
}

/// `GET /users/checkUser`. Older backends answer with the identity at the
/// top level, newer ones nest it under `user`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CheckUserResponse {
    #[serde(default)]
    pub user: Option<CurrentUser>,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default, alias = "user_id", deserialize_with = "lenient::opt_id")]
    pub userid: Option<String>,

    #[serde(default)]
    pub msg: Option<String>,
}

impl CheckUserResponse {
    pub fn current_user(&self) -> Option<CurrentUser> {
        if let Some(u) = &self.user {
            return Some(u.clone());
        }
        if self.username.is_none() && self.userid.is_none() {
            return None;
        }
        Some(CurrentUser {
            user_id: self.userid.clone(),
            username: self.username.clone(),
            is_admin: false,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,

    #[serde(rename = "agreeToTerms")]
    pub agree_to_terms: bool,

    #[serde(rename = "adminSecret", skip_serializing_if = "Option::is_none")]
    pub admin_secret: Option<String>,

    #[serde(rename = "isAdminRegistration", skip_serializing_if = "is_false")]
    pub is_admin_registration: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub msg: Option<String>,

    /// Present when the backend logs the new account in right away.
    #[serde(default)]
    pub token: Option<String>,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default, deserialize_with = "lenient::opt_id")]
    pub user_id: Option<String>,

    #[serde(default, deserialize_with = "lenient::truthy")]
    pub is_admin: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, deserialize_with = "lenient::opt_id")]
    pub user_id: Option<String>,

    #[serde(default, alias = "username")]
    pub user_name: Option<String>,

    #[serde(default, alias = "firstname")]
    pub first_name: Option<String>,

    #[serde(default, alias = "lastname")]
    pub last_name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.user_name.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
    }
}

#[derive(Debug, Serialize)]
pub(super) struct ChangePasswordRequest<'a> {
    #[serde(rename = "currentPassword")]
    pub(super) current_password: &'a str,
    #[serde(rename = "newPassword")]
    pub(super) new_password: &'a str,
}

/// `GET /admin/stats`. Counts missing from the body stay `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default, deserialize_with = "lenient::opt_count")]
    pub total_users: Option<u64>,
    #[serde(default, deserialize_with = "lenient::opt_count")]
    pub total_questions: Option<u64>,
    #[serde(default, deserialize_with = "lenient::opt_count")]
    pub total_answers: Option<u64>,
    #[serde(default, deserialize_with = "lenient::opt_count")]
    pub total_ratings: Option<u64>,
    #[serde(default, deserialize_with = "lenient::opt_count")]
    pub active_reports: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentQuestion {
    #[serde(alias = "question_id", deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    #[serde(deserialize_with = "lenient::id")]
    pub user_id: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "lenient::truthy")]
    pub is_admin: bool,
}

impl AdminUser {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub(super) struct AdminUserList {
    #[serde(default)]
    pub(super) users: Option<Vec<AdminUser>>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub(super) struct AdminUserEnvelope {
    #[serde(default)]
    pub(super) user: Option<AdminUser>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUserUpdate {
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub(super) struct AdminRoleUpdate {
    pub(super) is_admin: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AdminRegisterRequest {
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(alias = "id", deserialize_with = "lenient::id")]
    pub question_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionUpdate {
    pub title: String,
    pub description: String,
}

/// Who posted a question or answer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default, deserialize_with = "lenient::opt_id")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl std::fmt::Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} (@{})", self.first_name, self.last_name, self.user_name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(deserialize_with = "lenient::id")]
    pub answer_id: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub posted_by: Option<Author>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionWithAnswers {
    #[serde(alias = "id", deserialize_with = "lenient::id")]
    pub question_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub posted_by: Option<Author>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub answers: Vec<Answer>,
}

#[derive(Debug, Serialize)]
pub(super) struct AnswerUpdate<'a> {
    #[serde(rename = "updatedAnswer")]
    pub(super) updated_answer: &'a str,
}
