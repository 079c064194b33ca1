use std::fmt;
use std::str::FromStr;

/// Who may mount a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    AuthenticatedOnly,
    AdminOnly,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    ForgotPassword,
    ResetPassword(String),
    Questions,
    Question(String),
    Profile,
    ChangePassword,
    AdminDashboard,
    AdminUsers,
    AdminUser(String),
    AdminRegisterUser,
    AdminQuestions,
    AdminQuestionFull,
}

impl Route {
    pub fn access(&self) -> RouteAccess {
        match self {
            Route::Login | Route::Register | Route::ForgotPassword | Route::ResetPassword(_) => {
                RouteAccess::Public
            }
            Route::Questions | Route::Question(_) | Route::Profile | Route::ChangePassword => {
                RouteAccess::AuthenticatedOnly
            }
            Route::AdminDashboard
            | Route::AdminUsers
            | Route::AdminUser(_)
            | Route::AdminRegisterUser
            | Route::AdminQuestions
            | Route::AdminQuestionFull => RouteAccess::AdminOnly,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/".to_string(),
            Route::Register => "/register".to_string(),
            Route::ForgotPassword => "/forgot-password".to_string(),
            Route::ResetPassword(token) => format!("/reset-password/{}", token),
            Route::Questions => "/questions".to_string(),
            Route::Question(id) => format!("/questions/{}", id),
            Route::Profile => "/profile".to_string(),
            Route::ChangePassword => "/change-password".to_string(),
            Route::AdminDashboard => "/admin/dashboard".to_string(),
            Route::AdminUsers => "/admin/users".to_string(),
            Route::AdminUser(id) => format!("/admin/users/{}", id),
            Route::AdminRegisterUser => "/admin/register-user".to_string(),
            Route::AdminQuestions => "/admin/questions".to_string(),
            Route::AdminQuestionFull => "/admin/question-full".to_string(),
        }
    }

    /// Landing route after login or when following the header's home link.
    pub fn home_for(is_admin: bool) -> Route {
        if is_admin {
            Route::AdminDashboard
        } else {
            Route::Questions
        }
    }

    pub fn parse(path: &str) -> Option<Route> {
        let trimmed = path.trim();
        let trimmed = trimmed.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();
        let route = match segments.as_slice() {
            [] => Route::Login,
            ["register"] => Route::Register,
            ["forgot-password"] => Route::ForgotPassword,
            ["reset-password", token] => Route::ResetPassword(token.to_string()),
            ["questions"] => Route::Questions,
            ["questions", id] => Route::Question(id.to_string()),
            ["profile"] => Route::Profile,
            ["change-password"] => Route::ChangePassword,
            ["admin", "dashboard"] => Route::AdminDashboard,
            ["admin", "users"] => Route::AdminUsers,
            ["admin", "users", id] => Route::AdminUser(id.to_string()),
            ["admin", "register-user"] => Route::AdminRegisterUser,
            ["admin", "questions"] => Route::AdminQuestions,
            ["admin", "question-full"] => Route::AdminQuestionFull,
            _ => return None,
        };
        Some(route)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s).ok_or_else(|| anyhow::anyhow!("unknown route: {}", s))
    }
}

#[cfg(test)]
#[path = "tests/routes_tests.rs"]
mod tests;
