//! Account endpoints under `/users`.

use super::*;

impl ForumClient {
    pub fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.send_json(
            Method::POST,
            "/users/login",
            &LoginRequest { email, password },
            "login",
        )
    }

    pub fn register(&self, req: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        let resp = self.execute(
            self.request(Method::POST, "/users/register").json(req),
            "register",
        )?;
        // Some deployments answer 201 with an empty body.
        let text = resp.text().map_err(|source| ApiError::Network {
            label: "register".to_string(),
            source,
        })?;
        if text.trim().is_empty() {
            return Ok(RegisterResponse::default());
        }
        serde_json::from_str(&text).map_err(|source| ApiError::Decode {
            label: "register".to_string(),
            source,
        })
    }

    pub fn check_user(&self) -> Result<CheckUserResponse, ApiError> {
        self.get_json("/users/checkUser", "check user")
    }

    pub fn check_email(&self, email: &str) -> Result<CheckEmailResponse, ApiError> {
        self.send_json(
            Method::POST,
            "/users/check-email",
            &CheckEmailRequest { email },
            "check email",
        )
    }

    pub fn profile(&self) -> Result<Profile, ApiError> {
        self.get_json("/users/profile", "get profile")
    }

    pub fn update_profile(&self, update: &ProfileUpdate) -> Result<MessageResponse, ApiError> {
        self.send_message(Method::PUT, "/users/profile", update, "update profile")
    }

    pub fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<MessageResponse, ApiError> {
        self.send_message(
            Method::PUT,
            "/users/change-password",
            &ChangePasswordRequest {
                current_password,
                new_password,
            },
            "change password",
        )
    }
}
