use reqwest::StatusCode;
use reqwest::blocking::{RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::*;
use crate::navigation::ENTRY_PATH;

/// What the client does on its own for a response status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthAction {
    /// Clear the session, then redirect to the entry route.
    ClearAndRedirect,
    /// Redirect to the entry route; keep the session.
    Redirect,
    PassThrough,
}

pub fn auth_action(status: StatusCode) -> AuthAction {
    match status {
        StatusCode::UNAUTHORIZED => AuthAction::ClearAndRedirect,
        StatusCode::FORBIDDEN => AuthAction::Redirect,
        _ => AuthAction::PassThrough,
    }
}

/// User-facing message of an error body: `msg`, falling back to `error`.
pub fn server_message(body: &Value) -> Option<String> {
    ["msg", "error"]
        .iter()
        .find_map(|k| body.get(*k).and_then(Value::as_str))
        .map(str::to_string)
}

impl ForumClient {
    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(super) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!(method = %method, path, "request");
        let req = self.client.request(method, self.url(path));
        match self.session.get_session().token {
            Some(token) => req.header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token)),
            None => req,
        }
    }

    pub(super) fn execute(&self, req: RequestBuilder, label: &str) -> Result<Response, ApiError> {
        let resp = req.send().map_err(|source| ApiError::Network {
            label: label.to_string(),
            source,
        })?;
        self.intercept(resp, label)
    }

    fn intercept(&self, resp: Response, label: &str) -> Result<Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let message = resp
            .json::<Value>()
            .ok()
            .and_then(|body| server_message(&body));

        match auth_action(status) {
            AuthAction::ClearAndRedirect => {
                tracing::warn!(label, "unauthorized; clearing session");
                // Storage goes first so the entry route never sees a stale token.
                if let Err(err) = self.session.clear_session() {
                    tracing::warn!(error = %format!("{:#}", err), "failed to clear session");
                }
                self.redirect_to_entry();
                Err(ApiError::Unauthorized {
                    label: label.to_string(),
                    message,
                })
            }
            AuthAction::Redirect => {
                tracing::warn!(label, "forbidden; redirecting to entry");
                self.redirect_to_entry();
                Err(ApiError::Forbidden {
                    label: label.to_string(),
                    message,
                })
            }
            AuthAction::PassThrough => Err(ApiError::Server {
                label: label.to_string(),
                status: status.as_u16(),
                message,
            }),
        }
    }

    fn redirect_to_entry(&self) {
        if !self.navigator.is_at_entry() {
            self.navigator.navigate(ENTRY_PATH);
        }
    }

    pub(super) fn get_json<T: DeserializeOwned>(&self, path: &str, label: &str) -> Result<T, ApiError> {
        let resp = self.execute(self.request(Method::GET, path), label)?;
        read_json(resp, label)
    }

    pub(super) fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        label: &str,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self.execute(self.request(method, path).json(body), label)?;
        read_json(resp, label)
    }

    /// Send `body` to an endpoint that answers with at most a `{ msg }`.
    pub(super) fn send_message<B>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        label: &str,
    ) -> Result<MessageResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let resp = self.execute(self.request(method, path).json(body), label)?;
        read_message(resp, label)
    }

    pub(super) fn delete(&self, path: &str, label: &str) -> Result<MessageResponse, ApiError> {
        let resp = self.execute(self.request(Method::DELETE, path), label)?;
        read_message(resp, label)
    }
}

fn read_body(resp: Response, label: &str) -> Result<Vec<u8>, ApiError> {
    resp.bytes()
        .map(|b| b.to_vec())
        .map_err(|source| ApiError::Network {
            label: label.to_string(),
            source,
        })
}

fn read_json<T: DeserializeOwned>(resp: Response, label: &str) -> Result<T, ApiError> {
    let body = read_body(resp, label)?;
    serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
        label: label.to_string(),
        source,
    })
}

/// Like [`read_json`], but an empty body is an empty message.
fn read_message(resp: Response, label: &str) -> Result<MessageResponse, ApiError> {
    let body = read_body(resp, label)?;
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(MessageResponse::default());
    }
    serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
        label: label.to_string(),
        source,
    })
}
