#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;

use anyhow::{Context, Result};
use axum::extract::{Path, Request, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::{Value, json};

use qaboard::AppContext;
use qaboard::model::ClientConfig;
use qaboard::store::{MemoryStore, SessionStore};

/// Far-future `exp` for minted tokens (2100-01-01).
pub const TOKEN_EXP: i64 = 4_102_444_800;

/// Token the mock always rejects with 401.
pub const EXPIRED_TOKEN: &str = "expired.token.value";

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "Admin!234";
pub const USER_EMAIL: &str = "kebede@example.com";
pub const USER_PASSWORD: &str = "User!2345";

#[derive(Clone, Debug)]
pub struct MockUser {
    pub id: u64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub is_admin: bool,
}

impl MockUser {
    fn admin_json(&self) -> Value {
        json!({
            "user_id": self.id,
            "user_name": self.username,
            "first_name": self.first_name,
            "last_name": self.last_name,
            "email": self.email,
            // the real backend sends a tinyint
            "is_admin": if self.is_admin { 1 } else { 0 },
        })
    }
}

#[derive(Clone, Debug)]
pub struct MockQuestion {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub user_id: u64,
}

#[derive(Clone, Debug)]
pub struct MockAnswer {
    pub id: u64,
    pub question_id: u64,
    pub text: String,
    pub user_id: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
}

#[derive(Default)]
pub struct MockState {
    users: Mutex<Vec<MockUser>>,
    tokens: Mutex<HashMap<String, u64>>,
    deleted: Mutex<Vec<u64>>,
    questions: Mutex<Vec<MockQuestion>>,
    answers: Mutex<Vec<MockAnswer>>,
    requests: Mutex<Vec<RecordedRequest>>,
    next_id: AtomicU64,
    /// Keep returning deleted users from `GET /admin/users`.
    pub stale_user_list: AtomicBool,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|p| p.into_inner())
}

impl MockState {
    fn seeded() -> Self {
        let state = MockState {
            next_id: AtomicU64::new(4),
            ..Default::default()
        };
        *lock(&state.users) = vec![
            MockUser {
                id: 1,
                username: "admin_user".to_string(),
                first_name: "Almaz".to_string(),
                last_name: "Tesfaye".to_string(),
                email: ADMIN_EMAIL.to_string(),
                password: ADMIN_PASSWORD.to_string(),
                is_admin: true,
            },
            MockUser {
                id: 2,
                username: "kebede".to_string(),
                first_name: "Kebede".to_string(),
                last_name: "Alemu".to_string(),
                email: USER_EMAIL.to_string(),
                password: USER_PASSWORD.to_string(),
                is_admin: false,
            },
            MockUser {
                id: 3,
                username: "sara_b".to_string(),
                first_name: "Sara".to_string(),
                last_name: "Bekele".to_string(),
                email: "sara@example.com".to_string(),
                password: "Sara!2345".to_string(),
                is_admin: false,
            },
        ];
        *lock(&state.questions) = vec![
            MockQuestion {
                id: 11,
                title: "How do lifetimes work?".to_string(),
                description: "The borrow checker rejects my code.".to_string(),
                user_id: 2,
            },
            MockQuestion {
                id: 12,
                title: "Async traits".to_string(),
                description: "Are they stable yet?".to_string(),
                user_id: 3,
            },
        ];
        *lock(&state.answers) = vec![
            MockAnswer {
                id: 21,
                question_id: 11,
                text: "Annotate the references.".to_string(),
                user_id: 3,
            },
            MockAnswer {
                id: 22,
                question_id: 11,
                text: "Clone it.".to_string(),
                user_id: 2,
            },
        ];
        state
    }

    pub fn question(&self, id: u64) -> Option<MockQuestion> {
        lock(&self.questions).iter().find(|q| q.id == id).cloned()
    }

    pub fn answer(&self, id: u64) -> Option<MockAnswer> {
        lock(&self.answers).iter().find(|a| a.id == id).cloned()
    }

    fn author_json(&self, user_id: u64) -> Value {
        match self.user(user_id) {
            Some(u) => json!({
                "user_id": u.id,
                "user_name": u.username,
                "first_name": u.first_name,
                "last_name": u.last_name,
            }),
            None => Value::Null,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    pub fn user(&self, id: u64) -> Option<MockUser> {
        lock(&self.users).iter().find(|u| u.id == id).cloned()
    }

    /// Mint and register a token for `user_id`.
    pub fn token_for(&self, user_id: u64) -> String {
        let user = self.user(user_id);
        let token = jwt(&json!({
            "userid": user_id,
            "username": user.as_ref().map(|u| u.username.clone()),
            "is_admin": user.as_ref().is_some_and(|u| u.is_admin),
            "exp": TOKEN_EXP,
        }));
        lock(&self.tokens).insert(token.clone(), user_id);
        token
    }

    fn subject(&self, headers: &HeaderMap) -> Result<MockUser, Response> {
        let token = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or_else(|| error(StatusCode::UNAUTHORIZED, "Authentication invalid"))?;
        let id = lock(&self.tokens)
            .get(token)
            .copied()
            .ok_or_else(|| error(StatusCode::UNAUTHORIZED, "Authentication invalid"))?;
        self.user(id)
            .ok_or_else(|| error(StatusCode::UNAUTHORIZED, "Authentication invalid"))
    }

    fn admin(&self, headers: &HeaderMap) -> Result<MockUser, Response> {
        let user = self.subject(headers)?;
        if !user.is_admin {
            return Err(error(StatusCode::FORBIDDEN, "Access denied. Admins only."));
        }
        Ok(user)
    }
}

pub fn jwt(payload: &Value) -> String {
    let body = serde_json::to_vec(payload).unwrap_or_default();
    format!("eyJhbGciOiJIUzI1NiJ9.{}.sig", URL_SAFE_NO_PAD.encode(body))
}

fn error(status: StatusCode, msg: &str) -> Response {
    (status, Json(json!({ "msg": msg }))).into_response()
}

type Shared = State<Arc<MockState>>;

async fn record(State(state): Shared, req: Request, next: Next) -> Response {
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    lock(&state.requests).push(RecordedRequest {
        method: req.method().to_string(),
        path: req.uri().path().to_string(),
        authorization,
    });
    next.run(req).await
}

async fn login(State(state): Shared, Json(body): Json<Value>) -> Response {
    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();
    let user = lock(&state.users)
        .iter()
        .find(|u| u.email == email && u.password == password)
        .cloned();
    let Some(user) = user else {
        return error(StatusCode::BAD_REQUEST, "Invalid credentials");
    };
    let token = state.token_for(user.id);
    Json(json!({
        "msg": "user login successful",
        "token": token,
        "username": user.username,
        "user_id": user.id,
        "is_admin": user.is_admin,
    }))
    .into_response()
}

async fn check_email(State(state): Shared, Json(body): Json<Value>) -> Response {
    let email = body["email"].as_str().unwrap_or_default();
    let exists = lock(&state.users).iter().any(|u| u.email == email);
    Json(json!({ "exists": exists })).into_response()
}

async fn register(State(state): Shared, Json(body): Json<Value>) -> Response {
    let email = body["email"].as_str().unwrap_or_default().to_string();
    if lock(&state.users).iter().any(|u| u.email == email) {
        return error(StatusCode::CONFLICT, "User already registered");
    }
    let user = MockUser {
        id: state.next_id.fetch_add(1, Ordering::SeqCst),
        username: body["username"].as_str().unwrap_or_default().to_string(),
        first_name: body["firstname"].as_str().unwrap_or_default().to_string(),
        last_name: body["lastname"].as_str().unwrap_or_default().to_string(),
        email,
        password: body["password"].as_str().unwrap_or_default().to_string(),
        is_admin: body["isAdminRegistration"].as_bool().unwrap_or(false),
    };
    lock(&state.users).push(user);
    (
        StatusCode::CREATED,
        Json(json!({ "msg": "User registered successfully" })),
    )
        .into_response()
}

async fn check_user(State(state): Shared, headers: HeaderMap) -> Response {
    match state.subject(&headers) {
        Ok(u) => Json(json!({
            "msg": "valid user",
            "user": { "user_id": u.id, "username": u.username, "is_admin": u.is_admin },
        }))
        .into_response(),
        Err(resp) => resp,
    }
}

async fn profile(State(state): Shared, headers: HeaderMap) -> Response {
    match state.subject(&headers) {
        Ok(u) => Json(json!({
            "user_id": u.id,
            "user_name": u.username,
            "first_name": u.first_name,
            "last_name": u.last_name,
            "email": u.email,
        }))
        .into_response(),
        Err(resp) => resp,
    }
}

async fn update_profile(
    State(state): Shared,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let id = match state.subject(&headers) {
        Ok(u) => u.id,
        Err(resp) => return resp,
    };
    let mut users = lock(&state.users);
    let Some(u) = users.iter_mut().find(|u| u.id == id) else {
        return error(StatusCode::NOT_FOUND, "User not found");
    };
    if let Some(v) = body["first_name"].as_str() {
        u.first_name = v.to_string();
    }
    if let Some(v) = body["last_name"].as_str() {
        u.last_name = v.to_string();
    }
    if let Some(v) = body["email"].as_str() {
        u.email = v.to_string();
    }
    Json(json!({ "msg": "Profile updated successfully" })).into_response()
}

async fn change_password(
    State(state): Shared,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let id = match state.subject(&headers) {
        Ok(u) => u.id,
        Err(resp) => return resp,
    };
    let current = body["currentPassword"].as_str().unwrap_or_default();
    let new = body["newPassword"].as_str().unwrap_or_default();
    let mut users = lock(&state.users);
    let Some(u) = users.iter_mut().find(|u| u.id == id) else {
        return error(StatusCode::NOT_FOUND, "User not found");
    };
    if u.password != current {
        return error(StatusCode::BAD_REQUEST, "Current password is incorrect");
    }
    u.password = new.to_string();
    Json(json!({ "msg": "Password updated" })).into_response()
}

async fn stats(State(state): Shared, headers: HeaderMap) -> Response {
    if let Err(resp) = state.admin(&headers) {
        return resp;
    }
    let users = lock(&state.users).len();
    Json(json!({
        "totalUsers": users,
        "totalQuestions": 2,
        "totalAnswers": 5,
        "totalRatings": 0,
    }))
    .into_response()
}

async fn recent_questions(State(state): Shared, headers: HeaderMap) -> Response {
    if let Err(resp) = state.admin(&headers) {
        return resp;
    }
    Json(json!([
        { "id": 11, "title": "How do lifetimes work?", "description": "...", "user_name": "kebede" },
    ]))
    .into_response()
}

async fn list_users(State(state): Shared, headers: HeaderMap) -> Response {
    if let Err(resp) = state.admin(&headers) {
        return resp;
    }
    let deleted = lock(&state.deleted).clone();
    let stale = state.stale_user_list.load(Ordering::SeqCst);
    let users: Vec<Value> = lock(&state.users)
        .iter()
        .filter(|u| stale || !deleted.contains(&u.id))
        .map(MockUser::admin_json)
        .collect();
    Json(json!({ "users": users })).into_response()
}

async fn get_user(State(state): Shared, headers: HeaderMap, Path(id): Path<u64>) -> Response {
    if let Err(resp) = state.admin(&headers) {
        return resp;
    }
    match state.user(id) {
        Some(u) => Json(json!({ "user": u.admin_json() })).into_response(),
        None => error(StatusCode::NOT_FOUND, "User not found"),
    }
}

async fn update_user(
    State(state): Shared,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Json(body): Json<Value>,
) -> Response {
    if let Err(resp) = state.admin(&headers) {
        return resp;
    }
    let mut users = lock(&state.users);
    let Some(u) = users.iter_mut().find(|u| u.id == id) else {
        return error(StatusCode::NOT_FOUND, "User not found");
    };
    if let Some(admin) = body.get("is_admin").and_then(Value::as_bool) {
        u.is_admin = admin;
        return Json(json!({ "msg": "User role updated" })).into_response();
    }
    let field = |k: &str| body[k].as_str().map(str::to_string);
    if let Some(v) = field("user_name") {
        u.username = v;
    }
    if let Some(v) = field("first_name") {
        u.first_name = v;
    }
    if let Some(v) = field("last_name") {
        u.last_name = v;
    }
    if let Some(v) = field("email") {
        u.email = v;
    }
    Json(json!({ "msg": "User updated successfully" })).into_response()
}

async fn delete_user(State(state): Shared, headers: HeaderMap, Path(id): Path<u64>) -> Response {
    if let Err(resp) = state.admin(&headers) {
        return resp;
    }
    lock(&state.deleted).push(id);
    Json(json!({ "msg": "User deleted successfully" })).into_response()
}

async fn admin_register_user(
    State(state): Shared,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(resp) = state.admin(&headers) {
        return resp;
    }
    register(State(state), Json(body)).await
}

async fn list_questions(State(state): Shared, headers: HeaderMap) -> Response {
    if let Err(resp) = state.admin(&headers) {
        return resp;
    }
    let questions: Vec<Value> = lock(&state.questions)
        .iter()
        .map(|q| {
            json!({
                "question_id": q.id,
                "title": q.title,
                "description": q.description,
                "user_name": state.user(q.user_id).map(|u| u.username),
            })
        })
        .collect();
    Json(questions).into_response()
}

async fn update_question(
    State(state): Shared,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Json(body): Json<Value>,
) -> Response {
    if let Err(resp) = state.admin(&headers) {
        return resp;
    }
    let mut questions = lock(&state.questions);
    let Some(q) = questions.iter_mut().find(|q| q.id == id) else {
        return (StatusCode::NOT_FOUND, Json(json!({ "error": "Question not found" })))
            .into_response();
    };
    q.title = body["title"].as_str().unwrap_or_default().to_string();
    q.description = body["description"].as_str().unwrap_or_default().to_string();
    Json(json!({ "message": "Question updated" })).into_response()
}

async fn delete_question(State(state): Shared, headers: HeaderMap, Path(id): Path<u64>) -> Response {
    if let Err(resp) = state.admin(&headers) {
        return resp;
    }
    lock(&state.questions).retain(|q| q.id != id);
    lock(&state.answers).retain(|a| a.question_id != id);
    StatusCode::NO_CONTENT.into_response()
}

async fn question_full(State(state): Shared, headers: HeaderMap) -> Response {
    if let Err(resp) = state.subject(&headers) {
        return resp;
    }
    let answers = lock(&state.answers).clone();
    let questions: Vec<Value> = lock(&state.questions)
        .iter()
        .map(|q| {
            let answers: Vec<Value> = answers
                .iter()
                .filter(|a| a.question_id == q.id)
                .map(|a| {
                    json!({
                        "answer_id": a.id,
                        "answer": a.text,
                        "posted_by": state.author_json(a.user_id),
                    })
                })
                .collect();
            json!({
                "question_id": q.id,
                "title": q.title,
                "description": q.description,
                "posted_by": state.author_json(q.user_id),
                "answers": answers,
            })
        })
        .collect();
    Json(questions).into_response()
}

async fn update_answer(
    State(state): Shared,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Json(body): Json<Value>,
) -> Response {
    if let Err(resp) = state.subject(&headers) {
        return resp;
    }
    let mut answers = lock(&state.answers);
    let Some(a) = answers.iter_mut().find(|a| a.id == id) else {
        return error(StatusCode::NOT_FOUND, "Answer not found");
    };
    a.text = body["updatedAnswer"].as_str().unwrap_or_default().to_string();
    Json(json!({ "msg": "Answer updated" })).into_response()
}

async fn delete_answer(State(state): Shared, headers: HeaderMap, Path(id): Path<u64>) -> Response {
    if let Err(resp) = state.subject(&headers) {
        return resp;
    }
    let mut answers = lock(&state.answers);
    let before = answers.len();
    answers.retain(|a| a.id != id);
    if answers.len() == before {
        return error(StatusCode::NOT_FOUND, "Answer not found");
    }
    Json(json!({ "msg": "Answer deleted" })).into_response()
}

fn router(state: Arc<MockState>) -> Router {
    let api = Router::new()
        .route("/users/login", post(login))
        .route("/users/check-email", post(check_email))
        .route("/users/register", post(register))
        .route("/users/checkUser", get(check_user))
        .route("/users/profile", get(profile).put(update_profile))
        .route("/users/change-password", axum::routing::put(change_password))
        .route("/admin/stats", get(stats))
        .route("/admin/recent-questions", get(recent_questions))
        .route("/admin/users", get(list_users))
        .route("/admin/register-user", post(admin_register_user))
        .route("/admin/questions", get(list_questions))
        .route(
            "/admin/questions/:id",
            axum::routing::put(update_question).delete(delete_question),
        )
        .route("/admin/question-full", get(question_full))
        .route(
            "/admin/answers/:id",
            axum::routing::put(update_answer).delete(delete_answer),
        )
        .route(
            "/admin/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        );
    Router::new()
        .nest("/api", api)
        .layer(middleware::from_fn_with_state(state.clone(), record))
        .with_state(state)
}

/// Forum backend double serving on 127.0.0.1; shut down on drop.
pub struct MockBackend {
    pub base_url: String,
    pub state: Arc<MockState>,
    shutdown: Option<tokio::sync::oneshot::Sender<()>>,
    thread: Option<thread::JoinHandle<()>>,
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(t) = self.thread.take() {
            let _ = t.join();
        }
    }
}

pub fn spawn_backend() -> Result<MockBackend> {
    let state = Arc::new(MockState::seeded());
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("build tokio runtime")?;
    let listener = rt
        .block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))
        .context("bind mock backend")?;
    let addr = listener.local_addr().context("mock backend addr")?;
    let app = router(Arc::clone(&state));
    let (tx, rx) = tokio::sync::oneshot::channel::<()>();

    let thread = thread::spawn(move || {
        rt.block_on(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = rx.await;
                })
                .await;
        });
    });

    Ok(MockBackend {
        base_url: format!("http://{}/api", addr),
        state,
        shutdown: Some(tx),
        thread: Some(thread),
    })
}

impl MockBackend {
    pub fn config(&self) -> ClientConfig {
        ClientConfig::default().with_base_url(self.base_url.clone())
    }

    /// Fresh context over an in-memory session store.
    pub fn context(&self) -> Result<(AppContext, Arc<MemoryStore>)> {
        let store = Arc::new(MemoryStore::new());
        let ctx = AppContext::new(&self.config(), store.clone()).context("create context")?;
        Ok((ctx, store))
    }

    /// Context already holding a session for `user_id`.
    pub fn logged_in(&self, user_id: u64) -> Result<(AppContext, Arc<MemoryStore>)> {
        let (ctx, store) = self.context()?;
        let user = self.state.user(user_id).context("unknown seeded user")?;
        let token = self.state.token_for(user_id);
        store.set_session(
            &token,
            qaboard::model::SessionUser {
                username: user.username,
                user_id: Some(user.id.to_string()),
                is_admin: user.is_admin,
            },
        )?;
        Ok((ctx, store))
    }
}
